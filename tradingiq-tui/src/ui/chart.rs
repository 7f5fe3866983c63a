//! Chart view: candles with target/stop lines. The dashboard embeds a
//! compact variant without the level overlays.

use ratatui::Frame;
use ratatui::layout::Rect;

use tradingiq_core::Analysis;

use crate::app::AppState;
use crate::panels::{overlays_from_decision, CandleChartPanel};
use crate::theme::Theme;
use crate::ui::render_placeholder;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let Some(analysis) = &app.analysis else {
        render_placeholder(f, area);
        return;
    };
    let theme = Theme::default();
    let overlays = overlays_from_decision(&analysis.decision);
    let panel = CandleChartPanel::new(&analysis.candles, analysis.symbol(), &theme).overlays(&overlays);
    f.render_widget(panel, area);
}

pub fn render_compact(f: &mut Frame, area: Rect, analysis: &Analysis) {
    let theme = Theme::default();
    let panel = CandleChartPanel::new(&analysis.candles, analysis.symbol(), &theme);
    f.render_widget(panel, area);
}
