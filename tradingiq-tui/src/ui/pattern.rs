//! Pattern analysis card.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

use tradingiq_core::presentation::{confidence_tone, pattern_badge, pattern_priority, pattern_strength};
use tradingiq_core::PatternCall;

use crate::theme;
use crate::ui::{card, meter};

const STRENGTH_METER_WIDTH: usize = 20;

pub fn render(f: &mut Frame, area: Rect, pattern: &PatternCall) {
    let block = card("Pattern Analysis");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let badge = pattern_badge(pattern.kind);
    let confidence = confidence_tone(pattern.confidence);

    let lines = vec![
        Line::from(vec![
            Span::styled(format!("{} ", badge.icon), theme::tone_bold(badge.tone)),
            Span::styled(pattern.name.as_str(), theme::bold()),
            Span::styled(format!("  {}%", pattern.confidence), theme::tone_bold(confidence)),
            Span::styled(" confidence", theme::muted()),
        ]),
        Line::from(Span::styled(format!("{} Pattern", badge.label), theme::tone(badge.tone))),
        Line::from(""),
        Line::from(vec![
            Span::styled("Pattern Strength ", theme::muted()),
            Span::styled(pattern_strength(pattern.confidence), theme::tone_bold(confidence)),
        ]),
        Line::from(Span::styled(
            meter(pattern.confidence as f64, 100.0, STRENGTH_METER_WIDTH),
            theme::tone(confidence),
        )),
        Line::from(""),
        Line::from(Span::styled("Pattern Description", theme::accent_bold())),
        Line::from(Span::styled(pattern.description.as_str(), theme::secondary())),
        Line::from(""),
        Line::from(Span::styled(
            format!("{} Trading Advice", badge.icon),
            theme::tone_bold(badge.tone),
        )),
        Line::from(Span::styled(pattern.advice.as_str(), theme::secondary())),
        Line::from(""),
        Line::from(vec![
            Span::styled("Reliability ", theme::muted()),
            Span::styled(format!("{}%", pattern.confidence), theme::bold()),
            Span::styled("  Direction ", theme::muted()),
            Span::styled(badge.icon, theme::tone_bold(badge.tone)),
            Span::styled("  Priority ", theme::muted()),
            Span::styled(pattern_priority(pattern.confidence), theme::bold()),
        ]),
    ];

    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
}

#[cfg(test)]
mod tests {
    use crate::app::tests::test_app;
    use crate::ui::tests::render_app;

    #[test]
    fn aapl_pattern() {
        let mut app = test_app();
        app.select("AAPL");
        let text = render_app(&app, 180, 60);
        assert!(text.contains("↗ Ascending Triangle  78% confidence"));
        assert!(text.contains("Bullish Pattern"));
        assert!(text.contains("Pattern Strength Moderate"));
        assert!(text.contains("Reliability 78%  Direction ↗  Priority High"));
    }

    #[test]
    fn bearish_pattern_arrow() {
        let mut app = test_app();
        app.select("TSLA");
        let text = render_app(&app, 180, 60);
        assert!(text.contains("Bearish Pattern"));
        assert!(text.contains("Direction ↘"));
    }
}
