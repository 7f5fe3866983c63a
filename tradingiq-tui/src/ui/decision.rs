//! Trading decision card: action, confidence, price levels, reasoning and
//! the risk disclaimer.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

use tradingiq_core::presentation::{
    action_badge, confidence_tone, decision_summary, format_level_price, percent_delta,
    RISK_DISCLAIMER, Tone,
};
use tradingiq_core::Decision;

use crate::theme;
use crate::ui::{card, meter};

const CONFIDENCE_METER_WIDTH: usize = 20;

pub fn render(f: &mut Frame, area: Rect, decision: &Decision, price: f64) {
    let block = card("Trading Decision");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let badge = action_badge(decision.action);
    let confidence = confidence_tone(decision.confidence);

    let mut lines = vec![
        Line::from(vec![
            Span::styled(format!("{} {}", badge.icon, badge.label), theme::tone_bold(badge.tone)),
            Span::styled("  Recommended Action  ", theme::muted()),
            Span::styled(format!("{}%", decision.confidence), theme::tone_bold(confidence)),
            Span::styled(" confidence", theme::muted()),
        ]),
        Line::from(Span::styled(
            meter(decision.confidence as f64, 100.0, CONFIDENCE_METER_WIDTH),
            theme::tone(confidence),
        )),
        Line::from(Span::styled(
            decision_summary(decision.action, decision.confidence, &decision.timeframe),
            theme::secondary(),
        )),
        Line::from(""),
    ];

    if decision.has_levels() {
        lines.push(Line::from(vec![
            Span::styled("Current ", theme::muted()),
            Span::styled(format_level_price(price), theme::accent_bold()),
        ]));
        if let Some(target) = decision.target_price {
            lines.push(Line::from(vec![
                Span::styled("Target  ", theme::muted()),
                Span::styled(format_level_price(target), theme::positive()),
                Span::styled(
                    format!(" ({:.1}% upside)", percent_delta(target, price)),
                    theme::muted(),
                ),
            ]));
        }
        if let Some(stop) = decision.stop_loss {
            lines.push(Line::from(vec![
                Span::styled("Stop    ", theme::muted()),
                Span::styled(format_level_price(stop), theme::negative()),
                Span::styled(
                    format!(" ({:.1}% risk)", percent_delta(stop, price)),
                    theme::muted(),
                ),
            ]));
        }
        lines.push(Line::from(""));
    }

    lines.push(Line::from(Span::styled("Analysis Summary", theme::accent_bold())));
    for reason in &decision.reasoning {
        lines.push(Line::from(vec![
            Span::styled("• ", theme::accent()),
            Span::styled(reason.as_str(), theme::text()),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("⚠ Risk Disclaimer", theme::tone_bold(Tone::Caution))));
    lines.push(Line::from(Span::styled(RISK_DISCLAIMER, theme::muted())));

    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
}
