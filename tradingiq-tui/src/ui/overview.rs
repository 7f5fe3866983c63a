//! Quote overview: symbol, name, price, change, volume and market cap.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use tradingiq_core::presentation::{format_change, format_compact};
use tradingiq_core::Quote;

use crate::theme;
use crate::ui::card;

pub fn render(f: &mut Frame, area: Rect, quote: &Quote) {
    let block = card("Overview");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(inner);

    let arrow = if quote.is_up() { "▲" } else { "▼" };
    let left = vec![
        Line::from(vec![
            Span::styled(quote.symbol.as_str(), theme::accent_bold()),
            Span::raw("  "),
            Span::styled(quote.name.as_str(), theme::secondary()),
        ]),
        Line::from(vec![
            Span::styled("Volume ", theme::muted()),
            Span::styled(format_compact(quote.volume as f64), theme::bold()),
            Span::styled("   Market Cap ", theme::muted()),
            Span::styled(format_compact(quote.market_cap), theme::bold()),
        ]),
    ];
    let right = vec![
        Line::from(Span::styled(format_compact(quote.price), theme::bold())),
        Line::from(Span::styled(
            format!("{arrow} {}", format_change(quote.change, quote.change_percent)),
            theme::change(quote.change),
        )),
    ];

    f.render_widget(Paragraph::new(left), halves[0]);
    f.render_widget(Paragraph::new(right).alignment(Alignment::Right), halves[1]);
}
