//! Overlay widgets: welcome, error history, log viewer.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use crate::app::AppState;
use crate::theme;
use crate::ui::centered_rect;

/// First-run welcome overlay.
pub fn render_welcome(f: &mut Frame, area: Rect) {
    let popup = centered_rect(60, 50, area);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::accent())
        .title(" Welcome to TradingIQ ")
        .title_style(theme::accent_bold());

    let text = vec![
        Line::from(""),
        Line::from(Span::styled("Getting started:", theme::accent_bold())),
        Line::from(""),
        Line::from(Span::styled("  1. Press / and type a symbol (AAPL, TSLA, BTC, ETH)", theme::muted())),
        Line::from(Span::styled("  2. Or move along the popular bar with h/l and press Enter", theme::muted())),
        Line::from(Span::styled("  3. Press 2 for the full chart with target and stop lines", theme::muted())),
        Line::from(Span::styled("  4. Press r to regenerate the candles", theme::muted())),
        Line::from(""),
        Line::from(Span::styled("Press any key to dismiss...", theme::neutral())),
    ];

    let para = Paragraph::new(text).block(block).wrap(Wrap { trim: true });
    f.render_widget(para, popup);
}

/// Error history overlay.
pub fn render_error_history(f: &mut Frame, area: Rect, app: &AppState) {
    let popup = centered_rect(80, 70, area);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::negative())
        .title(format!(
            " Error History ({}) [Esc]close [j/k]scroll ",
            app.error_history.len()
        ))
        .title_style(theme::negative());

    let inner = block.inner(popup);
    f.render_widget(block, popup);

    if app.error_history.is_empty() {
        let text = Paragraph::new(Span::styled("No errors recorded.", theme::muted()));
        f.render_widget(text, inner);
        return;
    }

    let visible_height = inner.height as usize;
    let mut lines: Vec<Line> = Vec::new();
    for (i, err) in app
        .error_history
        .iter()
        .enumerate()
        .skip(app.error_scroll)
        .take(visible_height)
    {
        let style = if i == app.error_scroll {
            theme::negative().add_modifier(Modifier::BOLD)
        } else {
            theme::muted()
        };

        lines.push(Line::from(vec![
            Span::styled(format!("[{}] ", err.timestamp.format("%H:%M:%S")), theme::muted()),
            Span::styled(err.message.as_str(), style),
        ]));

        if !err.context.is_empty() {
            lines.push(Line::from(vec![
                Span::raw("  "),
                Span::styled(err.context.as_str(), theme::muted()),
            ]));
        }
    }

    f.render_widget(Paragraph::new(lines), inner);
}

/// Captured tracing output, newest at the bottom.
pub fn render_logs(f: &mut Frame, area: Rect, app: &AppState) {
    let popup = centered_rect(90, 80, area);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::neutral())
        .title(format!(" Logs ({}) [Esc]close [j/k]scroll ", app.logs.len()))
        .title_style(theme::neutral());

    let inner = block.inner(popup);
    f.render_widget(block, popup);

    let height = inner.height as usize;
    let recent = app.logs.recent(height + app.log_scroll);
    let end = recent.len().saturating_sub(app.log_scroll);
    let start = end.saturating_sub(height);

    if recent.is_empty() {
        f.render_widget(Paragraph::new(Span::styled("No log output yet.", theme::muted())), inner);
        return;
    }

    let lines: Vec<Line> = recent[start..end]
        .iter()
        .map(|line| Line::from(Span::styled(line.as_str(), log_style(line))))
        .collect();
    f.render_widget(Paragraph::new(lines), inner);
}

fn log_style(line: &str) -> ratatui::style::Style {
    if line.contains("ERROR") {
        theme::negative()
    } else if line.contains("WARN") {
        theme::warning()
    } else if line.contains("DEBUG") || line.contains("TRACE") {
        theme::muted()
    } else {
        theme::secondary()
    }
}
