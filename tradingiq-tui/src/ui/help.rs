//! Help view: keyboard shortcuts and how to read the analysis.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

use crate::app::AppState;
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, _app: &AppState) {
    let mut lines: Vec<Line> = Vec::new();

    section(&mut lines, "Global Navigation");
    key(&mut lines, "1 / 2 / 3", "Dashboard / Chart / Help");
    key(&mut lines, "Tab / Shift+Tab", "Cycle views forward / back");
    key(&mut lines, "e", "Open error history overlay");
    key(&mut lines, "L", "Open log overlay");
    key(&mut lines, "q / Ctrl+C", "Quit");
    lines.push(Line::from(""));

    section(&mut lines, "Symbols");
    key(&mut lines, "/ or s", "Search: type a symbol, Enter to analyze, Esc to cancel");
    key(&mut lines, "h / l  (← / →)", "Move along the popular-symbol bar");
    key(&mut lines, "Enter", "Analyze the highlighted popular symbol");
    key(&mut lines, "r", "Regenerate candles for the current symbol");
    lines.push(Line::from(""));

    section(&mut lines, "Overlays");
    key(&mut lines, "j / k", "Scroll error history or logs");
    key(&mut lines, "Esc", "Close overlay");
    lines.push(Line::from(""));

    section(&mut lines, "How to Use This Analysis");
    topic(
        &mut lines,
        "Technical Indicators",
        "RSI above 70 = overbought, below 30 = oversold. MACD histogram shows momentum direction. Moving averages indicate trend strength.",
    );
    topic(
        &mut lines,
        "Candlestick Patterns",
        "Patterns help predict price direction. Bullish patterns suggest upward movement, bearish patterns suggest downward movement.",
    );
    topic(
        &mut lines,
        "Trading Decisions",
        "Combine multiple indicators for better accuracy. Always use stop losses and consider your risk tolerance before trading.",
    );

    let para = Paragraph::new(lines).wrap(Wrap { trim: false });
    f.render_widget(para, area);
}

fn section<'a>(lines: &mut Vec<Line<'a>>, title: &str) {
    lines.push(Line::from(Span::styled(title.to_string(), theme::accent_bold())));
}

fn key<'a>(lines: &mut Vec<Line<'a>>, keys: &str, desc: &str) {
    lines.push(Line::from(vec![
        Span::styled(format!("  {:>18}  ", keys), theme::accent()),
        Span::styled(desc.to_string(), theme::muted()),
    ]));
}

fn topic<'a>(lines: &mut Vec<Line<'a>>, title: &str, body: &str) {
    lines.push(Line::from(Span::styled(format!("  {title}"), theme::bold())));
    lines.push(Line::from(Span::styled(format!("    {body}"), theme::secondary())));
}
