//! Top-level UI layout: header, search bar, active view, status bar.

pub mod chart;
pub mod decision;
pub mod help;
pub mod indicators;
pub mod overlays;
pub mod overview;
pub mod pattern;
pub mod search_bar;
pub mod status_bar;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::app::{AppState, Overlay, Panel};
use crate::theme;

/// Draw the entire UI.
pub fn draw(f: &mut Frame, app: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(4),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(f.area());

    draw_header(f, chunks[0], app);
    search_bar::render(f, chunks[1], app);
    draw_panel(f, chunks[2], app);
    status_bar::render(f, chunks[3], app);

    // Overlays on top of the main area.
    let main_area = chunks[2];
    match app.overlay {
        Overlay::Welcome => overlays::render_welcome(f, main_area),
        Overlay::ErrorHistory => overlays::render_error_history(f, main_area, app),
        Overlay::Logs => overlays::render_logs(f, main_area, app),
        // The search prompt lives in the search bar.
        Overlay::Search | Overlay::None => {}
    }
}

/// App title and view tabs.
fn draw_header(f: &mut Frame, area: Rect, app: &AppState) {
    let mut spans = vec![
        Span::styled(" TradingIQ ", theme::accent_bold()),
        Span::styled("Advanced Stock & Crypto Analysis  ", theme::muted()),
    ];
    for i in 0..Panel::COUNT {
        let Some(panel) = Panel::from_index(i) else { continue };
        let style = if panel == app.active_panel {
            theme::accent_bold().add_modifier(Modifier::REVERSED)
        } else {
            theme::muted()
        };
        spans.push(Span::styled(format!(" {}:{} ", i + 1, panel.label()), style));
        spans.push(Span::raw(" "));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Draw the active view with its border.
fn draw_panel(f: &mut Frame, area: Rect, app: &AppState) {
    let panel = app.active_panel;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::panel_border(true))
        .title(format!(" {} [{}] ", panel.label(), panel.index() + 1))
        .title_style(theme::panel_title(true));

    let inner = block.inner(area);
    f.render_widget(block, area);

    match panel {
        Panel::Dashboard => draw_dashboard(f, inner, app),
        Panel::Chart => chart::render(f, inner, app),
        Panel::Help => help::render(f, inner, app),
    }
}

/// Overview on top, chart in the middle, three analysis cards below.
fn draw_dashboard(f: &mut Frame, area: Rect, app: &AppState) {
    let Some(analysis) = &app.analysis else {
        render_placeholder(f, area);
        return;
    };

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Percentage(35),
            Constraint::Min(10),
        ])
        .split(area);

    overview::render(f, rows[0], &analysis.quote);
    chart::render_compact(f, rows[1], analysis);

    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(32),
            Constraint::Percentage(32),
            Constraint::Percentage(36),
        ])
        .split(rows[2]);

    indicators::render(f, cards[0], &analysis.indicators);
    pattern::render(f, cards[1], &analysis.pattern);
    decision::render(f, cards[2], &analysis.decision, analysis.quote.price);
}

/// Shown until the first successful selection.
pub fn render_placeholder(f: &mut Frame, area: Rect) {
    let text = vec![
        Line::from(""),
        Line::from(Span::styled("No symbol selected.", theme::accent_bold())),
        Line::from(""),
        Line::from(Span::styled(
            "Press / to search, or h/l then Enter to analyze a popular symbol.",
            theme::muted(),
        )),
    ];
    let para = Paragraph::new(text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(para, area);
}

/// Bordered card with a bold title.
pub fn card(title: &str) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(theme::muted())
        .title(format!(" {title} "))
        .title_style(theme::accent_bold())
}

/// Text meter: `width` cells, filled in proportion to `value / max`.
pub fn meter(value: f64, max: f64, width: usize) -> String {
    let frac = if max > 0.0 { (value / max).clamp(0.0, 1.0) } else { 0.0 };
    let filled = (frac * width as f64).round() as usize;
    let mut bar = "█".repeat(filled);
    bar.push_str(&"░".repeat(width - filled));
    bar
}

/// Compute a centered rect for overlays.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::app::tests::test_app;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    /// Render the whole UI and flatten the buffer to text, one line per row.
    pub(crate) fn render_app(app: &AppState, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        let buf = terminal.backend().buffer();
        let mut content = String::new();
        for y in 0..height {
            for x in 0..width {
                content.push_str(buf.cell((x, y)).unwrap().symbol());
            }
            content.push('\n');
        }
        content
    }

    #[test]
    fn meter_fills_proportionally() {
        assert_eq!(meter(50.0, 100.0, 10), "█████░░░░░");
        assert_eq!(meter(150.0, 100.0, 4), "████");
        assert_eq!(meter(-1.0, 100.0, 4), "░░░░");
        assert_eq!(meter(1.0, 0.0, 2), "░░");
    }

    #[test]
    fn placeholder_before_first_selection() {
        let app = test_app();
        let text = render_app(&app, 120, 40);
        assert!(text.contains("No symbol selected."));
        assert!(text.contains("TradingIQ"));
    }

    #[test]
    fn dashboard_shows_every_card() {
        let mut app = test_app();
        app.select("AAPL");
        let text = render_app(&app, 160, 60);
        assert!(text.contains("Apple Inc."));
        assert!(text.contains("Technical Indicators"));
        assert!(text.contains("Ascending Triangle"));
        assert!(text.contains("Trading Decision"));
        assert!(text.contains("BUY"));
        assert!(text.contains("Past 30 Days"));
    }

    #[test]
    fn view_tabs_switch_content() {
        let mut app = test_app();
        app.select("TSLA");
        app.active_panel = Panel::Help;
        let text = render_app(&app, 120, 50);
        assert!(text.contains("How to Use This Analysis"));
        assert!(!text.contains("Recommended Action"));

        app.active_panel = Panel::Chart;
        let text = render_app(&app, 120, 40);
        assert!(text.contains("TGT"));
        assert!(text.contains("STP"));
    }

    #[test]
    fn small_terminal_does_not_panic() {
        let mut app = test_app();
        app.select("ETH");
        for (w, h) in [(20, 8), (40, 12), (80, 24)] {
            render_app(&app, w, h);
        }
    }
}
