//! Search prompt, popular-symbol bar and the "currently analyzing" tag.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::app::{AppState, Overlay};
use crate::theme;
use crate::ui::card;

const PLACEHOLDER: &str = "Enter stock symbol or crypto (e.g., AAPL, BTC)";

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let editing = app.overlay == Overlay::Search;
    let block = card("Search [/]").border_style(theme::panel_border(editing));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let prompt = if editing {
        Line::from(vec![
            Span::styled("> ", theme::accent()),
            Span::styled(app.search_input.as_str(), theme::accent_bold()),
            Span::styled("_", theme::accent()),
            Span::styled("   [Enter]analyze [Esc]cancel", theme::muted()),
        ])
    } else {
        Line::from(vec![
            Span::styled("> ", theme::muted()),
            Span::styled(PLACEHOLDER, theme::muted().add_modifier(Modifier::ITALIC)),
        ])
    };

    let current = app.current_symbol();
    let mut popular = vec![Span::styled("Popular: ", theme::muted())];
    for (i, symbol) in app.popular.iter().enumerate() {
        let mut style = if Some(symbol.as_str()) == current {
            theme::accent_bold()
        } else {
            theme::secondary()
        };
        if i == app.popular_cursor && !editing {
            style = style.add_modifier(Modifier::REVERSED);
        }
        popular.push(Span::styled(format!(" {symbol} "), style));
        popular.push(Span::raw(" "));
    }
    if let Some(symbol) = current {
        popular.push(Span::styled("  Currently analyzing: ", theme::muted()));
        popular.push(Span::styled(symbol, theme::accent_bold()));
    }

    f.render_widget(Paragraph::new(vec![prompt, Line::from(popular)]), inner);
}

#[cfg(test)]
mod tests {
    use crate::app::tests::test_app;
    use crate::app::Overlay;
    use crate::ui::tests::render_app;

    #[test]
    fn shows_placeholder_and_popular_symbols() {
        let app = test_app();
        let text = render_app(&app, 140, 30);
        assert!(text.contains("Enter stock symbol or crypto"));
        for symbol in ["AAPL", "TSLA", "BTC", "ETH", "GOOGL", "MSFT", "AMZN", "NVDA"] {
            assert!(text.contains(symbol), "{symbol}");
        }
        assert!(!text.contains("Currently analyzing"));
    }

    #[test]
    fn shows_current_symbol() {
        let mut app = test_app();
        app.select("btc");
        let text = render_app(&app, 140, 30);
        assert!(text.contains("Currently analyzing: BTC"));
    }

    #[test]
    fn shows_typed_input_while_searching() {
        let mut app = test_app();
        app.overlay = Overlay::Search;
        app.search_input = "ET".into();
        let text = render_app(&app, 140, 30);
        assert!(text.contains("> ET_"));
    }
}
