//! Keyboard input dispatch: overlays → global keys → panel-specific handlers.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::{AppState, Overlay, Panel};

/// Handle a key event.
pub fn handle_key(app: &mut AppState, key: KeyEvent) {
    // Only handle key press events (Windows sends both Press and Release).
    if key.kind != KeyEventKind::Press {
        return;
    }

    // Ctrl+C quits from anywhere, including the search prompt.
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.running = false;
        return;
    }

    // 1. Overlays consume input first.
    match app.overlay {
        Overlay::Welcome => {
            app.overlay = Overlay::None;
            return;
        }
        Overlay::Search => {
            handle_search_overlay(app, key);
            return;
        }
        Overlay::ErrorHistory => {
            handle_error_overlay(app, key);
            return;
        }
        Overlay::Logs => {
            handle_log_overlay(app, key);
            return;
        }
        Overlay::None => {}
    }

    // 2. Global keys (always available).
    match key.code {
        KeyCode::Char('q') => {
            app.running = false;
            return;
        }
        KeyCode::Char('1') => { app.active_panel = Panel::Dashboard; return; }
        KeyCode::Char('2') => { app.active_panel = Panel::Chart; return; }
        KeyCode::Char('3') => { app.active_panel = Panel::Help; return; }
        KeyCode::Tab => {
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                app.active_panel = app.active_panel.prev();
            } else {
                app.active_panel = app.active_panel.next();
            }
            return;
        }
        KeyCode::BackTab => {
            app.active_panel = app.active_panel.prev();
            return;
        }
        KeyCode::Char('/') | KeyCode::Char('s') => {
            app.overlay = Overlay::Search;
            app.search_input.clear();
            return;
        }
        KeyCode::Char('e') => {
            app.overlay = Overlay::ErrorHistory;
            app.error_scroll = 0;
            return;
        }
        KeyCode::Char('L') => {
            app.overlay = Overlay::Logs;
            app.log_scroll = 0;
            return;
        }
        _ => {}
    }

    // 3. Panel-specific keys.
    match app.active_panel {
        Panel::Dashboard | Panel::Chart => handle_analysis_key(app, key),
        Panel::Help => {} // display only
    }
}

/// Popular-bar navigation and regeneration, shared by the analysis views.
fn handle_analysis_key(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Char('l') | KeyCode::Right => app.cursor_right(),
        KeyCode::Char('h') | KeyCode::Left => app.cursor_left(),
        KeyCode::Enter => {
            app.select_highlighted();
        }
        KeyCode::Char('r') => {
            app.regenerate();
        }
        _ => {}
    }
}

fn handle_search_overlay(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            app.overlay = Overlay::None;
            app.search_input.clear();
        }
        KeyCode::Enter => {
            let input = std::mem::take(&mut app.search_input);
            app.overlay = Overlay::None;
            // An empty prompt is dismissed without a lookup.
            if !input.trim().is_empty() {
                app.select(&input);
            }
        }
        KeyCode::Backspace => {
            app.search_input.pop();
        }
        KeyCode::Char(c) => {
            app.search_input.push(c);
        }
        _ => {}
    }
}

fn handle_error_overlay(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('e') => {
            app.overlay = Overlay::None;
        }
        KeyCode::Char('j') | KeyCode::Down => {
            if app.error_scroll + 1 < app.error_history.len() {
                app.error_scroll += 1;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.error_scroll = app.error_scroll.saturating_sub(1);
        }
        _ => {}
    }
}

/// `log_scroll` counts lines back from the newest entry.
fn handle_log_overlay(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('L') => {
            app.overlay = Overlay::None;
        }
        KeyCode::Char('k') | KeyCode::Up => {
            if app.log_scroll + 1 < app.logs.len() {
                app.log_scroll += 1;
            }
        }
        KeyCode::Char('j') | KeyCode::Down => {
            app.log_scroll = app.log_scroll.saturating_sub(1);
        }
        KeyCode::End => app.log_scroll = 0,
        _ => {}
    }
}
