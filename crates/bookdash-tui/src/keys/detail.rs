use crossterm::event::{KeyCode, KeyModifiers};

use crate::app::App;

/// Keys for the detail view.
pub fn handle_key(app: &mut App, code: KeyCode, _modifiers: KeyModifiers) {
    match code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('h') => app.close_detail(),
        KeyCode::Char('j') | KeyCode::Down => app.scroll_detail_down(),
        KeyCode::Char('k') | KeyCode::Up => app.scroll_detail_up(),
        KeyCode::Char('g') | KeyCode::Home => app.scroll_detail_top(),
        _ => {}
    }
}
