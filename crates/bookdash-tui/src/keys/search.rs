use crossterm::event::{KeyCode, KeyModifiers};

use crate::app::{App, Mode};

/// Search-mode keys: typed characters refine the query live.
pub fn handle_key(app: &mut App, code: KeyCode, modifiers: KeyModifiers) {
    match code {
        KeyCode::Esc | KeyCode::Enter => app.mode = Mode::Normal,
        KeyCode::Char('u') if modifiers.contains(KeyModifiers::CONTROL) => app.clear_search(),
        KeyCode::Backspace => app.pop_search_char(),
        KeyCode::Down => app.move_down(),
        KeyCode::Up => app.move_up(),
        KeyCode::Char(c) => app.push_search_char(c),
        _ => {}
    }
}
