use crossterm::event::{KeyCode, KeyModifiers};

use crate::app::{App, CollectionState, Mode};

/// Normal-mode keys for the dashboard view.
pub fn handle_key(app: &mut App, code: KeyCode, _modifiers: KeyModifiers) {
    match code {
        KeyCode::Char('q') => app.should_quit = true,

        KeyCode::Char('j') | KeyCode::Down => app.move_down(),
        KeyCode::Char('k') | KeyCode::Up => app.move_up(),
        KeyCode::Char('g') | KeyCode::Home => app.move_to_top(),
        KeyCode::Char('G') | KeyCode::End => app.move_to_bottom(),

        KeyCode::Char('/') => app.mode = Mode::Search,
        KeyCode::Char('e') => app.cycle_era(),
        KeyCode::Char('E') => app.cycle_era_back(),

        KeyCode::Char('r') => {
            // Manual reload, also the recovery path after a failed fetch.
            app.reload_collection();
        }

        KeyCode::Enter => {
            if app.collection_state == CollectionState::Ready {
                app.open_selected_detail();
            }
        }

        _ => {}
    }
}
