/*
[INPUT]:  Crossterm key events
[OUTPUT]: AppState mutations and quit signaling
[POS]:    TUI event handling
[UPDATE]: When changing keybindings
*/

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::AppState;

/// Handles key events for the TUI.
///
/// Returns `true` if quit is requested, `false` otherwise.
pub(super) fn handle_key_event(app: &mut AppState, key: KeyEvent) -> bool {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return true;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => true,
        KeyCode::Up => {
            app.scroll_by(-1);
            false
        }
        KeyCode::Down => {
            app.scroll_by(1);
            false
        }
        KeyCode::PageUp => {
            app.scroll_by(-10);
            false
        }
        KeyCode::PageDown => {
            app.scroll_by(10);
            false
        }
        _ => false,
    }
}
