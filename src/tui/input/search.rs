use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::{App, Mode};

/// Typing into the search box. The list filters live on every keystroke.
pub(super) fn handle_search(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        // Cancel: drop the query
        (_, KeyCode::Esc) => {
            app.store.set_search_query("");
            app.mode = Mode::Navigate;
        }

        // Keep the query and go back to the list
        (_, KeyCode::Enter | KeyCode::Down | KeyCode::Tab) => {
            app.mode = Mode::Navigate;
        }

        (_, KeyCode::Backspace) => {
            let mut query = app.store.query().search_query.clone();
            query.pop();
            app.store.set_search_query(query);
        }

        // Clear the whole query
        (KeyModifiers::CONTROL, KeyCode::Char('u')) => app.store.set_search_query(""),

        (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char(c)) => {
            let mut query = app.store.query().search_query.clone();
            query.push(c);
            app.store.set_search_query(query);
        }
        _ => {}
    }
    app.clamp_cursor();
}
