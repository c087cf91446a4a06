mod edit;
mod filter;
mod navigate;
mod search;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{App, Mode};

use edit::handle_modal;
use filter::handle_filter_menu;
use navigate::handle_navigate;
use search::handle_search;

/// Handle a key event. An open popup captures all keys.
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }
    app.status_message = None;

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }

    if app.modal.is_open() {
        handle_modal(app, key);
    } else if app.filter_menu.is_open() {
        handle_filter_menu(app, key);
    } else {
        match app.mode {
            Mode::Navigate => handle_navigate(app, key),
            Mode::Search => handle_search(app, key),
        }
    }
}

/// Handle a bracketed paste. Goes into the modal draft or the search box,
/// whichever is taking text.
pub fn handle_paste(app: &mut App, text: &str) {
    if text.is_empty() {
        return;
    }
    if let Some(draft) = app.modal.draft_mut() {
        draft.insert_str(text);
    } else if app.mode == Mode::Search && !app.filter_menu.is_open() {
        let clean = text.replace(['\n', '\r'], " ");
        let query = format!("{}{}", app.store.query().search_query, clean);
        app.store.set_search_query(query);
        app.clamp_cursor();
    }
}
