use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::{App, Mode};

pub(super) fn handle_navigate(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        (KeyModifiers::NONE, KeyCode::Char('q')) => app.should_quit = true,

        // Cursor
        (KeyModifiers::NONE, KeyCode::Char('j') | KeyCode::Down) => app.move_cursor(1),
        (KeyModifiers::NONE, KeyCode::Char('k') | KeyCode::Up) => app.move_cursor(-1),
        (KeyModifiers::NONE, KeyCode::Char('g') | KeyCode::Home) => app.cursor = 0,
        (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char('G')) | (_, KeyCode::End) => {
            app.cursor = app.store.visible_todos().len().saturating_sub(1);
        }

        // Mutations on the selected todo
        (KeyModifiers::NONE, KeyCode::Char(' ') | KeyCode::Char('x')) => toggle_selected(app),
        (KeyModifiers::NONE, KeyCode::Char('d') | KeyCode::Delete) => delete_selected(app),
        (KeyModifiers::NONE, KeyCode::Char('e') | KeyCode::Enter) => edit_selected(app),
        (KeyModifiers::NONE, KeyCode::Char('a') | KeyCode::Char('n')) => {
            app.modal.open_add();
        }

        // Query
        (KeyModifiers::NONE, KeyCode::Char('/')) => app.mode = Mode::Search,
        (KeyModifiers::NONE, KeyCode::Char('f')) => {
            let current = app.store.query().status_filter;
            app.filter_menu.open(current);
        }
        (_, KeyCode::Esc) => {
            app.store.set_search_query("");
            app.clamp_cursor();
        }

        (KeyModifiers::NONE, KeyCode::Char('t')) => app.toggle_theme(),
        _ => {}
    }
}

fn toggle_selected(app: &mut App) {
    if let Some(id) = app.selected_id() {
        app.store.toggle(id);
        // The todo may no longer match the status filter
        app.clamp_cursor();
    }
}

fn delete_selected(app: &mut App) {
    if let Some(id) = app.selected_id() {
        app.store.delete(id);
        app.clamp_cursor();
    }
}

fn edit_selected(app: &mut App) {
    if let Some(todo) = app.selected().cloned() {
        app.modal.open_edit(&todo);
    }
}
