use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::App;

pub(super) fn handle_filter_menu(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        (_, KeyCode::Esc) | (KeyModifiers::NONE, KeyCode::Char('f') | KeyCode::Char('q')) => {
            app.filter_menu.close();
        }
        (KeyModifiers::NONE, KeyCode::Char('j') | KeyCode::Down | KeyCode::Tab) => {
            app.filter_menu.move_by(1);
        }
        (KeyModifiers::NONE, KeyCode::Char('k') | KeyCode::Up) | (_, KeyCode::BackTab) => {
            app.filter_menu.move_by(-1);
        }
        (_, KeyCode::Enter) | (KeyModifiers::NONE, KeyCode::Char(' ')) => {
            if let Some(filter) = app.filter_menu.select() {
                app.store.set_status_filter(filter);
                app.clamp_cursor();
            }
        }
        _ => {}
    }
}
