use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::App;

/// Keys while the add/edit popup is open. Enter saves, Esc cancels,
/// everything else edits the draft.
pub(super) fn handle_modal(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        (_, KeyCode::Esc) => app.modal.cancel(),
        (_, KeyCode::Enter) => {
            // Inert while the draft is blank
            if app.modal.save(&mut app.store) {
                app.clamp_cursor();
            }
        }
        _ => edit_draft(app, key),
    }
}

fn edit_draft(app: &mut App, key: KeyEvent) {
    let Some(draft) = app.modal.draft_mut() else {
        return;
    };
    match (key.modifiers, key.code) {
        (KeyModifiers::ALT, KeyCode::Backspace)
        | (KeyModifiers::CONTROL, KeyCode::Char('w') | KeyCode::Backspace) => {
            draft.delete_word_back();
        }
        (_, KeyCode::Backspace) => draft.backspace(),
        (_, KeyCode::Delete) => draft.delete_forward(),
        (_, KeyCode::Left) => draft.move_left(),
        (_, KeyCode::Right) => draft.move_right(),
        (_, KeyCode::Home) | (KeyModifiers::CONTROL, KeyCode::Char('a')) => draft.move_home(),
        (_, KeyCode::End) | (KeyModifiers::CONTROL, KeyCode::Char('e')) => draft.move_end(),
        (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char(c)) => draft.insert_char(c),
        _ => {}
    }
}
