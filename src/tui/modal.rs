use crate::model::todo::{Todo, TodoId};
use crate::ops::store::TodoStore;
use crate::util::unicode;

/// Single-line text buffer with a cursor (byte offset on a grapheme boundary)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    text: String,
    cursor: usize,
}

impl Draft {
    /// A draft holding `text` with the cursor at the end
    pub fn with_text(text: &str) -> Self {
        Draft {
            text: text.to_string(),
            cursor: text.len(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    pub fn insert_char(&mut self, c: char) {
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Insert pasted text. Line breaks become spaces.
    pub fn insert_str(&mut self, s: &str) {
        let clean = s.replace("\r\n", " ").replace(['\n', '\r'], " ");
        self.text.insert_str(self.cursor, &clean);
        self.cursor += clean.len();
    }

    pub fn backspace(&mut self) {
        if let Some(prev) = unicode::prev_grapheme_boundary(&self.text, self.cursor) {
            self.text.replace_range(prev..self.cursor, "");
            self.cursor = prev;
        }
    }

    pub fn delete_forward(&mut self) {
        if let Some(next) = unicode::next_grapheme_boundary(&self.text, self.cursor) {
            self.text.replace_range(self.cursor..next, "");
        }
    }

    pub fn delete_word_back(&mut self) {
        let start = unicode::word_boundary_left(&self.text, self.cursor);
        self.text.replace_range(start..self.cursor, "");
        self.cursor = start;
    }

    pub fn move_left(&mut self) {
        if let Some(prev) = unicode::prev_grapheme_boundary(&self.text, self.cursor) {
            self.cursor = prev;
        }
    }

    pub fn move_right(&mut self) {
        if let Some(next) = unicode::next_grapheme_boundary(&self.text, self.cursor) {
            self.cursor = next;
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.text.len();
    }
}

/// Add/edit popup. A draft only exists while the popup is open.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Modal {
    #[default]
    Closed,
    Adding {
        draft: Draft,
    },
    Editing {
        id: TodoId,
        draft: Draft,
    },
}

impl Modal {
    pub fn is_open(&self) -> bool {
        !matches!(self, Modal::Closed)
    }

    /// Open with an empty draft. Ignored while already open.
    pub fn open_add(&mut self) -> bool {
        if self.is_open() {
            return false;
        }
        *self = Modal::Adding {
            draft: Draft::default(),
        };
        true
    }

    /// Open bound to `todo`, with its current text as the draft. Ignored
    /// while already open.
    pub fn open_edit(&mut self, todo: &Todo) -> bool {
        if self.is_open() {
            return false;
        }
        *self = Modal::Editing {
            id: todo.id,
            draft: Draft::with_text(&todo.text),
        };
        true
    }

    /// Close and drop the draft without touching the store.
    pub fn cancel(&mut self) {
        *self = Modal::Closed;
    }

    /// Commit the draft and close. Does nothing (and stays open) while the
    /// draft is blank. Returns whether the modal closed.
    pub fn save(&mut self, store: &mut TodoStore) -> bool {
        if !self.can_save() {
            return false;
        }
        match std::mem::take(self) {
            Modal::Adding { draft } => {
                store.add(draft.text());
            }
            Modal::Editing { id, draft } => {
                store.edit(id, draft.text());
            }
            Modal::Closed => {}
        }
        true
    }

    pub fn can_save(&self) -> bool {
        self.draft().is_some_and(|d| !d.is_blank())
    }

    pub fn draft(&self) -> Option<&Draft> {
        match self {
            Modal::Closed => None,
            Modal::Adding { draft } | Modal::Editing { draft, .. } => Some(draft),
        }
    }

    pub fn draft_mut(&mut self) -> Option<&mut Draft> {
        match self {
            Modal::Closed => None,
            Modal::Adding { draft } | Modal::Editing { draft, .. } => Some(draft),
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Modal::Editing { .. } => "EDIT NOTE",
            _ => "NEW NOTE",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_text(modal: &mut Modal, s: &str) {
        let draft = modal.draft_mut().unwrap();
        for c in s.chars() {
            draft.insert_char(c);
        }
    }

    #[test]
    fn open_add_starts_with_empty_draft() {
        let mut modal = Modal::Closed;
        assert!(modal.open_add());
        assert_eq!(modal.draft().unwrap().text(), "");
        assert_eq!(modal.title(), "NEW NOTE");
    }

    #[test]
    fn open_edit_loads_todo_text() {
        let mut store = TodoStore::new();
        let id = store.add("Walk dog").unwrap();
        let mut modal = Modal::Closed;
        assert!(modal.open_edit(store.get(id).unwrap()));
        let draft = modal.draft().unwrap();
        assert_eq!(draft.text(), "Walk dog");
        assert_eq!(draft.cursor(), 8);
        assert_eq!(modal.title(), "EDIT NOTE");
    }

    #[test]
    fn open_is_ignored_while_open() {
        let mut store = TodoStore::new();
        let id = store.add("Walk dog").unwrap();
        let mut modal = Modal::Closed;
        modal.open_add();
        type_text(&mut modal, "half typed");
        assert!(!modal.open_edit(store.get(id).unwrap()));
        assert!(!modal.open_add());
        assert_eq!(modal.draft().unwrap().text(), "half typed");
    }

    #[test]
    fn save_adds_and_closes() {
        let mut store = TodoStore::new();
        let mut modal = Modal::Closed;
        modal.open_add();
        type_text(&mut modal, "  Buy milk ");
        assert!(modal.save(&mut store));
        assert_eq!(modal, Modal::Closed);
        assert_eq!(store.todos()[0].text, "Buy milk");
    }

    #[test]
    fn save_edits_bound_todo() {
        let mut store = TodoStore::new();
        let first = store.add("Buy milk").unwrap();
        let second = store.add("Walk dog").unwrap();
        let mut modal = Modal::Closed;
        modal.open_edit(store.get(second).unwrap());
        type_text(&mut modal, " twice");
        assert!(modal.save(&mut store));
        assert_eq!(store.get(second).unwrap().text, "Walk dog twice");
        assert_eq!(store.get(first).unwrap().text, "Buy milk");
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn blank_draft_cannot_be_saved() {
        let mut store = TodoStore::new();
        let mut modal = Modal::Closed;
        modal.open_add();
        type_text(&mut modal, "   ");
        assert!(!modal.can_save());
        assert!(!modal.save(&mut store));
        assert!(modal.is_open());
        assert!(store.is_empty());
    }

    #[test]
    fn clearing_edit_draft_blocks_save() {
        let mut store = TodoStore::new();
        let id = store.add("Walk dog").unwrap();
        let mut modal = Modal::Closed;
        modal.open_edit(store.get(id).unwrap());
        let draft = modal.draft_mut().unwrap();
        draft.move_home();
        for _ in 0..8 {
            draft.delete_forward();
        }
        assert!(!modal.save(&mut store));
        assert!(matches!(modal, Modal::Editing { .. }));
        assert_eq!(store.get(id).unwrap().text, "Walk dog");
    }

    #[test]
    fn cancel_discards_draft() {
        let mut store = TodoStore::new();
        let id = store.add("Walk dog").unwrap();
        let mut modal = Modal::Closed;
        modal.open_edit(store.get(id).unwrap());
        type_text(&mut modal, "!!!");
        modal.cancel();
        assert_eq!(modal, Modal::Closed);
        assert_eq!(store.get(id).unwrap().text, "Walk dog");

        modal.open_add();
        assert_eq!(modal.draft().unwrap().text(), "");
    }

    #[test]
    fn save_on_closed_modal_is_inert() {
        let mut store = TodoStore::new();
        let mut modal = Modal::Closed;
        assert!(!modal.save(&mut store));
        assert!(store.is_empty());
    }

    #[test]
    fn editing_a_deleted_todo_saves_as_noop() {
        let mut store = TodoStore::new();
        let id = store.add("Walk dog").unwrap();
        let mut modal = Modal::Closed;
        modal.open_edit(store.get(id).unwrap());
        store.delete(id);
        assert!(modal.save(&mut store));
        assert!(store.is_empty());
    }

    #[test]
    fn draft_cursor_editing() {
        let mut draft = Draft::with_text("Buy mlk");
        draft.move_left();
        draft.move_left();
        draft.insert_char('i');
        assert_eq!(draft.text(), "Buy milk");
        draft.move_end();
        draft.backspace();
        assert_eq!(draft.text(), "Buy mil");
        draft.delete_word_back();
        assert_eq!(draft.text(), "Buy ");
        draft.move_home();
        draft.delete_forward();
        assert_eq!(draft.text(), "uy ");
        assert_eq!(draft.cursor(), 0);
    }

    #[test]
    fn draft_paste_flattens_newlines() {
        let mut draft = Draft::default();
        draft.insert_str("one\ntwo\r\nthree");
        assert_eq!(draft.text(), "one two three");
        assert_eq!(draft.cursor(), draft.text().len());
    }

    #[test]
    fn draft_backspace_removes_whole_grapheme() {
        let mut draft = Draft::with_text("cafe\u{0301}");
        draft.backspace();
        assert_eq!(draft.text(), "caf");
    }
}
