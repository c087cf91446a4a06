use crate::model::todo::{QueryState, StatusFilter, Todo, TodoId};

/// The todo list plus the search and status filter applied to it.
///
/// Every operation is total: empty text and unknown ids leave the store
/// unchanged. Return values only report whether anything changed.
#[derive(Debug, Clone)]
pub struct TodoStore {
    todos: Vec<Todo>,
    query: QueryState,
    next_id: u64,
}

impl Default for TodoStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TodoStore {
    pub fn new() -> Self {
        TodoStore {
            todos: Vec::new(),
            query: QueryState::default(),
            next_id: 1,
        }
    }

    /// Append a new incomplete todo with the trimmed text.
    /// Returns `None` (and does nothing) when the text is blank.
    pub fn add(&mut self, text: &str) -> Option<TodoId> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        let id = TodoId::new(self.next_id);
        self.next_id += 1;
        self.todos.push(Todo::new(id, text.to_string()));
        tracing::debug!(%id, "added todo");
        Some(id)
    }

    /// Replace the text of a todo in place. Id, position and completion
    /// status are untouched.
    pub fn edit(&mut self, id: TodoId, new_text: &str) -> bool {
        let new_text = new_text.trim();
        if new_text.is_empty() {
            return false;
        }
        match self.get_mut(id) {
            Some(todo) => {
                todo.text = new_text.to_string();
                tracing::debug!(%id, "edited todo");
                true
            }
            None => false,
        }
    }

    pub fn toggle(&mut self, id: TodoId) -> bool {
        match self.get_mut(id) {
            Some(todo) => {
                todo.completed = !todo.completed;
                tracing::debug!(%id, completed = todo.completed, "toggled todo");
                true
            }
            None => false,
        }
    }

    /// Remove a todo, keeping the relative order of the rest.
    pub fn delete(&mut self, id: TodoId) -> Option<Todo> {
        let index = self.todos.iter().position(|t| t.id == id)?;
        let removed = self.todos.remove(index);
        tracing::debug!(%id, "deleted todo");
        Some(removed)
    }

    /// Replace the search text verbatim (no trimming).
    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.query.search_query = query.into();
    }

    pub fn set_status_filter(&mut self, filter: StatusFilter) {
        self.query.status_filter = filter;
    }

    /// The todos matching the current query, in insertion order.
    /// Derived from scratch on every call.
    pub fn visible_todos(&self) -> Vec<&Todo> {
        self.todos.iter().filter(|t| self.query.matches(t)).collect()
    }

    pub fn query(&self) -> &QueryState {
        &self.query
    }

    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    pub fn get(&self, id: TodoId) -> Option<&Todo> {
        self.todos.iter().find(|t| t.id == id)
    }

    fn get_mut(&mut self, id: TodoId) -> Option<&mut Todo> {
        self.todos.iter_mut().find(|t| t.id == id)
    }

    pub fn len(&self) -> usize {
        self.todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    pub fn completed_count(&self) -> usize {
        self.todos.iter().filter(|t| t.completed).count()
    }
}
