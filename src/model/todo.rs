use std::fmt;
use std::str::FromStr;

/// Identifier handed out by a `TodoStore`. Never reused within a store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TodoId(u64);

impl TodoId {
    pub fn new(raw: u64) -> Self {
        TodoId(raw)
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single note in the list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Todo {
    pub id: TodoId,
    /// Trimmed, never empty
    pub text: String,
    pub completed: bool,
}

impl Todo {
    /// Create an incomplete todo. The caller is responsible for trimming.
    pub fn new(id: TodoId, text: String) -> Self {
        Todo {
            id,
            text,
            completed: false,
        }
    }
}

/// Which todos the list shows, by completion status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Complete,
    Incomplete,
}

impl StatusFilter {
    /// All filters in dropdown order
    pub const ALL: [StatusFilter; 3] = [
        StatusFilter::All,
        StatusFilter::Complete,
        StatusFilter::Incomplete,
    ];

    pub fn matches(self, completed: bool) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Complete => completed,
            StatusFilter::Incomplete => !completed,
        }
    }

    /// Human label used in the dropdown rows
    pub fn label(self) -> &'static str {
        match self {
            StatusFilter::All => "All",
            StatusFilter::Complete => "Complete",
            StatusFilter::Incomplete => "Incomplete",
        }
    }

    /// Position of this filter in `StatusFilter::ALL`
    pub fn index(self) -> usize {
        match self {
            StatusFilter::All => 0,
            StatusFilter::Complete => 1,
            StatusFilter::Incomplete => 2,
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusFilter::All => write!(f, "ALL"),
            StatusFilter::Complete => write!(f, "COMPLETE"),
            StatusFilter::Incomplete => write!(f, "INCOMPLETE"),
        }
    }
}

/// Returned when a string names no known status filter
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown status filter: {0:?} (expected all, complete or incomplete)")]
pub struct ParseFilterError(pub String);

impl FromStr for StatusFilter {
    type Err = ParseFilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "all" => Ok(StatusFilter::All),
            "complete" => Ok(StatusFilter::Complete),
            "incomplete" => Ok(StatusFilter::Incomplete),
            _ => Err(ParseFilterError(s.to_string())),
        }
    }
}

/// Search text and status filter. Not persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryState {
    /// Matched case-insensitively as a substring. Whitespace is significant.
    pub search_query: String,
    pub status_filter: StatusFilter,
}

impl QueryState {
    pub fn matches(&self, todo: &Todo) -> bool {
        self.matches_search(&todo.text) && self.status_filter.matches(todo.completed)
    }

    fn matches_search(&self, text: &str) -> bool {
        if self.search_query.is_empty() {
            return true;
        }
        text.to_lowercase()
            .contains(&self.search_query.to_lowercase())
    }

    /// True when neither the search nor the status filter restricts anything
    pub fn is_unfiltered(&self) -> bool {
        self.search_query.is_empty() && self.status_filter == StatusFilter::All
    }
}
