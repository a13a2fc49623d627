//! Todo record and identity types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identifier of a todo.
///
/// Generated once at creation time and never changed afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(String);

impl TodoId {
    /// Wraps a raw id string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TodoId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for TodoId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// A single task on the list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    /// Unique id within the live list.
    pub id: TodoId,
    /// User-visible label.
    pub text: String,
    /// Completion flag.
    pub done: bool,
}

impl Todo {
    /// Creates an open (not done) todo.
    pub fn new(id: impl Into<TodoId>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            done: false,
        }
    }
}

/// Result of a mutation addressed to a single todo.
///
/// Callers treat everything except `Applied` as a no-op; none of these
/// are surfaced to the host as errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationOutcome {
    /// The todo was changed (or removed).
    Applied,
    /// No todo with the given id exists.
    NotFound,
    /// The input was rejected (e.g. empty text) and nothing changed.
    Rejected,
}

impl MutationOutcome {
    /// Returns `true` if the store was modified.
    pub fn is_applied(self) -> bool {
        matches!(self, Self::Applied)
    }
}

/// The list a fresh process starts with.
pub fn seed_todos() -> Vec<Todo> {
    vec![
        Todo::new("1", "Learn TypeScript"),
        Todo::new("2", "Build MCP app"),
    ]
}
