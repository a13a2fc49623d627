//! Abstract repository trait (port) for todo storage.

use async_trait::async_trait;
use thiserror::Error;

use todo_types::{MutationOutcome, Todo, TodoId};

/// Errors returned by repository implementations.
///
/// Domain outcomes (unknown id, empty text) are not errors; they are
/// reported through [`MutationOutcome`].
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing storage is unusable (e.g. a poisoned lock).
    #[error("storage error: {message}")]
    Storage { message: String },
}

/// Abstract trait for todo persistence.
///
/// Every method observes the live list; implementations must make each
/// read-modify-write atomic with respect to other callers.
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// Returns all todos in insertion order.
    async fn list(&self) -> Result<Vec<Todo>, StoreError>;

    /// Appends a new open todo with a freshly generated id.
    ///
    /// The text is trimmed; returns `None` (and stores nothing) when it
    /// is empty.
    async fn create(&self, text: &str) -> Result<Option<Todo>, StoreError>;

    /// Finds a todo by id.
    async fn find(&self, id: &TodoId) -> Result<Option<Todo>, StoreError>;

    /// Flips the `done` flag.
    async fn toggle(&self, id: &TodoId) -> Result<MutationOutcome, StoreError>;

    /// Replaces the text with its trimmed form. Empty text is rejected.
    async fn edit(&self, id: &TodoId, text: &str) -> Result<MutationOutcome, StoreError>;

    /// Removes the todo, keeping the order of the remaining ones.
    async fn delete(&self, id: &TodoId) -> Result<MutationOutcome, StoreError>;
}
