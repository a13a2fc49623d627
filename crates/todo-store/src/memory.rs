//! In-memory implementation of `TodoRepository`.

use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use tracing::debug;

use todo_types::{seed_todos, MutationOutcome, Todo, TodoId};

use crate::id::generate_id;
use crate::repository::{StoreError, TodoRepository};

/// Process-local todo list guarded by a single mutex.
///
/// The lock is held for the whole of each operation and never across an
/// `.await`, so concurrent callers are serialized.
#[derive(Debug, Default)]
pub struct InMemoryTodoRepository {
    todos: Mutex<Vec<Todo>>,
}

impl InMemoryTodoRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository holding the given todos, in order.
    pub fn with_todos(todos: Vec<Todo>) -> Self {
        Self {
            todos: Mutex::new(todos),
        }
    }

    /// Creates a repository holding the two seed todos.
    pub fn seeded() -> Self {
        Self::with_todos(seed_todos())
    }

    fn lock(&self) -> Result<MutexGuard<'_, Vec<Todo>>, StoreError> {
        self.todos.lock().map_err(|e| StoreError::Storage {
            message: e.to_string(),
        })
    }
}

fn position(todos: &[Todo], id: &TodoId) -> Option<usize> {
    todos.iter().position(|t| &t.id == id)
}

#[async_trait]
impl TodoRepository for InMemoryTodoRepository {
    async fn list(&self) -> Result<Vec<Todo>, StoreError> {
        Ok(self.lock()?.clone())
    }

    async fn create(&self, text: &str) -> Result<Option<Todo>, StoreError> {
        let text = text.trim();
        if text.is_empty() {
            debug!("ignoring create with empty text");
            return Ok(None);
        }

        let mut todos = self.lock()?;
        let mut rng = rand::thread_rng();
        let id = loop {
            let candidate = TodoId::new(generate_id(&mut rng));
            if position(&todos, &candidate).is_none() {
                break candidate;
            }
        };

        let todo = Todo::new(id, text);
        debug!(id = %todo.id, "todo created");
        todos.push(todo.clone());
        Ok(Some(todo))
    }

    async fn find(&self, id: &TodoId) -> Result<Option<Todo>, StoreError> {
        let todos = self.lock()?;
        Ok(todos.iter().find(|t| &t.id == id).cloned())
    }

    async fn toggle(&self, id: &TodoId) -> Result<MutationOutcome, StoreError> {
        let mut todos = self.lock()?;
        match todos.iter_mut().find(|t| &t.id == id) {
            Some(todo) => {
                todo.done = !todo.done;
                debug!(%id, done = todo.done, "todo toggled");
                Ok(MutationOutcome::Applied)
            }
            None => Ok(MutationOutcome::NotFound),
        }
    }

    async fn edit(&self, id: &TodoId, text: &str) -> Result<MutationOutcome, StoreError> {
        let mut todos = self.lock()?;
        let Some(todo) = todos.iter_mut().find(|t| &t.id == id) else {
            return Ok(MutationOutcome::NotFound);
        };

        let text = text.trim();
        if text.is_empty() {
            return Ok(MutationOutcome::Rejected);
        }

        todo.text = text.to_string();
        debug!(%id, "todo edited");
        Ok(MutationOutcome::Applied)
    }

    async fn delete(&self, id: &TodoId) -> Result<MutationOutcome, StoreError> {
        let mut todos = self.lock()?;
        match position(&todos, id) {
            Some(idx) => {
                todos.remove(idx);
                debug!(%id, "todo deleted");
                Ok(MutationOutcome::Applied)
            }
            None => Ok(MutationOutcome::NotFound),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn new_repository_is_empty() {
        let repo = InMemoryTodoRepository::new();
        assert!(repo.list().await.expect("list").is_empty());
    }

    #[tokio::test]
    async fn seeded_repository_has_seed() {
        let repo = InMemoryTodoRepository::seeded();
        let todos = repo.list().await.expect("list");
        assert_eq!(todos, seed_todos());
    }

    #[tokio::test]
    async fn edit_missing_id_reports_not_found_before_empty_text() {
        let repo = InMemoryTodoRepository::seeded();
        let outcome = repo.edit(&TodoId::from("nope"), "  ").await.expect("edit");
        assert_eq!(outcome, MutationOutcome::NotFound);
    }

    #[tokio::test]
    async fn create_skips_live_ids() {
        let repo = InMemoryTodoRepository::seeded();
        for _ in 0..50 {
            repo.create("x").await.expect("create");
        }
        let todos = repo.list().await.expect("list");
        let mut ids: Vec<_> = todos.iter().map(|t| t.id.clone()).collect();
        ids.sort_by(|a, b| a.as_str().cmp(b.as_str()));
        ids.dedup();
        assert_eq!(ids.len(), todos.len());
    }
}
