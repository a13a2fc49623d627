//! # todo-store
//!
//! Port definition (abstract trait) for todo storage plus the
//! in-memory adapter used by both transports.

pub mod id;
pub mod memory;
pub mod repository;

pub use id::generate_id;
pub use memory::InMemoryTodoRepository;
pub use repository::{StoreError, TodoRepository};
