//! # todo-types
//!
//! Domain types for the todo MCP-UI server.
//! This crate contains pure data types with zero external dependencies
//! (except serde for serialization).

pub mod error;
pub mod todo;
pub mod tool;

// Re-exports for convenience.
pub use error::{ErrorKind, TodoError};
pub use todo::{seed_todos, MutationOutcome, Todo, TodoId};
pub use tool::{TodoTool, ToolArgument};
