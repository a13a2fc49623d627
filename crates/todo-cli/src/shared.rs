//! Shared helpers used across CLI commands.
//!
//! Builds the store, UI builder and dispatcher from the effective
//! configuration so every command wires them the same way.

use std::sync::Arc;

use todo_config::TodoConfig;
use todo_mcp::TodoDispatcher;
use todo_store::{InMemoryTodoRepository, TodoRepository};
use todo_types::TodoError;
use todo_ui::UiBuilder;

/// Creates the in-memory store, seeded unless `store.seed` is off.
pub fn open_repository(config: &TodoConfig) -> Arc<dyn TodoRepository> {
    if config.store.seed {
        Arc::new(InMemoryTodoRepository::seeded())
    } else {
        Arc::new(InMemoryTodoRepository::new())
    }
}

/// Creates the UI builder for `ui.mode` and the frame size hints.
pub fn create_builder(config: &TodoConfig) -> UiBuilder {
    UiBuilder::new(config.ui.mode, config.ui.options())
}

/// Creates the dispatcher shared by all transports.
pub fn create_dispatcher(config: &TodoConfig) -> Arc<TodoDispatcher> {
    Arc::new(TodoDispatcher::new(
        open_repository(config),
        create_builder(config),
        config.dispatch.unknown_tool,
    ))
}

/// Classifies a crate error as a [`TodoError`] tagged with the failing
/// component, for reporting at the top level.
pub fn fail(e: impl Into<TodoError>, component: &str) -> anyhow::Error {
    anyhow::Error::new(e.into().with_context(component))
}
