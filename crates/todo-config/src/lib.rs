//! # todo-config
//!
//! Configuration for the todo server.
//! Supports layered config: defaults -> file -> env vars.

pub mod loader;
pub mod schema;

pub use loader::{load_config, ConfigError, ENV_PREFIX};
pub use schema::{TodoConfig, TransportKind};
