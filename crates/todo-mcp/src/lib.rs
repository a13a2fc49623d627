//! # todo-mcp
//!
//! Tool dispatch core shared by every transport.
//!
//! `TodoDispatcher` maps a tool name and its params onto a store
//! mutation and returns a freshly built UI resource. `McpHandler` routes
//! MCP JSON-RPC requests onto the dispatcher.

mod dispatch;
pub mod dispatcher;
pub mod handler;

pub use dispatcher::{DispatchError, TodoDispatcher, UnknownToolPolicy, TODO_LIST_URI};
pub use handler::McpHandler;
pub use todo_protocol::JsonRpcOutput;
