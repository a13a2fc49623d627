//! # todo-protocol
//!
//! MCP protocol and JSON-RPC 2.0 type definitions.
//! This crate defines the wire format between a host (and its UI
//! renderer) and the todo server, independent of the transport.

pub mod jsonrpc;
pub mod mcp;
pub mod schema;
pub mod ui_action;

pub use jsonrpc::*;
pub use mcp::methods;
pub use ui_action::{HostMessage, ToolCallPayload};
