//! # todo-transport-stdio
//!
//! MCP over stdin/stdout: one JSON-RPC message per line.
//!
//! `StdioTransport` frames lines and `McpServer` answers each request
//! through an `McpHandler`.

pub mod error;
pub mod server;
pub mod transport;

pub use error::TransportError;
pub use server::McpServer;
pub use todo_mcp::McpHandler;
pub use transport::{Frame, StdioTransport};
