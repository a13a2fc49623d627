//! HTTP transport for the todo server.
//!
//! Exposes each tool as `POST /mcp/{toolName}` (plus `GET /mcp/todo_list`)
//! and the full MCP JSON-RPC surface on `POST /mcp`.

mod error;
pub mod router;
pub mod server;

pub use error::HttpTransportError;
pub use router::{build_router, AppState};
pub use server::HttpServer;
