//! HTTP server that binds the router to a TCP socket.

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use todo_mcp::McpHandler;

use crate::error::HttpTransportError;
use crate::router::{build_router, AppState};

/// Axum-based HTTP server for the todo tools.
pub struct HttpServer {
    pub(crate) addr: SocketAddr,
    pub(crate) state: AppState,
}

impl HttpServer {
    /// Creates a server that will listen on `addr`.
    pub fn new(handler: Arc<McpHandler>, addr: SocketAddr) -> Self {
        Self {
            addr,
            state: AppState { handler },
        }
    }

    /// The address the server binds to.
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Serves until `shutdown` resolves.
    ///
    /// # Errors
    ///
    /// Returns an error if the TCP bind fails or the server crashes.
    pub async fn run<F>(self, shutdown: F) -> Result<(), HttpTransportError>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let listener = TcpListener::bind(self.addr)
            .await
            .map_err(|e| HttpTransportError::Bind {
                addr: self.addr.to_string(),
                source: e,
            })?;

        tracing::info!(addr = %self.addr, "todo MCP HTTP server ready");

        axum::serve(listener, build_router(self.state))
            .with_graceful_shutdown(shutdown)
            .await
            .map_err(|e| HttpTransportError::Serve(e.to_string()))
    }
}
