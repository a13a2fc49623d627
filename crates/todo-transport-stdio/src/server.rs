//! MCP server loop over the stdio transport.
//!
//! Requests get exactly one response line; notifications get none.
//! A line that is not a JSON-RPC message is answered with an error whose
//! `id` is `null`, and the loop carries on.

use tracing::{debug, info, warn};

use todo_mcp::McpHandler;
use todo_protocol::{IncomingMessage, JsonRpcOutput, MessageError};

use crate::error::TransportError;
use crate::transport::{Frame, StdioTransport};

/// MCP server that reads from a transport and dispatches to a handler.
pub struct McpServer<R, W> {
    transport: StdioTransport<R, W>,
    handler: McpHandler,
}

impl<R, W> McpServer<R, W>
where
    R: tokio::io::AsyncRead + Unpin,
    W: tokio::io::AsyncWrite + Unpin,
{
    /// Creates a server over `transport`.
    pub fn new(transport: StdioTransport<R, W>, handler: McpHandler) -> Self {
        Self { transport, handler }
    }

    /// Runs until end of input.
    ///
    /// Messages are handled strictly in arrival order.
    pub async fn run(&mut self) -> Result<(), TransportError> {
        info!("MCP server listening on stdio");

        loop {
            let line = match self.transport.read_line().await? {
                Some(Frame::Text(line)) if line.is_empty() => continue,
                Some(Frame::Text(line)) => line,
                Some(Frame::NotUtf8(reason)) => {
                    let e = MessageError::Parse(reason);
                    warn!(error = %e, "rejecting non UTF-8 line");
                    self.write_output(&JsonRpcOutput::Error(e.to_response()))
                        .await?;
                    continue;
                }
                None => {
                    info!("stdin closed, shutting down");
                    return Ok(());
                }
            };

            match IncomingMessage::parse(&line) {
                Ok(IncomingMessage::Request(request)) => {
                    debug!(method = %request.method, id = ?request.id, "received request");
                    let output = self.handler.dispatch(&request).await;
                    self.write_output(&output).await?;
                }
                Ok(IncomingMessage::Notification(notif)) => {
                    debug!(method = %notif.method, "received notification");
                    self.handler.handle_notification(&notif);
                }
                Err(e) => {
                    warn!(error = %e, "rejecting malformed message");
                    self.write_output(&JsonRpcOutput::Error(e.to_response()))
                        .await?;
                }
            }
        }
    }

    async fn write_output(&mut self, output: &JsonRpcOutput) -> Result<(), TransportError> {
        let json = output.to_json()?;
        self.transport.write_line(&json).await
    }
}
