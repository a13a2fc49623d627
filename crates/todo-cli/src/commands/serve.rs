//! `todo-mcp serve` command.
//!
//! Starts the MCP server over stdio or HTTP. Flags given here override
//! the loaded configuration.

use std::sync::Arc;

use clap::Args;

use todo_config::{TodoConfig, TransportKind};
use todo_mcp::UnknownToolPolicy;
use todo_transport_http::HttpServer;
use todo_transport_stdio::{McpHandler, McpServer, StdioTransport};
use todo_ui::UiMode;

use crate::shared;

/// Start the MCP server (stdio or HTTP).
#[derive(Debug, Default, Args)]
pub struct ServeArgs {
    /// Transport: stdio or http.
    #[arg(long)]
    pub transport: Option<TransportKind>,
    /// TCP port for the HTTP transport.
    #[arg(long)]
    pub port: Option<u16>,
    /// Listen host for the HTTP transport.
    #[arg(long)]
    pub host: Option<String>,
    /// UI output: markup (HTML) or tree.
    #[arg(long)]
    pub ui: Option<UiMode>,
    /// Unknown tool handling: reject or ignore.
    #[arg(long)]
    pub unknown_tool: Option<UnknownToolPolicy>,
    /// Start with an empty list instead of the example todos.
    #[arg(long)]
    pub no_seed: bool,
}

impl ServeArgs {
    /// Applies the flags that were given on top of `config`.
    pub fn apply(&self, config: &mut TodoConfig) {
        if let Some(transport) = self.transport {
            config.server.transport = transport;
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(host) = &self.host {
            config.server.host = host.clone();
        }
        if let Some(mode) = self.ui {
            config.ui.mode = mode;
        }
        if let Some(policy) = self.unknown_tool {
            config.dispatch.unknown_tool = policy;
        }
        if self.no_seed {
            config.store.seed = false;
        }
    }
}

/// Executes the serve command.
pub async fn execute(args: &ServeArgs, mut config: TodoConfig) -> anyhow::Result<()> {
    args.apply(&mut config);
    let handler = McpHandler::new(shared::create_dispatcher(&config));
    tracing::info!(
        transport = %config.server.transport,
        ui = %config.ui.mode,
        unknown_tool = %config.dispatch.unknown_tool,
        "starting todo MCP server"
    );

    match config.server.transport {
        TransportKind::Http => {
            let addr = config.server.socket_addr()?;
            let server = HttpServer::new(Arc::new(handler), addr);
            server
                .run(async {
                    if tokio::signal::ctrl_c().await.is_ok() {
                        tracing::info!("shutdown signal received");
                    }
                })
                .await
                .map_err(|e| shared::fail(e, "http transport"))?;
        }
        TransportKind::Stdio => {
            let mut server = McpServer::new(StdioTransport::stdio(), handler);
            tokio::select! {
                result = server.run() => {
                    result.map_err(|e| shared::fail(e, "stdio transport"))?;
                }
                _ = tokio::signal::ctrl_c() => {
                    tracing::info!("shutdown signal received");
                }
            }
        }
    }

    Ok(())
}
