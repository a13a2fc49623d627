//! todo-mcp: a todo list served over MCP with a host-rendered UI.

use clap::{Parser, Subcommand};
use tracing_subscriber::fmt::format::FmtSpan;

mod commands;
mod output;
pub(crate) mod shared;

/// Todo list MCP server with an interactive UI resource.
#[derive(Debug, Parser)]
#[command(name = "todo-mcp", version, about)]
struct Cli {
    /// Configuration file path.
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Verbosity level (-v, -vv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Log output format: plain (default) or json (for log aggregation).
    #[arg(long, global = true, default_value = "plain", value_parser = ["plain", "json"])]
    log_format: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Start the MCP server over stdio or HTTP.
    Serve(commands::serve::ServeArgs),
    /// Print the UI resource for the seed list as JSON.
    Render(commands::render::RenderArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = todo_config::load_config(cli.config.as_deref())?;

    // Logs go to stderr; stdout carries the stdio protocol.
    let filter = match cli.verbose {
        0 => config.logging.level.clone(),
        1 => "debug".to_string(),
        _ => "trace".to_string(),
    };
    match cli.log_format.as_str() {
        "json" => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .json()
            .with_target(true)
            .with_span_events(FmtSpan::CLOSE)
            .init(),
        _ => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init(),
    };

    tracing::debug!(config_path = ?cli.config, "todo-mcp starting");

    match cli.command {
        Commands::Serve(args) => commands::serve::execute(&args, config).await,
        Commands::Render(args) => commands::render::execute(&args, &config).await,
    }
}
