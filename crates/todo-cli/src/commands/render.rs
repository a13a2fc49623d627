//! `todo-mcp render` command.
//!
//! Prints the UI resource a fresh server would return, without serving.

use clap::Args;

use todo_config::TodoConfig;
use todo_ui::UiMode;

use crate::{output, shared};

/// Print the UI resource for the current (seed) list as JSON.
#[derive(Debug, Args)]
pub struct RenderArgs {
    /// UI output: markup (HTML) or tree. Defaults to `ui.mode`.
    #[arg(long)]
    pub ui: Option<UiMode>,
}

/// Executes the render command.
pub async fn execute(args: &RenderArgs, config: &TodoConfig) -> anyhow::Result<()> {
    let mut config = config.clone();
    if let Some(mode) = args.ui {
        config.ui.mode = mode;
    }
    let resource = shared::create_dispatcher(&config)
        .read_resource()
        .await
        .map_err(|e| shared::fail(e, "render"))?;
    output::print_json(&resource)
}
