//! MCP method dispatch functions.
//!
//! Each sub-module handles one family of MCP methods as free functions,
//! keeping `McpHandler` itself thin (struct + routing only).

pub(crate) mod initialize;
pub(crate) mod resources;
pub(crate) mod tools;

use todo_protocol::mcp::ResourceContents;
use todo_ui::UiResource;

/// Embeds a UI resource as MCP resource contents.
pub(crate) fn ui_contents(resource: &UiResource) -> Result<ResourceContents, serde_json::Error> {
    Ok(ResourceContents {
        uri: resource.uri.clone(),
        mime_type: resource.mime_type().to_string(),
        text: resource.text()?,
        meta: Some(serde_json::to_value(&resource.ui_metadata)?),
    })
}
