//! Handles the `initialize` MCP method.

use serde_json::Value;
use tracing::info;

use todo_protocol::mcp::initialize::{
    EmptyCapability, Implementation, InitializeParams, InitializeResult, ServerCapabilities,
    PROTOCOL_VERSION,
};
use todo_protocol::{error_codes, JsonRpcOutput, RequestId};

/// Name the server reports in `serverInfo`.
pub(crate) const SERVER_NAME: &str = "todo-mcp";

/// Handles the `initialize` request and returns the server capabilities.
pub(crate) fn handle_initialize(id: RequestId, params: &Option<Value>) -> JsonRpcOutput {
    if let Some(p) = params {
        match serde_json::from_value::<InitializeParams>(p.clone()) {
            Ok(init) => info!(
                client = %init.client_info.name,
                version = %init.client_info.version,
                protocol = %init.protocol_version,
                "client initializing"
            ),
            Err(e) => {
                return JsonRpcOutput::error(
                    id,
                    error_codes::INVALID_PARAMS,
                    format!("invalid initialize params: {e}"),
                );
            }
        }
    }

    let result = InitializeResult {
        protocol_version: PROTOCOL_VERSION.to_string(),
        capabilities: ServerCapabilities {
            tools: Some(EmptyCapability {}),
            resources: Some(EmptyCapability {}),
        },
        server_info: Implementation {
            name: SERVER_NAME.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
    };

    JsonRpcOutput::from_result(id, &result)
}
