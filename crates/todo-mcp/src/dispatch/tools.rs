//! Handles the `tools/list` and `tools/call` MCP methods.

use serde_json::Value;
use tracing::{debug, error};

use todo_protocol::mcp::{ToolContent, ToolsCallParams, ToolsCallResult, ToolsListResult};
use todo_protocol::{error_codes, JsonRpcOutput, RequestId};

use crate::dispatch::ui_contents;
use crate::dispatcher::{DispatchError, TodoDispatcher};

/// Handles the `tools/list` request.
pub(crate) fn handle_tools_list(id: RequestId, dispatcher: &TodoDispatcher) -> JsonRpcOutput {
    let result = ToolsListResult {
        tools: dispatcher.tool_definitions(),
    };
    JsonRpcOutput::from_result(id, &result)
}

/// Handles the `tools/call` request.
///
/// A successful call returns the refreshed UI as an embedded resource.
/// An unknown tool is reported in-band (`isError: true`); malformed
/// params are a JSON-RPC error.
pub(crate) async fn handle_tools_call(
    id: RequestId,
    params: &Option<Value>,
    dispatcher: &TodoDispatcher,
) -> JsonRpcOutput {
    // 1. Parse params
    let call = match params {
        Some(p) => match serde_json::from_value::<ToolsCallParams>(p.clone()) {
            Ok(cp) => cp,
            Err(e) => {
                return JsonRpcOutput::error(
                    id,
                    error_codes::INVALID_PARAMS,
                    format!("invalid tools/call params: {e}"),
                );
            }
        },
        None => {
            return JsonRpcOutput::error(
                id,
                error_codes::INVALID_PARAMS,
                "tools/call requires params",
            );
        }
    };

    // 2. Dispatch
    debug!(tool = %call.name, "executing tool via MCP");
    let resource = match dispatcher.dispatch(&call.name, &call.arguments).await {
        Ok(r) => r,
        Err(e @ DispatchError::UnknownTool(_)) => {
            return JsonRpcOutput::from_result(id, &ToolsCallResult::error_text(e.to_string()));
        }
        Err(e @ DispatchError::InvalidParams { .. }) => {
            return JsonRpcOutput::error(id, error_codes::INVALID_PARAMS, e.to_string());
        }
        Err(e @ DispatchError::Store(_)) => {
            error!(error = %e, "tool call failed");
            return JsonRpcOutput::error(id, error_codes::INTERNAL_ERROR, e.to_string());
        }
    };

    // 3. Embed the UI
    match ui_contents(&resource) {
        Ok(contents) => JsonRpcOutput::from_result(
            id,
            &ToolsCallResult {
                content: vec![ToolContent::Resource { resource: contents }],
                is_error: false,
            },
        ),
        Err(e) => JsonRpcOutput::error(id, error_codes::INTERNAL_ERROR, e.to_string()),
    }
}
