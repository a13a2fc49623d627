//! Handles the `resources/list` and `resources/read` MCP methods.

use serde_json::Value;

use todo_protocol::mcp::{
    McpResourceDefinition, ResourceContents, ResourcesListResult, ResourcesReadParams,
    ResourcesReadResult,
};
use todo_protocol::{error_codes, JsonRpcOutput, RequestId};
use todo_ui::TODO_LIST_UI_URI;

use crate::dispatch::ui_contents;
use crate::dispatcher::{TodoDispatcher, TODO_LIST_URI};

/// Handles the `resources/list` request.
pub(crate) fn handle_resources_list(id: RequestId) -> JsonRpcOutput {
    let result = ResourcesListResult {
        resources: vec![
            McpResourceDefinition {
                uri: TODO_LIST_URI.to_string(),
                name: "todo_list".to_string(),
                description: Some("The todo list as JSON".to_string()),
                mime_type: Some("application/json".to_string()),
            },
            McpResourceDefinition {
                uri: TODO_LIST_UI_URI.to_string(),
                name: "todo_list_ui".to_string(),
                description: Some("Renderable UI for the todo list".to_string()),
                mime_type: None,
            },
        ],
    };
    JsonRpcOutput::from_result(id, &result)
}

/// Handles the `resources/read` request.
pub(crate) async fn handle_resources_read(
    id: RequestId,
    params: &Option<Value>,
    dispatcher: &TodoDispatcher,
) -> JsonRpcOutput {
    let read = match params
        .as_ref()
        .map(|p| serde_json::from_value::<ResourcesReadParams>(p.clone()))
    {
        Some(Ok(r)) => r,
        Some(Err(e)) => {
            return JsonRpcOutput::error(
                id,
                error_codes::INVALID_PARAMS,
                format!("invalid resources/read params: {e}"),
            );
        }
        None => {
            return JsonRpcOutput::error(
                id,
                error_codes::INVALID_PARAMS,
                "resources/read requires params",
            );
        }
    };

    let contents = match read.uri.as_str() {
        TODO_LIST_URI => dispatcher
            .list_todos()
            .await
            .map_err(|e| e.to_string())
            .and_then(|todos| serde_json::to_string_pretty(&todos).map_err(|e| e.to_string()))
            .map(|text| ResourceContents {
                uri: TODO_LIST_URI.to_string(),
                mime_type: "application/json".to_string(),
                text,
                meta: None,
            }),
        TODO_LIST_UI_URI => dispatcher
            .read_resource()
            .await
            .map_err(|e| e.to_string())
            .and_then(|res| ui_contents(&res).map_err(|e| e.to_string())),
        other => {
            return JsonRpcOutput::error(
                id,
                error_codes::INVALID_PARAMS,
                format!("unknown resource: {other}"),
            );
        }
    };

    match contents {
        Ok(c) => JsonRpcOutput::from_result(id, &ResourcesReadResult { contents: vec![c] }),
        Err(message) => JsonRpcOutput::error(id, error_codes::INTERNAL_ERROR, message),
    }
}
