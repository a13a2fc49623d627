//! MCP request handler: routes JSON-RPC methods to dispatch functions.

use std::sync::Arc;

use serde_json::json;
use tracing::debug;

use todo_protocol::mcp::methods;
use todo_protocol::{error_codes, JsonRpcNotification, JsonRpcOutput, JsonRpcRequest};

use crate::dispatch::{initialize, resources, tools};
use crate::dispatcher::TodoDispatcher;

/// Routes MCP requests onto a shared [`TodoDispatcher`].
///
/// Holds no state of its own; cloning shares the dispatcher.
#[derive(Clone)]
pub struct McpHandler {
    dispatcher: Arc<TodoDispatcher>,
}

impl McpHandler {
    /// Creates a handler over the given dispatcher.
    pub fn new(dispatcher: Arc<TodoDispatcher>) -> Self {
        Self { dispatcher }
    }

    /// The dispatcher requests are routed to.
    pub fn dispatcher(&self) -> &Arc<TodoDispatcher> {
        &self.dispatcher
    }

    /// Handles one request and produces the response to send back.
    pub async fn dispatch(&self, request: &JsonRpcRequest) -> JsonRpcOutput {
        let id = request.id.clone();
        match request.method.as_str() {
            methods::INITIALIZE => initialize::handle_initialize(id, &request.params),
            methods::PING => JsonRpcOutput::from_result(id, &json!({})),
            methods::TOOLS_LIST => tools::handle_tools_list(id, &self.dispatcher),
            methods::TOOLS_CALL => {
                tools::handle_tools_call(id, &request.params, &self.dispatcher).await
            }
            methods::RESOURCES_LIST => resources::handle_resources_list(id),
            methods::RESOURCES_READ => {
                resources::handle_resources_read(id, &request.params, &self.dispatcher).await
            }
            other => JsonRpcOutput::error(
                id,
                error_codes::METHOD_NOT_FOUND,
                format!("unknown method: {other}"),
            ),
        }
    }

    /// Handles a notification. Notifications never get a response.
    pub fn handle_notification(&self, notification: &JsonRpcNotification) {
        debug!(method = %notification.method, "notification ignored");
    }
}
