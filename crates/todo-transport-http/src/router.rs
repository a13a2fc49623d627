//! Axum router for the HTTP transport.
//!
//! Routes:
//! - `GET /mcp/todo_list`, `POST /mcp/{toolName}`: run a tool, answer
//!   `{"status":"ok","resource":...}`
//! - `POST /mcp`: MCP JSON-RPC, same semantics as stdio
//! - `GET /health`, `GET /health/ready`: probes

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use serde_json::{json, Value};
use tower_http::cors::CorsLayer;
use tracing::{debug, error, warn};

use todo_mcp::{DispatchError, McpHandler};
use todo_protocol::{IncomingMessage, JsonRpcOutput};
use todo_types::TodoTool;
use todo_ui::UiResource;

/// Shared state threaded through all axum handlers.
#[derive(Clone)]
pub struct AppState {
    /// The MCP handler and, through it, the tool dispatcher.
    pub handler: Arc<McpHandler>,
}

/// Body of a successful tool call.
#[derive(Serialize)]
struct ToolResponse<'a> {
    status: &'static str,
    resource: &'a UiResource,
}

/// Builds the axum `Router` with all routes and permissive CORS.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/mcp", post(handle_json_rpc))
        .route("/mcp/:tool", get(handle_tool_get).post(handle_tool_post))
        .route("/health", get(handle_health))
        .route("/health/ready", get(handle_ready))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn handle_health() -> impl IntoResponse {
    Json(json!({"status": "ok", "service": "todo-mcp"}))
}

async fn handle_ready() -> impl IntoResponse {
    Json(json!({"status": "ready", "service": "todo-mcp"}))
}

/// `GET` is only served for read-only tools.
async fn handle_tool_get(State(state): State<AppState>, Path(tool): Path<String>) -> Response {
    match tool.parse::<TodoTool>() {
        Ok(t) if t.is_read_only() => run_tool(&state, &tool, Value::Null).await,
        Ok(_) => status_error(
            StatusCode::METHOD_NOT_ALLOWED,
            format!("{tool} must be invoked with POST"),
        ),
        Err(_) => run_tool(&state, &tool, Value::Null).await,
    }
}

async fn handle_tool_post(
    State(state): State<AppState>,
    Path(tool): Path<String>,
    body: String,
) -> Response {
    let params = if body.trim().is_empty() {
        Value::Null
    } else {
        match serde_json::from_str::<Value>(&body) {
            Ok(v) => v,
            Err(e) => {
                warn!(%tool, error = %e, "malformed request body");
                return status_error(StatusCode::BAD_REQUEST, format!("malformed body: {e}"));
            }
        }
    };
    run_tool(&state, &tool, params).await
}

async fn run_tool(state: &AppState, tool: &str, params: Value) -> Response {
    debug!(tool, "http tool call");
    match state.handler.dispatcher().dispatch(tool, &params).await {
        Ok(resource) => Json(ToolResponse {
            status: "ok",
            resource: &resource,
        })
        .into_response(),
        Err(e @ DispatchError::UnknownTool(_)) => status_error(StatusCode::NOT_FOUND, e.to_string()),
        Err(e @ DispatchError::InvalidParams { .. }) => {
            status_error(StatusCode::BAD_REQUEST, e.to_string())
        }
        Err(e @ DispatchError::Store(_)) => {
            error!(error = %e, "tool call failed");
            status_error(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        }
    }
}

fn status_error(status: StatusCode, message: String) -> Response {
    (status, Json(json!({"status": "error", "error": message}))).into_response()
}

async fn handle_json_rpc(State(state): State<AppState>, body: String) -> Response {
    let output = match IncomingMessage::parse(&body) {
        Ok(IncomingMessage::Request(request)) => state.handler.dispatch(&request).await,
        Ok(IncomingMessage::Notification(notif)) => {
            state.handler.handle_notification(&notif);
            return StatusCode::NO_CONTENT.into_response();
        }
        Err(e) => {
            warn!(error = %e, "rejecting malformed JSON-RPC body");
            JsonRpcOutput::Error(e.to_response())
        }
    };

    match output.to_json() {
        Ok(json_str) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json")],
            json_str,
        )
            .into_response(),
        Err(e) => {
            error!(error = %e, "failed to serialize response");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
