//! Integration tests for the HTTP router.

use std::sync::Arc;

use axum::body::Body;
use axum::Router;
use http::{Request, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;

use todo_mcp::{McpHandler, TodoDispatcher, UnknownToolPolicy};
use todo_store::InMemoryTodoRepository;
use todo_transport_http::{build_router, AppState};
use todo_ui::{UiBuilder, UiMode, UiOptions};

fn make_app(policy: UnknownToolPolicy) -> Router {
    let dispatcher = TodoDispatcher::new(
        Arc::new(InMemoryTodoRepository::seeded()),
        UiBuilder::new(UiMode::Tree, UiOptions::default()),
        policy,
    );
    build_router(AppState {
        handler: Arc::new(McpHandler::new(Arc::new(dispatcher))),
    })
}

fn app() -> Router {
    make_app(UnknownToolPolicy::Reject)
}

fn post(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("req")
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).expect("req")
}

async fn send(app: Router, req: Request<Body>) -> (StatusCode, Value) {
    let resp = app.oneshot(req).await.expect("resp");
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), 1 << 20)
        .await
        .expect("body");
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("json body")
    };
    (status, body)
}

/// Number of todo rows in a tree-mode resource (first child is the
/// creation form).
fn rows(body: &Value) -> usize {
    body["resource"]["content"]["ui"]["items"]
        .as_array()
        .expect("items")
        .len()
        - 1
}

#[tokio::test]
async fn health_returns_ok() {
    let (status, body) = send(app(), get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn ready_endpoint_returns_ready() {
    let (status, body) = send(app(), get("/health/ready")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ready");
}

#[tokio::test]
async fn get_todo_list_returns_resource() {
    let (status, body) = send(app(), get("/mcp/todo_list")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["resource"]["uri"], "ui://todo/list");
    assert_eq!(body["resource"]["content"]["type"], "json");
    assert_eq!(rows(&body), 2);
}

#[tokio::test]
async fn get_on_mutating_tool_is_not_allowed() {
    let (status, body) = send(app(), get("/mcp/todo_delete")).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(body["status"], "error");
}

#[tokio::test]
async fn create_adds_a_row() {
    let (status, body) = send(app(), post("/mcp/todo_create", r#"{"text":"Ship it"}"#)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(rows(&body), 3);
}

#[tokio::test]
async fn mutations_share_one_store() {
    let app = app();
    send(app.clone(), post("/mcp/todo_toggle", r#"{"id":"1"}"#)).await;
    send(app.clone(), post("/mcp/todo_delete", r#"{"id":"2"}"#)).await;
    let (_, body) = send(
        app.clone(),
        post("/mcp/todo_edit", r#"{"id":"1","text":"Learn Rust"}"#),
    )
    .await;
    assert_eq!(rows(&body), 1);
    let row = &body["resource"]["content"]["ui"]["items"][1];
    assert_eq!(row["id"], "todo-1");
    let label = &row["items"][0]["items"][0];
    assert_eq!(label["text"], "Learn Rust");
    assert_eq!(label["style"]["textDecoration"], "line-through");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_toggles_keep_parity() {
    let app = app();
    let mut handles = Vec::new();
    for _ in 0..64 {
        let app = app.clone();
        handles.push(tokio::spawn(async move {
            send(app, post("/mcp/todo_toggle", r#"{"id":"2"}"#)).await.0
        }));
    }
    for h in handles {
        assert_eq!(h.await.expect("join"), StatusCode::OK);
    }
    let (_, body) = send(app, get("/mcp/todo_list")).await;
    let label = &body["resource"]["content"]["ui"]["items"][2]["items"][0]["items"][0];
    assert_eq!(label["text"], "Build MCP app");
    assert!(label["style"].get("textDecoration").is_none(), "even flips leave it open");
}

#[tokio::test]
async fn unknown_id_is_a_noop_not_an_error() {
    let (status, body) = send(app(), post("/mcp/todo_toggle", r#"{"id":"nope"}"#)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(rows(&body), 2);
}

#[tokio::test]
async fn malformed_body_is_bad_request() {
    let (status, body) = send(app(), post("/mcp/todo_create", "{not json")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], "error");
    assert!(body["error"].as_str().expect("error").contains("malformed"));
}

#[tokio::test]
async fn missing_params_are_bad_request() {
    let (status, body) = send(app(), post("/mcp/todo_edit", r#"{"id":"1"}"#)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().expect("error").contains("text"));
}

#[tokio::test]
async fn unknown_tool_is_not_found_when_rejecting() {
    let (status, body) = send(app(), post("/mcp/todo_archive", "{}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "unknown tool: todo_archive");
}

#[tokio::test]
async fn unknown_tool_is_ok_when_ignoring() {
    let (status, body) = send(
        make_app(UnknownToolPolicy::Ignore),
        post("/mcp/todo_archive", ""),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(rows(&body), 2);
}

#[tokio::test]
async fn cors_allows_any_origin() {
    let req = Request::builder()
        .uri("/mcp/todo_list")
        .header("origin", "http://host.example")
        .body(Body::empty())
        .expect("req");
    let resp = app().oneshot(req).await.expect("resp");
    assert_eq!(
        resp.headers()
            .get("access-control-allow-origin")
            .expect("cors header"),
        "*"
    );
}

#[tokio::test]
async fn json_rpc_tools_call() {
    let body = json!({
        "jsonrpc": "2.0",
        "id": 1,
        "method": "tools/call",
        "params": {"name": "todo_create", "arguments": {"text": "From RPC"}}
    })
    .to_string();
    let (status, resp) = send(app(), post("/mcp", &body)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(resp["id"], 1);
    assert_eq!(resp["result"]["content"][0]["type"], "resource");
}

#[tokio::test]
async fn json_rpc_parse_error() {
    let (status, body) = send(app(), post("/mcp", "not json")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["error"]["code"], -32700);
    assert!(body["id"].is_null());
}

#[tokio::test]
async fn json_rpc_notification_returns_no_content() {
    let (status, _) = send(
        app(),
        post("/mcp", r#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#),
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn json_rpc_invalid_request_missing_method() {
    let (status, body) = send(app(), post("/mcp", r#"{"jsonrpc":"2.0","id":5}"#)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["error"]["code"], -32600);
    assert_eq!(body["id"], Value::Null);
}
