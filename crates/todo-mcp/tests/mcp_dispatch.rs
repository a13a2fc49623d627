//! MCP method routing and edge cases for `McpHandler`.

use std::sync::Arc;

use serde_json::{json, Value};

use todo_mcp::{McpHandler, TodoDispatcher, UnknownToolPolicy};
use todo_protocol::mcp::methods;
use todo_protocol::{JsonRpcNotification, JsonRpcRequest, RequestId};
use todo_store::InMemoryTodoRepository;
use todo_ui::{UiBuilder, UiMode, UiOptions};

fn make_handler(mode: UiMode, policy: UnknownToolPolicy) -> McpHandler {
    let repo = Arc::new(InMemoryTodoRepository::seeded());
    let dispatcher = TodoDispatcher::new(repo, UiBuilder::new(mode, UiOptions::default()), policy);
    McpHandler::new(Arc::new(dispatcher))
}

fn handler() -> McpHandler {
    make_handler(UiMode::Markup, UnknownToolPolicy::Reject)
}

fn rpc(method: &str, id: i64, params: Option<Value>) -> JsonRpcRequest {
    JsonRpcRequest {
        jsonrpc: "2.0".into(),
        id: RequestId::Number(id),
        method: method.into(),
        params,
    }
}

async fn call(handler: &McpHandler, req: JsonRpcRequest) -> Value {
    let output = handler.dispatch(&req).await;
    let json_str = output.to_json().expect("ser");
    serde_json::from_str(&json_str).expect("de")
}

#[tokio::test]
async fn initialize_reports_server_and_capabilities() {
    let parsed = call(
        &handler(),
        rpc(
            methods::INITIALIZE,
            1,
            Some(json!({
                "protocolVersion": "2024-11-05",
                "capabilities": {},
                "clientInfo": {"name": "host", "version": "0.0.1"}
            })),
        ),
    )
    .await;
    assert_eq!(parsed["id"], 1);
    assert_eq!(parsed["result"]["serverInfo"]["name"], "todo-mcp");
    assert_eq!(parsed["result"]["protocolVersion"], "2024-11-05");
    assert!(parsed["result"]["capabilities"]["tools"].is_object());
    assert!(parsed["result"]["capabilities"]["resources"].is_object());
}

#[tokio::test]
async fn initialize_without_params_succeeds() {
    let parsed = call(&handler(), rpc(methods::INITIALIZE, 2, None)).await;
    assert_eq!(parsed["result"]["serverInfo"]["name"], "todo-mcp");
}

#[tokio::test]
async fn initialize_with_invalid_params_returns_error() {
    let parsed = call(
        &handler(),
        rpc(methods::INITIALIZE, 3, Some(json!({"protocolVersion": 123}))),
    )
    .await;
    assert_eq!(parsed["error"]["code"], -32602);
}

#[tokio::test]
async fn ping_returns_empty_object() {
    let parsed = call(&handler(), rpc(methods::PING, 4, None)).await;
    assert_eq!(parsed["result"], json!({}));
}

#[tokio::test]
async fn tools_list_names_every_tool() {
    let parsed = call(&handler(), rpc(methods::TOOLS_LIST, 5, None)).await;
    let tools = parsed["result"]["tools"].as_array().expect("tools");
    let names: Vec<&str> = tools
        .iter()
        .map(|t| t["name"].as_str().expect("name"))
        .collect();
    assert_eq!(
        names,
        ["todo_list", "todo_create", "todo_toggle", "todo_delete", "todo_edit"]
    );
    assert_eq!(tools[4]["inputSchema"]["required"], json!(["id", "text"]));
}

#[tokio::test]
async fn tools_call_returns_embedded_ui_resource() {
    let parsed = call(
        &handler(),
        rpc(
            methods::TOOLS_CALL,
            6,
            Some(json!({"name": "todo_create", "arguments": {"text": "Write tests"}})),
        ),
    )
    .await;
    assert_eq!(parsed["result"]["isError"], false);
    let content = &parsed["result"]["content"][0];
    assert_eq!(content["type"], "resource");
    assert_eq!(content["resource"]["uri"], "ui://todo/list");
    assert_eq!(content["resource"]["mimeType"], "text/html");
    let html = content["resource"]["text"].as_str().expect("text");
    assert!(html.contains("Write tests"));
    assert_eq!(
        content["resource"]["_meta"]["preferred-frame-size"],
        json!(["500px", "600px"])
    );
}

#[tokio::test]
async fn tools_call_tree_mode_embeds_json_tree() {
    let h = make_handler(UiMode::Tree, UnknownToolPolicy::Reject);
    let parsed = call(
        &h,
        rpc(methods::TOOLS_CALL, 7, Some(json!({"name": "todo_list"}))),
    )
    .await;
    let resource = &parsed["result"]["content"][0]["resource"];
    assert_eq!(resource["mimeType"], "application/vnd.mcp-ui.tree+json");
    let tree: Value =
        serde_json::from_str(resource["text"].as_str().expect("text")).expect("tree json");
    assert_eq!(tree["type"], "container");
}

#[tokio::test]
async fn tools_call_missing_params_returns_error() {
    let parsed = call(&handler(), rpc(methods::TOOLS_CALL, 8, None)).await;
    assert_eq!(parsed["error"]["code"], -32602);
}

#[tokio::test]
async fn tools_call_bad_arguments_returns_invalid_params() {
    let parsed = call(
        &handler(),
        rpc(
            methods::TOOLS_CALL,
            9,
            Some(json!({"name": "todo_toggle", "arguments": {}})),
        ),
    )
    .await;
    assert_eq!(parsed["error"]["code"], -32602);
    assert!(parsed["error"]["message"]
        .as_str()
        .expect("msg")
        .contains("id"));
}

#[tokio::test]
async fn tools_call_unknown_tool_is_error_content_when_rejecting() {
    let parsed = call(
        &handler(),
        rpc(
            methods::TOOLS_CALL,
            10,
            Some(json!({"name": "todo_archive", "arguments": {}})),
        ),
    )
    .await;
    assert_eq!(parsed["result"]["isError"], true);
    assert_eq!(
        parsed["result"]["content"][0]["text"],
        "unknown tool: todo_archive"
    );
}

#[tokio::test]
async fn tools_call_unknown_tool_returns_ui_when_ignoring() {
    let h = make_handler(UiMode::Markup, UnknownToolPolicy::Ignore);
    let parsed = call(
        &h,
        rpc(
            methods::TOOLS_CALL,
            11,
            Some(json!({"name": "todo_archive"})),
        ),
    )
    .await;
    assert_eq!(parsed["result"]["isError"], false);
    assert_eq!(parsed["result"]["content"][0]["type"], "resource");
}

#[tokio::test]
async fn resources_list_has_data_and_ui() {
    let parsed = call(&handler(), rpc(methods::RESOURCES_LIST, 12, None)).await;
    let uris: Vec<&str> = parsed["result"]["resources"]
        .as_array()
        .expect("resources")
        .iter()
        .map(|r| r["uri"].as_str().expect("uri"))
        .collect();
    assert_eq!(uris, ["mcp://todo_list", "ui://todo/list"]);
}

#[tokio::test]
async fn resources_read_todo_list_is_json_array() {
    let parsed = call(
        &handler(),
        rpc(
            methods::RESOURCES_READ,
            13,
            Some(json!({"uri": "mcp://todo_list"})),
        ),
    )
    .await;
    let contents = &parsed["result"]["contents"][0];
    assert_eq!(contents["mimeType"], "application/json");
    let todos: Value = serde_json::from_str(contents["text"].as_str().expect("text")).expect("de");
    assert_eq!(
        todos,
        json!([
            {"id": "1", "text": "Learn TypeScript", "done": false},
            {"id": "2", "text": "Build MCP app", "done": false}
        ])
    );
}

#[tokio::test]
async fn resources_read_ui_matches_builder() {
    let parsed = call(
        &handler(),
        rpc(
            methods::RESOURCES_READ,
            14,
            Some(json!({"uri": "ui://todo/list"})),
        ),
    )
    .await;
    let contents = &parsed["result"]["contents"][0];
    assert_eq!(contents["uri"], "ui://todo/list");
    assert!(contents["text"]
        .as_str()
        .expect("text")
        .starts_with("<!DOCTYPE html>"));
}

#[tokio::test]
async fn resources_read_unknown_uri_is_invalid_params() {
    let parsed = call(
        &handler(),
        rpc(
            methods::RESOURCES_READ,
            15,
            Some(json!({"uri": "ui://elsewhere"})),
        ),
    )
    .await;
    assert_eq!(parsed["error"]["code"], -32602);
}

#[tokio::test]
async fn unknown_method_returns_method_not_found() {
    let parsed = call(&handler(), rpc("prompts/list", 16, None)).await;
    assert_eq!(parsed["error"]["code"], -32601);
    assert_eq!(parsed["error"]["message"], "unknown method: prompts/list");
}

#[test]
fn handle_notification_does_not_panic() {
    let notif = JsonRpcNotification {
        jsonrpc: "2.0".into(),
        method: "notifications/initialized".into(),
        params: None,
    };
    handler().handle_notification(&notif);
}
