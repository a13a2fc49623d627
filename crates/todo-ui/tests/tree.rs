//! Integration tests for tree-mode rendering.

use serde_json::{json, Value};

use todo_types::{seed_todos, Todo};
use todo_ui::{UiAction, UiBuilder, UiMode, UiNode, UiOptions};

fn tree_json(todos: &[Todo]) -> Value {
    let res = UiBuilder::new(UiMode::Tree, UiOptions::default()).build(todos);
    serde_json::to_value(res.tree().expect("tree resource")).expect("ser")
}

#[test]
fn root_is_column_with_form_then_rows() {
    let tree = tree_json(&seed_todos());
    assert_eq!(tree["type"], "container");
    assert_eq!(tree["style"]["flexDirection"], "column");

    let items = tree["items"].as_array().expect("items");
    assert_eq!(items.len(), 3);
    assert_eq!(items[1]["id"], "todo-1");
    assert_eq!(items[2]["id"], "todo-2");
}

#[test]
fn add_button_reads_text_from_new_todo_input() {
    let tree = tree_json(&[]);
    let form = &tree["items"][0];
    assert_eq!(form["items"][0]["type"], "input");
    assert_eq!(form["items"][0]["id"], "newTodo");
    assert_eq!(form["items"][0]["placeholder"], "New task");
    assert_eq!(
        form["items"][1]["onClick"],
        json!({"type": "tool", "toolName": "todo_create", "paramsFrom": {"text": "newTodo"}})
    );
}

#[test]
fn label_toggles_and_shows_completion() {
    let mut todos = seed_todos();
    todos[1].done = true;
    let tree = tree_json(&todos);

    let open_label = &tree["items"][1]["items"][0]["items"][0];
    assert_eq!(open_label["type"], "text");
    assert_eq!(open_label["text"], "Learn TypeScript");
    assert!(open_label["style"].get("textDecoration").is_none());
    assert_eq!(
        open_label["onClick"],
        json!({"type": "tool", "toolName": "todo_toggle", "params": {"id": "1"}})
    );

    let done_label = &tree["items"][2]["items"][0]["items"][0];
    assert_eq!(done_label["style"]["textDecoration"], "line-through");
    assert_eq!(done_label["style"]["color"], "#888");
}

#[test]
fn delete_button_targets_its_todo() {
    let tree = tree_json(&seed_todos());
    let delete = &tree["items"][2]["items"][0]["items"][2];
    assert_eq!(delete["text"], "Delete");
    assert_eq!(
        delete["onClick"],
        json!({"type": "tool", "toolName": "todo_delete", "params": {"id": "2"}})
    );
}

#[test]
fn edit_form_is_hidden_and_seeded_with_text() {
    let tree = tree_json(&seed_todos());
    let row = &tree["items"][1];

    let edit = &row["items"][0]["items"][1];
    assert_eq!(edit["onClick"], json!({"type": "reveal", "target": "edit-form-1"}));

    let form = &row["items"][1];
    assert_eq!(form["type"], "form");
    assert_eq!(form["id"], "edit-form-1");
    assert_eq!(form["hidden"], true);
    assert_eq!(form["items"][0]["id"], "edit-1");
    assert_eq!(form["items"][0]["value"], "Learn TypeScript");
    assert_eq!(
        form["onSubmit"],
        json!({
            "type": "tool",
            "toolName": "todo_edit",
            "params": {"id": "1"},
            "paramsFrom": {"text": "edit-1"}
        })
    );
    assert_eq!(form["onCancel"], json!({"type": "revert", "target": "edit-form-1"}));
    assert_eq!(form["items"][2]["onClick"], form["onCancel"]);
}

#[test]
fn tree_deserializes_back() {
    let res = UiBuilder::new(UiMode::Tree, UiOptions::default()).build(&seed_todos());
    let text = res.text().expect("text");
    let node: UiNode = serde_json::from_str(&text).expect("de");
    let UiNode::Container { items, .. } = node else {
        panic!("root must be a container");
    };
    let UiNode::Container { items: add_row, .. } = &items[0] else {
        panic!("first item must be the creation row");
    };
    match &add_row[1] {
        UiNode::Button { on_click: Some(action), .. } => {
            assert_eq!(action.tool_name(), Some("todo_create"));
        }
        other => panic!("expected add button, got {other:?}"),
    }
    assert!(matches!(
        UiAction::Revert { target: "x".into() }.tool_name(),
        None
    ));
}
