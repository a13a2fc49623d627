//! Declarative UI tree for hosts that render typed nodes.
//!
//! Interactive nodes carry a [`UiAction`]; `tool` actions name the tool
//! to invoke with static `params` and/or `paramsFrom`, which maps a
//! parameter name to the id of an input whose value is read when the
//! action fires. A `paramsFrom` input that is blank aborts the action.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use todo_types::{Todo, TodoTool};

/// Id of the input used to type a new todo.
pub const NEW_TODO_INPUT_ID: &str = "newTodo";

/// CSS-like style properties, serialized as a flat JSON object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Style(Map<String, Value>);

impl Style {
    /// Creates an empty style.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a property, returning the style for chaining.
    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.0.insert(key.to_string(), value.into());
        self
    }

    /// Looks up a property.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Returns `true` if no properties are set.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// What a host does when a node is activated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum UiAction {
    /// Invoke a tool on the server.
    Tool {
        #[serde(rename = "toolName")]
        tool_name: String,
        #[serde(default, skip_serializing_if = "Map::is_empty")]
        params: Map<String, Value>,
        #[serde(
            rename = "paramsFrom",
            default,
            skip_serializing_if = "BTreeMap::is_empty"
        )]
        params_from: BTreeMap<String, String>,
    },
    /// Client-side: show the hidden node with this id.
    Reveal { target: String },
    /// Client-side: reset the inputs of this node to their initial values
    /// and hide it again. No tool is invoked.
    Revert { target: String },
}

impl UiAction {
    /// A tool action with static params only.
    pub fn tool(tool: TodoTool, params: Map<String, Value>) -> Self {
        Self::Tool {
            tool_name: tool.name().to_string(),
            params,
            params_from: BTreeMap::new(),
        }
    }

    /// Adds a parameter read from an input at activation time.
    pub fn param_from(mut self, param: &str, input_id: &str) -> Self {
        if let Self::Tool { params_from, .. } = &mut self {
            params_from.insert(param.to_string(), input_id.to_string());
        }
        self
    }

    /// The tool this action invokes, if any.
    pub fn tool_name(&self) -> Option<&str> {
        match self {
            Self::Tool { tool_name, .. } => Some(tool_name),
            _ => None,
        }
    }
}

/// A node of the declarative UI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum UiNode {
    /// Groups child nodes.
    Container {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        id: Option<String>,
        #[serde(default, skip_serializing_if = "Style::is_empty")]
        style: Style,
        items: Vec<UiNode>,
    },
    /// Single-line text input.
    Input {
        id: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        placeholder: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        value: Option<String>,
        #[serde(default, skip_serializing_if = "Style::is_empty")]
        style: Style,
    },
    /// Clickable button.
    Button {
        text: String,
        #[serde(default, skip_serializing_if = "Style::is_empty")]
        style: Style,
        #[serde(rename = "onClick", default, skip_serializing_if = "Option::is_none")]
        on_click: Option<UiAction>,
    },
    /// Plain text, optionally clickable.
    Text {
        text: String,
        #[serde(default, skip_serializing_if = "Style::is_empty")]
        style: Style,
        #[serde(rename = "onClick", default, skip_serializing_if = "Option::is_none")]
        on_click: Option<UiAction>,
    },
    /// Inputs submitted together: Enter fires `onSubmit`, Escape `onCancel`.
    Form {
        id: String,
        #[serde(default)]
        hidden: bool,
        #[serde(default, skip_serializing_if = "Style::is_empty")]
        style: Style,
        items: Vec<UiNode>,
        #[serde(rename = "onSubmit")]
        on_submit: UiAction,
        #[serde(rename = "onCancel", default, skip_serializing_if = "Option::is_none")]
        on_cancel: Option<UiAction>,
    },
}

impl UiNode {
    /// Child nodes, empty for leaves.
    pub fn children(&self) -> &[UiNode] {
        match self {
            Self::Container { items, .. } | Self::Form { items, .. } => items,
            _ => &[],
        }
    }
}

/// Id of the row container for a todo.
pub fn row_id(todo: &Todo) -> String {
    format!("todo-{}", todo.id)
}

/// Id of the hidden edit form for a todo.
pub fn edit_form_id(todo: &Todo) -> String {
    format!("edit-form-{}", todo.id)
}

/// Id of the text input inside the edit form.
pub fn edit_input_id(todo: &Todo) -> String {
    format!("edit-{}", todo.id)
}

fn button_style() -> Style {
    Style::new()
        .with("padding", "6px 10px")
        .with("border", "1px solid #ccc")
        .with("borderRadius", 4)
        .with("cursor", "pointer")
}

fn input_style() -> Style {
    Style::new()
        .with("flex", 1)
        .with("padding", "6px 8px")
        .with("border", "1px solid #ccc")
        .with("borderRadius", 4)
}

fn flex_row() -> Style {
    Style::new()
        .with("display", "flex")
        .with("gap", 10)
        .with("alignItems", "center")
}

fn id_params(todo: &Todo) -> Map<String, Value> {
    let mut params = Map::new();
    params.insert("id".to_string(), Value::String(todo.id.to_string()));
    params
}

fn button(text: &str, on_click: UiAction) -> UiNode {
    UiNode::Button {
        text: text.to_string(),
        style: button_style(),
        on_click: Some(on_click),
    }
}

/// Builds the whole tree: creation form followed by one row per todo.
pub fn build_tree(todos: &[Todo]) -> UiNode {
    let create_form = UiNode::Container {
        id: None,
        style: flex_row(),
        items: vec![
            UiNode::Input {
                id: NEW_TODO_INPUT_ID.to_string(),
                placeholder: Some("New task".to_string()),
                value: None,
                style: input_style(),
            },
            button(
                "Add",
                UiAction::tool(TodoTool::Create, Map::new()).param_from("text", NEW_TODO_INPUT_ID),
            ),
        ],
    };

    let mut items = Vec::with_capacity(todos.len() + 1);
    items.push(create_form);
    items.extend(todos.iter().map(todo_row));

    UiNode::Container {
        id: None,
        style: Style::new()
            .with("display", "flex")
            .with("flexDirection", "column")
            .with("gap", 10),
        items,
    }
}

fn todo_row(todo: &Todo) -> UiNode {
    let label_style = if todo.done {
        Style::new()
            .with("flex", 1)
            .with("cursor", "pointer")
            .with("textDecoration", "line-through")
            .with("color", "#888")
    } else {
        Style::new().with("flex", 1).with("cursor", "pointer")
    };

    let form_id = edit_form_id(todo);
    let input_id = edit_input_id(todo);
    let save = UiAction::tool(TodoTool::Edit, id_params(todo)).param_from("text", &input_id);
    let revert = UiAction::Revert {
        target: form_id.clone(),
    };

    let display = UiNode::Container {
        id: None,
        style: flex_row(),
        items: vec![
            UiNode::Text {
                text: todo.text.clone(),
                style: label_style,
                on_click: Some(UiAction::tool(TodoTool::Toggle, id_params(todo))),
            },
            button(
                "Edit",
                UiAction::Reveal {
                    target: form_id.clone(),
                },
            ),
            button("Delete", UiAction::tool(TodoTool::Delete, id_params(todo))),
        ],
    };

    let edit_form = UiNode::Form {
        id: form_id,
        hidden: true,
        style: flex_row(),
        items: vec![
            UiNode::Input {
                id: input_id,
                placeholder: None,
                value: Some(todo.text.clone()),
                style: input_style(),
            },
            button("Save", save.clone()),
            button("Cancel", revert.clone()),
        ],
        on_submit: save,
        on_cancel: Some(revert),
    };

    UiNode::Container {
        id: Some(row_id(todo)),
        style: Style::new().with("display", "flex").with("flexDirection", "column").with("gap", 4),
        items: vec![display, edit_form],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use todo_types::seed_todos;

    #[test]
    fn style_skipped_when_empty() {
        let node = UiNode::Text {
            text: "x".into(),
            style: Style::new(),
            on_click: None,
        };
        let json = serde_json::to_value(&node).expect("ser");
        assert_eq!(json, serde_json::json!({"type": "text", "text": "x"}));
    }

    #[test]
    fn tool_action_wire_shape() {
        let action = UiAction::tool(TodoTool::Create, Map::new()).param_from("text", "newTodo");
        let json = serde_json::to_value(&action).expect("ser");
        assert_eq!(
            json,
            serde_json::json!({
                "type": "tool",
                "toolName": "todo_create",
                "paramsFrom": {"text": "newTodo"}
            })
        );
    }

    #[test]
    fn param_from_ignored_for_client_actions() {
        let action = UiAction::Reveal { target: "f".into() }.param_from("text", "x");
        assert_eq!(action, UiAction::Reveal { target: "f".into() });
    }

    #[test]
    fn empty_list_has_only_create_form() {
        let root = build_tree(&[]);
        assert_eq!(root.children().len(), 1);
    }

    #[test]
    fn row_ids_follow_todo_ids() {
        let todos = seed_todos();
        assert_eq!(row_id(&todos[0]), "todo-1");
        assert_eq!(edit_form_id(&todos[1]), "edit-form-2");
        assert_eq!(edit_input_id(&todos[1]), "edit-2");
    }
}
