//! Tool identities and argument descriptors.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::TodoError;

/// The tools a host may invoke against the todo list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TodoTool {
    /// Read-only: returns the current UI description.
    #[serde(rename = "todo_list")]
    List,
    /// `todo_create{text}`
    #[serde(rename = "todo_create")]
    Create,
    /// `todo_toggle{id}`
    #[serde(rename = "todo_toggle")]
    Toggle,
    /// `todo_delete{id}`
    #[serde(rename = "todo_delete")]
    Delete,
    /// `todo_edit{id,text}`
    #[serde(rename = "todo_edit")]
    Edit,
}

impl TodoTool {
    /// All tools, in the order they are advertised.
    pub const ALL: [TodoTool; 5] = [
        TodoTool::List,
        TodoTool::Create,
        TodoTool::Toggle,
        TodoTool::Delete,
        TodoTool::Edit,
    ];

    /// Wire name of the tool.
    pub fn name(self) -> &'static str {
        match self {
            Self::List => "todo_list",
            Self::Create => "todo_create",
            Self::Toggle => "todo_toggle",
            Self::Delete => "todo_delete",
            Self::Edit => "todo_edit",
        }
    }

    /// Human-readable description advertised to hosts.
    pub fn description(self) -> &'static str {
        match self {
            Self::List => "Show the todo list",
            Self::Create => "Create a todo",
            Self::Toggle => "Toggle a todo's completion status",
            Self::Delete => "Delete a todo",
            Self::Edit => "Edit text of a todo",
        }
    }

    /// Arguments the tool accepts.
    pub fn arguments(self) -> Vec<ToolArgument> {
        let id = || ToolArgument::required("id", "string", "Id of the todo");
        let text = |d: &str| ToolArgument::required("text", "string", d);
        match self {
            Self::List => vec![],
            Self::Create => vec![text("Text of the new todo")],
            Self::Toggle | Self::Delete => vec![id()],
            Self::Edit => vec![id(), text("Replacement text")],
        }
    }

    /// Returns `true` if invoking the tool never changes the list.
    pub fn is_read_only(self) -> bool {
        matches!(self, Self::List)
    }
}

impl fmt::Display for TodoTool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TodoTool {
    type Err = TodoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.name() == s)
            .ok_or_else(|| TodoError::unknown_tool(s))
    }
}

/// MCP argument definition for a tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolArgument {
    /// Argument name.
    pub name: String,
    /// JSON Schema type (string, number, boolean, etc.).
    #[serde(rename = "type")]
    pub arg_type: String,
    /// Human-readable description.
    pub description: String,
    /// Whether this argument is required.
    #[serde(default)]
    pub required: bool,
}

impl ToolArgument {
    /// Creates a required argument.
    pub fn required(name: &str, arg_type: &str, description: &str) -> Self {
        Self {
            name: name.to_string(),
            arg_type: arg_type.to_string(),
            description: description.to_string(),
            required: true,
        }
    }
}
