//! The tool dispatcher: tool name + params → store mutation → UI resource.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

use todo_protocol::mcp::McpToolDefinition;
use todo_protocol::schema::{build_input_schema, validate_required_fields};
use todo_store::{StoreError, TodoRepository};
use todo_types::{ErrorKind, MutationOutcome, Todo, TodoError, TodoId, TodoTool};
use todo_ui::{UiBuilder, UiResource};

/// URI of the raw todo list resource (JSON array of todos).
pub const TODO_LIST_URI: &str = "mcp://todo_list";

/// What to do when asked to run a tool that does not exist.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnknownToolPolicy {
    /// Fail the call with [`DispatchError::UnknownTool`].
    #[default]
    Reject,
    /// Log it and return the unchanged UI.
    Ignore,
}

impl FromStr for UnknownToolPolicy {
    type Err = TodoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "reject" => Ok(Self::Reject),
            "ignore" => Ok(Self::Ignore),
            other => Err(TodoError::invalid_input(format!(
                "unknown tool policy '{other}' (expected 'reject' or 'ignore')"
            ))),
        }
    }
}

impl fmt::Display for UnknownToolPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Reject => f.write_str("reject"),
            Self::Ignore => f.write_str("ignore"),
        }
    }
}

/// Failures surfaced to the transport.
///
/// Domain no-ops (unknown id, empty text) are not errors.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// The tool name is not recognised and the policy is `Reject`.
    #[error("unknown tool: {0}")]
    UnknownTool(String),
    /// The params are not an object of the expected shape.
    #[error("invalid params for {tool}: {message}")]
    InvalidParams { tool: TodoTool, message: String },
    /// The store could not be accessed.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl From<DispatchError> for TodoError {
    fn from(e: DispatchError) -> Self {
        let kind = match &e {
            DispatchError::UnknownTool(_) => ErrorKind::UnknownTool,
            DispatchError::InvalidParams { .. } => ErrorKind::InvalidInput,
            DispatchError::Store(_) => ErrorKind::Internal,
        };
        TodoError::new(kind, e.to_string())
    }
}

#[derive(Debug, Deserialize)]
struct CreateParams {
    text: String,
}

#[derive(Debug, Deserialize)]
struct IdParams {
    id: TodoId,
}

#[derive(Debug, Deserialize)]
struct EditParams {
    id: TodoId,
    text: String,
}

/// Shared dispatch core used by the stdio and HTTP transports.
pub struct TodoDispatcher {
    repository: Arc<dyn TodoRepository>,
    builder: UiBuilder,
    unknown_tool: UnknownToolPolicy,
}

impl TodoDispatcher {
    /// Creates a dispatcher over the given store.
    pub fn new(
        repository: Arc<dyn TodoRepository>,
        builder: UiBuilder,
        unknown_tool: UnknownToolPolicy,
    ) -> Self {
        Self {
            repository,
            builder,
            unknown_tool,
        }
    }

    /// The configured unknown-tool policy.
    pub fn unknown_tool_policy(&self) -> UnknownToolPolicy {
        self.unknown_tool
    }

    /// Runs `tool_name` with `params` and returns the UI for the
    /// resulting list.
    ///
    /// `params` may be `null`, which is treated as `{}`.
    pub async fn dispatch(
        &self,
        tool_name: &str,
        params: &Value,
    ) -> Result<UiResource, DispatchError> {
        let tool = match tool_name.parse::<TodoTool>() {
            Ok(tool) => tool,
            Err(_) => match self.unknown_tool {
                UnknownToolPolicy::Reject => {
                    return Err(DispatchError::UnknownTool(tool_name.to_string()));
                }
                UnknownToolPolicy::Ignore => {
                    warn!(tool = tool_name, "ignoring unknown tool");
                    return self.read_resource().await;
                }
            },
        };

        debug!(%tool, "dispatching tool");
        let outcome = self.apply(tool, params).await?;
        if !outcome.is_applied() {
            debug!(%tool, ?outcome, "tool had no effect");
        }
        self.read_resource().await
    }

    /// Builds the UI for the current list without changing it.
    pub async fn read_resource(&self) -> Result<UiResource, DispatchError> {
        let todos = self.repository.list().await?;
        Ok(self.builder.build(&todos))
    }

    /// Returns the current list.
    pub async fn list_todos(&self) -> Result<Vec<Todo>, DispatchError> {
        Ok(self.repository.list().await?)
    }

    /// Definitions of every tool, for `tools/list`.
    pub fn tool_definitions(&self) -> Vec<McpToolDefinition> {
        TodoTool::ALL
            .into_iter()
            .map(|tool| McpToolDefinition {
                name: tool.name().to_string(),
                description: Some(tool.description().to_string()),
                input_schema: build_input_schema(&tool.arguments()),
            })
            .collect()
    }

    async fn apply(&self, tool: TodoTool, params: &Value) -> Result<MutationOutcome, DispatchError> {
        let repo = &self.repository;
        let outcome = match tool {
            TodoTool::List => MutationOutcome::Applied,
            TodoTool::Create => {
                let p: CreateParams = parse_params(tool, params)?;
                match repo.create(&p.text).await? {
                    Some(_) => MutationOutcome::Applied,
                    None => MutationOutcome::Rejected,
                }
            }
            TodoTool::Toggle => {
                let p: IdParams = parse_params(tool, params)?;
                repo.toggle(&p.id).await?
            }
            TodoTool::Delete => {
                let p: IdParams = parse_params(tool, params)?;
                repo.delete(&p.id).await?
            }
            TodoTool::Edit => {
                let p: EditParams = parse_params(tool, params)?;
                repo.edit(&p.id, &p.text).await?
            }
        };
        Ok(outcome)
    }
}

/// Checks required fields against the tool schema, then deserializes.
fn parse_params<T: DeserializeOwned>(tool: TodoTool, params: &Value) -> Result<T, DispatchError> {
    let params = match params {
        Value::Null => Value::Object(Default::default()),
        other => other.clone(),
    };

    let invalid = |message: String| DispatchError::InvalidParams { tool, message };

    let schema = build_input_schema(&tool.arguments());
    validate_required_fields(&schema, &params).map_err(|e| invalid(e.to_string()))?;
    serde_json::from_value(params).map_err(|e| invalid(e.to_string()))
}
