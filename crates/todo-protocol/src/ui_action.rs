//! Messages posted by the host UI renderer.
//!
//! When the user interacts with a rendered todo list, the UI posts
//! `{ "type": "tool", "payload": { "toolName": ..., "params": {...} } }`
//! to the host, which forwards it to a transport as a tool invocation.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A message from the rendered UI to its host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "lowercase")]
pub enum HostMessage {
    /// Invoke a tool.
    Tool(ToolCallPayload),
}

/// Payload of a `tool` host message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolCallPayload {
    /// Name of the tool to invoke.
    #[serde(rename = "toolName")]
    pub tool_name: String,
    /// Parameters, passed through unchanged.
    #[serde(default)]
    pub params: Map<String, Value>,
}

impl HostMessage {
    /// Builds a tool message.
    pub fn tool(tool_name: impl Into<String>, params: Map<String, Value>) -> Self {
        Self::Tool(ToolCallPayload {
            tool_name: tool_name.into(),
            params,
        })
    }
}
