//! MCP initialize method types.
//!
//! The initialize handshake is the first message exchanged between
//! client and server to negotiate capabilities and protocol version.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Client capabilities declared during initialization.
///
/// Kept opaque: the server behaves the same whatever the client offers.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClientCapabilities(pub Value);

/// Marker for an advertised capability with no options.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EmptyCapability {}

/// Server capabilities returned during initialization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServerCapabilities {
    /// Tools capability (present if server exposes tools).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tools: Option<EmptyCapability>,
    /// Resources capability (present if server exposes resources).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resources: Option<EmptyCapability>,
}

/// Name and version of a peer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Implementation {
    /// Peer name.
    pub name: String,
    /// Peer version.
    pub version: String,
}

/// Request params for `initialize`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InitializeParams {
    /// Protocol version requested by client.
    #[serde(rename = "protocolVersion")]
    pub protocol_version: String,
    /// Client capabilities.
    #[serde(default)]
    pub capabilities: ClientCapabilities,
    /// Client info.
    #[serde(rename = "clientInfo")]
    pub client_info: Implementation,
}

/// Response for `initialize`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InitializeResult {
    /// Protocol version agreed by server.
    #[serde(rename = "protocolVersion")]
    pub protocol_version: String,
    /// Server capabilities.
    pub capabilities: ServerCapabilities,
    /// Server info.
    #[serde(rename = "serverInfo")]
    pub server_info: Implementation,
}

/// MCP protocol version supported by this implementation.
pub const PROTOCOL_VERSION: &str = "2024-11-05";
