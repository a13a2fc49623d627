//! JSON-RPC 2.0 types for MCP transport.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Value of the `jsonrpc` member of every message.
pub const JSONRPC_VERSION: &str = "2.0";

/// JSON-RPC 2.0 request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcRequest {
    /// Protocol version, always "2.0".
    pub jsonrpc: String,
    /// Request ID.
    pub id: RequestId,
    /// Method name.
    pub method: String,
    /// Optional parameters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<Value>,
}

/// JSON-RPC 2.0 success response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcResponse {
    /// Protocol version, always "2.0".
    pub jsonrpc: String,
    /// Request ID (matches the request).
    pub id: RequestId,
    /// Result value.
    pub result: Value,
}

/// JSON-RPC 2.0 error response.
///
/// `id` is `None` (serialized as `null`) when the request could not be
/// parsed far enough to recover it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcErrorResponse {
    /// Protocol version, always "2.0".
    pub jsonrpc: String,
    /// Request ID (matches the request), if known.
    pub id: Option<RequestId>,
    /// Error details.
    pub error: JsonRpcError,
}

/// JSON-RPC 2.0 error object.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcError {
    /// Error code.
    pub code: i32,
    /// Human-readable message.
    pub message: String,
    /// Optional structured data.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

/// Request ID can be a number or string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RequestId {
    /// Numeric ID.
    Number(i64),
    /// String ID.
    String(String),
}

/// JSON-RPC 2.0 notification (no id).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcNotification {
    /// Protocol version, always "2.0".
    pub jsonrpc: String,
    /// Method name.
    pub method: String,
    /// Optional parameters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<Value>,
}

/// Standard JSON-RPC error codes.
pub mod error_codes {
    /// Invalid JSON was received.
    pub const PARSE_ERROR: i32 = -32700;
    /// The JSON sent is not a valid Request object.
    pub const INVALID_REQUEST: i32 = -32600;
    /// The method does not exist.
    pub const METHOD_NOT_FOUND: i32 = -32601;
    /// Invalid method parameter(s).
    pub const INVALID_PARAMS: i32 = -32602;
    /// Internal JSON-RPC error.
    pub const INTERNAL_ERROR: i32 = -32603;
}

impl JsonRpcRequest {
    /// Creates a new JSON-RPC 2.0 request.
    pub fn new(id: RequestId, method: impl Into<String>, params: Option<Value>) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            id,
            method: method.into(),
            params,
        }
    }
}

impl JsonRpcResponse {
    /// Creates a success response.
    pub fn success(id: RequestId, result: Value) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            id,
            result,
        }
    }
}

impl JsonRpcErrorResponse {
    /// Creates an error response for a known request.
    pub fn error(id: RequestId, code: i32, message: impl Into<String>) -> Self {
        Self::with_optional_id(Some(id), code, message)
    }

    /// Creates an error response for a message whose id is unknown.
    pub fn without_id(code: i32, message: impl Into<String>) -> Self {
        Self::with_optional_id(None, code, message)
    }

    fn with_optional_id(id: Option<RequestId>, code: i32, message: impl Into<String>) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            id,
            error: JsonRpcError {
                code,
                message: message.into(),
                data: None,
            },
        }
    }
}

/// The result of dispatching a request: success or error.
#[derive(Debug, Clone)]
pub enum JsonRpcOutput {
    /// Successful response.
    Success(JsonRpcResponse),
    /// Error response.
    Error(JsonRpcErrorResponse),
}

impl JsonRpcOutput {
    /// Serializes the output to a JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        match self {
            Self::Success(r) => serde_json::to_string(r),
            Self::Error(e) => serde_json::to_string(e),
        }
    }

    /// Serializes `result` into a success response, or an internal error
    /// response if serialization fails.
    pub fn from_result<T: Serialize>(id: RequestId, result: &T) -> Self {
        match serde_json::to_value(result) {
            Ok(v) => Self::Success(JsonRpcResponse::success(id, v)),
            Err(e) => Self::Error(JsonRpcErrorResponse::error(
                id,
                error_codes::INTERNAL_ERROR,
                e.to_string(),
            )),
        }
    }

    /// Shorthand for an error output.
    pub fn error(id: RequestId, code: i32, message: impl Into<String>) -> Self {
        Self::Error(JsonRpcErrorResponse::error(id, code, message))
    }
}

/// A classified incoming JSON-RPC message.
#[derive(Debug, Clone)]
pub enum IncomingMessage {
    /// Has an `id`; a response is required.
    Request(JsonRpcRequest),
    /// Has no `id` (or a null one); must not be answered.
    Notification(JsonRpcNotification),
}

/// Why an incoming message could not be classified.
#[derive(Debug, thiserror::Error)]
pub enum MessageError {
    /// Not valid JSON.
    #[error("parse error: {0}")]
    Parse(String),
    /// Valid JSON, but not a JSON-RPC request or notification.
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

impl MessageError {
    /// The JSON-RPC error code for this failure.
    pub fn code(&self) -> i32 {
        match self {
            Self::Parse(_) => error_codes::PARSE_ERROR,
            Self::InvalidRequest(_) => error_codes::INVALID_REQUEST,
        }
    }

    /// An error response (with `id: null`) describing this failure.
    pub fn to_response(&self) -> JsonRpcErrorResponse {
        JsonRpcErrorResponse::without_id(self.code(), self.to_string())
    }
}

impl IncomingMessage {
    /// Parses one message, deciding between request and notification by
    /// the presence of a non-null `id`.
    ///
    /// `jsonrpc` must be exactly `"2.0"`.
    pub fn parse(raw: &str) -> Result<Self, MessageError> {
        let value: Value =
            serde_json::from_str(raw).map_err(|e| MessageError::Parse(e.to_string()))?;

        match value.get("jsonrpc") {
            Some(Value::String(v)) if v == JSONRPC_VERSION => {}
            Some(other) => {
                return Err(MessageError::InvalidRequest(format!(
                    "unsupported jsonrpc version {other}"
                )));
            }
            None => {
                return Err(MessageError::InvalidRequest(
                    "missing jsonrpc version".to_string(),
                ));
            }
        }

        let has_id = value.get("id").is_some_and(|v| !v.is_null());
        if has_id {
            serde_json::from_value(value)
                .map(Self::Request)
                .map_err(|e| MessageError::InvalidRequest(e.to_string()))
        } else {
            serde_json::from_value(value)
                .map(Self::Notification)
                .map_err(|e| MessageError::InvalidRequest(e.to_string()))
        }
    }
}
