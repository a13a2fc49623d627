//! Unified error classification for the todo domain.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification of domain errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Invalid input data (empty text, malformed params).
    InvalidInput,
    /// The requested tool is not recognised.
    UnknownTool,
    /// Channel or network failure.
    Transport,
    /// Internal error.
    Internal,
}

/// Domain-level error with structured context.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TodoError {
    /// The kind of error.
    pub kind: ErrorKind,
    /// Human-readable error message.
    pub message: String,
    /// Optional additional context.
    pub context: Option<String>,
}

impl TodoError {
    /// Creates a new `TodoError`.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            context: None,
        }
    }

    /// Adds context to the error.
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// Creates an invalid-input error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidInput, message)
    }

    /// Creates an unknown-tool error.
    pub fn unknown_tool(name: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownTool, format!("unknown tool: {}", name.into()))
    }
}

impl fmt::Display for TodoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:?}] {}", self.kind, self.message)?;
        if let Some(ctx) = &self.context {
            write!(f, " ({})", ctx)?;
        }
        Ok(())
    }
}

impl std::error::Error for TodoError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_without_context() {
        let err = TodoError::new(ErrorKind::Transport, "stdin closed");
        assert_eq!(err.to_string(), "[Transport] stdin closed");
    }

    #[test]
    fn error_display_with_context() {
        let err = TodoError::invalid_input("bad port").with_context("http transport");
        assert_eq!(err.to_string(), "[InvalidInput] bad port (http transport)");
    }

    #[test]
    fn error_serialization_roundtrip() {
        let err = TodoError::unknown_tool("todo_archive");
        let json = serde_json::to_string(&err).expect("serialize");
        assert!(json.contains("unknown_tool"));
        let back: TodoError = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back.kind, ErrorKind::UnknownTool);
        assert!(back.message.contains("todo_archive"));
    }

    #[test]
    fn invalid_input_constructor() {
        let err = TodoError::invalid_input("bad data");
        assert_eq!(err.kind, ErrorKind::InvalidInput);
    }
}
