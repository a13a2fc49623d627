//! Transport-layer error types.

use thiserror::Error;
use todo_types::{ErrorKind, TodoError};

/// Errors from the stdio transport layer.
///
/// Malformed messages are answered in-band and never surface here.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Failed to read from the input stream.
    #[error("read error: {0}")]
    Read(#[source] std::io::Error),
    /// Failed to write to the output stream.
    #[error("write error: {0}")]
    Write(#[source] std::io::Error),
    /// A response could not be serialized.
    #[error("encode error: {0}")]
    Encode(#[from] serde_json::Error),
}

impl From<TransportError> for TodoError {
    fn from(e: TransportError) -> Self {
        let kind = match &e {
            TransportError::Read(_) | TransportError::Write(_) => ErrorKind::Transport,
            TransportError::Encode(_) => ErrorKind::Internal,
        };
        TodoError::new(kind, e.to_string())
    }
}
