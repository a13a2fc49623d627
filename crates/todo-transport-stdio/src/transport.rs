//! Line framing over an async byte stream.
//!
//! Each JSON-RPC message is a single line terminated by `\n`.

use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncWrite, AsyncWriteExt, BufReader, Stdin, Stdout};
use tracing::trace;

use crate::error::TransportError;

/// One line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Frame {
    /// A UTF-8 line, trimmed.
    Text(String),
    /// A line that is not valid UTF-8, with the decoding error.
    NotUtf8(String),
}

/// Reads request lines and writes response lines.
///
/// Generic over reader/writer so tests can run on in-memory buffers.
pub struct StdioTransport<R, W> {
    reader: BufReader<R>,
    writer: W,
}

impl StdioTransport<Stdin, Stdout> {
    /// A transport over the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(tokio::io::stdin(), tokio::io::stdout())
    }
}

impl<R, W> StdioTransport<R, W>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    /// Creates a transport over the given reader and writer.
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader: BufReader::new(reader),
            writer,
        }
    }

    /// Reads the next line, without its terminator and surrounding
    /// whitespace.
    ///
    /// Returns `None` at end of input. Blank lines come back as an empty
    /// [`Frame::Text`]; bytes that are not UTF-8 as [`Frame::NotUtf8`].
    pub async fn read_line(&mut self) -> Result<Option<Frame>, TransportError> {
        let mut buf = Vec::new();
        let n = self
            .reader
            .read_until(b'\n', &mut buf)
            .await
            .map_err(TransportError::Read)?;
        if n == 0 {
            return Ok(None);
        }

        trace!(len = n, "read line");
        match String::from_utf8(buf) {
            Ok(line) => Ok(Some(Frame::Text(line.trim().to_string()))),
            Err(e) => Ok(Some(Frame::NotUtf8(e.utf8_error().to_string()))),
        }
    }

    /// Writes `message` followed by `\n` and flushes.
    pub async fn write_line(&mut self, message: &str) -> Result<(), TransportError> {
        trace!(len = message.len(), "write line");
        self.writer
            .write_all(message.as_bytes())
            .await
            .map_err(TransportError::Write)?;
        self.writer
            .write_all(b"\n")
            .await
            .map_err(TransportError::Write)?;
        self.writer.flush().await.map_err(TransportError::Write)
    }

    /// Consumes the transport, returning the writer.
    pub fn into_writer(self) -> W {
        self.writer
    }
}
