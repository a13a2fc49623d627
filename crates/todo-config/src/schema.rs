//! Configuration schema types.

use std::fmt;
use std::net::SocketAddr;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use todo_mcp::UnknownToolPolicy;
use todo_ui::{UiMode, UiOptions};

use crate::loader::ConfigError;

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TodoConfig {
    /// Transport and listen address.
    #[serde(default)]
    pub server: ServerConfig,
    /// UI rendering settings.
    #[serde(default)]
    pub ui: UiConfig,
    /// Tool dispatch settings.
    #[serde(default)]
    pub dispatch: DispatchConfig,
    /// Initial store contents.
    #[serde(default)]
    pub store: StoreConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Which transport `serve` runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransportKind {
    /// Line-delimited JSON-RPC on stdin/stdout.
    #[default]
    Stdio,
    /// HTTP on `host:port`.
    Http,
}

impl FromStr for TransportKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "stdio" => Ok(Self::Stdio),
            "http" => Ok(Self::Http),
            other => Err(format!(
                "unknown transport '{other}' (expected 'stdio' or 'http')"
            )),
        }
    }
}

impl fmt::Display for TransportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdio => f.write_str("stdio"),
            Self::Http => f.write_str("http"),
        }
    }
}

/// Server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    /// Transport to serve.
    #[serde(default)]
    pub transport: TransportKind,
    /// HTTP listen host.
    #[serde(default = "default_host")]
    pub host: String,
    /// HTTP listen port.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl ServerConfig {
    /// The HTTP listen address.
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let addr = format!("{}:{}", self.host, self.port);
        addr.parse().map_err(|e: std::net::AddrParseError| ConfigError::InvalidAddress {
            reason: e.to_string(),
            addr,
        })
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            transport: TransportKind::default(),
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}
fn default_port() -> u16 {
    4000
}

/// UI rendering configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UiConfig {
    /// Markup (HTML) or tree output.
    #[serde(default)]
    pub mode: UiMode,
    /// Preferred frame width hint.
    #[serde(default = "default_frame_width")]
    pub frame_width: String,
    /// Preferred frame height hint.
    #[serde(default = "default_frame_height")]
    pub frame_height: String,
}

impl UiConfig {
    /// Builder options for these settings.
    pub fn options(&self) -> UiOptions {
        UiOptions {
            frame_width: self.frame_width.clone(),
            frame_height: self.frame_height.clone(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            mode: UiMode::default(),
            frame_width: default_frame_width(),
            frame_height: default_frame_height(),
        }
    }
}

fn default_frame_width() -> String {
    "500px".to_string()
}
fn default_frame_height() -> String {
    "600px".to_string()
}

/// Tool dispatch configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DispatchConfig {
    /// What to do with calls to unknown tools.
    #[serde(default)]
    pub unknown_tool: UnknownToolPolicy,
}

/// Store configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StoreConfig {
    /// Start with the two example todos.
    #[serde(default = "default_seed")]
    pub seed: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            seed: default_seed(),
        }
    }
}

fn default_seed() -> bool {
    true
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// Log level filter (e.g. "info", "debug", "todo_mcp=trace").
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}
