//! Configuration loader (defaults + file + env).

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use thiserror::Error;

use crate::schema::TodoConfig;

/// Prefix of environment overrides, e.g. `TODO_SERVER__PORT=8080`.
pub const ENV_PREFIX: &str = "TODO_";

/// Top-level sections read from the environment. Other `TODO_*`
/// variables are left alone.
const ENV_SECTIONS: [&str; 5] = ["server", "ui", "dispatch", "store", "logging"];

/// Errors from configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to load or merge configuration.
    #[error("configuration error: {0}")]
    Load(String),
    /// `server.host` and `server.port` do not form a socket address.
    #[error("invalid listen address '{addr}': {reason}")]
    InvalidAddress {
        /// The `host:port` string.
        addr: String,
        /// Why it did not parse.
        reason: String,
    },
}

/// Loads configuration by merging layers:
/// 1. Default values
/// 2. Config file (if given)
/// 3. Environment variables (`TODO_<SECTION>__<KEY>`)
pub fn load_config(config_path: Option<&str>) -> Result<TodoConfig, ConfigError> {
    let mut figment = Figment::from(Serialized::defaults(TodoConfig::default()));

    if let Some(path) = config_path {
        figment = figment.merge(Toml::file(path));
    }

    figment
        .merge(
            Env::prefixed(ENV_PREFIX)
                .filter(|key| {
                    let key = key.as_str().to_ascii_lowercase();
                    ENV_SECTIONS
                        .iter()
                        .any(|section| key.starts_with(&format!("{section}__")))
                })
                .split("__"),
        )
        .extract()
        .map_err(|e| ConfigError::Load(e.to_string()))
}
