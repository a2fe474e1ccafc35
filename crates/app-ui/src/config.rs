//! Router configuration
//!
//! Every field has a default, so an empty JSON object is a valid config.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Reading the config file failed
    #[error("Config I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The config is not valid JSON for [`RouterConfig`]
    #[error("Config parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Result type for configuration loading
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Router configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouterConfig {
    /// Whether transitions are animated when the caller doesn't say
    #[serde(default = "default_true")]
    pub animated: bool,

    /// Log operations skipped for lack of a navigation context
    #[serde(default = "default_true")]
    pub log_skipped: bool,
}

fn default_true() -> bool {
    true
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            animated: true,
            log_skipped: true,
        }
    }
}

impl RouterConfig {
    /// Parse a config from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a config from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;
        let config = Self::from_json(&contents)?;
        tracing::info!("Loaded router config from {}", path.display());
        Ok(config)
    }

    /// Set the default animation flag
    pub fn animated(mut self, animated: bool) -> Self {
        self.animated = animated;
        self
    }

    /// Enable or disable logging of skipped operations
    pub fn log_skipped(mut self, enabled: bool) -> Self {
        self.log_skipped = enabled;
        self
    }
}
