//! Terminal front-end configuration
//!
//! A small JSON document. Every field is optional; unknown fields are
//! rejected so typos surface instead of being silently ignored.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default window title
pub const DEFAULT_TITLE: &str = " calcpad ";

/// Default tracing filter directive
pub const DEFAULT_LOG_FILTER: &str = "calcpad=info";

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read
    #[error("failed to read config {path}: {source}")]
    Io {
        /// Path that failed
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// The file is not a valid configuration document
    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Terminal front-end settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CalculatorConfig {
    /// Title drawn on the outer border
    pub title: String,
    /// Whether the clickable keypad is drawn
    pub show_keypad: bool,
    /// Whether the help panel is drawn at start-up
    pub show_help: bool,
    /// `EnvFilter` directive used when `RUST_LOG` is unset
    pub log_filter: String,
    /// Log file; logging is disabled when absent
    pub log_file: Option<PathBuf>,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            show_keypad: true,
            show_help: true,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            log_file: None,
        }
    }
}

impl CalculatorConfig {
    /// Parses a configuration document
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Loads a configuration file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Serializes the configuration as pretty JSON
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
