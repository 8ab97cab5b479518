//! Core configuration types

use serde::{Deserialize, Serialize};

use super::{DisplayConfig, Writer};

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Log level filter (e.g., "info", "debug,tessera_set=trace")
    pub level: String,

    /// Output format
    pub format: Format,

    /// Output destination
    pub writer: Writer,

    /// Display configuration
    pub display: DisplayConfig,

    /// Service name recorded on a root span for the guard's lifetime
    pub service: Option<String>,
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// Human-readable with colors and indentation
    Pretty,
    /// Compact single-line output
    Compact,
    /// Structured JSON output
    Json,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: Format::Compact,
            writer: Writer::Stderr,
            display: DisplayConfig::default(),
            service: None,
        }
    }
}
