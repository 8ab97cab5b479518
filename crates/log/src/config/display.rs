//! Writer and display configuration

use serde::{Deserialize, Serialize};
use tracing_subscriber::fmt::TestWriter;
use tracing_subscriber::fmt::writer::BoxMakeWriter;

/// Output destination
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Writer {
    /// Write to stderr
    #[default]
    Stderr,
    /// Write to stdout
    Stdout,
    /// Write through the test harness so output is captured per test
    Test,
}

impl Writer {
    pub(crate) fn make_writer(self) -> BoxMakeWriter {
        match self {
            Self::Stderr => BoxMakeWriter::new(std::io::stderr),
            Self::Stdout => BoxMakeWriter::new(std::io::stdout),
            Self::Test => BoxMakeWriter::new(TestWriter::new()),
        }
    }
}

/// Display configuration
///
/// Independent toggles that map directly onto config files and env vars.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Show timestamps
    pub time: bool,
    /// Show source location (`file:line`)
    pub source: bool,
    /// Show target module
    pub target: bool,
    /// Show thread IDs
    pub thread_ids: bool,
    /// Use ANSI colors
    pub colors: bool,
    /// Show span list in JSON
    pub span_list: bool,
    /// Flatten JSON events
    pub flatten: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            time: true,
            source: cfg!(debug_assertions),
            target: true,
            thread_ids: false,
            colors: std::io::IsTerminal::is_terminal(&std::io::stderr()),
            span_list: true,
            flatten: true,
        }
    }
}

impl DisplayConfig {
    /// Parse display configuration from environment variables
    pub(super) fn parse_env(&mut self) {
        if let Some(v) = env_flag("TESSERA_LOG_TIME") {
            self.time = v;
        }
        if let Some(v) = env_flag("TESSERA_LOG_SOURCE") {
            self.source = v;
        }
        if let Some(v) = env_flag("TESSERA_LOG_COLORS") {
            self.colors = v;
        }
    }
}

fn env_flag(name: &str) -> Option<bool> {
    std::env::var(name).ok().map(|v| v != "0" && v != "false")
}
