//! # tessera-log
//!
//! Subscriber setup for tessera crates and the hosts embedding them.
//!
//! The value crates only emit `tracing` events; a host decides where they go:
//!
//! ```rust,no_run
//! fn main() -> tessera_log::LogResult<()> {
//!     let _guard = tessera_log::auto_init()?;
//!     tessera_log::info!(mode = "strict", "evaluator ready");
//!     Ok(())
//! }
//! ```

#![forbid(unsafe_code)]

mod builder;
mod config;
mod error;

pub use builder::{LoggerBuilder, LoggerGuard};
pub use config::{Config, DisplayConfig, Format, Writer};
pub use error::{LogError, LogResult};

// Re-export tracing macros
pub use tracing::{debug, error, info, trace, warn};

/// Prelude for common imports
pub mod prelude {
    pub use crate::{LogResult, auto_init, debug, error, info, init, init_with, trace, warn};
}

/// Auto-detect and initialize the best logging configuration
pub fn auto_init() -> LogResult<LoggerGuard> {
    if std::env::var("TESSERA_LOG").is_ok() || std::env::var("RUST_LOG").is_ok() {
        init_with(Config::from_env())
    } else if cfg!(debug_assertions) {
        init_with(Config::development())
    } else {
        init_with(Config::production())
    }
}

/// Initialize with default configuration
pub fn init() -> LogResult<LoggerGuard> {
    init_with(Config::default())
}

/// Initialize with custom configuration
pub fn init_with(config: Config) -> LogResult<LoggerGuard> {
    LoggerBuilder::from_config(config).build()
}

/// Initialize logging for tests.
///
/// Safe to call from every test; only the first call in a process installs
/// the subscriber, and a subscriber installed by someone else is left alone.
pub fn init_test() {
    static TEST_INIT: std::sync::OnceLock<()> = std::sync::OnceLock::new();

    TEST_INIT.get_or_init(|| {
        if !tracing::dispatcher::has_been_set() {
            // Losing a race with another initializer is fine here
            let _ = init_with(Config::test());
        }
    });
}
