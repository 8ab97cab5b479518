//! Call context handed to every function next to its arguments

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::coalescing::{Coalescer, CoalescingMode, Humane, Strict};

/// Environment variable selecting the coalescing mode
pub const COALESCING_ENV: &str = "TESSERA_COALESCING";

/// Value-layer configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Coalescion policy for function arguments
    pub coalescing: CoalescingMode,
}

impl Config {
    /// Create configuration from environment variables.
    ///
    /// Unknown values of `TESSERA_COALESCING` fall back to the default mode.
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(mode) = std::env::var(COALESCING_ENV) {
            match mode.parse() {
                Ok(parsed) => config.coalescing = parsed,
                Err(error) => {
                    tracing::warn!(%error, value = %mode, "ignoring invalid TESSERA_COALESCING");
                }
            }
        }

        config
    }
}

/// Context in which a function is evaluated
#[derive(Debug, Clone)]
pub struct Context {
    coalescer: Arc<dyn Coalescer>,
}

impl Context {
    /// Create a context with a custom coalescer
    pub fn new(coalescer: impl Coalescer + 'static) -> Self {
        Self {
            coalescer: Arc::new(coalescer),
        }
    }

    /// Context using the [`Strict`] coalescer
    pub fn strict() -> Self {
        Self::new(Strict)
    }

    /// Context using the [`Humane`] coalescer
    pub fn humane() -> Self {
        Self::new(Humane)
    }

    /// Context for a configured coalescing mode
    pub fn from_mode(mode: CoalescingMode) -> Self {
        match mode {
            CoalescingMode::Strict => Self::strict(),
            CoalescingMode::Humane => Self::humane(),
        }
    }

    /// Context built from configuration
    pub fn from_config(config: &Config) -> Self {
        Self::from_mode(config.coalescing)
    }

    /// Active coalescer
    pub fn coalesce(&self) -> &dyn Coalescer {
        &*self.coalescer
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::strict()
    }
}
