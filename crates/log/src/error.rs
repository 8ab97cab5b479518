//! Error handling for tessera-log

use thiserror::Error;

/// Errors raised while setting up logging
#[derive(Debug, Error)]
pub enum LogError {
    /// Invalid configuration value
    #[error("configuration error: {0}")]
    Config(String),

    /// Filter directive could not be parsed
    #[error("invalid filter {filter:?}: {reason}")]
    Filter {
        /// The rejected directive string
        filter: String,
        /// Parser message
        reason: String,
    },

    /// A global subscriber is already installed
    #[error("logger initialization failed: {0}")]
    Init(String),
}

/// Result type for logging setup
pub type LogResult<T> = Result<T, LogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = LogError::Filter {
            filter: "foo=bar".into(),
            reason: "invalid level".into(),
        };
        assert_eq!(err.to_string(), r#"invalid filter "foo=bar": invalid level"#);
        assert_eq!(
            LogError::Config("unknown format".into()).to_string(),
            "configuration error: unknown format"
        );
    }
}
