//! Error types for the value protocol
//!
//! Uses thiserror for clean, idiomatic Rust error definitions.

use thiserror::Error;

// ============================================================================
// Main Error Type
// ============================================================================

/// Errors produced by value types, coalescers and the runtime helpers
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// Malformed textual input (e.g. a version string)
    #[error("parse error: {message} (input {input:?})")]
    Parse { input: String, message: String },

    /// A value is not of the expected concrete kind
    #[error("type error: expected {expected}, found {actual}")]
    TypeMismatch { expected: String, actual: String },

    /// Two values of different kinds were compared
    #[error("incompatible types: cannot compare {left} with {right}")]
    IncompatibleTypes { left: String, right: String },

    /// A function argument was rejected
    #[error("argument #{position}: {message}")]
    InvalidArgument { position: usize, message: String },

    /// A function was called with the wrong number of arguments
    #[error("{function}: {message}")]
    ArgumentCount { function: String, message: String },

    /// Keyed access named a field the type does not expose
    #[error("unknown property {name:?}")]
    UnknownField { name: String },

    /// A value could not be converted into the requested kind
    #[error("coercion error: {message}")]
    Coercion { message: String },

    /// Deep copy of a value that does not support it
    #[error("cannot deep copy value of type {type_name}")]
    NotCopyable { type_name: String },

    /// Malformed or unresolvable path expression
    #[error("path error: {message}")]
    Path { message: String },

    /// A hard limit was exceeded
    #[error("limit exceeded: {limit} (max {max}, got {actual})")]
    LimitExceeded {
        limit: String,
        max: usize,
        actual: usize,
    },

    /// Encoding or decoding through a serde format failed
    #[error("serialization error: {message}")]
    Serialization { message: String },
}

impl ValueError {
    /// Get error code for categorization
    pub fn code(&self) -> &'static str {
        match self {
            Self::Parse { .. } => "VALUE:PARSE",
            Self::TypeMismatch { .. } => "VALUE:TYPE",
            Self::IncompatibleTypes { .. } => "VALUE:INCOMPATIBLE",
            Self::InvalidArgument { .. } => "VALUE:INVALID_ARG",
            Self::ArgumentCount { .. } => "VALUE:ARG_COUNT",
            Self::UnknownField { .. } => "VALUE:UNKNOWN_FIELD",
            Self::Coercion { .. } => "VALUE:COERCION",
            Self::NotCopyable { .. } => "VALUE:NOT_COPYABLE",
            Self::Path { .. } => "VALUE:PATH",
            Self::LimitExceeded { .. } => "VALUE:LIMIT",
            Self::Serialization { .. } => "VALUE:SERDE",
        }
    }

    /// Whether this error signals a comparison across incompatible kinds.
    ///
    /// The equality helpers use this to fall through to the other operand's
    /// comparer or to the coalescer's mixed-kind policy.
    pub fn is_incompatible_types(&self) -> bool {
        matches!(self, Self::IncompatibleTypes { .. })
    }

    // ============================================================================
    // Convenience Constructors
    // ============================================================================

    /// Create a parse error
    pub fn parse(input: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Parse {
            input: input.into(),
            message: message.into(),
        }
    }

    /// Create a type mismatch error
    pub fn type_mismatch(expected: impl Into<String>, actual: impl Into<String>) -> Self {
        Self::TypeMismatch {
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    /// Create an incompatible types error
    pub fn incompatible_types(left: impl Into<String>, right: impl Into<String>) -> Self {
        Self::IncompatibleTypes {
            left: left.into(),
            right: right.into(),
        }
    }

    /// Create an invalid argument error for the argument at `position`
    pub fn invalid_argument(position: usize, message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            position,
            message: message.into(),
        }
    }

    /// Create an argument count error
    pub fn argument_count(function: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ArgumentCount {
            function: function.into(),
            message: message.into(),
        }
    }

    /// Create an unknown field error
    pub fn unknown_field(name: impl Into<String>) -> Self {
        Self::UnknownField { name: name.into() }
    }

    /// Create a coercion error
    pub fn coercion(message: impl Into<String>) -> Self {
        Self::Coercion {
            message: message.into(),
        }
    }

    /// Create a not-copyable error
    pub fn not_copyable(type_name: impl Into<String>) -> Self {
        Self::NotCopyable {
            type_name: type_name.into(),
        }
    }

    /// Create a path error
    pub fn path(message: impl Into<String>) -> Self {
        Self::Path {
            message: message.into(),
        }
    }

    /// Create a limit exceeded error
    pub fn limit_exceeded(limit: impl Into<String>, max: usize, actual: usize) -> Self {
        Self::LimitExceeded {
            limit: limit.into(),
            max,
            actual,
        }
    }

    /// Create a serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization {
            message: message.into(),
        }
    }
}

// ============================================================================
// Result Type
// ============================================================================

/// Result type for value operations
pub type ValueResult<T> = Result<T, ValueError>;

// ============================================================================
// Tests
// ============================================================================
