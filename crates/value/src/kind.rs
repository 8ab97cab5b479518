//! Value kinds.
//!
//! `ValueKind` is a lightweight classification for `Value`, used in error
//! messages and by the coalescers to decide how a conversion is attempted.

use core::fmt::{Display, Formatter};

use crate::Value;

/// Represents the kind of a Value
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    Null,
    Boolean,
    Integer,
    Float,
    String,
    Vector,
    Object,
    /// A host-defined type carried behind an opaque handle
    Opaque,
}

impl ValueKind {
    /// Get the kind from a Value
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(_) => Self::Boolean,
            Value::Integer(_) => Self::Integer,
            Value::Float(_) => Self::Float,
            Value::String(_) => Self::String,
            Value::Vector(_) => Self::Vector,
            Value::Object(_) => Self::Object,
            Value::Opaque(_) => Self::Opaque,
        }
    }

    /// Check if this kind is numeric
    pub const fn is_numeric(&self) -> bool {
        matches!(self, Self::Integer | Self::Float)
    }

    /// Check if this kind is a collection
    pub const fn is_collection(&self) -> bool {
        matches!(self, Self::Vector | Self::Object)
    }

    /// Check if this kind is a scalar (neither a collection nor opaque)
    pub const fn is_scalar(&self) -> bool {
        !self.is_collection() && !matches!(self, Self::Opaque)
    }

    /// Get the name of this kind
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Boolean => "bool",
            Self::Integer => "integer",
            Self::Float => "float",
            Self::String => "string",
            Self::Vector => "vector",
            Self::Object => "object",
            Self::Opaque => "opaque",
        }
    }
}

impl Display for ValueKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_value() {
        assert_eq!(ValueKind::from_value(&Value::Null), ValueKind::Null);
        assert_eq!(ValueKind::from_value(&Value::from(3)), ValueKind::Integer);
        assert_eq!(ValueKind::from_value(&Value::from(1.5)), ValueKind::Float);
        assert_eq!(ValueKind::from_value(&Value::from("x")), ValueKind::String);
        assert_eq!(
            ValueKind::from_value(&Value::Vector(vec![])),
            ValueKind::Vector
        );
    }

    #[test]
    fn test_classification() {
        assert!(ValueKind::Float.is_numeric());
        assert!(ValueKind::Object.is_collection());
        assert!(ValueKind::String.is_scalar());
        assert!(!ValueKind::Opaque.is_scalar());
    }

    #[test]
    fn test_display() {
        assert_eq!(ValueKind::Vector.to_string(), "vector");
    }
}
