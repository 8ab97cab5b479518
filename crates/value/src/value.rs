//! The dynamic Value enum
//!
//! This is the central type the host evaluator passes to functions.

use std::fmt;

use indexmap::IndexMap;

use crate::capability::{Opaque, OpaqueValue};
use crate::kind::ValueKind;

/// Key-value mapping; keeps insertion order.
pub type Object = IndexMap<String, Value>;

/// Dynamic value handled by the host evaluator
#[derive(Debug, Clone, Default)]
pub enum Value {
    /// Null/None value
    #[default]
    Null,

    /// Boolean value
    Bool(bool),

    /// Integer number
    Integer(i64),

    /// Floating point number
    Float(f64),

    /// UTF-8 string
    String(String),

    /// Ordered list of values
    Vector(Vec<Value>),

    /// Key-value mapping
    Object(Object),

    /// Host-defined type (see [`crate::capability`])
    Opaque(OpaqueValue),
}

impl Value {
    // ==================== Constructors ====================

    /// Wrap a host-defined value
    pub fn opaque<T: Opaque>(inner: T) -> Self {
        Self::Opaque(OpaqueValue::new(inner))
    }

    /// Create a string value
    pub fn string(v: impl Into<String>) -> Self {
        Self::String(v.into())
    }

    // ==================== Type queries ====================

    /// Get the kind of this value
    #[inline]
    pub fn kind(&self) -> ValueKind {
        ValueKind::from_value(self)
    }

    /// Name used in error messages; opaque values report their own type name
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Opaque(o) => o.type_name(),
            other => other.kind().name(),
        }
    }

    /// Check if this is null
    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    // ==================== Accessors ====================

    /// Borrow as bool
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Borrow as integer
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Borrow as float
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Borrow as string slice
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Borrow as vector
    pub fn as_vector(&self) -> Option<&[Value]> {
        match self {
            Self::Vector(v) => Some(v),
            _ => None,
        }
    }

    /// Borrow as object
    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Self::Object(o) => Some(o),
            _ => None,
        }
    }

    /// Borrow as opaque handle
    pub fn as_opaque(&self) -> Option<&OpaqueValue> {
        match self {
            Self::Opaque(o) => Some(o),
            _ => None,
        }
    }

    /// Borrow an opaque payload as its concrete type
    pub fn downcast_ref<T: Opaque>(&self) -> Option<&T> {
        self.as_opaque().and_then(OpaqueValue::downcast_ref::<T>)
    }
}

/// Structural equality.
///
/// Opaque values are equal when they share a payload or when the left
/// payload's comparer reports `Equal`. Use [`crate::equality::equal`] for the
/// fallible, coalescer-aware comparison the host exposes to expressions.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Integer(a), Self::Integer(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a == b,
            (Self::String(a), Self::String(b)) => a == b,
            (Self::Vector(a), Self::Vector(b)) => a == b,
            (Self::Object(a), Self::Object(b)) => a == b,
            (Self::Opaque(a), Self::Opaque(b)) => {
                a.ptr_eq(b)
                    || a.comparer()
                        .is_some_and(|c| c.compare(other).is_ok_and(|o| o.is_eq()))
            }
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Integer(i) => write!(f, "{i}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::String(s) => write!(f, "{s:?}"),
            Self::Vector(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            Self::Object(map) => {
                f.write_str("{")?;
                for (i, (key, item)) in map.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{key} {item}")?;
                }
                f.write_str("}")
            }
            Self::Opaque(o) => match o
                .string_coalescer()
                .map(|c| c.coalesce_to_string(&crate::coalescing::Humane))
            {
                Some(Ok(s)) => write!(f, "{}({s})", o.type_name()),
                _ => write!(f, "<{}>", o.type_name()),
            },
        }
    }
}

// ==================== Conversions ====================

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Self::Integer(i64::from(v))
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Self::Integer(i64::from(v))
    }
}

impl From<usize> for Value {
    fn from(v: usize) -> Self {
        Self::Integer(v as i64)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<Vec<Value>> for Value {
    fn from(v: Vec<Value>) -> Self {
        Self::Vector(v)
    }
}

impl From<Object> for Value {
    fn from(v: Object) -> Self {
        Self::Object(v)
    }
}

impl From<OpaqueValue> for Value {
    fn from(v: OpaqueValue) -> Self {
        Self::Opaque(v)
    }
}

impl<T: Into<Value>> FromIterator<T> for Value {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::Vector(iter.into_iter().map(Into::into).collect())
    }
}
