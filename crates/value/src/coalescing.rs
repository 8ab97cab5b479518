//! Coalescion policies
//!
//! A [`Coalescer`] converts values into the kind an operation needs. Two
//! policies ship with the crate:
//!
//! - [`Strict`] only performs lossless conversions: strings stay strings,
//!   `null` becomes the empty value of the requested kind, and opaque values
//!   that advertise a string form may be used as strings.
//! - [`Humane`] additionally renders booleans and numbers as strings, parses
//!   numeric strings, applies truthiness, and compares values of different
//!   kinds through their string forms.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{Value, ValueError, ValueResult};

/// Conversion policy supplied by the host through the call context
pub trait Coalescer: fmt::Debug + Send + Sync {
    /// Name of the policy
    fn name(&self) -> &'static str;

    /// Convert a value into a string
    fn to_string(&self, value: &Value) -> ValueResult<String>;

    /// Convert a value into a list of values
    fn to_vector(&self, value: &Value) -> ValueResult<Vec<Value>>;

    /// Convert a value into a signed 64-bit integer
    fn to_int64(&self, value: &Value) -> ValueResult<i64>;

    /// Convert a value into a boolean
    fn to_bool(&self, value: &Value) -> ValueResult<bool>;

    /// Bring two values of different kinds into a comparable pair.
    ///
    /// Called by [`crate::equality`] once neither operand could compare
    /// itself with the other. The default refuses.
    fn unify(&self, left: &Value, right: &Value) -> ValueResult<(Value, Value)> {
        Err(ValueError::incompatible_types(
            left.type_name(),
            right.type_name(),
        ))
    }
}

/// Which built-in coalescer a context uses
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoalescingMode {
    /// Lossless conversions only
    #[default]
    Strict,
    /// Lenient conversions
    Humane,
}

impl std::str::FromStr for CoalescingMode {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "strict" => Ok(Self::Strict),
            "humane" => Ok(Self::Humane),
            other => Err(ValueError::parse(other, "unknown coalescing mode")),
        }
    }
}

impl fmt::Display for CoalescingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Strict => f.write_str("strict"),
            Self::Humane => f.write_str("humane"),
        }
    }
}

fn opaque_to_string(value: &Value, coalescer: &dyn Coalescer) -> Option<ValueResult<String>> {
    value
        .as_opaque()
        .and_then(|o| o.string_coalescer())
        .map(|c| c.coalesce_to_string(coalescer))
}

fn cannot_convert(value: &Value, target: &str) -> ValueError {
    ValueError::coercion(format!(
        "cannot convert {} losslessly to {target}",
        value.type_name()
    ))
}

// ============================================================================
// Strict
// ============================================================================

/// Lossless coalescion
#[derive(Debug, Clone, Copy, Default)]
pub struct Strict;

impl Coalescer for Strict {
    fn name(&self) -> &'static str {
        "strict"
    }

    fn to_string(&self, value: &Value) -> ValueResult<String> {
        match value {
            Value::Null => Ok(String::new()),
            Value::String(s) => Ok(s.clone()),
            Value::Opaque(_) => {
                opaque_to_string(value, self).unwrap_or_else(|| Err(cannot_convert(value, "string")))
            }
            _ => Err(cannot_convert(value, "string")),
        }
    }

    fn to_vector(&self, value: &Value) -> ValueResult<Vec<Value>> {
        match value {
            Value::Null => Ok(Vec::new()),
            Value::Vector(items) => Ok(items.clone()),
            _ => Err(cannot_convert(value, "vector")),
        }
    }

    fn to_int64(&self, value: &Value) -> ValueResult<i64> {
        match value {
            Value::Null => Ok(0),
            Value::Integer(i) => Ok(*i),
            _ => Err(cannot_convert(value, "integer")),
        }
    }

    fn to_bool(&self, value: &Value) -> ValueResult<bool> {
        match value {
            Value::Null => Ok(false),
            Value::Bool(b) => Ok(*b),
            _ => Err(cannot_convert(value, "bool")),
        }
    }
}

// ============================================================================
// Humane
// ============================================================================

const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;

/// Lenient coalescion
#[derive(Debug, Clone, Copy, Default)]
pub struct Humane;

impl Coalescer for Humane {
    fn name(&self) -> &'static str {
        "humane"
    }

    fn to_string(&self, value: &Value) -> ValueResult<String> {
        match value {
            Value::Null => Ok(String::new()),
            Value::Bool(b) => Ok(b.to_string()),
            Value::Integer(i) => Ok(i.to_string()),
            Value::Float(f) => Ok(f.to_string()),
            Value::String(s) => Ok(s.clone()),
            Value::Opaque(_) => {
                opaque_to_string(value, self).unwrap_or_else(|| Err(cannot_convert(value, "string")))
            }
            Value::Vector(_) | Value::Object(_) => Err(cannot_convert(value, "string")),
        }
    }

    fn to_vector(&self, value: &Value) -> ValueResult<Vec<Value>> {
        match value {
            Value::Null => Ok(Vec::new()),
            Value::Vector(items) => Ok(items.clone()),
            Value::Object(map) if map.is_empty() => Ok(Vec::new()),
            _ => Err(cannot_convert(value, "vector")),
        }
    }

    fn to_int64(&self, value: &Value) -> ValueResult<i64> {
        match value {
            Value::Null => Ok(0),
            Value::Bool(b) => Ok(i64::from(*b)),
            Value::Integer(i) => Ok(*i),
            Value::Float(f) if f.fract() == 0.0 && f.is_finite() => {
                // 2^63 is the first float past i64::MAX; i64::MIN is exact
                if *f >= -I64_BOUND && *f < I64_BOUND {
                    Ok(*f as i64)
                } else {
                    Err(ValueError::coercion(format!("{f} is out of integer range")))
                }
            }
            Value::String(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    return Ok(0);
                }
                trimmed
                    .parse()
                    .map_err(|_| ValueError::coercion(format!("{s:?} is not a valid integer")))
            }
            _ => Err(cannot_convert(value, "integer")),
        }
    }

    fn to_bool(&self, value: &Value) -> ValueResult<bool> {
        match value {
            Value::Null => Ok(false),
            Value::Bool(b) => Ok(*b),
            Value::Integer(i) => Ok(*i != 0),
            Value::Float(f) => Ok(*f != 0.0 && !f.is_nan()),
            Value::String(s) => {
                let trimmed = s.trim();
                Ok(!(trimmed.is_empty() || trimmed == "0" || trimmed.eq_ignore_ascii_case("false")))
            }
            Value::Vector(items) => Ok(!items.is_empty()),
            Value::Object(map) => Ok(!map.is_empty()),
            Value::Opaque(_) => Err(cannot_convert(value, "bool")),
        }
    }

    fn unify(&self, left: &Value, right: &Value) -> ValueResult<(Value, Value)> {
        let unified = self
            .to_string(left)
            .and_then(|l| self.to_string(right).map(|r| (l, r)));

        match unified {
            Ok((l, r)) => {
                tracing::trace!(
                    left = left.type_name(),
                    right = right.type_name(),
                    "comparing mixed kinds through their string forms"
                );
                Ok((Value::String(l), Value::String(r)))
            }
            Err(_) => Err(ValueError::incompatible_types(
                left.type_name(),
                right.type_name(),
            )),
        }
    }
}
