//! Equality and ordering over dynamic values
//!
//! Resolution order for `compare`/`equal`:
//!
//! 1. the left operand's [`Comparer`](crate::capability::Comparer), if it
//!    accepts the right operand;
//! 2. the right operand's comparer (result reversed);
//! 3. structural comparison when both operands share a kind (integers and
//!    floats count as one numeric kind);
//! 4. the coalescer's [`unify`](Coalescer::unify) policy for mixed kinds,
//!    followed by structural comparison. `Strict` refuses here, so comparing
//!    across kinds is an error rather than a silent "not equal".

use std::cmp::Ordering;

use crate::coalescing::Coalescer;
use crate::{Value, ValueError, ValueResult};

/// Three-way comparison of two values
pub fn compare(coalescer: &dyn Coalescer, left: &Value, right: &Value) -> ValueResult<Ordering> {
    if let Some(ordering) = compare_with_capability(left, right)? {
        return Ok(ordering);
    }

    if same_domain(left, right) {
        return structural_order(coalescer, left, right);
    }

    let (left, right) = coalescer.unify(left, right)?;
    structural_order(coalescer, &left, &right)
}

/// Equality of two values
pub fn equal(coalescer: &dyn Coalescer, left: &Value, right: &Value) -> ValueResult<bool> {
    if let Some(ordering) = compare_with_capability(left, right)? {
        return Ok(ordering.is_eq());
    }

    if same_domain(left, right) {
        return structural_equal(coalescer, left, right);
    }

    let (left, right) = coalescer.unify(left, right)?;
    structural_equal(coalescer, &left, &right)
}

/// Ask the operands' comparers, left first.
///
/// Returns `Ok(None)` when neither operand advertises a comparer or both
/// report incompatible types.
fn compare_with_capability(left: &Value, right: &Value) -> ValueResult<Option<Ordering>> {
    if let Some(comparer) = left.as_opaque().and_then(|o| o.comparer()) {
        match comparer.compare(right) {
            Ok(ordering) => return Ok(Some(ordering)),
            Err(error) if error.is_incompatible_types() => {}
            Err(error) => return Err(error),
        }
    }

    if let Some(comparer) = right.as_opaque().and_then(|o| o.comparer()) {
        match comparer.compare(left) {
            Ok(ordering) => return Ok(Some(ordering.reverse())),
            Err(error) if error.is_incompatible_types() => {}
            Err(error) => return Err(error),
        }
    }

    Ok(None)
}

fn same_domain(left: &Value, right: &Value) -> bool {
    let (l, r) = (left.kind(), right.kind());
    l == r || (l.is_numeric() && r.is_numeric())
}

fn incompatible(left: &Value, right: &Value) -> ValueError {
    ValueError::incompatible_types(left.type_name(), right.type_name())
}

fn structural_order(coalescer: &dyn Coalescer, left: &Value, right: &Value) -> ValueResult<Ordering> {
    match (left, right) {
        (Value::Null, Value::Null) => Ok(Ordering::Equal),
        (Value::Bool(a), Value::Bool(b)) => Ok(a.cmp(b)),
        (Value::Integer(a), Value::Integer(b)) => Ok(a.cmp(b)),
        (Value::Integer(a), Value::Float(b)) => float_order(*a as f64, *b),
        (Value::Float(a), Value::Integer(b)) => float_order(*a, *b as f64),
        (Value::Float(a), Value::Float(b)) => float_order(*a, *b),
        (Value::String(a), Value::String(b)) => Ok(a.cmp(b)),
        (Value::Vector(a), Value::Vector(b)) => {
            for (x, y) in a.iter().zip(b) {
                let ordering = compare(coalescer, x, y)?;
                if ordering.is_ne() {
                    return Ok(ordering);
                }
            }
            Ok(a.len().cmp(&b.len()))
        }
        (Value::Object(_), Value::Object(_)) => {
            if structural_equal(coalescer, left, right)? {
                Ok(Ordering::Equal)
            } else {
                Err(ValueError::type_mismatch("orderable value", "object"))
            }
        }
        (Value::Opaque(a), Value::Opaque(b)) if a.ptr_eq(b) => Ok(Ordering::Equal),
        _ => Err(incompatible(left, right)),
    }
}

fn float_order(a: f64, b: f64) -> ValueResult<Ordering> {
    a.partial_cmp(&b)
        .ok_or_else(|| ValueError::coercion("NaN cannot be ordered"))
}

fn structural_equal(coalescer: &dyn Coalescer, left: &Value, right: &Value) -> ValueResult<bool> {
    match (left, right) {
        (Value::Vector(a), Value::Vector(b)) => {
            if a.len() != b.len() {
                return Ok(false);
            }
            for (x, y) in a.iter().zip(b) {
                if !equal(coalescer, x, y)? {
                    return Ok(false);
                }
            }
            Ok(true)
        }
        (Value::Object(a), Value::Object(b)) => {
            if a.len() != b.len() {
                return Ok(false);
            }
            for (key, x) in a {
                match b.get(key) {
                    Some(y) if equal(coalescer, x, y)? => {}
                    _ => return Ok(false),
                }
            }
            Ok(true)
        }
        (Value::Opaque(a), Value::Opaque(b)) => {
            // No comparer accepted the pair: identity is the only equality left.
            if a.type_name() == b.type_name() {
                tracing::trace!(type_name = a.type_name(), "falling back to identity equality");
                Ok(a.ptr_eq(b))
            } else {
                Err(incompatible(left, right))
            }
        }
        (Value::Float(a), Value::Float(b)) => Ok(a == b),
        _ => structural_order(coalescer, left, right).map(Ordering::is_eq),
    }
}
