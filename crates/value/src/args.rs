//! Arity checks shared by function implementations

use crate::{Value, ValueError, ValueResult};

/// Host calling convention for value functions
pub type Function = fn(&crate::Context, &[Value]) -> ValueResult<Value>;

/// Check that exactly `expected` arguments were passed
pub fn check_arg_count(function: &str, args: &[Value], expected: usize) -> ValueResult<()> {
    if args.len() == expected {
        Ok(())
    } else {
        Err(ValueError::argument_count(
            function,
            format!("expected {expected} argument(s), got {}", args.len()),
        ))
    }
}

/// Check that at least `min` arguments were passed
pub fn check_min_arg_count(function: &str, args: &[Value], min: usize) -> ValueResult<()> {
    if args.len() >= min {
        Ok(())
    } else {
        Err(ValueError::argument_count(
            function,
            format!("expected at least {min} argument(s), got {}", args.len()),
        ))
    }
}
