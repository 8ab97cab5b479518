//! # tessera-uuid
//!
//! Random UUID generation for the host evaluator.

use tessera_value::prelude::*;
use uuid::Uuid;

/// Function table: name, implementation, description
pub const FUNCTIONS: &[(&str, Function, &str)] = &[(
    "uuidv4",
    uuidv4,
    "returns a new, randomly generated v4 UUID",
)];

/// `(uuidv4)` returns a random version 4 UUID in hyphenated lowercase form
pub fn uuidv4(_ctx: &Context, args: &[Value]) -> ValueResult<Value> {
    check_arg_count("uuidv4", args, 0)?;
    Ok(Value::String(Uuid::new_v4().to_string()))
}
