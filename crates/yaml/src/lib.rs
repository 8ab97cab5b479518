//! # tessera-yaml
//!
//! YAML encoding and decoding of values.
//!
//! Opaque values encode through their string form, so a version becomes a
//! plain YAML string. Decoding never produces opaque values.

use tessera_value::prelude::*;

/// Function table: name, implementation, description
pub const FUNCTIONS: &[(&str, Function, &str)] = &[
    ("to-yaml", to_yaml, "encodes the given value as YAML"),
    ("from-yaml", from_yaml, "decodes a YAML string into a value"),
];

/// `(to-yaml value)`
pub fn to_yaml(_ctx: &Context, args: &[Value]) -> ValueResult<Value> {
    check_arg_count("to-yaml", args, 1)?;

    serde_yaml::to_string(&args[0])
        .map(Value::String)
        .map_err(|e| ValueError::serialization(e.to_string()))
}

/// `(from-yaml "a: b")`
pub fn from_yaml(ctx: &Context, args: &[Value]) -> ValueResult<Value> {
    check_arg_count("from-yaml", args, 1)?;

    let input = ctx.coalesce().to_string(&args[0])?;
    serde_yaml::from_str(&input).map_err(|e| {
        tracing::debug!(error = %e, "invalid YAML document");
        ValueError::serialization(e.to_string())
    })
}
