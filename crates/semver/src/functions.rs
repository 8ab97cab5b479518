//! Host-callable functions

use tessera_value::prelude::*;

use crate::Version;

/// Function table: name, implementation, description
pub const FUNCTIONS: &[(&str, Function, &str)] = &[(
    "semver",
    semver,
    "parses a string as a semantic version",
)];

/// `(semver "v1.2")` parses its single argument as a semantic version
pub fn semver(ctx: &Context, args: &[Value]) -> ValueResult<Value> {
    check_arg_count("semver", args, 1)?;

    let input = ctx.coalesce().to_string(&args[0])?;
    match Version::parse_tolerant(&input) {
        Ok(version) => Ok(Value::from(version)),
        Err(error) => {
            tracing::debug!(%input, %error, "semver parse failed");
            Err(error)
        }
    }
}
