//! # tessera-semver
//!
//! Semantic versions as first-class values.
//!
//! ```rust
//! use tessera_semver::functions::semver;
//! use tessera_value::{Context, Value};
//!
//! let ctx = Context::strict();
//! let version = semver(&ctx, &[Value::from("v9.2")]).unwrap();
//!
//! assert_eq!(version.get_path("minor").unwrap(), Value::from(2));
//! assert_eq!(ctx.coalesce().to_string(&version).unwrap(), "9.2.0");
//! ```

pub mod functions;
pub mod version;

pub use version::{PreRelease, TYPE_NAME, Version};
