//! # tessera-set
//!
//! String sets as first-class values, plus the set algebra functions
//! exposed to the host evaluator.
//!
//! ```rust
//! use tessera_set::functions::{new_set, set_insert, set_size};
//! use tessera_value::{Context, Value};
//!
//! let ctx = Context::strict();
//! let set = new_set(&ctx, &[Value::from("a"), Value::from("b")]).unwrap();
//! let bigger = set_insert(&ctx, &[set.clone(), Value::from("c")]).unwrap();
//!
//! assert_eq!(set_size(&ctx, &[set]).unwrap(), Value::from(2));
//! assert_eq!(set_size(&ctx, &[bigger]).unwrap(), Value::from(3));
//! ```

pub mod coerce;
pub mod functions;
pub mod set;

pub use set::{StringSet, TYPE_NAME};
