//! # tessera-value
//!
//! Dynamic value model and capability protocol for host-defined value types.
//!
//! The host evaluator passes [`Value`]s to functions together with a
//! [`Context`]. Host-defined types (versions, string sets, ...) travel as
//! [`Value::Opaque`] and opt into behaviour by advertising capabilities:
//!
//! - string coalescion, used whenever the value is needed as a string
//! - comparison, used by [`equality`]
//! - deep copy, used by [`deepcopy`]
//! - keyed read/write, used by [`path`]
//!
//! The runtime helpers detect capabilities through the [`Opaque`] accessors
//! and fall back to structural behaviour when one is missing.

pub mod args;
pub mod capability;
pub mod coalescing;
pub mod context;
pub mod deepcopy;
pub mod equality;
pub mod error;
pub mod kind;
pub mod path;
mod serde;
pub mod value;

pub use capability::{
    Comparer, Copier, CustomStringCoalescer, ObjectReader, ObjectWriter, Opaque, OpaqueValue,
};
pub use coalescing::{Coalescer, CoalescingMode, Humane, Strict};
pub use context::{Config, Context};
pub use error::{ValueError, ValueResult};
pub use kind::ValueKind;
pub use value::{Object, Value};

/// Prelude for common imports
pub mod prelude {
    pub use crate::args::{Function, check_arg_count, check_min_arg_count};
    pub use crate::capability::{
        Comparer, Copier, CustomStringCoalescer, ObjectReader, ObjectWriter, Opaque, OpaqueValue,
    };
    pub use crate::coalescing::Coalescer;
    pub use crate::{Context, Object, Value, ValueError, ValueKind, ValueResult};
}
