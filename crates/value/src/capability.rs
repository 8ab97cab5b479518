//! Capability interfaces for host-defined value types.
//!
//! A host-defined type plugs into the value model by implementing [`Opaque`]
//! and overriding the accessor of every capability it supports:
//!
//! | capability                 | accessor                 | used by                  |
//! |----------------------------|--------------------------|--------------------------|
//! | [`CustomStringCoalescer`]  | `as_string_coalescer`    | coalescers, serde        |
//! | [`Comparer`]               | `as_comparer`            | [`crate::equality`]      |
//! | [`Copier`]                 | `as_copier`              | [`crate::deepcopy`]      |
//! | [`ObjectReader`]           | `as_object_reader`       | [`crate::path`]          |
//! | [`ObjectWriter`]           | `as_object_writer`       | [`crate::path`]          |
//!
//! Accessors default to `None`, so an implementation states its capabilities
//! at compile time and the runtime helpers detect them without reflection.
//!
//! ```rust
//! use std::any::Any;
//! use tessera_value::capability::{CustomStringCoalescer, Opaque};
//! use tessera_value::coalescing::{Coalescer, Strict};
//! use tessera_value::{Value, ValueResult};
//!
//! #[derive(Debug)]
//! struct Color(&'static str);
//!
//! impl CustomStringCoalescer for Color {
//!     fn coalesce_to_string(&self, _: &dyn Coalescer) -> ValueResult<String> {
//!         Ok(self.0.to_string())
//!     }
//! }
//!
//! impl Opaque for Color {
//!     fn type_name(&self) -> &'static str {
//!         "color"
//!     }
//!
//!     fn as_any(&self) -> &dyn Any {
//!         self
//!     }
//!
//!     fn as_string_coalescer(&self) -> Option<&dyn CustomStringCoalescer> {
//!         Some(self)
//!     }
//! }
//!
//! let value = Value::opaque(Color("red"));
//! assert_eq!(Strict.to_string(&value).unwrap(), "red");
//! ```

use std::any::Any;
use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use crate::coalescing::Coalescer;
use crate::{Value, ValueResult};

/// Produces the canonical string form of a value.
pub trait CustomStringCoalescer {
    /// Render the value as a string under the given coalescion policy.
    fn coalesce_to_string(&self, coalescer: &dyn Coalescer) -> ValueResult<String>;
}

/// Three-way comparison against an arbitrary value.
///
/// Implementations must return [`crate::ValueError::IncompatibleTypes`] when
/// `other` is not of the same concrete type, so the equality helpers can try
/// the other operand or the coalescer's mixed-kind policy.
pub trait Comparer {
    /// Compare `self` with `other`.
    fn compare(&self, other: &Value) -> ValueResult<Ordering>;
}

/// Produces an independent copy sharing no backing storage with the source.
pub trait Copier {
    /// Deep-copy the value.
    fn deep_copy(&self) -> ValueResult<Value>;
}

/// Keyed read access (`value.field`). Field names are case-insensitive.
pub trait ObjectReader {
    /// Read the named field.
    fn get_object_key(&self, name: &str) -> ValueResult<Value>;
}

/// Keyed write access. Writes never mutate the receiver.
pub trait ObjectWriter {
    /// Return a new value with the named field replaced.
    fn set_object_key(&self, name: &str, value: Value) -> ValueResult<Value>;
}

/// A host-defined value type carried in [`Value::Opaque`].
pub trait Opaque: Any + fmt::Debug + Send + Sync {
    /// Short type name used in error messages (e.g. `semver`).
    fn type_name(&self) -> &'static str;

    /// Cast to `Any` for downcasting.
    fn as_any(&self) -> &dyn Any;

    /// String coalescion capability.
    fn as_string_coalescer(&self) -> Option<&dyn CustomStringCoalescer> {
        None
    }

    /// Comparison capability.
    fn as_comparer(&self) -> Option<&dyn Comparer> {
        None
    }

    /// Deep copy capability.
    fn as_copier(&self) -> Option<&dyn Copier> {
        None
    }

    /// Keyed read capability.
    fn as_object_reader(&self) -> Option<&dyn ObjectReader> {
        None
    }

    /// Keyed write capability.
    fn as_object_writer(&self) -> Option<&dyn ObjectWriter> {
        None
    }
}

/// Shared handle to an [`Opaque`] value.
///
/// Cloning shares the payload. Payloads are never mutated through the
/// handle, so sharing is unobservable; use [`Copier`] for an independent copy.
#[derive(Clone)]
pub struct OpaqueValue(Arc<dyn Opaque>);

impl OpaqueValue {
    /// Wrap a host-defined value
    pub fn new<T: Opaque>(inner: T) -> Self {
        Self(Arc::new(inner))
    }

    /// Type name reported by the payload
    pub fn type_name(&self) -> &'static str {
        self.0.type_name()
    }

    /// Borrow the payload as its concrete type
    pub fn downcast_ref<T: Opaque>(&self) -> Option<&T> {
        self.0.as_any().downcast_ref::<T>()
    }

    /// Check the concrete type of the payload
    pub fn is<T: Opaque>(&self) -> bool {
        self.0.as_any().is::<T>()
    }

    /// Whether both handles point at the same payload
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    /// String coalescion capability, if advertised
    pub fn string_coalescer(&self) -> Option<&dyn CustomStringCoalescer> {
        self.0.as_string_coalescer()
    }

    /// Comparison capability, if advertised
    pub fn comparer(&self) -> Option<&dyn Comparer> {
        self.0.as_comparer()
    }

    /// Deep copy capability, if advertised
    pub fn copier(&self) -> Option<&dyn Copier> {
        self.0.as_copier()
    }

    /// Keyed read capability, if advertised
    pub fn object_reader(&self) -> Option<&dyn ObjectReader> {
        self.0.as_object_reader()
    }

    /// Keyed write capability, if advertised
    pub fn object_writer(&self) -> Option<&dyn ObjectWriter> {
        self.0.as_object_writer()
    }
}

impl fmt::Debug for OpaqueValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.0, f)
    }
}
