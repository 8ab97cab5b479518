//! Deep copies of dynamic values
//!
//! Collections are rebuilt element by element; opaque values must advertise
//! the [`Copier`](crate::capability::Copier) capability.

use crate::{Object, Value, ValueError, ValueResult};

/// Produce a copy of `value` that shares no backing storage with it
pub fn deep_copy(value: &Value) -> ValueResult<Value> {
    match value {
        Value::Null => Ok(Value::Null),
        Value::Bool(b) => Ok(Value::Bool(*b)),
        Value::Integer(i) => Ok(Value::Integer(*i)),
        Value::Float(f) => Ok(Value::Float(*f)),
        Value::String(s) => Ok(Value::String(s.clone())),
        Value::Vector(items) => items
            .iter()
            .map(deep_copy)
            .collect::<ValueResult<Vec<_>>>()
            .map(Value::Vector),
        Value::Object(map) => {
            let mut copied = Object::with_capacity(map.len());
            for (key, item) in map {
                copied.insert(key.clone(), deep_copy(item)?);
            }
            Ok(Value::Object(copied))
        }
        Value::Opaque(opaque) => match opaque.copier() {
            Some(copier) => copier.deep_copy(),
            None => {
                tracing::debug!(type_name = opaque.type_name(), "opaque value cannot be deep copied");
                Err(ValueError::not_copyable(opaque.type_name()))
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capability::Opaque;
    use pretty_assertions::assert_eq;
    use std::any::Any;

    #[derive(Debug)]
    struct Handle;

    impl Opaque for Handle {
        fn type_name(&self) -> &'static str {
            "handle"
        }

        fn as_any(&self) -> &dyn Any {
            self
        }
    }

    #[test]
    fn test_collections_are_copied() {
        let mut object = Object::new();
        object.insert("list".into(), ["a", "b"].into_iter().collect());
        let original = Value::Object(object);

        let copy = deep_copy(&original).unwrap();
        assert_eq!(copy, original);

        let Value::Object(mut copy) = copy else {
            panic!("expected object");
        };
        copy.insert("extra".into(), Value::Null);
        assert_eq!(original.as_object().map(Object::len), Some(1));
    }

    #[test]
    fn test_opaque_without_copier_fails() {
        let value = Value::Vector(vec![Value::opaque(Handle)]);
        let err = deep_copy(&value).unwrap_err();
        assert_eq!(err, ValueError::not_copyable("handle"));
    }
}
