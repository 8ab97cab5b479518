//! End-to-end checks of the capability protocol with a host-defined type

use std::any::Any;
use std::cmp::Ordering;

use pretty_assertions::assert_eq;
use tessera_value::coalescing::{Humane, Strict};
use tessera_value::prelude::*;
use tessera_value::{deepcopy, equality};

/// A 2D point that advertises every capability
#[derive(Debug, Clone, PartialEq)]
struct Point {
    x: i64,
    y: i64,
}

impl CustomStringCoalescer for Point {
    fn coalesce_to_string(&self, _: &dyn Coalescer) -> ValueResult<String> {
        Ok(format!("{},{}", self.x, self.y))
    }
}

impl Comparer for Point {
    fn compare(&self, other: &Value) -> ValueResult<Ordering> {
        match other.downcast_ref::<Point>() {
            Some(p) => Ok((self.x, self.y).cmp(&(p.x, p.y))),
            None => Err(ValueError::incompatible_types("point", other.type_name())),
        }
    }
}

impl Copier for Point {
    fn deep_copy(&self) -> ValueResult<Value> {
        Ok(Value::opaque(self.clone()))
    }
}

impl ObjectReader for Point {
    fn get_object_key(&self, name: &str) -> ValueResult<Value> {
        match name.to_lowercase().as_str() {
            "x" => Ok(Value::Integer(self.x)),
            "y" => Ok(Value::Integer(self.y)),
            _ => Err(ValueError::unknown_field(name)),
        }
    }
}

impl ObjectWriter for Point {
    fn set_object_key(&self, name: &str, value: Value) -> ValueResult<Value> {
        let Some(n) = value.as_i64() else {
            return Err(ValueError::type_mismatch("integer", value.type_name()));
        };
        let mut updated = self.clone();
        match name.to_lowercase().as_str() {
            "x" => updated.x = n,
            "y" => updated.y = n,
            _ => return Err(ValueError::unknown_field(name)),
        }
        Ok(Value::opaque(updated))
    }
}

impl Opaque for Point {
    fn type_name(&self) -> &'static str {
        "point"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_string_coalescer(&self) -> Option<&dyn CustomStringCoalescer> {
        Some(self)
    }

    fn as_comparer(&self) -> Option<&dyn Comparer> {
        Some(self)
    }

    fn as_copier(&self) -> Option<&dyn Copier> {
        Some(self)
    }

    fn as_object_reader(&self) -> Option<&dyn ObjectReader> {
        Some(self)
    }

    fn as_object_writer(&self) -> Option<&dyn ObjectWriter> {
        Some(self)
    }
}

fn point(x: i64, y: i64) -> Value {
    Value::opaque(Point { x, y })
}

#[test]
fn comparer_decides_ordering_and_equality() {
    assert_eq!(
        equality::compare(&Strict, &point(1, 2), &point(1, 3)).unwrap(),
        Ordering::Less
    );
    assert!(equality::equal(&Strict, &point(4, 4), &point(4, 4)).unwrap());
    assert_eq!(point(4, 4), point(4, 4));
}

#[test]
fn mixed_kinds_follow_the_coalescer() {
    let err = equality::equal(&Strict, &point(1, 2), &Value::from("1,2")).unwrap_err();
    assert!(err.is_incompatible_types());

    assert!(equality::equal(&Humane, &point(1, 2), &Value::from("1,2")).unwrap());
    assert!(equality::equal(&Humane, &Value::from("1,2"), &point(1, 2)).unwrap());
    assert!(!equality::equal(&Humane, &point(1, 2), &Value::from("2,1")).unwrap());
}

#[test]
fn opaque_values_act_as_strings() {
    let ctx = Context::strict();
    assert_eq!(ctx.coalesce().to_string(&point(3, 4)).unwrap(), "3,4");
    assert!(ctx.coalesce().to_int64(&point(3, 4)).is_err());
    assert_eq!(point(3, 4).to_string(), "point(3,4)");
}

#[test]
fn path_access_through_opaque_fields() {
    let mut root = Object::new();
    root.insert("origin".into(), point(0, 5));
    let root = Value::Object(root);

    assert_eq!(root.get_path("origin.Y").unwrap(), Value::from(5));
    assert_eq!(
        root.get_path("origin.z").unwrap_err(),
        ValueError::unknown_field("z")
    );

    let moved = root.set_path("origin.x", Value::from(9)).unwrap();
    assert_eq!(moved.get_path("origin").unwrap(), point(9, 5));
    assert_eq!(root.get_path("origin").unwrap(), point(0, 5));

    assert!(root.set_path("origin.x", Value::from("9")).is_err());
}

#[test]
fn deep_copy_uses_copier() {
    let original = point(1, 1);
    let copy = deepcopy::deep_copy(&original).unwrap();

    assert_eq!(copy, original);
    let (Value::Opaque(a), Value::Opaque(b)) = (&original, &copy) else {
        panic!("expected opaque values");
    };
    assert!(!a.ptr_eq(b));
}

#[test]
fn serializes_through_string_form() {
    let value: Value = vec![point(1, 2), Value::from(true)].into();
    assert_eq!(serde_json::to_string(&value).unwrap(), r#"["1,2",true]"#);
}

#[test]
fn function_convention() {
    fn first(ctx: &Context, args: &[Value]) -> ValueResult<Value> {
        check_arg_count("first", args, 1)?;
        let items = ctx.coalesce().to_vector(&args[0])?;
        Ok(items.into_iter().next().unwrap_or_default())
    }

    let f: Function = first;
    let ctx = Context::default();
    assert_eq!(
        f(&ctx, &[vec![Value::from("a")].into()]).unwrap(),
        Value::from("a")
    );
    assert!(f(&ctx, &[]).is_err());
}
