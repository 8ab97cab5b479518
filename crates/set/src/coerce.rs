//! Argument coercion for set operations

use tessera_value::prelude::*;

/// Flatten `values` into strings.
///
/// Each value that the coalescer accepts as a vector is expanded one level
/// and its elements are coerced to strings; any other value is coerced to a
/// string itself. Nested vectors are rejected rather than flattened.
pub fn to_string_list(coalescer: &dyn Coalescer, values: &[Value]) -> ValueResult<Vec<String>> {
    let mut result = Vec::with_capacity(values.len());

    for value in values {
        if let Ok(items) = coalescer.to_vector(value) {
            for item in &items {
                let s = coalescer
                    .to_string(item)
                    .map_err(|_| ValueError::coercion("argument vector contains non-string"))?;
                result.push(s);
            }
            continue;
        }

        let s = coalescer.to_string(value).map_err(|_| {
            ValueError::coercion(format!(
                "argument is neither vector nor string, but {}",
                value.type_name()
            ))
        })?;
        result.push(s);
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tessera_value::{Humane, Object, Strict};

    #[test]
    fn test_mixed_scalars_and_vectors() {
        let values = [
            Value::from("a"),
            vec![Value::from("b"), Value::from("c")].into(),
            Value::Null,
            Value::from("d"),
        ];
        assert_eq!(to_string_list(&Strict, &values).unwrap(), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_nested_vectors_are_rejected() {
        let nested: Value = vec![Value::from(vec![Value::from("a")])].into();
        let err = to_string_list(&Strict, &[nested]).unwrap_err();
        assert_eq!(err, ValueError::coercion("argument vector contains non-string"));
    }

    #[test]
    fn test_non_strings_follow_the_coalescer() {
        let values = [Value::from(1), Value::from(true)];
        let err = to_string_list(&Strict, &values).unwrap_err();
        assert!(err.to_string().contains("neither vector nor string, but integer"));

        assert_eq!(to_string_list(&Humane, &values).unwrap(), vec!["1", "true"]);
    }

    #[test]
    fn test_objects_are_rejected() {
        let mut object = Object::new();
        object.insert("a".into(), Value::from("b"));
        assert!(to_string_list(&Humane, &[Value::Object(object)]).is_err());
    }
}
