//! Path-based access for Value
//!
//! Supports dotted paths with indices: `user.name`, `items[0]`, `release.major`.
//! Keys resolve against objects and against opaque values that advertise
//! [`ObjectReader`](crate::capability::ObjectReader) /
//! [`ObjectWriter`](crate::capability::ObjectWriter). Writes never modify
//! their input; they return the updated root.

use std::fmt;
use std::str::FromStr;

use crate::{Value, ValueError, ValueResult};

/// Maximum number of path segments allowed
const MAX_PATH_SEGMENTS: usize = 100;

/// Path segment for navigating values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
    /// Object key access: .key
    Key(String),
    /// Vector index access: [index]
    Index(usize),
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Key(key) => write!(f, ".{key}"),
            Self::Index(index) => write!(f, "[{index}]"),
        }
    }
}

/// Parsed path
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Path {
    segments: Vec<PathSegment>,
}

impl Path {
    /// Create a path from segments
    pub fn new(segments: Vec<PathSegment>) -> Self {
        Self { segments }
    }

    /// Segments of this path
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    /// Whether the path addresses the root
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

impl FromStr for Path {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_path(s).map(Self::new)
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.segments {
            write!(f, "{segment}")?;
        }
        Ok(())
    }
}

impl Value {
    /// Get value by path (e.g. "user.name", "items[0]")
    pub fn get_path(&self, path: &str) -> ValueResult<Value> {
        get(self, &path.parse()?)
    }

    /// Return a copy of this value with the element at `path` replaced
    pub fn set_path(&self, path: &str, new_value: Value) -> ValueResult<Value> {
        set(self, &path.parse()?, new_value)
    }
}

/// Resolve `path` against `root`
pub fn get(root: &Value, path: &Path) -> ValueResult<Value> {
    let mut current = root.clone();
    for segment in path.segments() {
        current = get_segment(&current, segment)?;
    }
    Ok(current)
}

/// Return a copy of `root` with the element at `path` replaced by `new_value`
pub fn set(root: &Value, path: &Path, new_value: Value) -> ValueResult<Value> {
    set_segments(root, path.segments(), new_value)
}

fn get_segment(value: &Value, segment: &PathSegment) -> ValueResult<Value> {
    match (value, segment) {
        (Value::Object(map), PathSegment::Key(key)) => map
            .get(key)
            .cloned()
            .ok_or_else(|| ValueError::path(format!("no such key {key:?}"))),
        (Value::Vector(items), PathSegment::Index(index)) => {
            items.get(*index).cloned().ok_or_else(|| {
                ValueError::path(format!(
                    "index {index} out of range for vector of length {}",
                    items.len()
                ))
            })
        }
        (Value::Opaque(opaque), PathSegment::Key(key)) => match opaque.object_reader() {
            Some(reader) => reader.get_object_key(key),
            None => Err(ValueError::type_mismatch("object", opaque.type_name())),
        },
        (other, PathSegment::Key(_)) => Err(ValueError::type_mismatch("object", other.type_name())),
        (other, PathSegment::Index(_)) => Err(ValueError::type_mismatch("vector", other.type_name())),
    }
}

fn set_segments(value: &Value, segments: &[PathSegment], new_value: Value) -> ValueResult<Value> {
    let Some((segment, rest)) = segments.split_first() else {
        return Ok(new_value);
    };

    match (value, segment) {
        (Value::Object(map), PathSegment::Key(key)) => {
            let child = match map.get(key) {
                Some(child) => set_segments(child, rest, new_value)?,
                None if rest.is_empty() => new_value,
                None => return Err(ValueError::path(format!("no such key {key:?}"))),
            };
            let mut updated = map.clone();
            updated.insert(key.clone(), child);
            Ok(Value::Object(updated))
        }
        (Value::Vector(items), PathSegment::Index(index)) => {
            let Some(current) = items.get(*index) else {
                return Err(ValueError::path(format!(
                    "index {index} out of range for vector of length {}",
                    items.len()
                )));
            };
            let child = set_segments(current, rest, new_value)?;
            let mut updated = items.clone();
            updated[*index] = child;
            Ok(Value::Vector(updated))
        }
        (Value::Opaque(opaque), PathSegment::Key(key)) => {
            let Some(writer) = opaque.object_writer() else {
                return Err(ValueError::type_mismatch("writable object", opaque.type_name()));
            };
            let child = if rest.is_empty() {
                new_value
            } else {
                let current = get_segment(value, segment)?;
                set_segments(&current, rest, new_value)?
            };
            writer.set_object_key(key, child)
        }
        (other, PathSegment::Key(_)) => Err(ValueError::type_mismatch("object", other.type_name())),
        (other, PathSegment::Index(_)) => Err(ValueError::type_mismatch("vector", other.type_name())),
    }
}

/// Parse a path string into segments
///
/// Examples:
/// - "user.name" -> [Key("user"), Key("name")]
/// - "items[0]" -> [Key("items"), Index(0)]
/// - "data[0].value" -> [Key("data"), Index(0), Key("value")]
fn parse_path(path: &str) -> ValueResult<Vec<PathSegment>> {
    let mut segments = Vec::new();
    let mut current = String::new();
    let mut chars = path.chars();

    while let Some(ch) = chars.next() {
        match ch {
            '.' => {
                if !current.is_empty() {
                    push_segment(&mut segments, PathSegment::Key(std::mem::take(&mut current)))?;
                }
            }
            '[' => {
                if !current.is_empty() {
                    push_segment(&mut segments, PathSegment::Key(std::mem::take(&mut current)))?;
                }

                let mut index_str = String::new();
                let mut closed = false;
                for ch in chars.by_ref() {
                    if ch == ']' {
                        closed = true;
                        break;
                    }
                    index_str.push(ch);
                }
                if !closed {
                    return Err(ValueError::path(format!("unterminated index in {path:?}")));
                }

                let index = index_str.trim().parse::<usize>().map_err(|_| {
                    ValueError::path(format!("invalid index {index_str:?} in {path:?}"))
                })?;
                push_segment(&mut segments, PathSegment::Index(index))?;
            }
            _ => current.push(ch),
        }
    }

    if !current.is_empty() {
        push_segment(&mut segments, PathSegment::Key(current))?;
    }

    Ok(segments)
}

fn push_segment(segments: &mut Vec<PathSegment>, segment: PathSegment) -> ValueResult<()> {
    segments.push(segment);
    if segments.len() > MAX_PATH_SEGMENTS {
        return Err(ValueError::limit_exceeded(
            "path segments",
            MAX_PATH_SEGMENTS,
            segments.len(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Object;
    use pretty_assertions::assert_eq;

    fn sample() -> Value {
        let mut user = Object::new();
        user.insert("name".into(), Value::from("ada"));
        user.insert("tags".into(), ["a", "b"].into_iter().collect());
        let mut root = Object::new();
        root.insert("user".into(), Value::Object(user));
        Value::Object(root)
    }

    #[test]
    fn test_parse_path_complex() {
        let path: Path = "data[0].value".parse().unwrap();
        assert_eq!(
            path.segments(),
            &[
                PathSegment::Key("data".to_string()),
                PathSegment::Index(0),
                PathSegment::Key("value".to_string())
            ]
        );
        assert_eq!(path.to_string(), ".data[0].value");
    }

    #[test]
    fn test_parse_path_errors() {
        assert!("items[x]".parse::<Path>().is_err());
        assert!("items[0".parse::<Path>().is_err());

        let long = vec!["k"; MAX_PATH_SEGMENTS + 1].join(".");
        assert!(matches!(
            long.parse::<Path>(),
            Err(ValueError::LimitExceeded { .. })
        ));
    }

    #[test]
    fn test_get_nested() {
        let root = sample();
        assert_eq!(root.get_path("user.name").unwrap(), Value::from("ada"));
        assert_eq!(root.get_path("user.tags[1]").unwrap(), Value::from("b"));
        assert_eq!(root.get_path("").unwrap(), root);
        assert!(root.get_path("user.tags[5]").is_err());
        assert!(root.get_path("user.name.first").is_err());
    }

    #[test]
    fn test_set_returns_new_root() {
        let root = sample();
        let updated = root.set_path("user.tags[0]", Value::from("z")).unwrap();

        assert_eq!(updated.get_path("user.tags[0]").unwrap(), Value::from("z"));
        assert_eq!(root.get_path("user.tags[0]").unwrap(), Value::from("a"));
    }

    #[test]
    fn test_set_inserts_missing_leaf_key() {
        let updated = sample().set_path("user.age", Value::from(36)).unwrap();
        assert_eq!(updated.get_path("user.age").unwrap(), Value::from(36));
        assert!(sample().set_path("missing.age", Value::from(1)).is_err());
    }
}
