//! Immutable set of strings
//!
//! Every operation returns a new set and leaves the receiver untouched.
//! Iteration is sorted.

use std::any::Any;
use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fmt;

use tessera_value::prelude::*;

/// Type name reported to the value layer
pub const TYPE_NAME: &str = "set";

/// Set of unique strings
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StringSet(BTreeSet<String>);

impl StringSet {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of members
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the set has no members
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Exact membership test
    pub fn contains(&self, item: &str) -> bool {
        self.0.contains(item)
    }

    /// Members in sorted order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Copy of this set with `items` added
    pub fn insert<I, S>(&self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut members = self.0.clone();
        members.extend(items.into_iter().map(Into::into));
        Self(members)
    }

    /// Copy of this set with `items` removed
    pub fn delete<I, S>(&self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut members = self.0.clone();
        for item in items {
            members.remove(item.as_ref());
        }
        Self(members)
    }

    /// Members of either set
    pub fn union(&self, other: &Self) -> Self {
        Self(self.0.union(&other.0).cloned().collect())
    }

    /// Members of both sets
    pub fn intersection(&self, other: &Self) -> Self {
        Self(self.0.intersection(&other.0).cloned().collect())
    }

    /// Members of this set that are not in `other`
    pub fn difference(&self, other: &Self) -> Self {
        Self(self.0.difference(&other.0).cloned().collect())
    }

    /// Members of exactly one of the two sets
    pub fn symmetric_difference(&self, other: &Self) -> Self {
        Self(self.0.symmetric_difference(&other.0).cloned().collect())
    }

    /// Whether every member of `other` is in this set
    pub fn is_superset(&self, other: &Self) -> bool {
        self.0.is_superset(&other.0)
    }

    /// Whether every item is a member; vacuously true for no items
    pub fn has_all<I, S>(&self, items: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        items.into_iter().all(|item| self.contains(item.as_ref()))
    }

    /// Whether at least one item is a member
    pub fn has_any<I, S>(&self, items: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        items.into_iter().any(|item| self.contains(item.as_ref()))
    }

    /// Members as a sorted vector
    pub fn to_vec(&self) -> Vec<String> {
        self.0.iter().cloned().collect()
    }
}

impl<S: Into<String>> FromIterator<S> for StringSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl fmt::Display for StringSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, member) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{member:?}")?;
        }
        f.write_str("}")
    }
}

impl Comparer for StringSet {
    fn compare(&self, other: &Value) -> ValueResult<Ordering> {
        match other.downcast_ref::<StringSet>() {
            Some(other) => Ok(self.cmp(other)),
            None => Err(ValueError::incompatible_types(TYPE_NAME, other.type_name())),
        }
    }
}

impl Copier for StringSet {
    fn deep_copy(&self) -> ValueResult<Value> {
        Ok(Value::opaque(self.clone()))
    }
}

impl Opaque for StringSet {
    fn type_name(&self) -> &'static str {
        TYPE_NAME
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_comparer(&self) -> Option<&dyn Comparer> {
        Some(self)
    }

    fn as_copier(&self) -> Option<&dyn Copier> {
        Some(self)
    }
}

impl From<StringSet> for Value {
    fn from(set: StringSet) -> Self {
        Value::opaque(set)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn set(items: &[&str]) -> StringSet {
        items.iter().copied().collect()
    }

    #[test]
    fn test_duplicates_collapse() {
        let s = set(&["b", "a", "b"]);
        assert_eq!(s.len(), 2);
        assert_eq!(s.to_vec(), vec!["a", "b"]);
        assert_eq!(s.to_string(), r#"{"a" "b"}"#);
    }

    #[test]
    fn test_insert_and_delete_leave_receiver_untouched() {
        let original = set(&["a", "b"]);

        let inserted = original.insert(["c"]);
        assert_eq!(inserted, set(&["a", "b", "c"]));

        let deleted = original.delete(["a", "zzz"]);
        assert_eq!(deleted, set(&["b"]));

        assert_eq!(original, set(&["a", "b"]));
    }

    #[test]
    fn test_algebra() {
        let a = set(&["a", "b", "c"]);
        let b = set(&["b", "c", "d"]);

        assert_eq!(a.union(&b), set(&["a", "b", "c", "d"]));
        assert_eq!(a.intersection(&b), set(&["b", "c"]));
        assert_eq!(a.difference(&b), set(&["a"]));
        assert_eq!(a.symmetric_difference(&b), set(&["a", "d"]));
        assert!(a.is_superset(&set(&["a", "c"])));
        assert!(!a.is_superset(&b));
    }

    #[test]
    fn test_membership() {
        let s = set(&["a", "b"]);
        assert!(s.has_all(["a", "b"]));
        assert!(!s.has_all(["a", "x"]));
        assert!(s.has_any(["x", "b"]));
        assert!(!s.has_any(["x"]));
        assert!(s.has_all(Vec::<String>::new()));
        assert!(!s.has_any(Vec::<String>::new()));
    }

    #[test]
    fn test_compare() {
        let a = set(&["a", "b"]);
        assert_eq!(a.compare(&Value::from(set(&["b", "a"]))).unwrap(), Ordering::Equal);
        assert_eq!(a.compare(&Value::from(set(&["a", "c"]))).unwrap(), Ordering::Less);
        assert!(a.compare(&Value::from("a")).unwrap_err().is_incompatible_types());
    }
}
