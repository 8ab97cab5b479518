//! Host-callable set functions
//!
//! None of these modify their arguments. In-place variants are a host
//! convention: the host rebinds the variable to the returned set.

use tessera_value::prelude::*;

use crate::StringSet;
use crate::coerce::to_string_list;

/// Function table: name, implementation, description
pub const FUNCTIONS: &[(&str, Function, &str)] = &[
    ("new-set", new_set, "create a set filled with the given values"),
    ("new-key-set", new_key_set, "create a set filled with the keys of an object"),
    ("set-insert", set_insert, "returns a copy of the set with the newly added values inserted to it"),
    ("set-delete", set_delete, "returns a copy of the set with the given values removed from it"),
    ("set-union", set_union, "returns the union of two or more sets"),
    ("set-intersection", set_intersection, "returns the members present in both sets"),
    ("set-difference", set_difference, "returns the members of the first set missing from the second"),
    ("set-symmetric-difference", set_symmetric_difference, "returns the members present in exactly one of the sets"),
    ("set-equal?", set_equal, "returns true if both sets have the same members"),
    ("set-superset-of?", set_is_superset, "returns true if the first set contains every member of the second"),
    ("set-has?", set_has_all, "returns true if the set contains all of the given values"),
    ("set-has-any?", set_has_any, "returns true if the set contains at least one of the given values"),
    ("set-size", set_size, "returns the number of members"),
    ("set-list", set_list, "returns the members as a sorted vector"),
];

/// Borrow argument `position` as a set
fn expect_set(args: &[Value], position: usize) -> ValueResult<&StringSet> {
    let value = &args[position];
    value.downcast_ref::<StringSet>().ok_or_else(|| {
        ValueError::invalid_argument(position, format!("not a set, but {}", value.type_name()))
    })
}

fn set_result(function: &str, set: StringSet) -> Value {
    tracing::trace!(function, size = set.len(), "set operation");
    Value::from(set)
}

/// `(new-set "a" ["b" "c"])`
pub fn new_set(ctx: &Context, args: &[Value]) -> ValueResult<Value> {
    let items = to_string_list(ctx.coalesce(), args)?;
    Ok(set_result("new-set", items.into_iter().collect()))
}

/// `(new-key-set {a 1 b 2})`
pub fn new_key_set(_ctx: &Context, args: &[Value]) -> ValueResult<Value> {
    check_arg_count("new-key-set", args, 1)?;

    match &args[0] {
        Value::Object(object) => Ok(set_result("new-key-set", object.keys().cloned().collect())),
        other => Err(ValueError::invalid_argument(
            0,
            format!("not an object, but {}", other.type_name()),
        )),
    }
}

/// `(set-insert $set "x" ["y"])`
pub fn set_insert(ctx: &Context, args: &[Value]) -> ValueResult<Value> {
    check_min_arg_count("set-insert", args, 1)?;

    let set = expect_set(args, 0)?;
    let items = to_string_list(ctx.coalesce(), &args[1..])?;
    Ok(set_result("set-insert", set.insert(items)))
}

/// `(set-delete $set "x" ["y"])`
pub fn set_delete(ctx: &Context, args: &[Value]) -> ValueResult<Value> {
    check_min_arg_count("set-delete", args, 1)?;

    let set = expect_set(args, 0)?;
    let items = to_string_list(ctx.coalesce(), &args[1..])?;
    Ok(set_result("set-delete", set.delete(items)))
}

/// `(set-union $a $b $c ...)`
pub fn set_union(_ctx: &Context, args: &[Value]) -> ValueResult<Value> {
    check_min_arg_count("set-union", args, 2)?;

    let mut result = expect_set(args, 0)?.clone();
    for position in 1..args.len() {
        result = result.union(expect_set(args, position)?);
    }
    Ok(set_result("set-union", result))
}

fn binary(
    function: &str,
    args: &[Value],
    op: impl FnOnce(&StringSet, &StringSet) -> StringSet,
) -> ValueResult<Value> {
    check_arg_count(function, args, 2)?;

    let (a, b) = (expect_set(args, 0)?, expect_set(args, 1)?);
    Ok(set_result(function, op(a, b)))
}

/// `(set-intersection $a $b)`
pub fn set_intersection(_ctx: &Context, args: &[Value]) -> ValueResult<Value> {
    binary("set-intersection", args, StringSet::intersection)
}

/// `(set-difference $a $b)`
pub fn set_difference(_ctx: &Context, args: &[Value]) -> ValueResult<Value> {
    binary("set-difference", args, StringSet::difference)
}

/// `(set-symmetric-difference $a $b)`
pub fn set_symmetric_difference(_ctx: &Context, args: &[Value]) -> ValueResult<Value> {
    binary("set-symmetric-difference", args, StringSet::symmetric_difference)
}

/// `(set-equal? $a $b)`
pub fn set_equal(_ctx: &Context, args: &[Value]) -> ValueResult<Value> {
    check_arg_count("set-equal?", args, 2)?;

    let (a, b) = (expect_set(args, 0)?, expect_set(args, 1)?);
    Ok(Value::Bool(a.len() == b.len() && a.is_superset(b)))
}

/// `(set-superset-of? $a $b)`
pub fn set_is_superset(_ctx: &Context, args: &[Value]) -> ValueResult<Value> {
    check_arg_count("set-superset-of?", args, 2)?;

    let (a, b) = (expect_set(args, 0)?, expect_set(args, 1)?);
    Ok(Value::Bool(a.is_superset(b)))
}

/// `(set-has? $set "a" "b")`: true when every item is a member
pub fn set_has_all(ctx: &Context, args: &[Value]) -> ValueResult<Value> {
    check_min_arg_count("set-has?", args, 1)?;

    let set = expect_set(args, 0)?;
    let items = to_string_list(ctx.coalesce(), &args[1..])?;
    Ok(Value::Bool(set.has_all(&items)))
}

/// `(set-has-any? $set "a" "b")`: true when at least one item is a member
pub fn set_has_any(ctx: &Context, args: &[Value]) -> ValueResult<Value> {
    check_min_arg_count("set-has-any?", args, 1)?;

    let set = expect_set(args, 0)?;
    let items = to_string_list(ctx.coalesce(), &args[1..])?;
    Ok(Value::Bool(set.has_any(&items)))
}

/// `(set-size $set)`
pub fn set_size(_ctx: &Context, args: &[Value]) -> ValueResult<Value> {
    check_arg_count("set-size", args, 1)?;

    let set = expect_set(args, 0)?;
    Ok(Value::Integer(set.len() as i64))
}

/// `(set-list $set)`
pub fn set_list(_ctx: &Context, args: &[Value]) -> ValueResult<Value> {
    check_arg_count("set-list", args, 1)?;

    let set = expect_set(args, 0)?;
    Ok(set.iter().map(Value::from).collect())
}
