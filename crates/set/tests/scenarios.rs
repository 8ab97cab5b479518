//! Set functions used the way the host evaluator calls them

use pretty_assertions::assert_eq;
use tessera_set::StringSet;
use tessera_set::functions::{
    new_set, set_delete, set_equal, set_has_all, set_has_any, set_insert, set_union,
};
use tessera_value::{Context, Value, deepcopy, equality};

fn strings(items: &[&str]) -> Vec<Value> {
    items.iter().map(|s| Value::from(*s)).collect()
}

fn members(value: &Value) -> Vec<String> {
    value.downcast_ref::<StringSet>().unwrap().to_vec()
}

#[test]
fn insert_returns_a_new_set() {
    tessera_log::init_test();
    let ctx = Context::strict();
    let original = new_set(&ctx, &strings(&["a", "b"])).unwrap();

    let inserted = set_insert(&ctx, &[original.clone(), Value::from("c")]).unwrap();

    assert_eq!(members(&inserted), vec!["a", "b", "c"]);
    assert_eq!(members(&original), vec!["a", "b"]);
}

#[test]
fn delete_returns_a_new_set() {
    let ctx = Context::strict();
    let original = new_set(&ctx, &strings(&["a", "b", "c"])).unwrap();

    let deleted = set_delete(&ctx, &[original.clone(), strings(&["a", "c"]).into()]).unwrap();

    assert_eq!(members(&deleted), vec!["b"]);
    assert_eq!(members(&original), vec!["a", "b", "c"]);
}

#[test]
fn union_folds_left() {
    let ctx = Context::strict();
    let groups: [&[&str]; 3] = [&["a", "b"], &["a"], &["d"]];
    let sets: Vec<Value> = groups
        .iter()
        .map(|items| new_set(&ctx, &strings(items)).unwrap())
        .collect();

    let union = set_union(&ctx, &sets).unwrap();
    assert_eq!(members(&union), vec!["a", "b", "d"]);
}

#[test]
fn membership_predicates() {
    let ctx = Context::strict();
    let set = new_set(&ctx, &strings(&["a", "b"])).unwrap();
    let ask = |f: fn(&Context, &[Value]) -> tessera_value::ValueResult<Value>, items: &[&str]| {
        let mut args = vec![set.clone()];
        args.extend(strings(items));
        f(&ctx, &args).unwrap()
    };

    assert_eq!(ask(set_has_all, &["a", "b"]), Value::Bool(true));
    assert_eq!(ask(set_has_all, &["a", "z"]), Value::Bool(false));
    assert_eq!(ask(set_has_any, &["z", "a"]), Value::Bool(true));
    assert_eq!(ask(set_has_any, &["z"]), Value::Bool(false));
}

#[test]
fn nested_lists_are_rejected() {
    let ctx = Context::strict();
    let nested: Value = vec![Value::from(strings(&["a"]))].into();
    assert!(new_set(&ctx, &[nested]).is_err());
}

#[test]
fn numbers_need_a_humane_coalescer() {
    let args = [Value::from(1), Value::from("2")];
    assert!(new_set(&Context::strict(), &args).is_err());

    let set = new_set(&Context::humane(), &args).unwrap();
    assert_eq!(members(&set), vec!["1", "2"]);
}

#[test]
fn sets_compare_through_the_runtime_helpers() {
    let ctx = Context::strict();
    let a = new_set(&ctx, &strings(&["x", "y"])).unwrap();
    let b = new_set(&ctx, &strings(&["y", "x"])).unwrap();
    let c = new_set(&ctx, &strings(&["x"])).unwrap();

    assert!(equality::equal(ctx.coalesce(), &a, &b).unwrap());
    assert!(!equality::equal(ctx.coalesce(), &a, &c).unwrap());
    assert_eq!(set_equal(&ctx, &[a.clone(), b]).unwrap(), Value::Bool(true));

    let err = equality::equal(ctx.coalesce(), &a, &Value::from("x")).unwrap_err();
    assert!(err.is_incompatible_types());
}

#[test]
fn deep_copy_produces_an_independent_set() {
    let ctx = Context::strict();
    let original = new_set(&ctx, &strings(&["a"])).unwrap();
    let copy = deepcopy::deep_copy(&original).unwrap();

    assert_eq!(copy, original);
    assert!(!copy.as_opaque().unwrap().ptr_eq(original.as_opaque().unwrap()));
}
