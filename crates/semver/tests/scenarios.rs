//! Versions used through the generic runtime helpers

use std::cmp::Ordering;

use pretty_assertions::assert_eq;
use rstest::rstest;
use tessera_semver::functions::semver;
use tessera_value::{Context, Value, deepcopy, equality};

fn parse(ctx: &Context, s: &str) -> Value {
    semver(ctx, &[Value::from(s)]).unwrap()
}

#[rstest]
#[case("major", 9)]
#[case("minor", 2)]
#[case("patch", 0)]
fn field_access_through_paths(#[case] field: &str, #[case] expected: i64) {
    tessera_log::init_test();
    let version = parse(&Context::strict(), "v9.2");
    assert_eq!(version.get_path(field).unwrap(), Value::from(expected));
}

#[test]
fn string_form_is_canonical() {
    let ctx = Context::strict();
    let version = parse(&ctx, "v9.2");
    assert_eq!(ctx.coalesce().to_string(&version).unwrap(), "9.2.0");
    assert!(ctx.coalesce().to_int64(&version).is_err());
    assert!(Context::humane().coalesce().to_int64(&version).is_err());
}

#[rstest]
#[case("v9.2", "9.2.0", true)]
#[case("v9.2", "9.2.1", false)]
fn humane_equality_against_strings(#[case] version: &str, #[case] text: &str, #[case] expected: bool) {
    let ctx = Context::humane();
    let version = parse(&ctx, version);
    let text = Value::from(text);

    assert_eq!(equality::equal(ctx.coalesce(), &version, &text).unwrap(), expected);
    assert_eq!(equality::equal(ctx.coalesce(), &text, &version).unwrap(), expected);
}

#[test]
fn strict_equality_against_strings_is_an_error() {
    let ctx = Context::strict();
    let version = parse(&ctx, "v9.2");
    let err = equality::equal(ctx.coalesce(), &version, &Value::from("9.2.0")).unwrap_err();
    assert!(err.is_incompatible_types());
}

#[rstest]
#[case("v9.2", "v9.2", Ordering::Equal)]
#[case("v9.2", "v9.1", Ordering::Greater)]
#[case("v9.2", "v9.3", Ordering::Less)]
#[case("v9.2", "v9.2.0-alpha.0", Ordering::Greater)]
#[case("1.0.0+build1", "1.0.0+build2", Ordering::Equal)]
fn ordering_between_versions(#[case] left: &str, #[case] right: &str, #[case] expected: Ordering) {
    let ctx = Context::strict();
    let (left, right) = (parse(&ctx, left), parse(&ctx, right));

    assert_eq!(equality::compare(ctx.coalesce(), &left, &right).unwrap(), expected);
    assert_eq!(
        equality::equal(ctx.coalesce(), &left, &right).unwrap(),
        expected == Ordering::Equal
    );
}

#[test]
fn setting_a_field_leaves_the_original_alone() {
    let ctx = Context::strict();
    let version = parse(&ctx, "1.2.3-rc.1");
    let bumped = version.set_path("patch", Value::from(4)).unwrap();

    assert_eq!(bumped.to_string(), "semver(1.2.4-rc.1)");
    assert_eq!(version.to_string(), "semver(1.2.3-rc.1)");
    assert!(version.set_path("patch", Value::from(1.5)).is_err());
    assert!(version.set_path("epoch", Value::from(1)).is_err());
}

#[test]
fn deep_copy_inside_collections() {
    let ctx = Context::strict();
    let original: Value = vec![parse(&ctx, "1.0.0-beta.1"), Value::from("x")].into();
    let copy = deepcopy::deep_copy(&original).unwrap();

    assert_eq!(copy, original);
    let (Some(a), Some(b)) = (
        original.get_path("[0]").unwrap().as_opaque().cloned(),
        copy.get_path("[0]").unwrap().as_opaque().cloned(),
    ) else {
        panic!("expected opaque versions");
    };
    assert!(!a.ptr_eq(&b));
}

#[test]
fn serializes_as_version_string() {
    let ctx = Context::strict();
    let value: Value = vec![parse(&ctx, "v1")].into();
    assert_eq!(serde_json::to_string(&value).unwrap(), r#"["1.0.0"]"#);
}
