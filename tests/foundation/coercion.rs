//! Integration tests for the coercer registry
//!
//! Tests built-in coercions, nil and canonical pass-through, and custom tags.

use chrono::{NaiveDate, NaiveDateTime};
use tabula_foundation::{CoercerRegistry, ErrorKind, FnCoercer, TypeTag, Value};

fn cast(tag: &TypeTag, value: impl Into<Value>) -> Value {
    CoercerRegistry::standard().cast(Some(tag), value.into())
}

// =============================================================================
// Built-in Coercions
// =============================================================================

#[test]
fn untyped_passes_through() {
    let registry = CoercerRegistry::standard();
    assert_eq!(registry.cast(None, Value::from("10")), Value::from("10"));
}

#[test]
fn nil_is_never_coerced() {
    for tag in CoercerRegistry::standard().tags() {
        assert_eq!(cast(tag, Value::Nil), Value::Nil, "tag {tag}");
    }
}

#[test]
fn string_coercion() {
    assert_eq!(cast(&TypeTag::STRING, 10), Value::from("10"));
    assert_eq!(cast(&TypeTag::STRING, "hello"), Value::from("hello"));
}

#[test]
fn integer_coercion() {
    assert_eq!(cast(&TypeTag::INTEGER, "20"), Value::Int(20));
    assert_eq!(cast(&TypeTag::INTEGER, 2.9), Value::Int(2));
    assert_eq!(cast(&TypeTag::INTEGER, "many"), Value::Nil);
}

#[test]
fn float_coercion() {
    assert_eq!(cast(&TypeTag::FLOAT, "1.25"), Value::Float(1.25));
    assert_eq!(cast(&TypeTag::FLOAT, 2), Value::Float(2.0));
}

#[test]
fn boolean_coercion() {
    assert_eq!(cast(&TypeTag::BOOLEAN, "true"), Value::Bool(true));
    assert_eq!(cast(&TypeTag::BOOLEAN, "0"), Value::Bool(false));
    assert_eq!(cast(&TypeTag::BOOLEAN, "perhaps"), Value::Nil);
}

#[test]
fn date_coercion() {
    let expected = NaiveDate::from_ymd_opt(2012, 4, 1).unwrap();
    assert_eq!(cast(&TypeTag::DATE, "2012-04-01"), Value::Date(expected));
    assert_eq!(cast(&TypeTag::DATE, "2012-04-01T10:30:00"), Value::Date(expected));
    assert_eq!(cast(&TypeTag::DATE, "someday"), Value::Nil);
}

#[test]
fn datetime_coercion() {
    let expected =
        NaiveDateTime::parse_from_str("2012-04-01 10:30:00", "%Y-%m-%d %H:%M:%S").unwrap();
    assert_eq!(
        cast(&TypeTag::DATETIME, "2012-04-01 10:30:00"),
        Value::DateTime(expected)
    );
}

#[test]
fn array_wraps_scalars() {
    assert_eq!(cast(&TypeTag::ARRAY, "a"), Value::from(vec!["a"]));
    let already = Value::from(vec![1i32, 2]);
    assert_eq!(cast(&TypeTag::ARRAY, already.clone()), already);
}

// =============================================================================
// Custom Coercers
// =============================================================================

fn is_upper(value: &Value) -> bool {
    value
        .as_str()
        .is_some_and(|s| s.chars().all(|c| !c.is_lowercase()))
}

fn to_upper(value: &Value) -> Option<Value> {
    value.as_str().map(|s| Value::from(s.to_uppercase()))
}

#[test]
fn custom_tag_registration() {
    let mut registry = CoercerRegistry::with_builtins();
    let shout = TypeTag::new("shout");
    registry
        .register(shout.clone(), FnCoercer::new("shout", is_upper, to_upper))
        .unwrap();

    assert!(registry.contains(&shout));
    assert_eq!(registry.cast(Some(&shout), Value::from("hi")), Value::from("HI"));
    assert_eq!(registry.cast(Some(&shout), Value::Int(1)), Value::Nil);
}

#[test]
fn duplicate_registration_fails() {
    let mut registry = CoercerRegistry::with_builtins();
    let err = registry
        .register(TypeTag::INTEGER, FnCoercer::new("shout", is_upper, to_upper))
        .unwrap_err();
    assert!(matches!(err.kind, ErrorKind::DuplicateType(_)));
}

#[test]
fn replace_overrides_builtin() {
    let mut registry = CoercerRegistry::with_builtins();
    assert!(registry.replace(TypeTag::STRING, FnCoercer::new("shout", is_upper, to_upper)));
    assert_eq!(
        registry.cast(Some(&TypeTag::STRING), Value::from("hi")),
        Value::from("HI")
    );
}

#[test]
fn unregistered_tag_keeps_value() {
    let registry = CoercerRegistry::new();
    assert_eq!(
        registry.cast(Some(&TypeTag::INTEGER), Value::from("10")),
        Value::from("10")
    );
}

#[test]
fn registered_coercer_is_a_trait_object() {
    let registry = CoercerRegistry::standard();
    let coercer = registry.get(&TypeTag::INTEGER).unwrap();
    assert!(coercer.is_canonical(&Value::Int(1)));
    assert_eq!(coercer.coerce(&Value::from("3")), Some(Value::Int(3)));
}
