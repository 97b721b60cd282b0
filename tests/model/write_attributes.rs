//! Integration tests for bulk writes

use tabula_foundation::{ErrorKind, Value};
use tabula_model::{Attributable, AttributeMap};

use crate::greeting::Greeting;

#[test]
fn bulk_write_applies_every_key() {
    let mut g = Greeting::new("world");
    g.write_attributes([("hello", Value::from("blabla")), ("count", Value::Int(20))])
        .unwrap();

    let expected: AttributeMap = [
        ("hello", Value::from("blabla")),
        ("string", Value::from("world")),
        ("count", Value::Int(20)),
        ("calc", Value::Int(5)),
        ("enum", Value::Nil),
    ]
    .into_iter()
    .collect();
    assert_eq!(g.attributes(), expected);
}

#[test]
fn bulk_write_accepts_owned_keys() {
    let mut g = Greeting::new("world");
    let pairs = vec![("count".to_string(), "7")];
    g.write_attributes(pairs).unwrap();
    assert_eq!(g.count().unwrap(), Value::Int(7));
}

#[test]
fn unknown_key_faults() {
    let mut g = Greeting::new("world");
    let err = g.write_attributes([("strange", "value")]).unwrap_err();

    assert!(matches!(err.kind, ErrorKind::UnknownAttribute { ref name } if name == "strange"));
    assert!(!g.has_attribute("strange"));
    assert!(!g.attribute_names().iter().any(|n| n == "strange"));
}

#[test]
fn unknown_key_error_names_the_bulk_write() {
    let mut g = Greeting::new("world");
    let err = g.write_attributes([("strange", "value")]).unwrap_err();

    let context = err.context.unwrap();
    assert_eq!(context.attribute.as_deref(), Some("strange"));
    assert_eq!(context.stack, vec!["write_attributes".to_string()]);
    assert!(context.to_string().contains("in write_attributes"));
}

#[test]
fn unknown_key_leaves_store_untouched() {
    let mut g = Greeting::new("world");
    g.count().unwrap();
    let before = g.attribute_store().clone();

    let result = g.write_attributes([
        ("hello", Value::from("x")),
        ("count", Value::Int(99)),
        ("strange", Value::from("y")),
    ]);

    assert!(result.is_err());
    assert_eq!(g.attribute_store(), &before);
    assert_eq!(g.count().unwrap(), Value::Int(10));
}

#[test]
fn bulk_write_coerces_each_value() {
    let mut g = Greeting::new("world");
    g.write_attributes([("count", "20"), ("calc", "3.7")]).unwrap();
    assert_eq!(g.count().unwrap(), Value::Int(20));
    assert_eq!(g.calc().unwrap(), Value::Int(3));
}
