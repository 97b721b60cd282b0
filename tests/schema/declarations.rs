//! Integration tests for attribute declarations
//!
//! Tests declaration order, redeclaration, type strictness, and defaults.

use std::sync::Arc;

use tabula_foundation::{CoercerRegistry, ErrorKind, FnCoercer, TypeTag, Value};
use tabula_schema::{AttributeDefinition, AttributeSchema, DefaultSpec, SchemaConfig};

type Schema = AttributeSchema<()>;

fn names(schema: &Schema) -> Vec<&str> {
    schema.attribute_names().map(|n| n.as_str()).collect()
}

// =============================================================================
// Ordering
// =============================================================================

#[test]
fn declaration_order_is_kept() {
    let mut schema = Schema::new("Greeting");
    for name in ["hello", "string", "count", "calc"] {
        schema.attribute(AttributeDefinition::new(name)).unwrap();
    }
    assert_eq!(names(&schema), vec!["hello", "string", "count", "calc"]);
    assert_eq!(schema.len(), 4);
}

#[test]
fn redeclaration_replaces_in_place() {
    let mut schema = Schema::new("Greeting");
    schema.attribute(AttributeDefinition::new("a")).unwrap();
    schema.attribute(AttributeDefinition::new("b")).unwrap();
    schema
        .attribute(AttributeDefinition::new("a").with_default(1))
        .unwrap();

    assert_eq!(names(&schema), vec!["a", "b"]);
    let a = schema.definition("a").unwrap();
    assert!(matches!(a.default_spec(), DefaultSpec::Static(Value::Int(1))));
}

// =============================================================================
// Type Tags
// =============================================================================

#[test]
fn strict_schema_rejects_unknown_type() {
    let mut schema = Schema::new("Greeting");
    let err = schema
        .attribute(AttributeDefinition::new("price").with_type("money"))
        .unwrap_err();

    assert!(matches!(err.kind, ErrorKind::UnknownType(_)));
    assert!(schema.is_empty());
}

#[test]
fn lenient_schema_keeps_unknown_type() {
    let mut schema = Schema::with_config("Greeting", SchemaConfig::lenient());
    schema
        .attribute(AttributeDefinition::new("price").with_type("money"))
        .unwrap();

    let def = schema.definition("price").unwrap();
    assert_eq!(schema.cast(def, Value::from("12")), Value::from("12"));
}

#[test]
fn custom_registry_enables_tag() {
    fn is_cents(value: &Value) -> bool {
        matches!(value, Value::Int(_))
    }
    fn to_cents(value: &Value) -> Option<Value> {
        value.as_float().map(|f| Value::Int((f * 100.0).round() as i64))
    }

    let mut registry = CoercerRegistry::with_builtins();
    registry
        .register(TypeTag::new("money"), FnCoercer::new("money", is_cents, to_cents))
        .unwrap();
    let config = SchemaConfig::default().with_coercers(Arc::new(registry));

    let schema = Schema::with_config("Invoice", config)
        .with_attribute(AttributeDefinition::new("price").with_type("money"))
        .unwrap();
    let def = schema.definition("price").unwrap();
    assert_eq!(schema.cast(def, Value::Float(1.25)), Value::Int(125));
}

// =============================================================================
// Defaults
// =============================================================================

#[test]
fn static_default_evaluates_without_instance() {
    let def = AttributeDefinition::<()>::new("count").with_default(10);
    assert_eq!(def.evaluate_static_default().unwrap(), Value::Int(10));
}

#[test]
fn computed_default_evaluates_without_instance() {
    let def = AttributeDefinition::<()>::new("calc").with_computed_default(|| Value::Int(5));
    assert_eq!(def.evaluate_static_default().unwrap(), Value::Int(5));
}

#[test]
fn instance_default_needs_instance() {
    let def = AttributeDefinition::<()>::new("string")
        .with_instance_default(|_: &()| Value::from("world"));

    let err = def.evaluate_static_default().unwrap_err();
    assert!(matches!(err.kind, ErrorKind::MissingContext { .. }));
    assert_eq!(def.resolve_default(&()), Value::from("world"));
}

#[test]
fn missing_default_is_nil() {
    let def = AttributeDefinition::<()>::new("hello");
    assert!(def.default_spec().is_none());
    assert_eq!(def.resolve_default(&()), Value::Nil);
}

#[test]
fn allowed_values_are_recorded() {
    let schema = Schema::new("Greeting")
        .with_attribute(
            AttributeDefinition::new("enum")
                .with_type(TypeTag::INTEGER)
                .with_allowed_values([1, 2, 3]),
        )
        .unwrap();

    let values = schema.enum_values("enum").unwrap();
    assert_eq!(values.len(), 3);
    assert!(values.contains(&Value::Int(2)));
    assert!(schema.enum_values("strange").is_none());
}

#[test]
fn custom_blank_predicate() {
    let config = SchemaConfig::default().with_blank(Value::is_nil);
    let schema = Schema::with_config("Greeting", config);
    assert!(!schema.is_blank(&Value::from("")));
    assert!(schema.is_blank(&Value::Nil));
}
