//! Integration tests for Value types
//!
//! Tests Value variants, blankness, equality, display, and conversions.

use std::collections::HashSet;

use chrono::NaiveDate;
use tabula_foundation::{LtMap, LtVec, Value};

// =============================================================================
// Construction
// =============================================================================

#[test]
fn value_from_scalars() {
    assert_eq!(Value::from(true), Value::Bool(true));
    assert_eq!(Value::from(42i64), Value::Int(42));
    assert_eq!(Value::from(42i32), Value::Int(42));
    assert_eq!(Value::from(1.5), Value::Float(1.5));
    assert_eq!(Value::from("hello").as_str(), Some("hello"));
}

#[test]
fn value_from_option() {
    assert_eq!(Value::from(None::<i64>), Value::Nil);
    assert_eq!(Value::from(Some("x")), Value::from("x"));
}

#[test]
fn value_from_vec() {
    let v = Value::from(vec![1i32, 2, 3]);
    let items = v.as_vec().unwrap();
    assert_eq!(items.len(), 3);
    assert_eq!(items.get(1), Some(&Value::Int(2)));
}

#[test]
fn value_from_date() {
    let d = NaiveDate::from_ymd_opt(2012, 4, 1).unwrap();
    assert_eq!(Value::from(d).as_date(), Some(d));
    assert_eq!(Value::from(d).kind(), "date");
}

// =============================================================================
// Blankness
// =============================================================================

#[test]
fn blank_values() {
    assert!(Value::Nil.is_blank());
    assert!(Value::Bool(false).is_blank());
    assert!(Value::from("").is_blank());
    assert!(Value::from("   \t").is_blank());
    assert!(Value::Vec(LtVec::new()).is_blank());
    assert!(Value::Map(LtMap::new()).is_blank());
}

#[test]
fn present_values() {
    assert!(Value::Bool(true).is_present());
    assert!(Value::Int(0).is_present());
    assert!(Value::Float(0.0).is_present());
    assert!(Value::from("0").is_present());
    assert!(Value::from(vec![Value::Nil]).is_present());
}

// =============================================================================
// Equality and Hashing
// =============================================================================

#[test]
fn int_and_float_are_distinct() {
    assert_ne!(Value::Int(1), Value::Float(1.0));
}

#[test]
fn values_usable_as_set_members() {
    let set: HashSet<Value> = [Value::Int(1), Value::from("a"), Value::Int(1)]
        .into_iter()
        .collect();
    assert_eq!(set.len(), 2);
}

#[test]
fn maps_compare_by_contents() {
    let a: LtMap<Value, Value> = [(Value::from("k"), Value::Int(1))].into_iter().collect();
    let mut b = LtMap::new();
    b.insert(Value::from("k"), Value::Int(1));
    assert_eq!(Value::Map(a), Value::Map(b));
}

// =============================================================================
// Display
// =============================================================================

#[test]
fn display_scalars() {
    assert_eq!(Value::Nil.to_string(), "nil");
    assert_eq!(Value::Int(10).to_string(), "10");
    assert_eq!(Value::from("hello").to_string(), "hello");
}

#[test]
fn display_vec() {
    assert_eq!(Value::from(vec![1i32, 2]).to_string(), "[1 2]");
}

#[test]
fn debug_quotes_strings() {
    assert_eq!(format!("{:?}", Value::from("hi")), "\"hi\"");
}
