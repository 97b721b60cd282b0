//! Integration tests for accessor dispatch by method name

use tabula_foundation::{ErrorKind, Value};
use tabula_model::Attributable;

use crate::greeting::Greeting;

#[test]
fn reader_and_writer_dispatch() {
    let mut g = Greeting::new("world");

    assert_eq!(g.call_accessor("count", &[]).unwrap(), Value::Int(10));
    let returned = g.call_accessor("count=", &[Value::from("20")]).unwrap();
    assert_eq!(returned, Value::from("20"));
    assert_eq!(g.call_accessor("count", &[]).unwrap(), Value::Int(20));
}

#[test]
fn undeclared_method_faults() {
    let mut g = Greeting::new("world");
    let err = g.call_accessor("strange", &[]).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::UndefinedAccessor(ref m) if m == "strange"));
}

#[test]
fn wrong_arity_faults() {
    let mut g = Greeting::new("world");

    let err = g.call_accessor("hello=", &[]).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::ArityMismatch { actual: 0, .. }));

    let err = g
        .call_accessor("hello", &[Value::Nil, Value::Nil])
        .unwrap_err();
    assert!(matches!(err.kind, ErrorKind::ArityMismatch { actual: 2, .. }));
}

#[test]
fn generated_methods_share_storage_with_dispatch() {
    let mut g = Greeting::new("world");
    g.set_hello("x").unwrap();
    assert_eq!(g.call_accessor("hello", &[]).unwrap(), Value::from("x"));
}
