//! Scalar coercions: string, integer, float, boolean, array.

use crate::value::Value;

// =============================================================================
// String
// =============================================================================

pub(crate) fn is_string(value: &Value) -> bool {
    matches!(value, Value::String(_))
}

pub(crate) fn to_string(value: &Value) -> Option<Value> {
    match value {
        Value::Bool(_)
        | Value::Int(_)
        | Value::Float(_)
        | Value::Date(_)
        | Value::DateTime(_) => Some(Value::from(value.to_string())),
        _ => None,
    }
}

// =============================================================================
// Integer
// =============================================================================

pub(crate) fn is_integer(value: &Value) -> bool {
    matches!(value, Value::Int(_))
}

pub(crate) fn to_integer(value: &Value) -> Option<Value> {
    match value {
        Value::Float(n) => truncate(*n),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<i64>()
                .ok()
                .map(Value::Int)
                .or_else(|| s.parse::<f64>().ok().and_then(truncate))
        }
        _ => None,
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn truncate(n: f64) -> Option<Value> {
    if n.is_finite() && n >= i64::MIN as f64 && n < i64::MAX as f64 {
        Some(Value::Int(n.trunc() as i64))
    } else {
        None
    }
}

// =============================================================================
// Float
// =============================================================================

pub(crate) fn is_float(value: &Value) -> bool {
    matches!(value, Value::Float(_))
}

#[allow(clippy::cast_precision_loss)]
pub(crate) fn to_float(value: &Value) -> Option<Value> {
    match value {
        Value::Int(n) => Some(Value::Float(*n as f64)),
        Value::String(s) => s
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|n| n.is_finite())
            .map(Value::Float),
        _ => None,
    }
}

// =============================================================================
// Boolean
// =============================================================================

pub(crate) fn is_boolean(value: &Value) -> bool {
    matches!(value, Value::Bool(_))
}

pub(crate) fn to_boolean(value: &Value) -> Option<Value> {
    match value {
        Value::Int(0) => Some(Value::Bool(false)),
        Value::Int(1) => Some(Value::Bool(true)),
        Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
            "true" | "t" | "1" | "yes" | "y" | "on" => Some(Value::Bool(true)),
            "false" | "f" | "0" | "no" | "n" | "off" => Some(Value::Bool(false)),
            _ => None,
        },
        _ => None,
    }
}

// =============================================================================
// Array
// =============================================================================

pub(crate) fn is_array(value: &Value) -> bool {
    matches!(value, Value::Vec(_))
}

pub(crate) fn to_array(value: &Value) -> Option<Value> {
    Some(Value::Vec(std::iter::once(value.clone()).collect()))
}
