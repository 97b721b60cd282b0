//! Temporal coercions: date, datetime.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::value::Value;

/// Date layouts tried in order when parsing a string.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%d.%m.%Y", "%B %d, %Y", "%d %B %Y"];

/// Date-time layouts tried in order when parsing a string.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

pub(crate) fn is_date(value: &Value) -> bool {
    matches!(value, Value::Date(_))
}

pub(crate) fn to_date(value: &Value) -> Option<Value> {
    match value {
        Value::DateTime(dt) => Some(Value::Date(dt.date())),
        Value::String(s) => parse_date(s.trim()).map(Value::Date),
        _ => None,
    }
}

pub(crate) fn is_datetime(value: &Value) -> bool {
    matches!(value, Value::DateTime(_))
}

pub(crate) fn to_datetime(value: &Value) -> Option<Value> {
    match value {
        Value::Date(d) => d.and_hms_opt(0, 0, 0).map(Value::DateTime),
        Value::String(s) => {
            let s = s.trim();
            parse_datetime(s)
                .or_else(|| parse_date(s).and_then(|d| d.and_hms_opt(0, 0, 0)))
                .map(Value::DateTime)
        }
        _ => None,
    }
}

fn parse_date(s: &str) -> Option<NaiveDate> {
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
        .or_else(|| parse_datetime(s).map(|dt| dt.date()))
}

fn parse_datetime(s: &str) -> Option<NaiveDateTime> {
    DateTime::parse_from_rfc3339(s)
        .ok()
        .map(|dt| dt.naive_local())
        .or_else(|| {
            DATETIME_FORMATS
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        })
}
