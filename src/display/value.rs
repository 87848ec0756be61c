//! Loose JSON value semantics shared by the display helpers.
//!
//! Backend payloads and list rows are untyped, so presence checks and
//! string rendering follow a single set of rules here.

use serde_json::Value;

/// Rendering used when an object is coerced to text
pub const OBJECT_DISPLAY: &str = "[object Object]";

/// Whether a value counts as present.
///
/// `null`, `false`, `0`, `NaN` and the empty string are absent; every
/// object and array is present, even when empty.
pub fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0 && !f.is_nan()).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Field of an object when it exists and is present
pub fn present_field<'a>(value: &'a Value, key: &str) -> Option<&'a Value> {
    value.get(key).filter(|v| is_present(v))
}

/// Render a value as display text
pub fn display_string(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => display_string(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => OBJECT_DISPLAY.to_string(),
    }
}

/// Look up `key` in an object, or treat it as a position into an array
pub fn index_into<'a>(value: &'a Value, key: &str) -> Option<&'a Value> {
    match value {
        Value::Object(map) => map.get(key),
        Value::Array(items) => key.parse::<usize>().ok().and_then(|i| items.get(i)),
        _ => None,
    }
}
