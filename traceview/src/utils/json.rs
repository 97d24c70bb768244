//! JSON utility functions
//!
//! Guarded accessors over untyped `serde_json::Value` trees. Every accessor
//! returns `None` instead of assuming a field exists or has a given type.

use serde_json::Value as JsonValue;

/// Get a field of an object. Returns `None` for non-objects and missing keys.
#[inline]
pub fn get_field<'a>(value: &'a JsonValue, key: &str) -> Option<&'a JsonValue> {
    value.as_object()?.get(key)
}

/// Walk a sequence of object keys.
///
/// ```
/// use serde_json::json;
/// use traceview::utils::json::get_path;
///
/// let value = json!({"message": {"kwargs": {"type": "ai"}}});
/// assert_eq!(get_path(&value, &["message", "kwargs", "type"]), Some(&json!("ai")));
/// assert_eq!(get_path(&value, &["message", "content"]), None);
/// ```
pub fn get_path<'a>(value: &'a JsonValue, keys: &[&str]) -> Option<&'a JsonValue> {
    keys.iter().try_fold(value, |current, key| get_field(current, key))
}

/// Get a field that must be an array.
#[inline]
pub fn get_array<'a>(value: &'a JsonValue, key: &str) -> Option<&'a Vec<JsonValue>> {
    get_field(value, key)?.as_array()
}

/// Get a field that must be a string (possibly empty).
#[inline]
pub fn get_str<'a>(value: &'a JsonValue, key: &str) -> Option<&'a str> {
    get_field(value, key)?.as_str()
}

/// Get a field that must be a non-empty string.
#[inline]
pub fn get_non_empty_str<'a>(value: &'a JsonValue, key: &str) -> Option<&'a str> {
    get_str(value, key).filter(|s| !s.is_empty())
}

/// Check that a field is a string equal to `expected`.
#[inline]
pub fn field_equals(value: &JsonValue, key: &str, expected: &str) -> bool {
    get_str(value, key) == Some(expected)
}

/// Value of a container's only entry.
///
/// An object with exactly one key yields that key's value; an array with
/// exactly one element yields the element. Anything else is `None`.
pub fn sole_entry_value(value: &JsonValue) -> Option<&JsonValue> {
    match value {
        JsonValue::Object(obj) if obj.len() == 1 => obj.values().next(),
        JsonValue::Array(items) if items.len() == 1 => items.first(),
        _ => None,
    }
}

/// Look up a key that may contain dots.
///
/// A literal key wins; otherwise the key is split on `.` and walked as a path,
/// so `"sys.query"` finds both `{"sys.query": ..}` and `{"sys": {"query": ..}}`.
pub fn get_dotted<'a>(value: &'a JsonValue, key: &str) -> Option<&'a JsonValue> {
    if let Some(found) = get_field(value, key) {
        return Some(found);
    }
    if !key.contains('.') {
        return None;
    }
    let segments: Vec<&str> = key.split('.').collect();
    get_path(value, &segments)
}

/// JavaScript-style truthiness of an optional JSON value.
///
/// Missing, `null`, `false`, `0` and `""` are falsy. Objects and arrays are
/// truthy even when empty.
pub fn is_truthy(value: Option<&JsonValue>) -> bool {
    match value {
        None | Some(JsonValue::Null) => false,
        Some(JsonValue::Bool(b)) => *b,
        Some(JsonValue::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Some(JsonValue::String(s)) => !s.is_empty(),
        Some(JsonValue::Array(_)) | Some(JsonValue::Object(_)) => true,
    }
}
