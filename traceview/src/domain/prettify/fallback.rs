//! Schema-agnostic fallback for arbitrary application JSON.

use serde_json::Value as JsonValue;

use super::types::Direction;
use crate::utils::json::{get_dotted, sole_entry_value};

/// Keys that commonly hold the user's prompt, in lookup order.
const INPUT_KEYS: &[&str] = &[
    "question",
    "messages",
    "user_input",
    "query",
    "input_prompt",
    "prompt",
    "sys.query", // Dify
];

/// Keys that commonly hold the model's answer, in lookup order.
const OUTPUT_KEYS: &[&str] = &["answer", "output", "response"];

fn candidate_keys(direction: Direction) -> &'static [&'static str] {
    match direction {
        Direction::Input => INPUT_KEYS,
        Direction::Output => OUTPUT_KEYS,
    }
}

/// Best-effort extraction when no known format matched.
///
/// Unwraps at most two single-entry containers (one-key objects or
/// one-element arrays), then looks for well-known keys.
pub(crate) fn generic(payload: &JsonValue, direction: Direction) -> Option<String> {
    let unwrapped = sole_entry_value(payload).unwrap_or(payload);

    if let Some(s) = unwrapped.as_str() {
        return Some(s.to_string());
    }
    if let Some(inner) = sole_entry_value(unwrapped) {
        return inner.as_str().map(String::from);
    }
    if !unwrapped.is_object() {
        return None;
    }
    candidate_keys(direction)
        .iter()
        .find_map(|key| get_dotted(unwrapped, key)?.as_str())
        .map(String::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_single_key_string() {
        assert_eq!(
            generic(&json!({"text": "hello"}), Direction::Input),
            Some("hello".to_string())
        );
    }

    #[test]
    fn test_two_level_unwrap() {
        let payload = json!({"wrapper": {"answer": "42"}});
        assert_eq!(generic(&payload, Direction::Output), Some("42".to_string()));
        // Second unwrap does not care about direction-specific keys
        assert_eq!(generic(&payload, Direction::Input), Some("42".to_string()));
    }

    #[test]
    fn test_unwrap_depth_is_capped() {
        let payload = json!({"a": {"b": {"c": "deep"}}});
        assert_eq!(generic(&payload, Direction::Input), None);
    }

    #[test]
    fn test_candidate_keys_in_order() {
        let payload = json!({"prompt": "second", "question": "first", "other": 1});
        assert_eq!(generic(&payload, Direction::Input), Some("first".to_string()));
    }

    #[test]
    fn test_candidate_keys_skip_non_strings() {
        let payload = json!({"question": {"nested": true}, "query": "found"});
        assert_eq!(generic(&payload, Direction::Input), Some("found".to_string()));
    }

    #[test]
    fn test_output_keys() {
        let payload = json!({"response": "done", "latency_ms": 12});
        assert_eq!(generic(&payload, Direction::Output), Some("done".to_string()));
        assert_eq!(generic(&payload, Direction::Input), None);
    }

    #[test]
    fn test_keys_scanned_after_single_unwrap() {
        let payload = json!({"inputs": {"query": "what?", "top_k": 3}});
        assert_eq!(generic(&payload, Direction::Input), Some("what?".to_string()));
    }

    #[test]
    fn test_dify_sys_query() {
        let literal = json!({"sys.query": "hi", "sys.user_id": "u1"});
        assert_eq!(generic(&literal, Direction::Input), Some("hi".to_string()));

        let nested = json!({"sys": {"query": "hi", "user_id": "u1"}, "files": []});
        assert_eq!(generic(&nested, Direction::Input), Some("hi".to_string()));
    }

    #[test]
    fn test_non_objects() {
        assert_eq!(generic(&json!([1, 2]), Direction::Input), None);
        assert_eq!(generic(&json!(42), Direction::Input), None);
        assert_eq!(generic(&JsonValue::Null, Direction::Output), None);
        assert_eq!(generic(&json!({}), Direction::Input), None);
    }

    #[test]
    fn test_single_element_arrays_unwrap() {
        assert_eq!(
            generic(&json!({"items": ["a"]}), Direction::Input),
            Some("a".to_string())
        );
        assert_eq!(generic(&json!(["hello"]), Direction::Input), Some("hello".to_string()));
        assert_eq!(
            generic(&json!([{"answer": "inside", "id": 1}]), Direction::Output),
            Some("inside".to_string())
        );
    }

    #[test]
    fn test_multi_element_arrays_not_unwrapped() {
        assert_eq!(generic(&json!({"items": ["a", "b"]}), Direction::Input), None);
        // Two unwraps reach ["a"], which is not a string; no third unwrap
        assert_eq!(generic(&json!([[["a"]]]), Direction::Input), None);
        assert_eq!(generic(&json!([["a"]]), Direction::Input), Some("a".to_string()));
    }
}
