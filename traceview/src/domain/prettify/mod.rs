//! Message prettifier
//!
//! Turns the raw input or output payload of a captured span into one short,
//! readable message for list and detail views.
//!
//! Payloads follow many unrelated conventions, so extraction is a chain of
//! narrow recognizers tried in a fixed order:
//!
//! 1. Chat completion (`messages` / `choices`)
//! 2. Agent run (`input` / `output` item lists)
//! 3. Parts-based agent (`parts`, `contents`, `content.parts`)
//! 4. Graph orchestration (`human` / `ai` typed `messages`)
//! 5. Prompt chain (single-group `messages` / `generations`)
//! 6. Blocks (`blocks` / `output.blocks`)
//! 7. Generic key heuristics
//!
//! Anything that does not match, including malformed payloads, comes back
//! unchanged with `prettified: false`.
//!
//! # Example
//!
//! ```
//! use serde_json::json;
//! use traceview::domain::prettify::{Direction, prettify_message};
//!
//! let payload = json!({"messages": [{"role": "user", "content": "Hello!"}]});
//! let result = prettify_message(&payload, Direction::Input);
//! assert!(result.prettified);
//! assert_eq!(result.text(), Some("Hello!"));
//! ```

mod dispatch;
mod fallback;
mod recognizers;
mod types;

pub use types::{Direction, PrettifyResult};

use serde_json::Value as JsonValue;

/// Separator placed between several extracted messages.
pub const JOIN_SEPARATOR: &str = "\n\n  ----------------- \n\n";

/// Extract a display message from a span payload.
///
/// String payloads are returned as-is and never marked prettified.
pub fn prettify_message(payload: &JsonValue, direction: Direction) -> PrettifyResult {
    if payload.is_string() {
        return PrettifyResult::passthrough(payload);
    }

    match dispatch::contain(|| dispatch::extract(payload, direction)) {
        Some(extraction) => PrettifyResult::extracted(extraction.text),
        None => PrettifyResult::passthrough(payload),
    }
}

/// Like [`prettify_message`], for payloads that may be missing entirely.
pub fn prettify_optional(payload: Option<&JsonValue>, direction: Direction) -> PrettifyResult {
    match payload {
        Some(payload) => prettify_message(payload, direction),
        None => PrettifyResult::passthrough(&JsonValue::Null),
    }
}
