//! Format-specific recognizers.
//!
//! Each recognizer narrowly matches one payload convention and returns the
//! text a reader would want to see, or `None` when the shape does not fit.
//! Recognizers never assume a field exists; a plausible but malformed shape
//! is a miss, not a guess.

use serde_json::Value as JsonValue;

use super::JOIN_SEPARATOR;
use super::types::{Direction, MessageFormat};
use crate::utils::json::{field_equals, get_array, get_non_empty_str, get_path, get_str};

/// Common shape of every recognizer.
pub(crate) type Recognizer = fn(&JsonValue, Direction) -> Option<String>;

/// Recognizers in the order they are tried. Earlier entries win.
pub(crate) const RECOGNIZERS: &[(MessageFormat, Recognizer)] = &[
    (MessageFormat::ChatCompletion, chat_completion),
    (MessageFormat::AgentRun, agent_run),
    (MessageFormat::PartsAgent, parts_agent),
    (MessageFormat::GraphOrchestration, graph_orchestration),
    (MessageFormat::PromptChain, prompt_chain),
    (MessageFormat::Blocks, blocks),
];

// ============================================================================
// CHAT COMPLETION
// ============================================================================

/// `{"messages": [...]}` requests and `{"choices": [...]}` responses.
///
/// Input reads the last message: string content, or the last non-empty
/// `text` item of array content. Output reads the last choice's
/// `message.content`.
pub(crate) fn chat_completion(payload: &JsonValue, direction: Direction) -> Option<String> {
    match direction {
        Direction::Input => {
            let last = get_array(payload, "messages")?.last()?;
            if let Some(content) = get_non_empty_str(last, "content") {
                return Some(content.to_string());
            }
            get_array(last, "content")?
                .iter()
                .rev()
                .filter(|item| field_equals(item, "type", "text"))
                .find_map(|item| get_non_empty_str(item, "text"))
                .map(String::from)
        }
        Direction::Output => {
            let last = get_array(payload, "choices")?.last()?;
            get_path(last, &["message", "content"])?
                .as_str()
                .filter(|s| !s.is_empty())
                .map(String::from)
        }
    }
}

// ============================================================================
// AGENT RUN
// ============================================================================

/// `{"input": [...]}` / `{"output": [...]}` agent runs.
///
/// Input joins every user turn. Output joins every `output_text` item of
/// every assistant message.
pub(crate) fn agent_run(payload: &JsonValue, direction: Direction) -> Option<String> {
    let texts: Vec<&str> = match direction {
        Direction::Input => get_array(payload, "input")?
            .iter()
            .filter(|m| field_equals(m, "role", "user"))
            .filter_map(|m| get_non_empty_str(m, "content"))
            .collect(),
        Direction::Output => get_array(payload, "output")?
            .iter()
            .filter(|m| field_equals(m, "role", "assistant") && field_equals(m, "type", "message"))
            .filter_map(|m| get_array(m, "content"))
            .flatten()
            .filter(|c| field_equals(c, "type", "output_text"))
            .filter_map(|c| get_non_empty_str(c, "text"))
            .collect(),
    };

    if texts.is_empty() {
        None
    } else {
        Some(texts.join(JOIN_SEPARATOR))
    }
}

// ============================================================================
// PARTS AGENT
// ============================================================================

/// `{"parts": [...]}` content, optionally wrapped in `contents` (input) or
/// `content` (output). Returns the last part's `text`.
///
/// Unlike the other recognizers this does not require non-empty text, so a
/// whitespace-only part is returned as-is.
pub(crate) fn parts_agent(payload: &JsonValue, direction: Direction) -> Option<String> {
    let holder = match direction {
        Direction::Input => {
            let obj = payload.as_object()?;
            if obj.contains_key("parts") {
                payload
            } else if let Some(contents) = get_array(payload, "contents") {
                contents.last()?
            } else {
                payload
            }
        }
        Direction::Output => payload.as_object()?.get("content")?,
    };

    let last_part = get_array(holder, "parts")?.last()?;
    get_str(last_part, "text").map(String::from)
}

// ============================================================================
// GRAPH ORCHESTRATION
// ============================================================================

/// `{"messages": [...]}` state with `human` / `ai` typed messages.
///
/// Input takes the first human message. Output takes the last AI message
/// whose content is a string or holds exactly one text item.
pub(crate) fn graph_orchestration(payload: &JsonValue, direction: Direction) -> Option<String> {
    let messages = get_array(payload, "messages")?;

    match direction {
        Direction::Input => messages
            .iter()
            .filter(|m| field_equals(m, "type", "human"))
            .find_map(|m| get_non_empty_str(m, "content"))
            .map(String::from),
        Direction::Output => messages
            .iter()
            .filter(|m| field_equals(m, "type", "ai"))
            .filter_map(ai_message_text)
            .last()
            .map(String::from),
    }
}

fn ai_message_text(message: &JsonValue) -> Option<&str> {
    match message.get("content")? {
        JsonValue::String(s) => Some(s.as_str()),
        JsonValue::Array(items) => {
            let mut texts = items
                .iter()
                .filter(|c| field_equals(c, "type", "text"))
                .filter_map(|c| get_non_empty_str(c, "text"));
            let first = texts.next()?;
            // Several text items: no way to tell which one is the answer
            match texts.next() {
                Some(_) => None,
                None => Some(first),
            }
        }
        _ => None,
    }
}

// ============================================================================
// PROMPT CHAIN
// ============================================================================

/// `{"messages": [[...]]}` prompts and `{"generations": [[...]]}` results.
///
/// Batched calls carry several prompt or generation groups. Only a single
/// group is read; more than one is a miss.
pub(crate) fn prompt_chain(payload: &JsonValue, direction: Direction) -> Option<String> {
    let key = match direction {
        Direction::Input => "messages",
        Direction::Output => "generations",
    };
    let group = single_group(payload, key)?;

    match direction {
        Direction::Input => group
            .iter()
            .filter(|m| field_equals(m, "type", "human"))
            .find_map(|m| get_non_empty_str(m, "content"))
            .map(String::from),
        Direction::Output => group
            .iter()
            .filter(|g| {
                get_path(g, &["message", "kwargs", "type"]).and_then(JsonValue::as_str)
                    == Some("ai")
            })
            .filter_map(|g| get_non_empty_str(g, "text"))
            .last()
            .map(String::from),
    }
}

fn single_group<'a>(payload: &'a JsonValue, key: &str) -> Option<&'a Vec<JsonValue>> {
    match get_array(payload, key)?.as_slice() {
        [only] => only.as_array(),
        _ => None,
    }
}

// ============================================================================
// BLOCKS
// ============================================================================

/// `{"blocks": [...]}` for either direction, plus `{"output": {"blocks": [...]}}`
/// for outputs. Non-blank text blocks are joined with a blank line.
pub(crate) fn blocks(payload: &JsonValue, direction: Direction) -> Option<String> {
    if let Some(blocks) = get_array(payload, "blocks") {
        return join_text_blocks(blocks);
    }

    match direction {
        Direction::Output => {
            let nested = get_path(payload, &["output", "blocks"])?.as_array()?;
            join_text_blocks(nested)
        }
        Direction::Input => None,
    }
}

fn join_text_blocks(blocks: &[JsonValue]) -> Option<String> {
    let texts: Vec<&str> = blocks
        .iter()
        .filter(|b| field_equals(b, "block_type", "text"))
        .filter_map(|b| get_str(b, "text"))
        .filter(|text| !text.trim().is_empty())
        .collect();

    if texts.is_empty() {
        None
    } else {
        Some(texts.join("\n\n"))
    }
}
