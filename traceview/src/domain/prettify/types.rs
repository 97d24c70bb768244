//! Prettify type definitions.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

// ============================================================================
// DIRECTION
// ============================================================================

/// Which side of a span the payload came from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Input,
    Output,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Input => "input",
            Self::Output => "output",
        }
    }

    /// Parse a direction name, case-insensitively.
    pub fn try_from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "input" | "in" => Some(Self::Input),
            "output" | "out" => Some(Self::Output),
            _ => None,
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// MESSAGE FORMAT
// ============================================================================

/// Payload conventions the dispatcher knows how to read, in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum MessageFormat {
    /// `messages[].content` / `choices[].message.content`
    ChatCompletion,
    /// `input[]` user turns / `output[]` assistant `output_text` items
    AgentRun,
    /// `parts[].text`, optionally wrapped in `contents[]` or `content`
    PartsAgent,
    /// `messages[]` with `human` / `ai` typed entries
    GraphOrchestration,
    /// Single-group `messages[[...]]` / `generations[[...]]`
    PromptChain,
    /// `blocks[]` with `block_type: "text"`
    Blocks,
    /// Schema-agnostic key heuristics
    Generic,
}

impl MessageFormat {
    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            Self::ChatCompletion => "chat_completion",
            Self::AgentRun => "agent_run",
            Self::PartsAgent => "parts_agent",
            Self::GraphOrchestration => "graph_orchestration",
            Self::PromptChain => "prompt_chain",
            Self::Blocks => "blocks",
            Self::Generic => "generic",
        }
    }
}

/// Text pulled out of a payload together with the format that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Extraction {
    pub text: String,
    pub format: MessageFormat,
}

// ============================================================================
// RESULT
// ============================================================================

/// Outcome of prettifying a payload.
///
/// `message` is the extracted text when `prettified` is true, otherwise the
/// original payload, untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrettifyResult {
    pub message: JsonValue,
    pub prettified: bool,
}

impl PrettifyResult {
    pub(crate) fn extracted(text: String) -> Self {
        Self {
            message: JsonValue::String(text),
            prettified: true,
        }
    }

    pub(crate) fn passthrough(payload: &JsonValue) -> Self {
        Self {
            message: payload.clone(),
            prettified: false,
        }
    }

    /// The extracted text, if any.
    pub fn text(&self) -> Option<&str> {
        if self.prettified {
            self.message.as_str()
        } else {
            None
        }
    }

    /// Text to show in a UI: the extraction, a raw string payload, or the
    /// payload pretty-printed as JSON.
    pub fn display_text(&self) -> String {
        match &self.message {
            JsonValue::String(s) => s.clone(),
            other => serde_json::to_string_pretty(other).unwrap_or_else(|_| other.to_string()),
        }
    }
}
