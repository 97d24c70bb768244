//! Experiment item predicates.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::utils::json::{get_field, is_truthy};

/// How an experiment item's trace may be shown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TraceVisibilityMode {
    #[default]
    Default,
    Hidden,
}

/// A named score attached to a trace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackScore {
    pub name: String,
    pub value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// One row of an experiment: the traced input/output and its scores.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExperimentItem {
    #[serde(default)]
    pub input: Option<JsonValue>,
    #[serde(default)]
    pub output: Option<JsonValue>,
    #[serde(default)]
    pub feedback_scores: Option<Vec<FeedbackScore>>,
    #[serde(default)]
    pub trace_visibility_mode: Option<TraceVisibilityMode>,
}

/// Whether the item has anything to show: a non-empty output or input, or
/// a scores list (even an empty one).
pub fn trace_exists(item: &ExperimentItem) -> bool {
    is_truthy(item.output.as_ref())
        || is_truthy(item.input.as_ref())
        || item.feedback_scores.is_some()
}

/// Whether the item's trace uses the default visibility mode.
pub fn trace_visible(item: &ExperimentItem) -> bool {
    item.trace_visibility_mode == Some(TraceVisibilityMode::Default)
}

/// Whether a JSON record looks like a span (it carries a `trace_id`).
pub fn is_object_span(value: &JsonValue) -> bool {
    is_truthy(get_field(value, "trace_id"))
}
