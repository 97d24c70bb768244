//! Trace display helpers
//!
//! Small predicates and mappings used next to the prettifier when listing
//! traces and experiment items.

mod experiment;
mod feedback;
mod tags;

pub use experiment::{
    ExperimentItem, FeedbackScore, TraceVisibilityMode, is_object_span, trace_exists,
    trace_visible,
};
pub use feedback::{ScoreBounds, is_numeric_feedback_score_valid};
pub use tags::{TAG_VARIANTS, TagVariant, tag_variant};
