//! Feedback score validation.

use serde::{Deserialize, Serialize};

/// Inclusive range a numeric feedback score must fall in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreBounds {
    pub min: f64,
    pub max: f64,
}

/// Whether `value` is a number inside `bounds` (inclusive).
///
/// Missing values and NaN are invalid.
pub fn is_numeric_feedback_score_valid(bounds: ScoreBounds, value: Option<f64>) -> bool {
    value.is_some_and(|v| v >= bounds.min && v <= bounds.max)
}

#[cfg(test)]
mod tests {
    use super::*;

    const UNIT: ScoreBounds = ScoreBounds { min: 0.0, max: 1.0 };

    #[test]
    fn test_bounds_are_inclusive() {
        assert!(is_numeric_feedback_score_valid(UNIT, Some(0.0)));
        assert!(is_numeric_feedback_score_valid(UNIT, Some(1.0)));
        assert!(is_numeric_feedback_score_valid(UNIT, Some(0.5)));
    }

    #[test]
    fn test_out_of_range() {
        assert!(!is_numeric_feedback_score_valid(UNIT, Some(-0.01)));
        assert!(!is_numeric_feedback_score_valid(UNIT, Some(1.01)));
    }

    #[test]
    fn test_missing_and_nan() {
        assert!(!is_numeric_feedback_score_valid(UNIT, None));
        assert!(!is_numeric_feedback_score_valid(UNIT, Some(f64::NAN)));
    }
}
