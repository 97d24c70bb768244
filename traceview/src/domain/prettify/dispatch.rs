//! Priority-ordered dispatch over the recognizers and the generic fallback.

use std::panic::{self, AssertUnwindSafe};

use serde_json::Value as JsonValue;

use super::fallback;
use super::recognizers::RECOGNIZERS;
use super::types::{Direction, Extraction, MessageFormat};

/// Run `f`, turning a panic into `None`.
///
/// Recognizers are written to return `None` on unexpected shapes; this is the
/// single boundary that keeps anything they missed from reaching the caller.
///
/// The process-wide panic hook still runs before the unwind is caught, so a
/// contained fault prints the usual `panicked at` line to stderr. The
/// returned value is unaffected.
pub(crate) fn contain<T>(f: impl FnOnce() -> Option<T>) -> Option<T> {
    match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(result) => result,
        Err(cause) => {
            let reason = cause
                .downcast_ref::<&str>()
                .map(|s| s.to_string())
                .or_else(|| cause.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "unknown".to_string());
            tracing::debug!(reason = %reason, "Message extraction faulted, leaving payload as-is");
            None
        }
    }
}

/// Try each recognizer in priority order, then the generic fallback.
///
/// The first non-empty extraction wins; empty strings fall through.
pub(crate) fn extract(payload: &JsonValue, direction: Direction) -> Option<Extraction> {
    let found = RECOGNIZERS
        .iter()
        .find_map(|(format, recognize)| {
            recognize(payload, direction)
                .filter(|text| !text.is_empty())
                .map(|text| Extraction {
                    text,
                    format: *format,
                })
        })
        .or_else(|| {
            fallback::generic(payload, direction)
                .filter(|text| !text.is_empty())
                .map(|text| Extraction {
                    text,
                    format: MessageFormat::Generic,
                })
        });

    match &found {
        Some(extraction) => tracing::trace!(
            format = extraction.format.as_str(),
            direction = %direction,
            "Extracted display message"
        ),
        None => tracing::debug!(direction = %direction, "No message format matched payload"),
    }

    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_contain_passes_through_results() {
        assert_eq!(contain(|| Some(1)), Some(1));
        assert_eq!(contain(|| None::<i32>), None);
    }

    #[test]
    fn test_contain_swallows_panics() {
        let result: Option<String> = contain(|| panic!("malformed payload"));
        assert_eq!(result, None);
    }

    #[test]
    fn test_extract_reports_matching_format() {
        let payload = json!({"choices": [{"message": {"content": "hi"}}]});
        let extraction = extract(&payload, Direction::Output).unwrap();
        assert_eq!(extraction.format, MessageFormat::ChatCompletion);
        assert_eq!(extraction.text, "hi");
    }

    #[test]
    fn test_extract_falls_back_to_generic() {
        let payload = json!({"answer": "yes", "score": 0.9});
        let extraction = extract(&payload, Direction::Output).unwrap();
        assert_eq!(extraction.format, MessageFormat::Generic);
    }

    #[test]
    fn test_empty_parts_text_falls_through() {
        // Empty text from the parts recognizer is not a match; the fallback
        // then reads the single-key `parts` array and gives up.
        let payload = json!({"parts": [{"text": ""}]});
        assert_eq!(extract(&payload, Direction::Input), None);
    }

    #[test]
    fn test_recognizer_order() {
        let order: Vec<MessageFormat> = RECOGNIZERS.iter().map(|(f, _)| *f).collect();
        assert_eq!(
            order,
            vec![
                MessageFormat::ChatCompletion,
                MessageFormat::AgentRun,
                MessageFormat::PartsAgent,
                MessageFormat::GraphOrchestration,
                MessageFormat::PromptChain,
                MessageFormat::Blocks,
            ]
        );
    }
}
