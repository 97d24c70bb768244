//! String utility functions

/// Truncate text to `max_len` characters, appending an ellipsis when cut.
///
/// Counts characters rather than bytes so multi-byte text is never split
/// inside a code point.
pub fn truncate_preview(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        format!("{}...", text.chars().take(max_len).collect::<String>())
    } else {
        text.to_string()
    }
}

/// Truncate only when a limit is configured.
pub fn truncate_preview_opt(text: &str, max_len: Option<usize>) -> String {
    match max_len {
        Some(max_len) => truncate_preview(text, max_len),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_preview_short_text_unchanged() {
        assert_eq!(truncate_preview("hello", 10), "hello");
        assert_eq!(truncate_preview("hello", 5), "hello");
    }

    #[test]
    fn test_truncate_preview_long_text() {
        assert_eq!(truncate_preview("hello world", 5), "hello...");
    }

    #[test]
    fn test_truncate_preview_keeps_whitespace() {
        // Extracted messages are shown verbatim, including surrounding blanks
        assert_eq!(truncate_preview("  hi  ", 10), "  hi  ");
    }

    #[test]
    fn test_truncate_preview_multibyte() {
        assert_eq!(truncate_preview("héllo wörld", 4), "héll...");
        assert_eq!(truncate_preview("日本語テキスト", 3), "日本語...");
    }

    #[test]
    fn test_truncate_preview_opt() {
        assert_eq!(truncate_preview_opt("hello world", None), "hello world");
        assert_eq!(truncate_preview_opt("hello world", Some(5)), "hello...");
    }
}
