//! Text sanitization for HTML display contexts.
//!
//! This is the `code` display transform: untrusted text rendered literally
//! rather than as markup. It escapes text-context metacharacters only; it does
//! not handle attribute contexts and it does not parse HTML.

//--------------------------------------------------------------------------------------------------
// Functions
//--------------------------------------------------------------------------------------------------

/// Escape `&`, `<`, and `>` for embedding in an HTML text context.
///
/// Ampersand is escaped first; otherwise the entities introduced by the other
/// two replacements would themselves be escaped. Already-escaped input is
/// escaped again (`&amp;` becomes `&amp;amp;`) — callers must not pass text
/// through twice expecting a fixed point.
pub fn escape_text(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Escape an optional string, treating absent input as empty.
pub fn escape_text_opt(input: Option<&str>) -> String {
    input.map(escape_text).unwrap_or_default()
}

//--------------------------------------------------------------------------------------------------
// Tests
//--------------------------------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_passes_through() {
        assert_eq!(escape_text("hello world"), "hello world");
        assert_eq!(escape_text("a.b-c_d/e"), "a.b-c_d/e");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(escape_text(""), "");
        assert_eq!(escape_text_opt(None), "");
        assert_eq!(escape_text_opt(Some("")), "");
    }

    #[test]
    fn test_ampersand_escaped() {
        assert_eq!(escape_text("a & b"), "a &amp; b");
    }

    #[test]
    fn test_angle_brackets_escaped() {
        assert_eq!(escape_text("<script>"), "&lt;script&gt;");
    }

    #[test]
    fn test_ampersand_escaped_before_brackets() {
        // If `<` or `>` were replaced first, the `&` in their entities would
        // be re-escaped. This asserts the required ordering.
        assert_eq!(escape_text("&<>"), "&amp;&lt;&gt;");
    }

    #[test]
    fn test_double_escaping_is_documented_behavior() {
        // Not idempotent: escaping twice escapes the entities themselves.
        assert_eq!(escape_text("&amp;"), "&amp;amp;");
        assert_eq!(escape_text(&escape_text("&")), "&amp;amp;");
    }

    #[test]
    fn test_mixed_content() {
        assert_eq!(
            escape_text("<a href=\"x\">1 & 2</a>"),
            "&lt;a href=\"x\"&gt;1 &amp; 2&lt;/a&gt;"
        );
    }
}
