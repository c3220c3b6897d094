//! HTML text escaping.

/// Escape text for embedding in HTML content or attribute values.
///
/// Maps `&`, `<`, `>`, `"` and `'` to entities and leaves every other
/// character unchanged. Total over all strings, including the empty one.
pub fn escape_html(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#39;"),
            _ => result.push(c),
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html("<b>Tom & \"Jerry\"</b>"),
            "&lt;b&gt;Tom &amp; &quot;Jerry&quot;&lt;/b&gt;"
        );
        assert_eq!(escape_html("O'Brien"), "O&#39;Brien");
    }

    #[test]
    fn test_escape_html_passthrough() {
        assert_eq!(escape_html(""), "");
        assert_eq!(escape_html("José • 2020"), "José • 2020");
    }

    #[test]
    fn test_escape_html_is_not_idempotent() {
        // Already-escaped input is escaped again.
        assert_eq!(escape_html("&amp;"), "&amp;amp;");
    }
}
