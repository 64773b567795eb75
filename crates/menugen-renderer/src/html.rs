//! HTML helpers.

/// Escape HTML special characters.
#[must_use]
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
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
        assert_eq!(escape_html("Q&A <b>"), "Q&amp;A &lt;b&gt;");
        assert_eq!(escape_html(r#"say "hi" it's"#), "say &quot;hi&quot; it&#x27;s");
        assert_eq!(escape_html("/docs/setup.html"), "/docs/setup.html");
    }
}
