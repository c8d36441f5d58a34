//! HTML escaping for user-supplied text.

/// Escape the characters that are significant in HTML text and attributes.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup() {
        assert_eq!(
            escape_html(r#"<script>alert("x")</script>"#),
            "&lt;script&gt;alert(&quot;x&quot;)&lt;/script&gt;"
        );
    }

    #[test]
    fn escapes_ampersand_first() {
        assert_eq!(escape_html("R&D &lt;"), "R&amp;D &amp;lt;");
    }

    #[test]
    fn leaves_plain_text_alone() {
        assert_eq!(escape_html("Jane Doe, Berlin"), "Jane Doe, Berlin");
        assert_eq!(escape_html("it's"), "it&#x27;s");
    }
}
