//! Markdown subset renderer.
//!
//! Supports exactly four constructs:
//! - `**bold**`
//! - `*italic*`
//! - paragraph breaks (a blank line)
//! - single line breaks
//!
//! Anything else (lists, links, headings, code) is rendered as literal,
//! escaped text.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::escape::escape_html;

/// `***both***`, `**bold**` or `*italic*`, whichever starts first.
static EMPHASIS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\*\*\*(.+?)\*\*\*|\*\*(.+?)\*\*|\*(.+?)\*").expect("emphasis pattern is valid")
});

static ITALIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*(.+?)\*").expect("italic pattern is valid"));

/// A newline, optional horizontal whitespace, and at least one more newline.
static BLANK_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n[ \t]*(?:\n[ \t]*)+").expect("blank line pattern is valid"));

/// Render a markdown text block to an HTML fragment.
///
/// The input is escaped before any markup is produced, so the only tags in
/// the output are `<p>`, `<br>`, `<strong>` and `<em>`.
pub fn render_markdown(source: &str) -> String {
    let normalized = source.replace("\r\n", "\n");
    let escaped = escape_html(&normalized);

    let inline = render_emphasis(&escaped);

    BLANK_LINE
        .split(&inline)
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .map(|block| format!("<p>{}</p>", block.replace('\n', "<br>")))
        .collect()
}

/// Replace emphasis markers with properly nested tags.
///
/// Each match is rendered on its own, so an italic span can only sit inside
/// a bold one and never crosses its closing tag.
fn render_emphasis(text: &str) -> String {
    EMPHASIS
        .replace_all(text, |caps: &Captures| {
            if let Some(both) = caps.get(1) {
                format!("<strong><em>{}</em></strong>", both.as_str())
            } else if let Some(bold) = caps.get(2) {
                let inner = ITALIC.replace_all(bold.as_str(), "<em>$1</em>");
                format!("<strong>{}</strong>", inner)
            } else {
                format!("<em>{}</em>", &caps[3])
            }
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn renders_bold_and_italic() {
        assert_eq!(
            render_markdown("I **love** *Rust*"),
            "<p>I <strong>love</strong> <em>Rust</em></p>"
        );
    }

    #[test]
    fn nests_bold_italic() {
        assert_eq!(
            render_markdown("***both***"),
            "<p><strong><em>both</em></strong></p>"
        );
    }

    #[test]
    fn italic_nests_inside_bold() {
        assert_eq!(
            render_markdown("**bold *and* more**"),
            "<p><strong>bold <em>and</em> more</strong></p>"
        );
    }

    #[test]
    fn italic_never_crosses_bold() {
        assert_eq!(
            render_markdown("**a *b** c*"),
            "<p><strong>a *b</strong> c*</p>"
        );
    }

    #[test]
    fn splits_paragraphs_on_blank_lines() {
        assert_eq!(
            render_markdown("First paragraph.\n\nSecond paragraph."),
            "<p>First paragraph.</p><p>Second paragraph.</p>"
        );
    }

    #[test]
    fn converts_single_newlines_to_breaks() {
        assert_eq!(render_markdown("line one\nline two"), "<p>line one<br>line two</p>");
    }

    #[test]
    fn drops_empty_paragraphs() {
        assert_eq!(render_markdown("\n\n\nonly\n\n \n\n"), "<p>only</p>");
        assert_eq!(render_markdown(""), "");
        assert_eq!(render_markdown("  \n\n  "), "");
    }

    #[test]
    fn handles_crlf_input() {
        assert_eq!(render_markdown("a\r\n\r\nb\r\nc"), "<p>a</p><p>b<br>c</p>");
    }

    #[test]
    fn leaves_unsupported_syntax_literal() {
        assert_eq!(
            render_markdown("# Title\n- item\n[link](https://x.dev) `code`"),
            "<p># Title<br>- item<br>[link](https://x.dev) `code`</p>"
        );
    }

    #[test]
    fn escapes_embedded_html() {
        assert_eq!(
            render_markdown("<script>alert(1)</script> **ok**"),
            "<p>&lt;script&gt;alert(1)&lt;/script&gt; <strong>ok</strong></p>"
        );
    }

    #[test]
    fn markers_do_not_span_lines() {
        assert_eq!(render_markdown("**open\nclose**"), "<p>**open<br>close**</p>");
    }

    #[test]
    fn is_deterministic() {
        let source = "Built **fast** tools.\n\nLoves *clean* code.\nAnd tests.";
        assert_eq!(render_markdown(source), render_markdown(source));
    }
}
