//! Frontmatter splitting for Markdown portfolio sources.

/// Split a leading `---` fenced block off a Markdown document.
///
/// Returns the raw frontmatter text (if present) and the remaining body.
/// Parsing the frontmatter is left to the caller.
pub fn split_frontmatter(source: &str) -> Result<(Option<&str>, &str), FrontmatterError> {
    let trimmed = source.trim_start();

    if !trimmed.starts_with("---") {
        return Ok((None, source));
    }

    // Find the closing ---
    let after_open = &trimmed[3..];
    let Some(close_pos) = after_open.find("\n---") else {
        return Err(FrontmatterError::Unclosed);
    };

    let frontmatter = after_open[..close_pos].trim();
    let remaining = &after_open[close_pos + 4..];

    Ok((Some(frontmatter), remaining.trim_start()))
}

/// Errors that can occur when splitting frontmatter.
#[derive(Debug, thiserror::Error)]
pub enum FrontmatterError {
    #[error("Unclosed frontmatter block - missing closing ---")]
    Unclosed,
}
