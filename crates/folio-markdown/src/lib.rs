//! Markdown subset renderer with HTML escaping and frontmatter splitting.
//!
//! The same renderer feeds the live preview and the exported site, so both
//! agree on the supported syntax: bold, italic, paragraphs and line breaks.

pub mod escape;
pub mod frontmatter;
pub mod render;

pub use escape::escape_html;
pub use frontmatter::{split_frontmatter, FrontmatterError};
pub use render::render_markdown;
