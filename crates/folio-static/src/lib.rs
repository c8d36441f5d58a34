//! Static site export for folio portfolios.
//!
//! Turns a portfolio snapshot into `index.html`, `styles.css`, `script.js`
//! and `README.md`, and packages them into a downloadable zip archive.

pub mod archive;
pub mod assets;
pub mod export;
pub mod generator;
pub mod templates;

pub use archive::{archive_file_name, Archive, ArchiveBuilder};
pub use export::{export_site, ExportError, ExportReport};
pub use generator::{group_skills, order_projects, SiteArtifacts, SiteGenerator, SkillGroup};
