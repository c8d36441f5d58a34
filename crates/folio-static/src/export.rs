//! One-shot export of a snapshot to a zip archive on disk.

use std::path::{Path, PathBuf};
use std::time::Instant;

use folio_model::{PortfolioSummary, Snapshot};

use crate::archive::ArchiveBuilder;
use crate::generator::SiteGenerator;

/// Errors that can occur while exporting a site.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("Failed to render template: {0}")]
    Template(String),

    #[error("Failed to build archive: {0}")]
    Archive(String),

    #[error("Failed to write archive: {0}")]
    Write(String),

    #[error("Packaging task failed: {0}")]
    Task(String),
}

/// What an export produced.
#[derive(Debug, Clone)]
pub struct ExportReport {
    pub path: PathBuf,
    pub bytes: usize,
    pub summary: PortfolioSummary,
}

/// Generate the site for `snapshot`, package it and write the archive into
/// `output_dir`.
///
/// Nothing is written unless every step before delivery succeeds.
pub async fn export_site(
    generator: &SiteGenerator,
    snapshot: &Snapshot,
    output_dir: &Path,
) -> Result<ExportReport, ExportError> {
    let start = Instant::now();

    let artifacts = generator.generate(snapshot)?;
    let archive = ArchiveBuilder::package(artifacts, snapshot.owner_name()).await?;
    let path = archive.deliver(output_dir).await?;

    let summary = snapshot.summary();
    tracing::info!(
        "Exported {} ({}) in {:?}",
        path.display(),
        summary,
        start.elapsed()
    );

    Ok(ExportReport {
        path,
        bytes: archive.bytes.len(),
        summary,
    })
}
