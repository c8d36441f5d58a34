//! Zip packaging and delivery of the generated site.

use std::fs;
use std::io::{Cursor, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, DateTime, ZipWriter};

use crate::export::ExportError;
use crate::generator::SiteArtifacts;

/// A packaged site, ready to be delivered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Archive {
    /// `<owner>-website.zip`
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Packages site artifacts into a zip archive.
pub struct ArchiveBuilder;

impl ArchiveBuilder {
    /// Compress `artifacts` on the blocking pool.
    ///
    /// `owner` is the portfolio owner's name and only affects the file name.
    pub async fn package(artifacts: SiteArtifacts, owner: &str) -> Result<Archive, ExportError> {
        let file_name = archive_file_name(owner);

        let bytes = tokio::task::spawn_blocking(move || Self::compress(&artifacts))
            .await
            .map_err(|e| ExportError::Task(e.to_string()))??;

        tracing::debug!("Packaged {} ({} bytes)", file_name, bytes.len());

        Ok(Archive { file_name, bytes })
    }

    /// Build the zip bytes synchronously.
    ///
    /// Entries carry a fixed timestamp so identical artifacts produce
    /// identical archives.
    pub fn compress(artifacts: &SiteArtifacts) -> Result<Vec<u8>, ExportError> {
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));

        let options = SimpleFileOptions::default()
            .compression_method(CompressionMethod::Deflated)
            .last_modified_time(DateTime::default())
            .unix_permissions(0o644);

        for (name, content) in artifacts.entries() {
            writer
                .start_file(name, options)
                .map_err(|e| ExportError::Archive(format!("{}: {}", name, e)))?;
            writer
                .write_all(content.as_bytes())
                .map_err(|e| ExportError::Archive(format!("{}: {}", name, e)))?;
        }

        let cursor = writer
            .finish()
            .map_err(|e| ExportError::Archive(e.to_string()))?;

        Ok(cursor.into_inner())
    }
}

impl Archive {
    /// Write the archive into `dir` and return its path.
    ///
    /// The bytes go to a temporary file in `dir` that is renamed into place,
    /// so a failed delivery never leaves a partial archive behind.
    pub async fn deliver(&self, dir: &Path) -> Result<PathBuf, ExportError> {
        let dir = dir.to_path_buf();
        let target = dir.join(&self.file_name);
        let bytes = self.bytes.clone();

        let path = target.clone();
        tokio::task::spawn_blocking(move || write_atomically(&dir, &path, &bytes))
            .await
            .map_err(|e| ExportError::Task(e.to_string()))??;

        Ok(target)
    }
}

fn write_atomically(dir: &Path, target: &Path, bytes: &[u8]) -> Result<(), ExportError> {
    let write_error =
        |e: std::io::Error| ExportError::Write(format!("{}: {}", target.display(), e));

    fs::create_dir_all(dir)
        .map_err(|e| ExportError::Write(format!("{}: {}", dir.display(), e)))?;

    // Dropping the temporary file on any error removes it.
    let mut file = NamedTempFile::new_in(dir).map_err(write_error)?;
    file.write_all(bytes).map_err(write_error)?;
    file.persist(target).map_err(|e| write_error(e.error))?;

    Ok(())
}

/// File name of the archive for a portfolio owner.
///
/// Falls back to `portfolio` when the name is empty. Only characters no
/// filesystem accepts in a file name are replaced.
pub fn archive_file_name(owner: &str) -> String {
    let base = if owner.is_empty() { "portfolio" } else { owner };

    let name: String = base
        .chars()
        .map(|c| {
            if c == '/' || c == '\\' || c.is_control() {
                '-'
            } else {
                c
            }
        })
        .collect();

    format!("{}-website.zip", name)
}
