//! Website archive export command.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use folio_model::{load_path, PortfolioPatch, PortfolioStore, Snapshot, SourceError, Theme};
use folio_static::{export_site, SiteGenerator};

use crate::config::ConfigFile;

/// Command line overrides for the export.
#[derive(Debug, Default)]
pub struct ExportOptions {
    pub data: Option<PathBuf>,
    pub theme: Option<String>,
    pub output: Option<PathBuf>,
    pub minify: Option<bool>,
}

/// Run the export command.
pub async fn run(config: ConfigFile, options: ExportOptions) -> Result<()> {
    let data_file = options.data.unwrap_or(config.portfolio.data);
    let output_dir = options.output.unwrap_or(config.export.output);
    let minify = options.minify.unwrap_or(config.export.minify);
    let theme = options.theme.or(config.portfolio.theme);

    tracing::info!("Exporting {}...", data_file.display());

    let snapshot = load_snapshot(&data_file, theme.as_deref())?;
    let summary = snapshot.summary();
    if summary.sections.is_empty() {
        tracing::warn!("Portfolio is empty; the site will only show a placeholder hero");
    }

    let generator = SiteGenerator::new(minify);
    let report = export_site(&generator, &snapshot, &output_dir)
        .await
        .context("Export failed")?;

    tracing::info!("Theme: {}", report.summary.theme);
    tracing::info!(
        "Sections: {}",
        report
            .summary
            .sections
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    );
    tracing::info!("Output: {} ({} bytes)", report.path.display(), report.bytes);

    Ok(())
}

/// Load the data file through the store.
///
/// The theme is the first of `theme_override`, the data file's theme, or
/// the default theme.
fn load_snapshot(data_file: &Path, theme_override: Option<&str>) -> Result<Arc<Snapshot>> {
    let override_theme = match theme_override {
        Some(id) => Some(
            Theme::preset(id).ok_or_else(|| SourceError::UnknownTheme(id.to_string()))?,
        ),
        None => None,
    };

    let source = load_path(data_file)
        .with_context(|| format!("Failed to load {}", data_file.display()))?;

    let mut store = PortfolioStore::new();
    store.update_portfolio_data(PortfolioPatch::from(source.data));
    store.set_selected_theme(override_theme.or(source.theme).unwrap_or_default());

    Ok(store.snapshot())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    const PORTFOLIO: &str = "theme: tech\npersonalInfo:\n  name: Ada\n";

    #[test]
    fn theme_override_wins_over_data_file() {
        let temp = tempdir().unwrap();
        let data = temp.path().join("portfolio.yaml");
        fs::write(&data, PORTFOLIO).unwrap();

        assert_eq!(load_snapshot(&data, None).unwrap().theme.id, "tech");
        assert_eq!(load_snapshot(&data, Some("dark")).unwrap().theme.id, "dark");
        assert!(load_snapshot(&data, Some("neon")).is_err());
    }

    #[tokio::test]
    async fn exports_archive_into_output_dir() {
        let temp = tempdir().unwrap();
        let data = temp.path().join("portfolio.yaml");
        fs::write(&data, PORTFOLIO).unwrap();
        let output = temp.path().join("out");

        let options = ExportOptions {
            data: Some(data),
            output: Some(output.clone()),
            ..Default::default()
        };
        run(ConfigFile::default(), options).await.unwrap();

        assert!(output.join("Ada-website.zip").exists());
    }

    #[tokio::test]
    async fn missing_data_file_fails_without_output() {
        let temp = tempdir().unwrap();
        let output = temp.path().join("out");

        let options = ExportOptions {
            data: Some(temp.path().join("missing.yaml")),
            output: Some(output.clone()),
            ..Default::default()
        };

        assert!(run(ConfigFile::default(), options).await.is_err());
        assert!(!output.exists());
    }
}
