//! Configuration file (folio.toml).

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub portfolio: PortfolioConfig,
    #[serde(default)]
    pub export: ExportConfig,
    #[serde(default)]
    pub preview: PreviewSettings,
}

#[derive(Debug, Deserialize)]
pub struct PortfolioConfig {
    /// Portfolio source file
    #[serde(default = "default_data")]
    pub data: PathBuf,
    /// Theme preset overriding the data file's theme
    pub theme: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ExportConfig {
    #[serde(default = "default_output")]
    pub output: PathBuf,
    #[serde(default)]
    pub minify: bool,
}

#[derive(Debug, Deserialize)]
pub struct PreviewSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_open")]
    pub open: bool,
}

impl Default for PortfolioConfig {
    fn default() -> Self {
        Self {
            data: default_data(),
            theme: None,
        }
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output: default_output(),
            minify: false,
        }
    }
}

impl Default for PreviewSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            open: default_open(),
        }
    }
}

fn default_data() -> PathBuf {
    PathBuf::from("portfolio.yaml")
}
fn default_output() -> PathBuf {
    PathBuf::from("dist")
}
fn default_host() -> String {
    "127.0.0.1".to_string()
}
fn default_port() -> u16 {
    7777
}
fn default_open() -> bool {
    true
}

/// Load configuration from `path` if it exists.
/// Returns an error if the config file exists but is malformed.
pub fn load_config(path: &Path) -> Result<ConfigFile> {
    if !path.exists() {
        return Ok(ConfigFile::default());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let config: ConfigFile = toml::from_str(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))?;

    tracing::debug!("Loaded config from {}", path.display());
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_yields_defaults() {
        let temp = tempdir().unwrap();
        let config = load_config(&temp.path().join("folio.toml")).unwrap();

        assert_eq!(config.portfolio.data, PathBuf::from("portfolio.yaml"));
        assert_eq!(config.export.output, PathBuf::from("dist"));
        assert_eq!(config.preview.port, 7777);
        assert!(config.preview.open);
        assert!(!config.export.minify);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("folio.toml");
        fs::write(
            &path,
            "[portfolio]\ntheme = \"dark\"\n\n[preview]\nport = 8080\n",
        )
        .unwrap();

        let config = load_config(&path).unwrap();

        assert_eq!(config.portfolio.theme.as_deref(), Some("dark"));
        assert_eq!(config.portfolio.data, PathBuf::from("portfolio.yaml"));
        assert_eq!(config.preview.port, 8080);
        assert_eq!(config.preview.host, "127.0.0.1");
    }

    #[test]
    fn malformed_file_is_an_error() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("folio.toml");
        fs::write(&path, "[preview]\nport = \"high\"\n").unwrap();

        assert!(load_config(&path).is_err());
    }
}
