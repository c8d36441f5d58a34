//! Loading portfolio content from files.
//!
//! A portfolio source is YAML, JSON or TOML with the same camelCase shape as
//! [`PortfolioData`], plus an optional `theme` that is either a preset id or
//! a full theme table. Markdown sources carry the data as YAML frontmatter;
//! the body becomes `personalInfo.about` when the frontmatter leaves it empty.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use folio_markdown::{split_frontmatter, FrontmatterError};
use serde::Deserialize;

use crate::id::EntryId;
use crate::model::{
    Education, Experience, Identified, PersonalInfo, PortfolioData, Project, Skill, SocialLinks,
};
use crate::theme::Theme;

/// File formats a portfolio can be read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Yaml,
    Json,
    Toml,
    Markdown,
}

impl SourceFormat {
    /// Pick a format from a file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        match ext.to_lowercase().as_str() {
            "yaml" | "yml" => Some(Self::Yaml),
            "json" => Some(Self::Json),
            "toml" => Some(Self::Toml),
            "md" | "markdown" => Some(Self::Markdown),
            _ => None,
        }
    }
}

/// Portfolio content read from a source file.
#[derive(Debug, Clone, PartialEq)]
pub struct PortfolioSource {
    pub data: PortfolioData,
    /// `None` when the source does not pick a theme
    pub theme: Option<Theme>,
}

/// Errors that can occur when loading a portfolio source.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("Failed to read portfolio source: {0}")]
    Read(String),

    #[error("Unsupported portfolio source format: {0}")]
    UnsupportedFormat(String),

    #[error("Frontmatter error: {0}")]
    Frontmatter(#[from] FrontmatterError),

    #[error("Invalid YAML: {0}")]
    Yaml(String),

    #[error("Invalid JSON: {0}")]
    Json(String),

    #[error("Invalid TOML: {0}")]
    Toml(String),

    #[error("Unknown theme preset: {0}")]
    UnknownTheme(String),
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct SourceFile {
    theme: Option<ThemeChoice>,
    personal_info: PersonalInfo,
    social_links: SocialLinks,
    skills: Vec<Skill>,
    experiences: Vec<Experience>,
    education: Vec<Education>,
    projects: Vec<Project>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ThemeChoice {
    Preset(String),
    Custom(Theme),
}

/// Read a portfolio source file, choosing the format by extension.
pub fn load_path(path: &Path) -> Result<PortfolioSource, SourceError> {
    let format = SourceFormat::from_path(path)
        .ok_or_else(|| SourceError::UnsupportedFormat(path.display().to_string()))?;

    let content = fs::read_to_string(path)
        .map_err(|e| SourceError::Read(format!("{}: {}", path.display(), e)))?;

    parse_str(&content, format)
}

/// Parse portfolio source text.
///
/// Entries without an id are named after their position in the file
/// (`skill-1`, `experience-2`, ...), so parsing the same text twice yields
/// equal data.
pub fn parse_str(content: &str, format: SourceFormat) -> Result<PortfolioSource, SourceError> {
    let file = match format {
        SourceFormat::Yaml => parse_yaml(content)?,
        SourceFormat::Json => {
            serde_json::from_str(content).map_err(|e| SourceError::Json(e.to_string()))?
        }
        SourceFormat::Toml => toml::from_str(content).map_err(|e| SourceError::Toml(e.to_string()))?,
        SourceFormat::Markdown => {
            let (frontmatter, body) = split_frontmatter(content)?;
            let mut file = match frontmatter {
                Some(yaml) => parse_yaml(yaml)?,
                None => SourceFile::default(),
            };
            let body = body.trim();
            if file.personal_info.about.is_empty() && !body.is_empty() {
                file.personal_info.about = body.to_string();
            }
            file
        }
    };

    let theme = match file.theme {
        None => None,
        Some(ThemeChoice::Preset(id)) => {
            Some(Theme::preset(&id).ok_or(SourceError::UnknownTheme(id))?)
        }
        Some(ThemeChoice::Custom(theme)) => Some(theme),
    };

    let data = PortfolioData {
        personal_info: Arc::new(file.personal_info),
        social_links: Arc::new(file.social_links),
        skills: Arc::new(with_ids(file.skills, "skill")),
        experiences: Arc::new(with_ids(file.experiences, "experience")),
        education: Arc::new(with_ids(file.education, "education")),
        projects: Arc::new(with_ids(file.projects, "project")),
    };

    Ok(PortfolioSource { data, theme })
}

fn parse_yaml(content: &str) -> Result<SourceFile, SourceError> {
    // An empty document deserializes to unit, not to an empty mapping.
    if content.trim().is_empty() {
        return Ok(SourceFile::default());
    }
    serde_yaml::from_str(content).map_err(|e| SourceError::Yaml(e.to_string()))
}

fn with_ids<T: Identified>(mut entries: Vec<T>, prefix: &str) -> Vec<T> {
    for (index, entry) in entries.iter_mut().enumerate() {
        if entry.id().is_empty() {
            *entry.id_mut() = EntryId::new(format!("{}-{}", prefix, index + 1));
        }
    }
    entries
}
