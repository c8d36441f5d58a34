//! Initialize a portfolio in the current directory.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Run the init command.
pub async fn run(config_path: &Path, yes: bool) -> Result<()> {
    tracing::info!("Initializing folio...");

    write_file(config_path, DEFAULT_CONFIG, yes)?;

    let data_dir = config_path.parent().unwrap_or_else(|| Path::new(""));
    write_file(&data_dir.join("portfolio.yaml"), DEFAULT_PORTFOLIO, yes)?;

    tracing::info!("Initialization complete!");
    tracing::info!("Run 'folio preview' to see your portfolio.");

    Ok(())
}

/// Write `content` to `path`, keeping existing files unless `overwrite`.
fn write_file(path: &Path, content: &str, overwrite: bool) -> Result<()> {
    if path.exists() && !overwrite {
        tracing::warn!("{} already exists. Use --yes to overwrite.", path.display());
        return Ok(());
    }

    fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))?;
    tracing::info!("Created {}", path.display());

    Ok(())
}

const DEFAULT_CONFIG: &str = r#"# Folio Configuration

[portfolio]
# Portfolio content (YAML, JSON, TOML, or Markdown with frontmatter)
data = "portfolio.yaml"

# Theme preset overriding the one in the data file
# theme = "modern"

[export]
# Directory receiving the website archive
output = "dist"

# Minify the layout stylesheet
minify = false

[preview]
host = "127.0.0.1"
port = 7777
open = true
"#;

const DEFAULT_PORTFOLIO: &str = r#"# Run 'folio themes' to list the available themes.
theme: modern

personalInfo:
  name: Jane Doe
  title: Software Engineer
  about: |
    I build **reliable** software and care about *clear* interfaces.

    Currently focused on developer tooling.
  email: jane@example.com
  location: Berlin, Germany
  website: https://example.com

socialLinks:
  github: https://github.com/janedoe
  linkedin: https://linkedin.com/in/janedoe

skills:
  - name: Rust
    level: 9
    category: Languages
  - name: TypeScript
    level: 8
    category: Languages
  - name: PostgreSQL
    level: 7
    category: Databases

experiences:
  - company: Acme Corp
    position: Senior Engineer
    duration: 2021 - Present
    description: Leading the **build tooling** team.
    technologies: [Rust, Bazel]

education:
  - institution: State University
    degree: B.Sc. Computer Science
    duration: 2014 - 2018

projects:
  - title: Snapshot Store
    description: An immutable state container with change notifications.
    technologies: [Rust, Tokio]
    githubUrl: https://github.com/janedoe/snapshot-store
    featured: true
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use folio_model::{parse_str, SourceFormat};
    use tempfile::tempdir;

    #[tokio::test]
    async fn writes_config_and_sample() {
        let temp = tempdir().unwrap();
        let config = temp.path().join("folio.toml");

        run(&config, false).await.unwrap();

        assert!(config.exists());
        assert!(temp.path().join("portfolio.yaml").exists());
    }

    #[tokio::test]
    async fn keeps_existing_files_without_yes() {
        let temp = tempdir().unwrap();
        let config = temp.path().join("folio.toml");
        fs::write(&config, "# mine").unwrap();

        run(&config, false).await.unwrap();
        assert_eq!(fs::read_to_string(&config).unwrap(), "# mine");

        run(&config, true).await.unwrap();
        assert_eq!(fs::read_to_string(&config).unwrap(), DEFAULT_CONFIG);
    }

    #[test]
    fn sample_portfolio_parses() {
        let source = parse_str(DEFAULT_PORTFOLIO, SourceFormat::Yaml).unwrap();

        assert_eq!(source.data.personal_info.name, "Jane Doe");
        assert_eq!(source.data.skills.len(), 3);
        assert!(source.data.projects[0].featured);
    }

    #[test]
    fn default_config_parses() {
        let config: crate::config::ConfigFile = toml::from_str(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.preview.port, 7777);
    }
}
