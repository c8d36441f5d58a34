//! Site generator: snapshot in, text artifacts out.

use serde::Serialize;

use folio_markdown::render_markdown;
use folio_model::{Project, Skill, Snapshot, Theme};

use crate::assets::AssetPipeline;
use crate::export::ExportError;
use crate::templates::{NavLink, PageContext, Rendered, TemplateEngine};

/// Maximum number of characters of `about` used for the meta description.
const DESCRIPTION_LIMIT: usize = 150;

const FALLBACK_DESCRIPTION: &str = "Professional portfolio website";

/// The four text files of an exported site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteArtifacts {
    pub html: String,
    pub css: String,
    pub js: String,
    pub readme: String,
}

impl SiteArtifacts {
    /// Archive entry names paired with their contents, in archive order.
    pub fn entries(&self) -> [(&'static str, &str); 4] {
        [
            ("index.html", &self.html),
            ("styles.css", &self.css),
            ("script.js", &self.js),
            ("README.md", &self.readme),
        ]
    }
}

/// Skills sharing a category, in display order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkillGroup<'a> {
    pub category: &'a str,
    pub skills: Vec<&'a Skill>,
}

/// Group skills by category.
///
/// Categories appear in the order they are first encountered; skills keep
/// their insertion order within a category.
pub fn group_skills(skills: &[Skill]) -> Vec<SkillGroup<'_>> {
    let mut groups: Vec<SkillGroup<'_>> = Vec::new();

    for skill in skills {
        match groups.iter_mut().find(|g| g.category == skill.category) {
            Some(group) => group.skills.push(skill),
            None => groups.push(SkillGroup {
                category: &skill.category,
                skills: vec![skill],
            }),
        }
    }

    groups
}

/// Order projects featured-first, keeping insertion order within each group.
pub fn order_projects(projects: &[Project]) -> Vec<&Project> {
    let (featured, rest): (Vec<&Project>, Vec<&Project>) =
        projects.iter().partition(|p| p.featured);
    featured.into_iter().chain(rest).collect()
}

/// Generates the static site for a snapshot.
///
/// Generation is deterministic: the same snapshot always yields the same
/// bytes.
pub struct SiteGenerator {
    templates: TemplateEngine,
    minify: bool,
}

impl SiteGenerator {
    /// Create a generator. `minify` applies to the layout CSS only.
    pub fn new(minify: bool) -> Self {
        Self {
            templates: TemplateEngine::new(),
            minify,
        }
    }

    /// Generate all artifacts for `snapshot`.
    pub fn generate(&self, snapshot: &Snapshot) -> Result<SiteArtifacts, ExportError> {
        let html = self.render_html(snapshot)?;
        let css = self.render_css(&snapshot.theme);
        let js = AssetPipeline::generate_js().to_string();
        let readme = self.render_readme(snapshot)?;

        tracing::debug!(
            "Generated site for theme {} ({} bytes of HTML)",
            snapshot.theme.id,
            html.len()
        );

        Ok(SiteArtifacts {
            html,
            css,
            js,
            readme,
        })
    }

    /// Render `index.html`.
    pub fn render_html(&self, snapshot: &Snapshot) -> Result<String, ExportError> {
        let data = &snapshot.data;
        let personal = &data.personal_info;

        let title = if personal.name.is_empty() {
            "Portfolio".to_string()
        } else {
            format!("{} - Portfolio", personal.name)
        };

        let owner = if personal.name.is_empty() {
            "Portfolio Owner".to_string()
        } else {
            personal.name.clone()
        };

        let mut nav = Vec::new();
        if !data.skills.is_empty() {
            nav.push(NavLink { id: "skills", label: "Skills" });
        }
        if !data.experiences.is_empty() {
            nav.push(NavLink { id: "experience", label: "Experience" });
        }
        if !data.education.is_empty() {
            nav.push(NavLink { id: "education", label: "Education" });
        }
        if !data.projects.is_empty() {
            nav.push(NavLink { id: "projects", label: "Projects" });
        }

        let page = PageContext {
            title,
            description: meta_description(&personal.about),
            owner,
            theme_id: &snapshot.theme.id,
            personal,
            social: &data.social_links,
            about_html: render_markdown(&personal.about),
            nav,
            skill_groups: group_skills(&data.skills),
            experiences: data
                .experiences
                .iter()
                .map(|e| Rendered {
                    item: e,
                    html: render_markdown(&e.description),
                })
                .collect(),
            education: data
                .education
                .iter()
                .map(|e| Rendered {
                    item: e,
                    html: render_markdown(&e.description),
                })
                .collect(),
            projects: order_projects(&data.projects)
                .into_iter()
                .map(|p| Rendered {
                    item: p,
                    html: render_markdown(&p.description),
                })
                .collect(),
        };

        self.templates
            .render_page(&page)
            .map_err(|e| ExportError::Template(e.to_string()))
    }

    /// Render `styles.css` for `theme`.
    pub fn render_css(&self, theme: &Theme) -> String {
        AssetPipeline::generate_css(theme, self.minify)
    }

    /// Render `README.md`.
    pub fn render_readme(&self, snapshot: &Snapshot) -> Result<String, ExportError> {
        let name = match snapshot.owner_name() {
            "" => "Portfolio",
            name => name,
        };

        self.templates
            .render_readme(name)
            .map_err(|e| ExportError::Template(e.to_string()))
    }
}

impl Default for SiteGenerator {
    fn default() -> Self {
        Self::new(false)
    }
}

/// First 150 characters of `about` followed by an ellipsis.
fn meta_description(about: &str) -> String {
    if about.is_empty() {
        return FALLBACK_DESCRIPTION.to_string();
    }
    let mut description: String = about.chars().take(DESCRIPTION_LIMIT).collect();
    description.push_str("...");
    description
}
