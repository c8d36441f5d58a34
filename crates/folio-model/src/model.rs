//! Portfolio content records.
//!
//! Field names serialize in camelCase. Empty strings mean "absent" for every
//! optional text field.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::id::EntryId;
use crate::theme::Theme;

/// Identity and contact details of the portfolio owner.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalInfo {
    pub name: String,
    pub title: String,
    /// Markdown
    pub about: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub website: String,
}

/// Social profile URLs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SocialLinks {
    pub github: String,
    pub linkedin: String,
    pub twitter: String,
    pub instagram: String,
    pub dribbble: String,
}

/// A single skill with a self-assessed level.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Skill {
    pub id: EntryId,
    pub name: String,
    /// Intended range 1-10; any number is accepted.
    pub level: f64,
    /// Free-text grouping label
    pub category: String,
}

/// A position in the work history.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Experience {
    pub id: EntryId,
    pub company: String,
    pub position: String,
    /// Free text, e.g. "2021 - Present"
    pub duration: String,
    /// Markdown
    pub description: String,
    pub technologies: Vec<String>,
}

/// A degree or course of study.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Education {
    pub id: EntryId,
    pub institution: String,
    pub degree: String,
    pub duration: String,
    /// Markdown
    pub description: String,
}

/// A showcased project.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Project {
    pub id: EntryId,
    pub title: String,
    /// Markdown
    pub description: String,
    /// Image URL
    pub image: String,
    pub technologies: Vec<String>,
    pub live_url: String,
    pub github_url: String,
    pub featured: bool,
}

/// Collection entries that carry a stable id.
pub trait Identified {
    fn id(&self) -> &EntryId;
    fn id_mut(&mut self) -> &mut EntryId;
}

macro_rules! impl_identified {
    ($($ty:ty),*) => {
        $(impl Identified for $ty {
            fn id(&self) -> &EntryId {
                &self.id
            }

            fn id_mut(&mut self) -> &mut EntryId {
                &mut self.id
            }
        })*
    };
}

impl_identified!(Skill, Experience, Education, Project);

/// Aggregate root of the portfolio content.
///
/// Every part sits behind an `Arc`, so a new snapshot shares all parts an
/// operation did not touch with the previous one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PortfolioData {
    pub personal_info: Arc<PersonalInfo>,
    pub social_links: Arc<SocialLinks>,
    pub skills: Arc<Vec<Skill>>,
    pub experiences: Arc<Vec<Experience>>,
    pub education: Arc<Vec<Education>>,
    pub projects: Arc<Vec<Project>>,
}

/// The complete portfolio content and theme at one instant.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    pub data: Arc<PortfolioData>,
    pub theme: Arc<Theme>,
}

impl Snapshot {
    pub fn new(data: PortfolioData, theme: Theme) -> Self {
        Self {
            data: Arc::new(data),
            theme: Arc::new(theme),
        }
    }

    /// Name of the portfolio owner, empty when not set.
    pub fn owner_name(&self) -> &str {
        &self.data.personal_info.name
    }
}

/// Partial update of [`PersonalInfo`]; `Some` fields overwrite.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersonalInfoPatch {
    pub name: Option<String>,
    pub title: Option<String>,
    pub about: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub website: Option<String>,
}

impl PersonalInfoPatch {
    /// Shallow-merge this patch onto `base`.
    pub fn apply(self, base: &PersonalInfo) -> PersonalInfo {
        PersonalInfo {
            name: self.name.unwrap_or_else(|| base.name.clone()),
            title: self.title.unwrap_or_else(|| base.title.clone()),
            about: self.about.unwrap_or_else(|| base.about.clone()),
            email: self.email.unwrap_or_else(|| base.email.clone()),
            phone: self.phone.unwrap_or_else(|| base.phone.clone()),
            location: self.location.unwrap_or_else(|| base.location.clone()),
            website: self.website.unwrap_or_else(|| base.website.clone()),
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Partial update of [`SocialLinks`]; `Some` fields overwrite.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SocialLinksPatch {
    pub github: Option<String>,
    pub linkedin: Option<String>,
    pub twitter: Option<String>,
    pub instagram: Option<String>,
    pub dribbble: Option<String>,
}

impl SocialLinksPatch {
    /// Shallow-merge this patch onto `base`.
    pub fn apply(self, base: &SocialLinks) -> SocialLinks {
        SocialLinks {
            github: self.github.unwrap_or_else(|| base.github.clone()),
            linkedin: self.linkedin.unwrap_or_else(|| base.linkedin.clone()),
            twitter: self.twitter.unwrap_or_else(|| base.twitter.clone()),
            instagram: self.instagram.unwrap_or_else(|| base.instagram.clone()),
            dribbble: self.dribbble.unwrap_or_else(|| base.dribbble.clone()),
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Partial update of [`PortfolioData`]; each `Some` part replaces the
/// current part wholesale.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PortfolioPatch {
    pub personal_info: Option<PersonalInfo>,
    pub social_links: Option<SocialLinks>,
    pub skills: Option<Vec<Skill>>,
    pub experiences: Option<Vec<Experience>>,
    pub education: Option<Vec<Education>>,
    pub projects: Option<Vec<Project>>,
}

impl From<PortfolioData> for PortfolioPatch {
    fn from(data: PortfolioData) -> Self {
        Self {
            personal_info: Some(Arc::unwrap_or_clone(data.personal_info)),
            social_links: Some(Arc::unwrap_or_clone(data.social_links)),
            skills: Some(Arc::unwrap_or_clone(data.skills)),
            experiences: Some(Arc::unwrap_or_clone(data.experiences)),
            education: Some(Arc::unwrap_or_clone(data.education)),
            projects: Some(Arc::unwrap_or_clone(data.projects)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn personal_info_patch_merges_shallowly() {
        let base = PersonalInfo {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            ..Default::default()
        };

        let merged = PersonalInfoPatch {
            title: Some("Engineer".to_string()),
            email: Some(String::new()),
            ..Default::default()
        }
        .apply(&base);

        assert_eq!(merged.name, "Ada");
        assert_eq!(merged.title, "Engineer");
        assert_eq!(merged.email, "");
    }

    #[test]
    fn social_links_patch_merges_shallowly() {
        let base = SocialLinks {
            github: "https://github.com/ada".to_string(),
            ..Default::default()
        };

        let merged = SocialLinksPatch {
            twitter: Some("https://twitter.com/ada".to_string()),
            ..Default::default()
        }
        .apply(&base);

        assert_eq!(merged.github, "https://github.com/ada");
        assert_eq!(merged.twitter, "https://twitter.com/ada");
    }

    #[test]
    fn deserializes_camel_case_with_missing_fields() {
        let json = r#"{
            "personalInfo": { "name": "Ada" },
            "projects": [{ "title": "Engine", "liveUrl": "https://x.dev", "featured": true }]
        }"#;

        let data: PortfolioData = serde_json::from_str(json).unwrap();

        assert_eq!(data.personal_info.name, "Ada");
        assert!(data.skills.is_empty());
        assert_eq!(data.projects[0].live_url, "https://x.dev");
        assert!(data.projects[0].featured);
        assert!(data.projects[0].id.is_empty());
    }

    #[test]
    fn snapshot_equality_is_deep() {
        let a = Snapshot::default();
        let b = Snapshot::new(PortfolioData::default(), Theme::default());
        assert_eq!(a, b);
    }
}
