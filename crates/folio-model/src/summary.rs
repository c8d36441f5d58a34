//! At-a-glance summary of a snapshot, as shown before exporting.

use std::fmt;

use serde::Serialize;

use crate::model::Snapshot;

/// A content section that will appear in the exported site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Section {
    Info,
    Skills,
    Experience,
    Education,
    Projects,
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Info => "Info",
            Self::Skills => "Skills",
            Self::Experience => "Work",
            Self::Education => "Education",
            Self::Projects => "Projects",
        };
        f.write_str(label)
    }
}

/// Summary of the current portfolio.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PortfolioSummary {
    pub theme: String,
    pub sections: Vec<Section>,
    pub skills: usize,
    pub projects: usize,
}

impl Snapshot {
    pub fn summary(&self) -> PortfolioSummary {
        let data = &self.data;
        let mut sections = Vec::new();

        if !data.personal_info.name.is_empty() {
            sections.push(Section::Info);
        }
        if !data.skills.is_empty() {
            sections.push(Section::Skills);
        }
        if !data.experiences.is_empty() {
            sections.push(Section::Experience);
        }
        if !data.education.is_empty() {
            sections.push(Section::Education);
        }
        if !data.projects.is_empty() {
            sections.push(Section::Projects);
        }

        PortfolioSummary {
            theme: self.theme.name.clone(),
            sections,
            skills: data.skills.len(),
            projects: data.projects.len(),
        }
    }
}

impl fmt::Display for PortfolioSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sections: Vec<String> = self.sections.iter().map(ToString::to_string).collect();
        write!(
            f,
            "theme {}, sections [{}], {} skills, {} projects",
            self.theme,
            sections.join(", "),
            self.skills,
            self.projects
        )
    }
}
