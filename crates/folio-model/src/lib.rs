//! Portfolio data model and state management.
//!
//! Holds the content records (personal info, skills, work history, education,
//! projects), the visual theme, and the store that turns mutations into new
//! immutable snapshots.

pub mod id;
pub mod model;
pub mod source;
pub mod store;
pub mod summary;
pub mod theme;

pub use id::{EntryId, IdGenerator};
pub use model::{
    Education, Experience, PersonalInfo, PersonalInfoPatch, PortfolioData, PortfolioPatch,
    Project, Skill, Snapshot, SocialLinks, SocialLinksPatch,
};
pub use source::{load_path, parse_str, PortfolioSource, SourceError, SourceFormat};
pub use store::PortfolioStore;
pub use summary::{PortfolioSummary, Section};
pub use theme::{Palette, Theme};
