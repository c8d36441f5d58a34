//! Immutable-snapshot state container.
//!
//! Every operation builds a new [`Snapshot`] from the current one and
//! publishes it to subscribers. Previous snapshots are never modified, and
//! parts an operation does not touch are shared between snapshots.

use std::sync::Arc;

use tokio::sync::broadcast;

use crate::id::EntryId;
use crate::model::{
    Education, Experience, Identified, PersonalInfoPatch, PortfolioData, PortfolioPatch, Project,
    Skill, Snapshot, SocialLinksPatch,
};
use crate::theme::Theme;

/// Capacity of the change notification channel.
const CHANNEL_CAPACITY: usize = 64;

/// Single authoritative holder of the current portfolio snapshot.
///
/// Operations never fail and perform no validation. Updates and removals
/// that do not find their target leave the store untouched and publish
/// nothing.
#[derive(Debug)]
pub struct PortfolioStore {
    current: Arc<Snapshot>,
    revision: u64,
    sender: broadcast::Sender<Arc<Snapshot>>,
}

impl PortfolioStore {
    /// Create a store holding the default portfolio and theme.
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(CHANNEL_CAPACITY);
        Self {
            current: Arc::new(Snapshot::default()),
            revision: 0,
            sender,
        }
    }

    /// The current snapshot.
    pub fn snapshot(&self) -> Arc<Snapshot> {
        Arc::clone(&self.current)
    }

    pub fn data(&self) -> &PortfolioData {
        &self.current.data
    }

    pub fn theme(&self) -> &Theme {
        &self.current.theme
    }

    /// Number of snapshots published since the store was created.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Subscribe to new snapshots.
    pub fn subscribe(&self) -> broadcast::Receiver<Arc<Snapshot>> {
        self.sender.subscribe()
    }

    pub fn update_personal_info(&mut self, patch: PersonalInfoPatch) {
        if patch.is_empty() {
            return;
        }
        let info = patch.apply(&self.current.data.personal_info);
        self.update_data(|data| data.personal_info = Arc::new(info));
    }

    pub fn update_social_links(&mut self, patch: SocialLinksPatch) {
        if patch.is_empty() {
            return;
        }
        let links = patch.apply(&self.current.data.social_links);
        self.update_data(|data| data.social_links = Arc::new(links));
    }

    /// Replace whole parts of the portfolio at once.
    pub fn update_portfolio_data(&mut self, patch: PortfolioPatch) {
        self.update_data(|data| {
            if let Some(info) = patch.personal_info {
                data.personal_info = Arc::new(info);
            }
            if let Some(links) = patch.social_links {
                data.social_links = Arc::new(links);
            }
            if let Some(skills) = patch.skills {
                data.skills = Arc::new(skills);
            }
            if let Some(experiences) = patch.experiences {
                data.experiences = Arc::new(experiences);
            }
            if let Some(education) = patch.education {
                data.education = Arc::new(education);
            }
            if let Some(projects) = patch.projects {
                data.projects = Arc::new(projects);
            }
        });
    }

    pub fn add_skill(&mut self, skill: Skill) {
        let skills = appended(&self.current.data.skills, skill);
        self.update_data(|data| data.skills = Arc::new(skills));
    }

    /// Replace the skill at `index`; no-op when out of range.
    pub fn update_skill(&mut self, index: usize, skill: Skill) {
        if index >= self.current.data.skills.len() {
            return;
        }
        let mut skills = self.current.data.skills.to_vec();
        skills[index] = skill;
        self.update_data(|data| data.skills = Arc::new(skills));
    }

    /// Remove the skill at `index`; no-op when out of range.
    pub fn remove_skill(&mut self, index: usize) {
        if index >= self.current.data.skills.len() {
            return;
        }
        let mut skills = self.current.data.skills.to_vec();
        skills.remove(index);
        self.update_data(|data| data.skills = Arc::new(skills));
    }

    pub fn update_skill_by_id(&mut self, id: &EntryId, skill: Skill) {
        if let Some(skills) = replaced(&self.current.data.skills, id, skill) {
            self.update_data(|data| data.skills = Arc::new(skills));
        }
    }

    pub fn remove_skill_by_id(&mut self, id: &EntryId) {
        if let Some(skills) = removed(&self.current.data.skills, id) {
            self.update_data(|data| data.skills = Arc::new(skills));
        }
    }

    /// Append an experience; the entry arrives with its id already set.
    pub fn add_experience(&mut self, experience: Experience) {
        let experiences = appended(&self.current.data.experiences, experience);
        self.update_data(|data| data.experiences = Arc::new(experiences));
    }

    pub fn update_experience(&mut self, id: &EntryId, experience: Experience) {
        if let Some(experiences) = replaced(&self.current.data.experiences, id, experience) {
            self.update_data(|data| data.experiences = Arc::new(experiences));
        }
    }

    pub fn remove_experience(&mut self, id: &EntryId) {
        if let Some(experiences) = removed(&self.current.data.experiences, id) {
            self.update_data(|data| data.experiences = Arc::new(experiences));
        }
    }

    pub fn add_education(&mut self, education: Education) {
        let entries = appended(&self.current.data.education, education);
        self.update_data(|data| data.education = Arc::new(entries));
    }

    pub fn update_education(&mut self, id: &EntryId, education: Education) {
        if let Some(entries) = replaced(&self.current.data.education, id, education) {
            self.update_data(|data| data.education = Arc::new(entries));
        }
    }

    pub fn remove_education(&mut self, id: &EntryId) {
        if let Some(entries) = removed(&self.current.data.education, id) {
            self.update_data(|data| data.education = Arc::new(entries));
        }
    }

    pub fn add_project(&mut self, project: Project) {
        let projects = appended(&self.current.data.projects, project);
        self.update_data(|data| data.projects = Arc::new(projects));
    }

    pub fn update_project(&mut self, id: &EntryId, project: Project) {
        if let Some(projects) = replaced(&self.current.data.projects, id, project) {
            self.update_data(|data| data.projects = Arc::new(projects));
        }
    }

    pub fn remove_project(&mut self, id: &EntryId) {
        if let Some(projects) = removed(&self.current.data.projects, id) {
            self.update_data(|data| data.projects = Arc::new(projects));
        }
    }

    /// Replace the active theme wholesale.
    pub fn set_selected_theme(&mut self, theme: Theme) {
        self.commit(Snapshot {
            data: Arc::clone(&self.current.data),
            theme: Arc::new(theme),
        });
    }

    /// Restore the default portfolio and the default theme.
    pub fn reset_portfolio(&mut self) {
        self.commit(Snapshot::default());
    }

    /// Build a new snapshot from a modified copy of the current data.
    fn update_data(&mut self, f: impl FnOnce(&mut PortfolioData)) {
        // Cloning PortfolioData only bumps the reference counts of its parts.
        let mut data = PortfolioData::clone(&self.current.data);
        f(&mut data);
        self.commit(Snapshot {
            data: Arc::new(data),
            theme: Arc::clone(&self.current.theme),
        });
    }

    /// Install `next` as the current snapshot and notify subscribers.
    fn commit(&mut self, next: Snapshot) {
        if next == *self.current {
            return;
        }
        self.current = Arc::new(next);
        self.revision += 1;
        // No subscribers is fine.
        let _ = self.sender.send(Arc::clone(&self.current));
    }
}

impl Default for PortfolioStore {
    fn default() -> Self {
        Self::new()
    }
}

fn appended<T: Clone>(items: &[T], entry: T) -> Vec<T> {
    let mut next = Vec::with_capacity(items.len() + 1);
    next.extend_from_slice(items);
    next.push(entry);
    next
}

/// `None` when no entry has `id`.
fn replaced<T: Identified + Clone>(items: &[T], id: &EntryId, entry: T) -> Option<Vec<T>> {
    if !items.iter().any(|e| e.id() == id) {
        return None;
    }
    Some(
        items
            .iter()
            .map(|e| if e.id() == id { entry.clone() } else { e.clone() })
            .collect(),
    )
}

/// `None` when no entry has `id`.
fn removed<T: Identified + Clone>(items: &[T], id: &EntryId) -> Option<Vec<T>> {
    if !items.iter().any(|e| e.id() == id) {
        return None;
    }
    Some(items.iter().filter(|e| e.id() != id).cloned().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::IdGenerator;
    use crate::model::PersonalInfo;

    fn skill(name: &str, category: &str) -> Skill {
        Skill {
            id: EntryId::new(name),
            name: name.to_string(),
            level: 7.0,
            category: category.to_string(),
        }
    }

    fn experience(ids: &IdGenerator, company: &str) -> Experience {
        Experience {
            id: ids.next_id(),
            company: company.to_string(),
            position: "Engineer".to_string(),
            duration: "2020 - 2023".to_string(),
            description: "Built **things**.".to_string(),
            technologies: vec!["Rust".to_string()],
        }
    }

    #[test]
    fn starts_with_defaults() {
        let store = PortfolioStore::new();
        assert_eq!(*store.snapshot(), Snapshot::default());
        assert_eq!(store.theme().id, "modern");
        assert_eq!(store.revision(), 0);
    }

    #[test]
    fn add_then_remove_experience_round_trips() {
        let ids = IdGenerator::new("exp");
        let mut store = PortfolioStore::new();
        store.add_experience(experience(&ids, "Acme"));
        let before = store.data().experiences.clone();

        let added = experience(&ids, "Globex");
        let added_id = added.id.clone();
        store.add_experience(added);
        assert_eq!(store.data().experiences.len(), 2);

        store.remove_experience(&added_id);
        assert_eq!(store.data().experiences, before);
    }

    #[test]
    fn update_replaces_whole_record() {
        let ids = IdGenerator::new("exp");
        let mut store = PortfolioStore::new();
        let original = experience(&ids, "Acme");
        let id = original.id.clone();
        store.add_experience(original);

        let replacement = Experience {
            id: id.clone(),
            company: "Acme Corp".to_string(),
            ..Default::default()
        };
        store.update_experience(&id, replacement.clone());

        assert_eq!(store.data().experiences.as_slice(), &[replacement]);
    }

    #[test]
    fn update_and_remove_with_unknown_id_are_noops() {
        let ids = IdGenerator::new("p");
        let mut store = PortfolioStore::new();
        store.add_project(Project {
            id: ids.next_id(),
            title: "Engine".to_string(),
            ..Default::default()
        });
        let before = store.snapshot();

        let missing = EntryId::new("missing");
        store.update_project(&missing, Project::default());
        store.remove_project(&missing);
        store.update_education(&missing, Education::default());
        store.remove_education(&missing);

        assert!(Arc::ptr_eq(&before, &store.snapshot()));
    }

    #[test]
    fn out_of_range_skill_removal_is_noop() {
        let mut store = PortfolioStore::new();
        store.add_skill(skill("Rust", "Languages"));
        store.add_skill(skill("Go", "Languages"));
        let before = store.data().skills.clone();

        store.remove_skill(2);
        store.remove_skill(usize::MAX);

        assert_eq!(store.data().skills, before);
    }

    #[test]
    fn removes_and_updates_skills_by_index() {
        let mut store = PortfolioStore::new();
        store.add_skill(skill("Rust", "Languages"));
        store.add_skill(skill("Go", "Languages"));
        store.add_skill(skill("Figma", "Design"));

        store.remove_skill(1);
        store.update_skill(1, skill("Sketch", "Design"));

        let names: Vec<_> = store.data().skills.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["Rust", "Sketch"]);
    }

    #[test]
    fn removes_skills_by_id() {
        let mut store = PortfolioStore::new();
        store.add_skill(skill("Rust", "Languages"));
        store.add_skill(skill("Go", "Languages"));

        store.remove_skill_by_id(&EntryId::new("Rust"));
        store.update_skill_by_id(&EntryId::new("Go"), skill("Go", "Backend"));

        assert_eq!(store.data().skills.as_slice(), &[skill("Go", "Backend")]);
    }

    #[test]
    fn reset_restores_defaults() {
        let ids = IdGenerator::default();
        let mut store = PortfolioStore::new();
        store.update_personal_info(PersonalInfoPatch {
            name: Some("Ada".to_string()),
            ..Default::default()
        });
        store.add_skill(skill("Rust", "Languages"));
        store.add_experience(experience(&ids, "Acme"));
        store.set_selected_theme(Theme::preset("dark").unwrap());

        store.reset_portfolio();

        assert_eq!(*store.data(), PortfolioData::default());
        assert_eq!(*store.theme(), Theme::default());
    }

    #[test]
    fn snapshots_share_untouched_parts() {
        let ids = IdGenerator::default();
        let mut store = PortfolioStore::new();
        store.add_experience(experience(&ids, "Acme"));
        let before = store.snapshot();

        store.add_skill(skill("Rust", "Languages"));
        let after = store.snapshot();

        assert!(Arc::ptr_eq(&before.data.experiences, &after.data.experiences));
        assert!(Arc::ptr_eq(&before.data.personal_info, &after.data.personal_info));
        assert!(Arc::ptr_eq(&before.theme, &after.theme));
        assert!(before.data.skills.is_empty());
        assert_eq!(after.data.skills.len(), 1);
    }

    #[test]
    fn merges_personal_info_patches() {
        let mut store = PortfolioStore::new();
        store.update_personal_info(PersonalInfoPatch {
            name: Some("Ada".to_string()),
            ..Default::default()
        });
        store.update_personal_info(PersonalInfoPatch {
            title: Some("Engineer".to_string()),
            ..Default::default()
        });

        assert_eq!(
            *store.data().personal_info,
            PersonalInfo {
                name: "Ada".to_string(),
                title: "Engineer".to_string(),
                ..Default::default()
            }
        );
    }

    #[test]
    fn portfolio_patch_replaces_only_given_parts() {
        let mut store = PortfolioStore::new();
        store.add_skill(skill("Rust", "Languages"));
        store.update_social_links(SocialLinksPatch {
            github: Some("https://github.com/ada".to_string()),
            ..Default::default()
        });

        store.update_portfolio_data(PortfolioPatch {
            skills: Some(vec![]),
            ..Default::default()
        });

        assert!(store.data().skills.is_empty());
        assert_eq!(store.data().social_links.github, "https://github.com/ada");
    }

    #[test]
    fn notifies_subscribers_of_new_snapshots() {
        let mut store = PortfolioStore::new();
        let mut rx = store.subscribe();

        store.set_selected_theme(Theme::preset("tech").unwrap());

        let published = rx.try_recv().unwrap();
        assert_eq!(published.theme.id, "tech");
        assert!(Arc::ptr_eq(&published, &store.snapshot()));
        assert_eq!(store.revision(), 1);
    }

    #[test]
    fn noops_publish_nothing() {
        let mut store = PortfolioStore::new();
        let mut rx = store.subscribe();

        store.remove_skill(0);
        store.remove_experience(&EntryId::new("nope"));
        store.update_personal_info(PersonalInfoPatch::default());
        store.reset_portfolio();

        assert!(rx.try_recv().is_err());
        assert_eq!(store.revision(), 0);
    }

    #[test]
    fn subscribers_see_snapshots_in_order() {
        let mut store = PortfolioStore::new();
        let mut rx = store.subscribe();

        store.add_skill(Skill {
            name: "Rust".to_string(),
            ..Default::default()
        });
        store.set_selected_theme(Theme::preset("dark").unwrap());
        drop(store);

        tokio_test::block_on(async {
            let first = rx.recv().await.unwrap();
            assert_eq!(first.data.skills.len(), 1);
            assert_eq!(first.theme.id, "modern");

            let second = rx.recv().await.unwrap();
            assert_eq!(second.theme.id, "dark");
            assert!(Arc::ptr_eq(&first.data, &second.data));

            assert!(rx.recv().await.is_err());
        });
    }
}
