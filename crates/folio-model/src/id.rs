//! Identifiers for collection entries.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

/// Stable identifier of a skill, experience, education or project entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(String);

impl EntryId {
    /// Wrap an existing identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Entries loaded from a source file may omit their id.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EntryId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Hands out unique entry ids for the lifetime of a session.
///
/// Ids come from a monotonic counter, so two additions in quick succession
/// never collide.
#[derive(Debug)]
pub struct IdGenerator {
    prefix: String,
    next: AtomicU64,
}

impl IdGenerator {
    /// Create a generator whose ids look like `{prefix}-1`, `{prefix}-2`, ...
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: AtomicU64::new(1),
        }
    }

    /// Produce the next id.
    pub fn next_id(&self) -> EntryId {
        let n = self.next.fetch_add(1, Ordering::Relaxed);
        EntryId(format!("{}-{}", self.prefix, n))
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new("entry")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn generates_unique_ids() {
        let ids = IdGenerator::default();
        let generated: HashSet<EntryId> = (0..1000).map(|_| ids.next_id()).collect();
        assert_eq!(generated.len(), 1000);
    }

    #[test]
    fn ids_are_monotonic() {
        let ids = IdGenerator::new("exp");
        assert_eq!(ids.next_id().as_str(), "exp-1");
        assert_eq!(ids.next_id().as_str(), "exp-2");
    }

    #[test]
    fn serializes_as_plain_string() {
        let json = serde_json::to_string(&EntryId::new("p-7")).unwrap();
        assert_eq!(json, "\"p-7\"");
    }
}
