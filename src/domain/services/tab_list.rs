use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use uuid::Uuid;

use crate::domain::entities::{EntryAttributes, EntryState, EntryView, TabListEntry};
use crate::domain::value_objects::{PlayerIdentity, Text};

/// Roster of currently connected players, shared between the connection
/// handlers that mutate it and the render path that reads it.
///
/// The tab list owns entry state; handles returned from it hold a
/// back-reference to their parent and stay valid after removal.
#[derive(Debug, Clone)]
pub struct TabList {
    inner: Arc<TabListInner>,
}

#[derive(Debug)]
struct TabListInner {
    entries: RwLock<HashMap<Uuid, Arc<EntryState>>>,
}

impl TabList {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(TabListInner {
                entries: RwLock::new(HashMap::new()),
            }),
        }
    }

    /// Construct and register a new entry bound to this tab list.
    ///
    /// Registering a profile uuid that is already present replaces the
    /// previous entry.
    pub fn build_entry(
        &self,
        profile: PlayerIdentity,
        display_name: Option<Text>,
        latency: i32,
        game_mode: i32,
    ) -> TabListEntry {
        let id = profile.id;
        let username = profile.username.clone();

        let state = Arc::new(EntryState {
            profile,
            joined_at: chrono::Utc::now().timestamp(),
            attributes: RwLock::new(EntryAttributes {
                display_name,
                latency,
                game_mode,
            }),
        });

        let previous = self
            .inner
            .entries
            .write()
            .unwrap()
            .insert(id, state.clone());

        if previous.is_some() {
            tracing::debug!("Replaced tab list entry for {} ({})", username, id);
        } else {
            tracing::debug!("Registered tab list entry for {} ({})", username, id);
        }

        TabListEntry::from_state(self.clone(), state)
    }

    /// Look up the entry for a profile uuid
    pub fn entry(&self, id: &Uuid) -> Option<TabListEntry> {
        let entries = self.inner.entries.read().unwrap();
        entries
            .get(id)
            .map(|state| TabListEntry::from_state(self.clone(), state.clone()))
    }

    /// Check if an entry is registered for a profile uuid
    pub fn contains(&self, id: &Uuid) -> bool {
        let entries = self.inner.entries.read().unwrap();
        entries.contains_key(id)
    }

    /// All entries, sorted by username
    pub fn entries(&self) -> Vec<TabListEntry> {
        let entries = self.inner.entries.read().unwrap();
        let mut list: Vec<TabListEntry> = entries
            .values()
            .map(|state| TabListEntry::from_state(self.clone(), state.clone()))
            .collect();
        list.sort_by(|a, b| a.profile().username.cmp(&b.profile().username));
        list
    }

    /// Unregister the entry for a profile uuid, returning the detached entry
    pub fn remove_entry(&self, id: &Uuid) -> Option<TabListEntry> {
        let removed = self.inner.entries.write().unwrap().remove(id);
        removed.map(|state| {
            tracing::debug!("Removed tab list entry for {} ({})", state.profile.username, id);
            TabListEntry::from_state(self.clone(), state)
        })
    }

    /// Remove all entries
    pub fn clear(&self) {
        self.inner.entries.write().unwrap().clear();
    }

    /// Number of registered entries
    pub fn len(&self) -> usize {
        let entries = self.inner.entries.read().unwrap();
        entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Point-in-time snapshot of the whole roster, sorted by username
    pub fn views(&self) -> Vec<EntryView> {
        self.entries().iter().map(TabListEntry::view).collect()
    }
}

impl Default for TabList {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for TabList {
    /// Two handles are equal iff they refer to the same roster
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}
