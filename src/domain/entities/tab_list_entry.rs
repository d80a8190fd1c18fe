use std::sync::{Arc, RwLock};

use serde::{Deserialize, Serialize};

use crate::domain::services::TabList;
use crate::domain::value_objects::{LatencyIndicator, PlayerIdentity, Text};

/// Mutable attributes of an entry, behind one per-entry lock so a setter
/// racing the roster's read path cannot tear a field.
#[derive(Debug)]
pub(crate) struct EntryAttributes {
    pub(crate) display_name: Option<Text>,
    pub(crate) latency: i32,
    pub(crate) game_mode: i32,
}

/// Shared state of a roster entry. The owning tab list keeps the
/// long-lived reference; entry handles share it.
#[derive(Debug)]
pub(crate) struct EntryState {
    pub(crate) profile: PlayerIdentity,
    pub(crate) joined_at: i64,
    pub(crate) attributes: RwLock<EntryAttributes>,
}

/// A single row in a [`TabList`]: an immutable player identity plus the
/// mutable display name, latency and game mode shown for it.
///
/// Handles are cheap to clone; clones observe each other's writes.
#[derive(Debug, Clone)]
pub struct TabListEntry {
    parent: TabList,
    state: Arc<EntryState>,
}

impl TabListEntry {
    pub(crate) fn from_state(parent: TabList, state: Arc<EntryState>) -> Self {
        Self { parent, state }
    }

    /// Returns a builder for staging a new entry
    pub fn builder() -> TabListEntryBuilder {
        TabListEntryBuilder::default()
    }

    /// The tab list this entry belongs to
    pub fn parent(&self) -> &TabList {
        &self.parent
    }

    /// Identity deciding the uuid, username and head shown for this row
    pub fn profile(&self) -> &PlayerIdentity {
        &self.state.profile
    }

    /// Text shown instead of the username, if set
    pub fn display_name(&self) -> Option<Text> {
        self.state.attributes.read().unwrap().display_name.clone()
    }

    /// Replace the display text. `None` falls back to the profile username.
    pub fn set_display_name(&self, display_name: Option<Text>) -> &Self {
        self.state.attributes.write().unwrap().display_name = display_name;
        self
    }

    /// Current latency in milliseconds
    pub fn ping(&self) -> i32 {
        self.state.attributes.read().unwrap().latency
    }

    /// Replace the latency. Any value is accepted; negative renders the
    /// no-connection icon (see [`LatencyIndicator::from_ping`]).
    pub fn set_ping(&self, latency: i32) -> &Self {
        self.state.attributes.write().unwrap().latency = latency;
        self
    }

    /// Raw game mode value. 0 through 3 are the named modes; other
    /// values pass through uninterpreted.
    pub fn game_mode(&self) -> i32 {
        self.state.attributes.read().unwrap().game_mode
    }

    /// Replace the game mode
    pub fn set_game_mode(&self, game_mode: i32) -> &Self {
        self.state.attributes.write().unwrap().game_mode = game_mode;
        self
    }

    /// Unix timestamp of when the entry was registered
    pub fn joined_at(&self) -> i64 {
        self.state.joined_at
    }

    /// Indicator currently shown for this entry's latency
    pub fn latency_indicator(&self) -> LatencyIndicator {
        LatencyIndicator::from_ping(self.ping())
    }

    /// Consistent point-in-time view of the entry
    pub fn view(&self) -> EntryView {
        let attributes = self.state.attributes.read().unwrap();
        EntryView {
            profile: self.state.profile.clone(),
            display_name: attributes.display_name.clone(),
            latency: attributes.latency,
            game_mode: attributes.game_mode,
            latency_indicator: LatencyIndicator::from_ping(attributes.latency),
            joined_at: self.state.joined_at,
        }
    }
}

impl PartialEq for TabListEntry {
    /// Two handles are equal iff they share the same entry state
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.state, &other.state)
    }
}

/// Point-in-time projection of an entry (safe to hand to renderers)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryView {
    pub profile: PlayerIdentity,
    pub display_name: Option<Text>,
    pub latency: i32,
    pub game_mode: i32,
    pub latency_indicator: LatencyIndicator,
    pub joined_at: i64,
}

impl EntryView {
    /// Name rendered for the row: the display text when set, otherwise
    /// the profile username
    pub fn shown_name(&self) -> &str {
        match &self.display_name {
            Some(text) => text.as_str(),
            None => &self.profile.username,
        }
    }
}

/// Staged constructor for a [`TabListEntry`]. Configuration calls store
/// values unchecked; `build` validates the required fields and delegates
/// construction to the owning tab list.
#[derive(Debug, Default)]
pub struct TabListEntryBuilder {
    tab_list: Option<TabList>,
    profile: Option<PlayerIdentity>,
    display_name: Option<Text>,
    latency: i32,
    game_mode: i32,
}

impl TabListEntryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tab list the entry will be registered in. Required.
    pub fn tab_list(mut self, tab_list: TabList) -> Self {
        self.tab_list = Some(tab_list);
        self
    }

    /// Identity of the entry. Required.
    pub fn profile(mut self, profile: PlayerIdentity) -> Self {
        self.profile = Some(profile);
        self
    }

    /// Display text override for the entry
    pub fn display_name(mut self, display_name: Option<Text>) -> Self {
        self.display_name = display_name;
        self
    }

    /// Latency in milliseconds (defaults to 0)
    pub fn latency(mut self, latency: i32) -> Self {
        self.latency = latency;
        self
    }

    /// Raw game mode value (defaults to 0, survival)
    pub fn game_mode(mut self, game_mode: i32) -> Self {
        self.game_mode = game_mode;
        self
    }

    /// Validate required fields and delegate construction to the owning
    /// tab list, which registers the entry and returns a live handle.
    pub fn build(self) -> Result<TabListEntry, EntryBuildError> {
        let tab_list = self.tab_list.ok_or(EntryBuildError::MissingTabList)?;
        let profile = self.profile.ok_or(EntryBuildError::MissingProfile)?;

        Ok(tab_list.build_entry(profile, self.display_name, self.latency, self.game_mode))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum EntryBuildError {
    #[error("The tab list must be set when building an entry")]
    MissingTabList,
    #[error("The player profile must be set when building an entry")]
    MissingProfile,
}
