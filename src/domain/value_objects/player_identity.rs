use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use uuid::Uuid;

/// A signed property attached to a player identity (skin textures etc.)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileProperty {
    pub name: String,
    pub value: String,
    pub signature: Option<String>,
}

impl ProfileProperty {
    /// Create an unsigned property
    pub fn new(name: String, value: String) -> Self {
        Self {
            name,
            value,
            signature: None,
        }
    }

    /// Create a property carrying a server signature
    pub fn signed(name: String, value: String, signature: String) -> Self {
        Self {
            name,
            value,
            signature: Some(signature),
        }
    }
}

/// Identifying record for a player: unique id, username and the
/// properties deciding what is shown as the player head in the roster.
/// Immutable once attached to an entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerIdentity {
    pub id: Uuid,
    pub username: String,
    // Typically a single "textures" property
    pub properties: SmallVec<[ProfileProperty; 1]>,
}

impl PlayerIdentity {
    /// Create an identity without properties
    pub fn new(id: Uuid, username: String) -> Self {
        Self {
            id,
            username,
            properties: SmallVec::new(),
        }
    }

    /// Create an identity with a fresh random id
    pub fn random(username: String) -> Self {
        Self::new(Uuid::new_v4(), username)
    }

    /// Attach a property, returning the identity
    pub fn with_property(mut self, property: ProfileProperty) -> Self {
        self.properties.push(property);
        self
    }
}
