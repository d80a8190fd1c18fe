use serde::{Deserialize, Serialize};

/// Game mode enumeration. Entries store the raw integer and never
/// validate it; this enum interprets the four known values for renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameMode {
    Survival,
    Creative,
    Adventure,
    Spectator,
}

impl GameMode {
    pub fn as_i32(&self) -> i32 {
        match self {
            GameMode::Survival => 0,
            GameMode::Creative => 1,
            GameMode::Adventure => 2,
            GameMode::Spectator => 3,
        }
    }

    pub fn from_i32(raw: i32) -> Option<Self> {
        match raw {
            0 => Some(GameMode::Survival),
            1 => Some(GameMode::Creative),
            2 => Some(GameMode::Adventure),
            3 => Some(GameMode::Spectator),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameMode::Survival => "survival",
            GameMode::Creative => "creative",
            GameMode::Adventure => "adventure",
            GameMode::Spectator => "spectator",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "survival" => Some(GameMode::Survival),
            "creative" => Some(GameMode::Creative),
            "adventure" => Some(GameMode::Adventure),
            "spectator" => Some(GameMode::Spectator),
            _ => None,
        }
    }
}
