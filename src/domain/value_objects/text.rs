use serde::{Deserialize, Serialize};

/// Display text for a roster entry. Plain content only; styling is the
/// client text system's concern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Text {
    pub content: String,
}

impl Text {
    pub fn new(content: String) -> Self {
        Self { content }
    }

    pub fn as_str(&self) -> &str {
        &self.content
    }
}

impl From<String> for Text {
    fn from(content: String) -> Self {
        Self { content }
    }
}

impl From<&str> for Text {
    fn from(content: &str) -> Self {
        Self {
            content: content.to_string(),
        }
    }
}
