//! Project record - a portfolio entry with display metadata and tags.

use serde::{Deserialize, Serialize};

/// A portfolio entry as returned by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Server-assigned identifier, used as the stable list key.
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,
    /// Always a sequence: an absent field deserializes to empty instead of
    /// failing the record, so rendering never trips over missing tags.
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Project {
    pub fn has_tags(&self) -> bool {
        !self.tags.is_empty()
    }
}
