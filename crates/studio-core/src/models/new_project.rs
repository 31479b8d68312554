//! Wire record for creating a portfolio entry.

use serde::Serialize;

/// The POST body for a new project. Blank optional fields are omitted, not
/// sent as empty strings; `tags` is always present, possibly empty. The
/// server assigns the identifier, so none is carried here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewProject {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
