//! Transient form state for a new portfolio entry.

use crate::models::blank_to_none;
use crate::models::new_project::NewProject;
use crate::validation::split_tags;
use crate::{CoreError, Result};

/// Free-text draft of a project, exactly as typed into the form. Tags are a
/// single comma-separated string until normalization.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectDraft {
    pub title: String,
    pub location: String,
    pub year: String,
    pub tags: String,
    pub image_url: String,
    pub description: String,
}

impl ProjectDraft {
    /// Validate and normalize the draft into its wire record. The title is
    /// the only required field; blank optional fields are omitted.
    pub fn to_new_project(&self) -> Result<NewProject> {
        if self.title.trim().is_empty() {
            return Err(CoreError::missing_title());
        }

        Ok(NewProject {
            title: self.title.trim().to_string(),
            location: blank_to_none(&self.location),
            year: blank_to_none(&self.year),
            tags: split_tags(&self.tags),
            image_url: blank_to_none(&self.image_url),
            description: blank_to_none(&self.description),
        })
    }

    /// Reset every field to empty, as after a successful save.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
