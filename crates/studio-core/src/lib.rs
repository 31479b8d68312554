//! Domain records and validation for the Atelier Modern studio site.
//!
//! This crate is pure: no I/O, no async. It defines the two record shapes
//! that cross the network boundary (contact inquiries and portfolio
//! projects), the draft form state they are built from, and the local
//! validation rules that gate any network call.

pub mod error;
pub mod models;
pub mod validation;

pub use error::{CoreError, Result};
pub use models::inquiry::Inquiry;
pub use models::new_project::NewProject;
pub use models::project::Project;
pub use models::project_draft::ProjectDraft;
pub use validation::{is_email_shaped, split_tags, validate_inquiry};

#[cfg(test)]
mod tests;
