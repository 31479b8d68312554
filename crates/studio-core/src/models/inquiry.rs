//! Contact inquiry - write-only record sent to the backend.

use crate::models::blank_to_none;

use serde::Serialize;

/// A contact submission. The client never reads inquiries back, so there is
/// no identifier and no `Deserialize`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Inquiry {
    pub name: String,
    pub email: String,
    pub message: String,
    /// Omitted from the body entirely when the form field was left blank.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl Inquiry {
    /// Build an inquiry from raw form fields. Required fields are trimmed;
    /// a blank phone becomes absent rather than an empty string.
    pub fn from_fields(name: &str, email: &str, message: &str, phone: &str) -> Self {
        Self {
            name: name.trim().to_string(),
            email: email.trim().to_string(),
            message: message.trim().to_string(),
            phone: blank_to_none(phone),
        }
    }
}
