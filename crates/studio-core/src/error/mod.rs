use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

/// Local validation failures. These block any network call; each maps to a
/// specific user-displayable message via [`CoreError::user_message`].
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error: {field} is required {location}")]
    EmptyField {
        field: &'static str,
        location: ErrorLocation,
    },

    #[error("Validation error: not an email address: {value} {location}")]
    InvalidEmail {
        value: String,
        location: ErrorLocation,
    },

    #[error("Validation error: project title is required {location}")]
    MissingTitle { location: ErrorLocation },
}

impl CoreError {
    /// Create an empty-field error with location
    #[track_caller]
    pub fn empty_field(field: &'static str) -> Self {
        CoreError::EmptyField {
            field,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Create an invalid-email error with location
    #[track_caller]
    pub fn invalid_email<S: Into<String>>(value: S) -> Self {
        CoreError::InvalidEmail {
            value: value.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Create a missing-title error with location
    #[track_caller]
    pub fn missing_title() -> Self {
        CoreError::MissingTitle {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Message safe to render inline in the form. Never includes field
    /// values or source locations.
    pub fn user_message(&self) -> &'static str {
        match self {
            CoreError::EmptyField { .. } => "Please fill in all fields.",
            CoreError::InvalidEmail { .. } => "Please enter a valid email address.",
            CoreError::MissingTitle { .. } => "Please provide a project title.",
        }
    }
}

pub type Result<T> = StdResult<T, CoreError>;
