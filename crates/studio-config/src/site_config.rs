use crate::{DEFAULT_CONTACT_EMAIL, DEFAULT_CONTACT_PHONE, DEFAULT_STUDIO_NAME};

use serde::Deserialize;

/// Static identity shown in the shell's hero, contact, and footer sections.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub studio_name: String,
    pub contact_email: String,
    pub contact_phone: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            studio_name: String::from(DEFAULT_STUDIO_NAME),
            contact_email: String::from(DEFAULT_CONTACT_EMAIL),
            contact_phone: String::from(DEFAULT_CONTACT_PHONE),
        }
    }
}
