//! Contact submission flow.

use crate::Client;
use crate::flows::{NOT_CONFIGURED_MESSAGE, SEND_FAILED_MESSAGE, SENT_MESSAGE};

use log::{debug, warn};
use studio_core::{Inquiry, validate_inquiry};

/// Lifecycle of a contact submission.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ContactStatus {
    #[default]
    Idle,
    Submitting,
    Sent,
    Failed {
        message: String,
    },
}

impl ContactStatus {
    /// Inline message for the form, if any.
    pub fn message(&self) -> Option<&str> {
        match self {
            ContactStatus::Sent => Some(SENT_MESSAGE),
            ContactStatus::Failed { message } => Some(message),
            _ => None,
        }
    }

    /// True while a request is outstanding; the submit control renders
    /// disabled off this projection.
    pub fn is_submitting(&self) -> bool {
        matches!(self, ContactStatus::Submitting)
    }
}

/// The contact form: draft fields plus a read-only status projection. The
/// only intent it accepts is `submit`.
#[derive(Debug, Default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
    pub phone: String,
    status: ContactStatus,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> &ContactStatus {
        &self.status
    }

    /// Validate and submit the draft. At most one POST per valid
    /// submission; nothing is retried, and the draft survives a failure so
    /// the user can re-trigger.
    pub async fn submit(&mut self, backend: Option<&Client>) {
        // Re-submission while a request is outstanding is prevented by the
        // disabled control; guard anyway.
        if self.status.is_submitting() {
            return;
        }

        // A re-trigger after Sent or Failed starts from a clean message.
        self.status = ContactStatus::Idle;

        if let Err(e) = validate_inquiry(&self.name, &self.email, &self.message) {
            self.status = ContactStatus::Failed {
                message: e.user_message().to_string(),
            };
            return;
        }

        let Some(client) = backend else {
            warn!("contact submission with no backend configured");
            self.status = ContactStatus::Failed {
                message: NOT_CONFIGURED_MESSAGE.to_string(),
            };
            return;
        };

        let inquiry = Inquiry::from_fields(&self.name, &self.email, &self.message, &self.phone);
        self.status = ContactStatus::Submitting;

        match client.submit_contact(&inquiry).await {
            Ok(()) => {
                debug!("contact inquiry accepted");
                self.clear_fields();
                self.status = ContactStatus::Sent;
            }
            Err(e) => {
                warn!("contact inquiry failed: {}", e);
                self.status = ContactStatus::Failed {
                    message: SEND_FAILED_MESSAGE.to_string(),
                };
            }
        }
    }

    fn clear_fields(&mut self) {
        self.name.clear();
        self.email.clear();
        self.message.clear();
        self.phone.clear();
    }
}
