pub(crate) mod contact;
pub(crate) mod portfolio;
pub(crate) mod view_token;

pub use contact::{ContactForm, ContactStatus};
pub use portfolio::{LoadStatus, PortfolioBoard, SaveStatus};
pub use view_token::ViewToken;

// Inline messages shown by the flows. Request failures are deliberately
// generic: transport detail goes to the log, never to the UI.
pub const SENT_MESSAGE: &str = "Thanks! Your message has been sent.";
pub const SAVED_MESSAGE: &str = "Project added to the portfolio.";
pub const SEND_FAILED_MESSAGE: &str = "Something went wrong. Please try again.";
pub const LOAD_FAILED_MESSAGE: &str = "Could not load projects. Please try again later.";
pub const SAVE_FAILED_MESSAGE: &str = "Could not save the project. Please try again.";
pub const NOT_CONFIGURED_MESSAGE: &str =
    "The studio backend is not configured. Please email us directly.";
