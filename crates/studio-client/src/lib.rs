//! HTTP client and UI flow state machines for the studio site.
//!
//! The page is event-driven and single-threaded: each section owns its own
//! state exclusively, network awaits are the only suspension points, and
//! every failure resolves to an inline message rather than propagating.

pub(crate) mod client;
pub(crate) mod flows;
pub(crate) mod site;

pub use client::{Client, ClientError, ClientResult};
pub use flows::{
    ContactForm, ContactStatus, LoadStatus, PortfolioBoard, SaveStatus, ViewToken,
    LOAD_FAILED_MESSAGE, NOT_CONFIGURED_MESSAGE, SAVED_MESSAGE, SAVE_FAILED_MESSAGE,
    SEND_FAILED_MESSAGE, SENT_MESSAGE,
};
pub use site::{SectionContent, Site};
