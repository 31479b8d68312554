//! Portfolio board: the listing and creation flows.

use crate::Client;
use crate::flows::{LOAD_FAILED_MESSAGE, NOT_CONFIGURED_MESSAGE, SAVE_FAILED_MESSAGE, SAVED_MESSAGE};
use crate::flows::view_token::ViewToken;

use log::{debug, warn};
use studio_core::{Project, ProjectDraft};

/// Lifecycle of the one-shot listing fetch.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadStatus {
    #[default]
    Loading,
    Loaded,
    Failed {
        message: String,
    },
}

impl LoadStatus {
    pub fn message(&self) -> Option<&str> {
        match self {
            LoadStatus::Failed { message } => Some(message),
            _ => None,
        }
    }
}

/// Lifecycle of a project creation attempt.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SaveStatus {
    #[default]
    Idle,
    Saving,
    Saved,
    Failed {
        message: String,
    },
}

impl SaveStatus {
    pub fn message(&self) -> Option<&str> {
        match self {
            SaveStatus::Saved => Some(SAVED_MESSAGE),
            SaveStatus::Failed { message } => Some(message),
            _ => None,
        }
    }

    pub fn is_saving(&self) -> bool {
        matches!(self, SaveStatus::Saving)
    }
}

/// The portfolio section: a displayed collection, a creation draft, and the
/// status projections of both flows. The collection is replaced wholesale
/// after every successful fetch; there is no incremental merge.
#[derive(Debug)]
pub struct PortfolioBoard {
    projects: Vec<Project>,
    load_status: LoadStatus,
    save_status: SaveStatus,
    pub draft: ProjectDraft,
    token: ViewToken,
}

impl PortfolioBoard {
    pub fn new() -> Self {
        Self {
            projects: Vec::new(),
            load_status: LoadStatus::default(),
            save_status: SaveStatus::default(),
            draft: ProjectDraft::default(),
            token: ViewToken::new(),
        }
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn load_status(&self) -> &LoadStatus {
        &self.load_status
    }

    pub fn save_status(&self) -> &SaveStatus {
        &self.save_status
    }

    /// Handle the shell keeps to cancel state updates once the section is
    /// torn down.
    pub fn view_token(&self) -> ViewToken {
        self.token.clone()
    }

    /// Fetch the listing. Called once on activation and again after every
    /// successful create. With no backend configured this fails closed:
    /// a configuration message and zero requests.
    pub async fn load(&mut self, backend: Option<&Client>) {
        let Some(client) = backend else {
            warn!("portfolio load with no backend configured");
            self.load_status = LoadStatus::Failed {
                message: NOT_CONFIGURED_MESSAGE.to_string(),
            };
            return;
        };

        self.load_status = LoadStatus::Loading;
        let result = client.list_projects().await;

        // The section may have been torn down while the request was in
        // flight; a late response must not touch state.
        if !self.token.is_active() {
            debug!("listing resolved after view deactivation, dropping");
            return;
        }

        match result {
            Ok(items) => {
                debug!("listing loaded, {} projects", items.len());
                self.projects = items;
                self.load_status = LoadStatus::Loaded;
            }
            Err(e) => {
                warn!("project listing failed: {}", e);
                self.load_status = LoadStatus::Failed {
                    message: LOAD_FAILED_MESSAGE.to_string(),
                };
            }
        }
    }

    /// Validate the draft, persist it, then blindly re-read the listing.
    /// The new record becomes visible only once the re-fetch resolves;
    /// nothing is appended locally.
    pub async fn create(&mut self, backend: Option<&Client>) {
        if self.save_status.is_saving() {
            return;
        }

        self.save_status = SaveStatus::Idle;

        let record = match self.draft.to_new_project() {
            Ok(record) => record,
            Err(e) => {
                self.save_status = SaveStatus::Failed {
                    message: e.user_message().to_string(),
                };
                return;
            }
        };

        let Some(client) = backend else {
            warn!("project create with no backend configured");
            self.save_status = SaveStatus::Failed {
                message: NOT_CONFIGURED_MESSAGE.to_string(),
            };
            return;
        };

        self.save_status = SaveStatus::Saving;
        let result = client.create_project(&record).await;

        if !self.token.is_active() {
            debug!("create resolved after view deactivation, dropping");
            return;
        }

        match result {
            Ok(()) => {
                self.draft.clear();
                self.save_status = SaveStatus::Saved;
                // Write then re-read: the displayed collection is replaced
                // with whatever the second fetch returns.
                self.load(backend).await;
            }
            Err(e) => {
                warn!("project create failed: {}", e);
                self.save_status = SaveStatus::Failed {
                    message: SAVE_FAILED_MESSAGE.to_string(),
                };
            }
        }
    }
}

impl Default for PortfolioBoard {
    fn default() -> Self {
        Self::new()
    }
}
