use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

/// Where the backend API lives. There is no default: an unconfigured
/// backend is a hard configuration error for the flows that need it, never
/// a fallback to a relative or same-origin call.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct BackendConfig {
    /// Base URL for all API calls (e.g., "https://api.atelier.example").
    pub base_url: Option<String>,
}

impl BackendConfig {
    /// The configured base URL, treating blank values the same as unset.
    pub fn url(&self) -> ConfigErrorResult<&str> {
        match self.base_url.as_deref().map(str::trim) {
            Some(url) if !url.is_empty() => Ok(url),
            _ => Err(ConfigError::missing_backend_url()),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.url().is_ok()
    }

    /// Host (and port) portion of the configured URL, for logging.
    /// Credentials, paths, and query strings never reach the log.
    pub fn host(&self) -> Option<&str> {
        let url = self.url().ok()?;
        let rest = url.split_once("://").map_or(url, |(_, rest)| rest);
        let authority = rest.split(['/', '?', '#']).next().unwrap_or(rest);
        Some(authority.rsplit_once('@').map_or(authority, |(_, host)| host))
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        // Unset is allowed at load time; the flows fail closed at use time.
        let Ok(url) = self.url() else {
            return Ok(());
        };

        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(ConfigError::backend(format!(
                "backend.base_url must start with http:// or https://, got {}",
                url
            )));
        }

        Ok(())
    }
}
