use crate::{BackendConfig, ConfigError, ConfigErrorResult, LoggingConfig, SiteConfig};

use std::path::PathBuf;

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub backend: BackendConfig,
    pub logging: LoggingConfig,
    pub site: SiteConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Check for STUDIO_CONFIG_DIR env var, else use ./.studio/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply STUDIO_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join("config.toml");

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    /// Load and parse TOML file with detailed error context.
    fn load_toml(path: &PathBuf) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.clone(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.clone(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: STUDIO_CONFIG_DIR env var > ./.studio/ (relative to cwd)
    pub fn config_dir() -> Result<PathBuf, ConfigError> {
        if let Ok(dir) = std::env::var("STUDIO_CONFIG_DIR") {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(".studio"))
    }

    /// Validate all configuration.
    /// An unset backend URL is valid here; the flows fail closed at use time.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.backend.validate()?;

        if self.site.studio_name.trim().is_empty() {
            return Err(ConfigError::config("site.studio_name must not be blank"));
        }

        Ok(())
    }

    /// The backend base URL, or MissingBackendUrl when unset or blank.
    pub fn backend_url(&self) -> ConfigErrorResult<&str> {
        self.backend.url()
    }

    /// Log configuration summary (never logs more than the backend host).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");

        match self.backend.host() {
            Some(host) => info!("  backend: {}", host),
            None => info!("  backend: not configured (network flows disabled)"),
        }

        info!("  logging: {}", *self.logging.level);
        info!("  site: {}", self.site.studio_name);
    }

    fn apply_env_overrides(&mut self) {
        // Backend
        Self::apply_env_option_string("STUDIO_BACKEND_URL", &mut self.backend.base_url);

        // Logging
        Self::apply_env_parse("STUDIO_LOG_LEVEL", &mut self.logging.level);

        // Site identity
        Self::apply_env_string("STUDIO_SITE_NAME", &mut self.site.studio_name);
        Self::apply_env_string("STUDIO_CONTACT_EMAIL", &mut self.site.contact_email);
        Self::apply_env_string("STUDIO_CONTACT_PHONE", &mut self.site.contact_phone);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
