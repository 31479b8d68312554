//! Configuration for the studio site client.
//!
//! Loads `config.toml` from the config directory, then applies `STUDIO_*`
//! environment overrides. The backend base URL is the one value the network
//! flows depend on: when it is unset, every flow fails closed with a
//! configuration error instead of attempting a relative call.

mod backend_config;
mod config;
mod error;
mod log_level;
mod logging_config;
mod site_config;

pub use backend_config::BackendConfig;
pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use site_config::SiteConfig;

const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_STUDIO_NAME: &str = "Atelier Modern";
const DEFAULT_CONTACT_EMAIL: &str = "studio@example.com";
const DEFAULT_CONTACT_PHONE: &str = "+1 (555) 123-4567";

#[cfg(test)]
mod tests;
