use crate::LogLevel;

use serde::Deserialize;

/// Logging is the embedder's concern beyond level selection; this library
/// never installs a logger itself.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
}
