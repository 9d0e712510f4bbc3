//! Environment-driven runtime configuration.
//!
//! # Invariants
//! - Blank variables are treated as unset.
//! - An unknown log level is rejected, never silently defaulted.

use crate::logging::{default_log_level, normalize_level};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub const ENV_DB_PATH: &str = "VOICENOTE_DB_PATH";
pub const ENV_LOG_LEVEL: &str = "VOICENOTE_LOG_LEVEL";
pub const ENV_LOG_DIR: &str = "VOICENOTE_LOG_DIR";

const DEFAULT_DB_FILE_NAME: &str = "voicenote.sqlite3";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidLogLevel(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidLogLevel(message) => write!(f, "invalid {ENV_LOG_LEVEL}: {message}"),
        }
    }
}

impl Error for ConfigError {}

/// Resolved core settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreConfig {
    pub db_path: PathBuf,
    pub log_level: &'static str,
    /// Logging stays off when `None`.
    pub log_dir: Option<String>,
}

impl CoreConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolves settings through `lookup`, which stands in for the environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let non_blank = |key: &str| {
            lookup(key)
                .map(|raw| raw.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let db_path = non_blank(ENV_DB_PATH)
            .map(PathBuf::from)
            .unwrap_or_else(|| std::env::temp_dir().join(DEFAULT_DB_FILE_NAME));
        let log_level = match non_blank(ENV_LOG_LEVEL) {
            Some(level) => normalize_level(&level).map_err(ConfigError::InvalidLogLevel)?,
            None => default_log_level(),
        };

        Ok(Self {
            db_path,
            log_level,
            log_dir: non_blank(ENV_LOG_DIR),
        })
    }
}
