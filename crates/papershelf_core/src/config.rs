//! Environment-driven runtime configuration.
//!
//! # Responsibility
//! - Resolve log level, log directory and paper data location.
//! - Reject invalid values early with typed errors.
//!
//! # Invariants
//! - Blank environment values are treated as unset.
//! - File logging is enabled only when a log directory is configured.

use crate::logging::{default_log_level, normalize_level, normalize_log_dir};
use crate::source::fixtures::FixtureSet;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

pub const LOG_LEVEL_ENV: &str = "PAPERSHELF_LOG_LEVEL";
pub const LOG_DIR_ENV: &str = "PAPERSHELF_LOG_DIR";
pub const DATA_FILE_ENV: &str = "PAPERSHELF_DATA";
pub const CATALOG_ENV: &str = "PAPERSHELF_CATALOG";

/// Configuration error naming the offending variable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidValue { key: &'static str, message: String },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidValue { key, message } => write!(f, "invalid `{key}`: {message}"),
        }
    }
}

impl Error for ConfigError {}

/// Resolved runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShelfConfig {
    pub log_level: &'static str,
    pub log_dir: Option<PathBuf>,
    /// JSON paper file; built-in fixtures are used when unset.
    pub data_file: Option<PathBuf>,
    /// Fixture set used when `data_file` is unset.
    pub catalog: FixtureSet,
}

impl Default for ShelfConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_dir: None,
            data_file: None,
            catalog: FixtureSet::Library,
        }
    }
}

impl ShelfConfig {
    /// Reads configuration from process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads configuration through `lookup`, keyed by variable name.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let mut config = Self::default();

        if let Some(level) = read(LOG_LEVEL_ENV) {
            config.log_level = normalize_level(level.as_str()).map_err(|message| {
                ConfigError::InvalidValue {
                    key: LOG_LEVEL_ENV,
                    message,
                }
            })?;
        }
        if let Some(dir) = read(LOG_DIR_ENV) {
            config.log_dir = Some(normalize_log_dir(Path::new(dir.as_str())).map_err(|message| {
                ConfigError::InvalidValue {
                    key: LOG_DIR_ENV,
                    message,
                }
            })?);
        }
        config.data_file = read(DATA_FILE_ENV).map(PathBuf::from);
        if let Some(catalog) = read(CATALOG_ENV) {
            config.catalog = parse_catalog(catalog.as_str()).map_err(|message| {
                ConfigError::InvalidValue {
                    key: CATALOG_ENV,
                    message,
                }
            })?;
        }

        Ok(config)
    }
}

/// Parses a fixture set name (`library` or `catalogue`).
pub fn parse_catalog(value: &str) -> Result<FixtureSet, String> {
    match value.trim().to_ascii_lowercase().as_str() {
        "library" => Ok(FixtureSet::Library),
        "catalogue" | "catalog" => Ok(FixtureSet::Catalogue),
        other => Err(format!(
            "unsupported catalog `{other}`; expected library|catalogue"
        )),
    }
}
