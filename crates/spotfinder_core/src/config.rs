//! Store configuration.
//!
//! # Responsibility
//! - Describe where the location database lives and how core logs.
//! - Reject settings that would fail later at open or logging init.
//!
//! # Invariants
//! - `db_path` is never empty after `validate()`.
//! - `log_dir`, when set, is absolute.

use crate::logging::{init_logging, LogLevel, LoggingError};
use serde::Deserialize;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

/// Database file name used when only a directory is known.
pub const DEFAULT_DB_FILE_NAME: &str = "SpotFinder.db";

#[derive(Debug)]
pub enum ConfigError {
    EmptyDbPath,
    RelativeLogDir(PathBuf),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyDbPath => write!(f, "db_path cannot be empty"),
            Self::RelativeLogDir(path) => write!(
                f,
                "log_dir must be an absolute path, got `{}`",
                path.display()
            ),
        }
    }
}

impl Error for ConfigError {}

/// Settings for one [`crate::LocationStore`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StoreConfig {
    /// SQLite file holding the `locations` table.
    pub db_path: PathBuf,
    pub log_level: LogLevel,
    /// Rolling log directory; logging stays off when `None`.
    pub log_dir: Option<PathBuf>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from(DEFAULT_DB_FILE_NAME),
            log_level: LogLevel::default(),
            log_dir: None,
        }
    }
}

impl StoreConfig {
    /// Places the default database file inside `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self {
            db_path: dir.as_ref().join(DEFAULT_DB_FILE_NAME),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.db_path.as_os_str().is_empty() {
            return Err(ConfigError::EmptyDbPath);
        }
        if let Some(log_dir) = &self.log_dir {
            if !log_dir.is_absolute() {
                return Err(ConfigError::RelativeLogDir(log_dir.clone()));
            }
        }
        Ok(())
    }

    /// Starts file logging when `log_dir` is set.
    ///
    /// Returns `Ok(false)` when logging is not configured.
    pub fn init_logging(&self) -> Result<bool, LoggingError> {
        match &self.log_dir {
            Some(log_dir) => init_logging(self.log_level, log_dir).map(|()| true),
            None => Ok(false),
        }
    }
}
