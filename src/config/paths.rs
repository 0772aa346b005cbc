//! Path management for bd
//!
//! ## Path Resolution Order
//!
//! 1. `-config <path>` on the command line
//! 2. `BD_CONFIG` environment variable (if set)
//! 3. `~/.bd.conf`
//!
//! A leading `~/` is expanded to the user's home directory.

use std::path::{Path, PathBuf};

use directories::BaseDirs;

use crate::error::{BdError, BdResult};

/// Default location of the birthday file
pub const DEFAULT_CONFIG_FILE: &str = "~/.bd.conf";

/// Environment variable that overrides the birthday file location
pub const CONFIG_ENV: &str = "BD_CONFIG";

/// Environment variable that enables the history log
pub const AUDIT_LOG_ENV: &str = "BD_AUDIT_LOG";

/// Manages all paths used by bd
#[derive(Debug, Clone)]
pub struct BdPaths {
    /// The birthday file
    config_file: PathBuf,
    /// Optional append-only history of add/remove operations
    audit_log: Option<PathBuf>,
}

impl BdPaths {
    /// Resolve paths from a raw (possibly `~`-prefixed) config file path
    ///
    /// The history log is enabled when `BD_AUDIT_LOG` is set to a non-empty value.
    ///
    /// # Errors
    ///
    /// Returns an error if the path is empty or the home directory cannot be
    /// determined for a `~`-prefixed path.
    pub fn new(config: &str) -> BdResult<Self> {
        let config_file = expand_tilde(config)?;

        let audit_log = match std::env::var(AUDIT_LOG_ENV) {
            Ok(raw) if !raw.is_empty() => Some(expand_tilde(&raw)?),
            _ => None,
        };

        Ok(Self {
            config_file,
            audit_log,
        })
    }

    /// Create BdPaths for an already-resolved file (useful for testing)
    pub fn with_config_file(config_file: PathBuf) -> Self {
        Self {
            config_file,
            audit_log: None,
        }
    }

    /// Enable the history log at the given path
    pub fn with_audit_log(mut self, audit_log: PathBuf) -> Self {
        self.audit_log = Some(audit_log);
        self
    }

    /// Get the path to the birthday file
    pub fn config_file(&self) -> &Path {
        &self.config_file
    }

    /// Get the path to the history log, if enabled
    pub fn audit_log(&self) -> Option<&Path> {
        self.audit_log.as_deref()
    }
}

/// Expand a leading `~` or `~/` to the home directory
pub fn expand_tilde(raw: &str) -> BdResult<PathBuf> {
    if raw.is_empty() {
        return Err(BdError::Argument("No configuration file specified".into()));
    }

    if raw == "~" {
        return home_dir();
    }

    match raw.strip_prefix("~/") {
        Some(rest) => Ok(home_dir()?.join(rest)),
        None => Ok(PathBuf::from(raw)),
    }
}

fn home_dir() -> BdResult<PathBuf> {
    if let Some(dirs) = BaseDirs::new() {
        return Ok(dirs.home_dir().to_path_buf());
    }

    std::env::var("HOME")
        .map(PathBuf::from)
        .map_err(|_| BdError::Argument("Could not determine home directory".into()))
}
