//! Storage layer for bd
//!
//! The birthday file is the single source of truth; everything shown to the
//! user is rebuilt from it on every run.

pub mod birthday_file;

pub use birthday_file::{validate_name, BirthdayFile, Record};

use crate::audit::{AuditEntry, AuditLogger};
use crate::config::paths::BdPaths;

/// Storage coordinator: the birthday file plus the optional history log
pub struct Storage {
    pub birthdays: BirthdayFile,
    audit: Option<AuditLogger>,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: BdPaths) -> Self {
        Self {
            birthdays: BirthdayFile::new(paths.config_file().to_path_buf()),
            audit: paths.audit_log().map(|p| AuditLogger::new(p.to_path_buf())),
        }
    }

    /// Get the history logger, if enabled
    pub fn audit(&self) -> Option<&AuditLogger> {
        self.audit.as_ref()
    }

    /// Record an operation in the history log, if enabled
    ///
    /// The birthday file has already changed by the time this runs, so a
    /// history failure is reported as a warning rather than failing the run.
    pub fn log(&self, entry: &AuditEntry) {
        if let Some(logger) = &self.audit {
            if let Err(err) = logger.log(entry) {
                eprintln!("WARNING: {}", err);
            }
        }
    }
}
