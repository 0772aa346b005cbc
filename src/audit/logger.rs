//! Audit logger for the append-only history log
//!
//! Each entry is written as a single JSON line and flushed immediately.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use crate::error::{BdError, BdResult};

use super::entry::AuditEntry;

/// Handles writing history entries to the log file
pub struct AuditLogger {
    /// Path to the history log file
    log_path: PathBuf,
}

impl AuditLogger {
    /// Create a new AuditLogger that writes to the specified path
    pub fn new(log_path: PathBuf) -> Self {
        Self { log_path }
    }

    /// Append an entry to the log
    pub fn log(&self, entry: &AuditEntry) -> BdResult<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .map_err(|e| BdError::Audit(format!("Failed to open history log: {}", e)))?;

        let json = serde_json::to_string(entry)?;

        writeln!(file, "{}", json)
            .map_err(|e| BdError::Audit(format!("Failed to write history entry: {}", e)))?;

        file.flush()
            .map_err(|e| BdError::Audit(format!("Failed to flush history log: {}", e)))?;

        Ok(())
    }

    /// Read all entries, oldest first
    pub fn read_all(&self) -> BdResult<Vec<AuditEntry>> {
        if !self.log_path.exists() {
            return Ok(Vec::new());
        }

        let file = File::open(&self.log_path)
            .map_err(|e| BdError::Audit(format!("Failed to open history log: {}", e)))?;

        let mut entries = Vec::new();

        for (line_num, line) in BufReader::new(file).lines().enumerate() {
            let line = line.map_err(|e| {
                BdError::Audit(format!("Failed to read history line {}: {}", line_num + 1, e))
            })?;

            if line.trim().is_empty() {
                continue;
            }

            let entry: AuditEntry = serde_json::from_str(&line).map_err(|e| {
                BdError::Audit(format!(
                    "Failed to parse history entry at line {}: {}",
                    line_num + 1,
                    e
                ))
            })?;

            entries.push(entry);
        }

        Ok(entries)
    }

    /// Read the most recent `count` entries, oldest first
    pub fn read_recent(&self, count: usize) -> BdResult<Vec<AuditEntry>> {
        let mut entries = self.read_all()?;
        let start = entries.len().saturating_sub(count);
        Ok(entries.split_off(start))
    }

    /// Get the path to the history log file
    pub fn path(&self) -> &Path {
        &self.log_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::entry::Operation;
    use crate::models::BirthDate;
    use tempfile::TempDir;

    fn create_test_logger() -> (AuditLogger, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let logger = AuditLogger::new(temp_dir.path().join("history.log"));
        (logger, temp_dir)
    }

    #[test]
    fn test_log_and_read() {
        let (logger, _temp) = create_test_logger();

        logger
            .log(&AuditEntry::add("Alice", BirthDate::new(1990, 6, 15)))
            .unwrap();
        logger
            .log(&AuditEntry::remove("Alice", BirthDate::new(1990, 6, 15)))
            .unwrap();

        let entries = logger.read_all().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].operation, Operation::Add);
        assert_eq!(entries[1].operation, Operation::Remove);
        assert_eq!(entries[1].name, "Alice");
    }

    #[test]
    fn test_read_recent() {
        let (logger, _temp) = create_test_logger();

        for year in 1980..1990 {
            logger
                .log(&AuditEntry::add(format!("Person {}", year), BirthDate::new(year, 1, 1)))
                .unwrap();
        }

        let recent = logger.read_recent(3).unwrap();
        let names: Vec<&str> = recent.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Person 1987", "Person 1988", "Person 1989"]);

        assert_eq!(logger.read_recent(50).unwrap().len(), 10);
        assert!(logger.read_recent(0).unwrap().is_empty());
    }

    #[test]
    fn test_empty_log() {
        let (logger, _temp) = create_test_logger();

        assert!(!logger.path().exists());
        assert!(logger.read_all().unwrap().is_empty());
    }

    #[test]
    fn test_corrupt_line_reported() {
        let (logger, _temp) = create_test_logger();
        std::fs::write(logger.path(), "not json\n").unwrap();

        let err = logger.read_all().unwrap_err();
        assert!(matches!(err, BdError::Audit(_)));
    }

    #[test]
    fn test_survives_restart() {
        let (logger, temp) = create_test_logger();
        logger
            .log(&AuditEntry::add("Bob", BirthDate::new(1985, 1, 2)))
            .unwrap();

        let logger2 = AuditLogger::new(temp.path().join("history.log"));
        assert_eq!(logger2.read_all().unwrap().len(), 1);
    }
}
