//! Audit entry data structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::BirthDate;

/// Types of operations that are recorded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// A birthday was appended
    Add,
    /// A birthday was removed
    Remove,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Add => write!(f, "ADD"),
            Operation::Remove => write!(f, "REMOVE"),
        }
    }
}

/// A single history log entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the operation occurred (UTC)
    pub timestamp: DateTime<Utc>,

    /// Type of operation performed
    pub operation: Operation,

    /// Name as written to (or found in) the birthday file
    pub name: String,

    /// Date of birth of the affected record
    pub birth: BirthDate,
}

impl AuditEntry {
    /// Create an entry for an added birthday
    pub fn add(name: impl Into<String>, birth: BirthDate) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Add,
            name: name.into(),
            birth,
        }
    }

    /// Create an entry for a removed birthday
    pub fn remove(name: impl Into<String>, birth: BirthDate) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Remove,
            name: name.into(),
            birth,
        }
    }
}
