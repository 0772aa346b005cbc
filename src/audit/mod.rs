//! History log for bd
//!
//! Records every add and remove in an append-only log so a deleted birthday
//! can be recovered by hand.
//!
//! - `AuditEntry`: one operation with its timestamp, name and birth date
//! - `AuditLogger`: appends entries to the log as JSON lines (JSONL)
//!
//! # Example
//!
//! ```rust,ignore
//! use bd::audit::{AuditEntry, AuditLogger};
//!
//! let logger = AuditLogger::new(log_path);
//! logger.log(&AuditEntry::add("Alice", birth))?;
//! ```

mod entry;
mod logger;

pub use entry::{AuditEntry, Operation};
pub use logger::AuditLogger;
