//! bd - keep track of upcoming birthdays
//!
//! Birthdays live in a flat, tab-separated text file (`~/.bd.conf` by
//! default). Every run rebuilds the list from that file, sorts it by time
//! until the next anniversary and prints a countdown for each person.
//!
//! # Architecture
//!
//! - `config`: Path resolution for the birthday file and history log
//! - `error`: Custom error types
//! - `models`: Birth dates, computed birthdays, countdown text, sorted list
//! - `storage`: The birthday file (load, append, rewrite-on-remove)
//! - `audit`: Append-only history of adds and removes
//! - `services`: Business logic layer
//! - `display`: Terminal formatting
//! - `cli`: Argument parsing and command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use bd::config::BdPaths;
//! use bd::services::BirthdayService;
//! use bd::storage::Storage;
//!
//! let storage = Storage::new(BdPaths::new("~/.bd.conf")?);
//! let list = BirthdayService::new(&storage).list(chrono::Local::now().naive_local())?;
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;

pub use error::BdError;
