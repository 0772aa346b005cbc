//! Configuration module for bd
//!
//! Resolves where the birthday file and the optional history log live.

pub mod paths;

pub use paths::BdPaths;
