//! CLI command handlers
//!
//! Bridges argument parsing with the service layer.

pub mod args;
pub mod birthday;

pub use args::{normalize_args, parse_args, Cli, Invocation, Operation, ParsedArgs};
pub use birthday::{handle_invocation, handle_operation};
