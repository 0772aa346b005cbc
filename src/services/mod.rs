//! Business logic layer for bd
//!
//! Services sit between the CLI and storage: they validate input, touch the
//! birthday file and record history.

pub mod birthday;

pub use birthday::BirthdayService;
