//! Display formatting for terminal output

pub mod birthday;

pub use birthday::{format_birthday, format_birthday_list};
