//! Core data models for bd
//!
//! - `BirthDate`: the raw year/month/day stored per record
//! - `Birthday`: a record with its next anniversary computed
//! - `BirthdayList`: birthdays sorted soonest first
//! - `friendly_delta`: the "N weeks, M days" countdown text

pub mod birth_date;
pub mod birthday;
pub mod birthday_list;
pub mod countdown;

pub use birth_date::{BirthDate, MIN_YEAR};
pub use birthday::{names_match, Birthday};
pub use birthday_list::BirthdayList;
pub use countdown::friendly_delta;
