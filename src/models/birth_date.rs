//! Birth date model
//!
//! A raw year/month/day triple as stored in the birthday file. Only ranges
//! are checked; calendar correctness is not (31/02 is accepted and rolls
//! forward into March when an anniversary is computed).

use std::fmt;

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{BdError, BdResult};

/// Earliest accepted birth year
pub const MIN_YEAR: i32 = 1900;

/// Length of a `dd/mm/yyyy` date
const DMY_LEN: usize = 10;

/// A date of birth
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BirthDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl BirthDate {
    /// Create a new birth date without validation
    pub fn new(year: i32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }

    /// Check the year/month/day ranges (year `MIN_YEAR..=max_year`, month 1-12, day 1-31)
    pub fn in_range(&self, max_year: i32) -> bool {
        (MIN_YEAR..=max_year).contains(&self.year)
            && (1..=12).contains(&self.month)
            && (1..=31).contains(&self.day)
    }

    /// Parse a `dd/mm/yyyy` date as given to `-add`
    ///
    /// The string must be exactly ten characters with leading zeros.
    pub fn parse_dmy(input: &str, max_year: i32) -> BdResult<Self> {
        if input.len() != DMY_LEN {
            return Err(BdError::DateFormat(
                "Invalid date of birth, must be in the format dd/mm/yyyy - use leading zeros if needed"
                    .into(),
            ));
        }

        let malformed = || BdError::DateFormat(format!("Malformed date provided: {}", input));

        let parts: Vec<&str> = input.split('/').collect();
        let [day, month, year] = parts.as_slice() else {
            return Err(malformed());
        };

        if day.len() != 2 || month.len() != 2 || year.len() != 4 {
            return Err(malformed());
        }

        let date = Self {
            year: parse_digits(year).ok_or_else(malformed)?,
            month: parse_digits(month).ok_or_else(malformed)?,
            day: parse_digits(day).ok_or_else(malformed)?,
        };

        if !date.in_range(max_year) {
            return Err(BdError::Range(format!(
                "Date out of range: {} (day 1-31, month 1-12, year {}-{})",
                input, MIN_YEAR, max_year
            )));
        }

        Ok(date)
    }

    /// The anniversary of this date in `year`
    ///
    /// Days past the end of the month are carried into the next month, so
    /// 29/02 falls on 01/03 in a non-leap year.
    pub fn anniversary_in(&self, year: i32) -> Option<NaiveDate> {
        let day_offset = u64::from(self.day.checked_sub(1)?);
        NaiveDate::from_ymd_opt(year, self.month, 1)?.checked_add_days(Days::new(day_offset))
    }
}

impl fmt::Display for BirthDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}/{:02}/{:04}", self.day, self.month, self.year)
    }
}

/// Parse an all-ASCII-digit field, rejecting signs and whitespace
pub(crate) fn parse_digits<T: std::str::FromStr>(field: &str) -> Option<T> {
    if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    field.parse().ok()
}
