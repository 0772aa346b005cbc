//! Birthday model
//!
//! A record from the birthday file together with the values derived from
//! "now": time until the next anniversary, the age before it and its date.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime};

use super::birth_date::BirthDate;
use super::countdown::friendly_delta;
use crate::error::{BdError, BdResult};

/// A birthday with its next anniversary computed
#[derive(Debug, Clone, PartialEq)]
pub struct Birthday {
    /// Person's name, case preserved
    pub name: String,

    /// Date of birth as stored
    pub birth: BirthDate,

    /// Date of the next anniversary
    pub next: NaiveDate,

    /// Age before the next anniversary
    pub age: i32,

    /// Time from "now" until midnight of the next anniversary
    delta: Duration,
}

impl Birthday {
    /// Compute the next anniversary of `birth` relative to `now` (local time)
    ///
    /// An anniversary at or before `now` rolls to the following year, so a
    /// birthday today is reported a year out rather than with a zero delta.
    pub fn compute(name: impl Into<String>, birth: BirthDate, now: NaiveDateTime) -> BdResult<Self> {
        let this_year = now.year();
        let mut age = this_year - birth.year;

        let mut next = anniversary(&birth, this_year)?;
        if next.and_time(NaiveTime::MIN) <= now {
            next = anniversary(&birth, this_year + 1)?;
        } else {
            age -= 1;
        }

        Ok(Self {
            name: name.into(),
            birth,
            next,
            age,
            delta: next.and_time(NaiveTime::MIN) - now,
        })
    }

    /// Time until the next anniversary
    pub fn delta(&self) -> Duration {
        self.delta
    }

    /// Seconds until the next anniversary
    pub fn delta_seconds(&self) -> i64 {
        self.delta.num_seconds()
    }

    /// The age being turned at the next anniversary
    pub fn upcoming_age(&self) -> i32 {
        self.age + 1
    }

    /// Next anniversary as `dd/Mon/yyyy`
    pub fn next_date_label(&self) -> String {
        self.next.format("%d/%b/%Y").to_string()
    }

    /// Countdown text, e.g. `" 2 weeks,  3 days ( 17 days)"`
    pub fn countdown(&self) -> String {
        friendly_delta(self.delta_seconds())
    }

    /// Case-insensitive name comparison
    pub fn matches_name(&self, name: &str) -> bool {
        names_match(&self.name, name)
    }
}

/// Compare two names ignoring case
pub fn names_match(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

fn anniversary(birth: &BirthDate, year: i32) -> BdResult<NaiveDate> {
    birth
        .anniversary_in(year)
        .ok_or_else(|| BdError::Range(format!("No anniversary of {} in {}", birth, year)))
}
