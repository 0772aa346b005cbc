//! Birthday service
//!
//! Business logic for adding, removing and listing birthdays on top of the
//! birthday file, recording each change in the history log.

use chrono::{Datelike, NaiveDateTime};

use crate::audit::AuditEntry;
use crate::error::{BdError, BdResult};
use crate::models::{BirthDate, Birthday, BirthdayList};
use crate::storage::{validate_name, Record, Storage};

/// Service for birthday management
pub struct BirthdayService<'a> {
    storage: &'a Storage,
}

impl<'a> BirthdayService<'a> {
    /// Create a new birthday service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Add a birthday given as `dd/mm/yyyy`
    ///
    /// The date and name are validated before anything is written. Years are
    /// accepted from 1900 up to the current year.
    pub fn add(&self, date: &str, name: &str, now: NaiveDateTime) -> BdResult<(BirthDate, String)> {
        let birth = BirthDate::parse_dmy(date, now.year())?;
        let name = validate_name(name)?;

        self.storage.birthdays.append(&birth, name)?;
        self.storage.log(&AuditEntry::add(name, birth));

        Ok((birth, name.to_string()))
    }

    /// Remove the first birthday whose name matches case-insensitively
    pub fn remove(&self, name: &str) -> BdResult<Record> {
        if name.trim().is_empty() {
            return Err(BdError::Argument("Name can't be blank".into()));
        }

        let removed = self.storage.birthdays.remove(name.trim())?;
        self.storage
            .log(&AuditEntry::remove(removed.name.clone(), removed.birth));

        Ok(removed)
    }

    /// Load every birthday, soonest first
    pub fn list(&self, now: NaiveDateTime) -> BdResult<BirthdayList> {
        let mut list = BirthdayList::new();

        for record in self.storage.birthdays.read_all(now.year())? {
            list.insert(Birthday::compute(record.name, record.birth, now)?);
        }

        Ok(list)
    }
}
