//! Sorted birthday collection
//!
//! Keeps birthdays ordered by time until the next anniversary, soonest first.

use super::birthday::Birthday;

/// Birthdays ordered by ascending delta
#[derive(Debug, Clone, Default)]
pub struct BirthdayList {
    entries: Vec<Birthday>,
}

impl BirthdayList {
    /// Create an empty list
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a birthday before the first entry with a strictly greater delta
    ///
    /// Entries with equal deltas keep insertion order.
    pub fn insert(&mut self, birthday: Birthday) {
        let index = self
            .entries
            .partition_point(|existing| existing.delta() <= birthday.delta());
        self.entries.insert(index, birthday);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Birthday> {
        self.entries.iter()
    }

    pub fn as_slice(&self) -> &[Birthday] {
        &self.entries
    }
}

impl<'a> IntoIterator for &'a BirthdayList {
    type Item = &'a Birthday;
    type IntoIter = std::slice::Iter<'a, Birthday>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl FromIterator<Birthday> for BirthdayList {
    fn from_iter<I: IntoIterator<Item = Birthday>>(iter: I) -> Self {
        let mut list = Self::new();
        for birthday in iter {
            list.insert(birthday);
        }
        list
    }
}
