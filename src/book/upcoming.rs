//! Upcoming-birthday query over an address book.

use crate::models::Record;
use chrono::{Local, NaiveDate};
use std::iter::FusedIterator;
use std::slice;

/// Records whose birthday falls within the next `days` days.
///
/// Created by
/// [`AddressBook::contacts_upcoming_birthdays`](super::AddressBook::contacts_upcoming_birthdays).
/// Nothing is computed up front: every traversal walks the book again and,
/// unless pinned with [`UpcomingBirthdays::as_of`], reads the local date again.
#[derive(Debug, Clone, Copy)]
pub struct UpcomingBirthdays<'a> {
    records: &'a [Record],
    days: i64,
    as_of: Option<NaiveDate>,
}

impl<'a> UpcomingBirthdays<'a> {
    pub(crate) fn new(records: &'a [Record], days: i64) -> Self {
        Self {
            records,
            days,
            as_of: None,
        }
    }

    /// Count days from `today` instead of the local date.
    pub fn as_of(self, today: NaiveDate) -> Self {
        Self {
            as_of: Some(today),
            ..self
        }
    }

    pub fn days(&self) -> i64 {
        self.days
    }

    /// Start a new traversal.
    pub fn iter(&self) -> UpcomingIter<'a> {
        UpcomingIter {
            records: self.records.iter(),
            days: self.days,
            today: self.as_of.unwrap_or_else(|| Local::now().date_naive()),
        }
    }
}

impl<'a> IntoIterator for UpcomingBirthdays<'a> {
    type Item = &'a Record;
    type IntoIter = UpcomingIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a> IntoIterator for &UpcomingBirthdays<'a> {
    type Item = &'a Record;
    type IntoIter = UpcomingIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// One traversal of an [`UpcomingBirthdays`] query.
#[derive(Debug, Clone)]
pub struct UpcomingIter<'a> {
    records: slice::Iter<'a, Record>,
    days: i64,
    today: NaiveDate,
}

impl<'a> Iterator for UpcomingIter<'a> {
    type Item = &'a Record;

    fn next(&mut self) -> Option<Self::Item> {
        let (days, today) = (self.days, self.today);
        self.records.find(|record| {
            record
                .days_to_birthday_from(today)
                .is_some_and(|left| left <= days)
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.records.size_hint().1)
    }
}

impl FusedIterator for UpcomingIter<'_> {}
