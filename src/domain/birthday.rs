//! Birthday value object.

use super::errors::ValidationError;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Accepted separators, in detection order.
const SEPARATORS: [char; 3] = ['.', '/', '-'];

const MIN_YEAR: i32 = 1;
const MAX_YEAR: i32 = 9999;

/// Parse a `DD.MM.YYYY`, `DD/MM/YYYY` or `DD-MM-YYYY` string into a date.
///
/// The separator is the first of `.`, `/`, `-` that occurs in the input.
/// Zero padding is optional, so `5.6.1990` is accepted as well.
///
/// # Errors
///
/// Returns `ValidationError::InvalidBirthday` when the input does not split
/// into three numeric parts or the parts do not form a calendar date.
pub fn parse_birthday(raw: &str) -> Result<NaiveDate, ValidationError> {
    let invalid = |reason: &str| ValidationError::InvalidBirthday {
        value: raw.to_string(),
        reason: reason.to_string(),
    };

    let separator = SEPARATORS
        .iter()
        .copied()
        .find(|sep| raw.contains(*sep))
        .unwrap_or('-');

    let parts: Vec<&str> = raw.split(separator).collect();
    let [day, month, year] = parts.as_slice() else {
        return Err(invalid("expected day, month and year"));
    };

    let numeric = |part: &str| !part.is_empty() && part.chars().all(|c| c.is_ascii_digit());
    if !(numeric(day) && numeric(month) && numeric(year)) {
        return Err(invalid("day, month and year must be numbers"));
    }

    let day: u32 = day.parse().map_err(|_| invalid("day out of range"))?;
    let month: u32 = month.parse().map_err(|_| invalid("month out of range"))?;
    let year: i32 = year.parse().map_err(|_| invalid("year out of range"))?;

    if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
        return Err(invalid("year out of range"));
    }

    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| invalid("not a calendar date"))
}

/// A contact's date of birth.
///
/// Renders as `D-M-YYYY` without zero padding, which is also the stored form.
///
/// # Example
///
/// ```
/// use contact_book::domain::Birthday;
///
/// let birthday = Birthday::new("15.06.1990").unwrap();
/// assert_eq!(birthday.day(), 15);
/// assert_eq!(birthday.month(), 6);
/// assert_eq!(birthday.year(), 1990);
/// assert_eq!(birthday.to_string(), "15-6-1990");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Create a new Birthday from a `DD.MM.YYYY`, `DD/MM/YYYY` or `DD-MM-YYYY` string.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` on malformed or impossible dates.
    pub fn new(birthday: impl AsRef<str>) -> Result<Self, ValidationError> {
        parse_birthday(birthday.as_ref()).map(Self)
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// The birth date as a calendar date.
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// The day this birthday is observed in `year`, or `None` when `year`
    /// is outside chrono's calendar.
    ///
    /// A Feb 29 birthday is observed on Feb 28 in non-leap years.
    pub fn occurrence_in(&self, year: i32) -> Option<NaiveDate> {
        self.0
            .with_year(year)
            .or_else(|| NaiveDate::from_ymd_opt(year, 2, 28))
    }

    /// The first occurrence of this birthday on or after `today`.
    ///
    /// `None` when that occurrence would fall past [`NaiveDate::MAX`].
    pub fn next_occurrence(&self, today: NaiveDate) -> Option<NaiveDate> {
        let this_year = self.occurrence_in(today.year())?;
        if this_year >= today {
            return Some(this_year);
        }
        self.occurrence_in(today.year().checked_add(1)?)
    }

    /// Whole days from `today` until the next occurrence; 0 on the day itself.
    pub fn days_until(&self, today: NaiveDate) -> Option<i64> {
        self.next_occurrence(today).map(|next| (next - today).num_days())
    }
}

impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.day(), self.month(), self.year())
    }
}
