//! Record model representing one contact in the address book.

use crate::domain::{Address, Birthday, Email, Name, Phone, ValidationError};
use crate::error::{BookError, BookResult};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashSet;
use std::fmt;
use tracing::debug;

/// Rendered in place of an optional field that has no value.
pub const NOT_SET: &str = "not set";

/// Parameters for creating a record in one step.
///
/// Optional fields that are `None` or empty are left unset.
#[derive(Debug, Clone, Default)]
pub struct NewRecord {
    pub name: String,
    pub phone: Option<String>,
    pub birthday: Option<String>,
    pub address: Option<String>,
    pub email: Option<String>,
}

impl NewRecord {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

/// Custom deserializer for phones that refuses duplicated numbers.
fn deserialize_unique_phones<'de, D>(deserializer: D) -> Result<Vec<Phone>, D::Error>
where
    D: Deserializer<'de>,
{
    let phones: Vec<Phone> = Vec::deserialize(deserializer)?;
    let mut seen = HashSet::new();
    for phone in &phones {
        if !seen.insert(phone.as_str()) {
            return Err(serde::de::Error::custom(format!(
                "duplicated phone number {}",
                phone
            )));
        }
    }
    Ok(phones)
}

/// A contact: a name, its phone numbers and optional birthday, address and email.
///
/// The name is fixed at creation and is the record's key in an
/// [`AddressBook`](crate::book::AddressBook). Phone numbers keep insertion
/// order and never repeat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    name: Name,

    #[serde(default, deserialize_with = "deserialize_unique_phones")]
    phones: Vec<Phone>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    address: Option<Address>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    email: Option<Email>,
}

impl Record {
    /// Create a record with only a name.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyName` for a blank name.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self {
            name: Name::new(name)?,
            phones: Vec::new(),
            birthday: None,
            address: None,
            email: None,
        })
    }

    /// Create a record with any initial fields, validating each one.
    pub fn create(params: NewRecord) -> Result<Self, ValidationError> {
        let present = |value: Option<String>| value.filter(|v| !v.is_empty());

        let mut record = Self::new(params.name)?;
        if let Some(phone) = present(params.phone) {
            record.phones.push(Phone::new(phone)?);
        }
        record.birthday = present(params.birthday).map(Birthday::new).transpose()?;
        record.address = present(params.address).map(Address::new);
        record.email = present(params.email).map(Email::new).transpose()?;
        Ok(record)
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    pub fn address(&self) -> Option<&Address> {
        self.address.as_ref()
    }

    pub fn email(&self) -> Option<&Email> {
        self.email.as_ref()
    }

    /// Append a phone number.
    ///
    /// # Errors
    ///
    /// - `BookError::Validation` if `phone` is not a valid number
    /// - `BookError::DuplicatedPhone` if the same number is already stored
    pub fn add_phone(&mut self, phone: &str) -> BookResult<()> {
        let phone = Phone::new(phone)?;
        if self.phones.contains(&phone) {
            return Err(self.duplicated(&phone));
        }
        debug!(name = %self.name, phone = %phone, "Adding phone");
        self.phones.push(phone);
        Ok(())
    }

    /// Replace `old_phone` with `new_phone`, keeping its position.
    ///
    /// Nothing changes unless both the lookup and the validation succeed.
    ///
    /// # Errors
    ///
    /// - `BookError::PhoneNotFound` if `old_phone` is not stored
    /// - `BookError::Validation` if `new_phone` is not a valid number
    /// - `BookError::DuplicatedPhone` if another slot already holds `new_phone`
    pub fn edit_phone(&mut self, old_phone: &str, new_phone: &str) -> BookResult<()> {
        let idx = self
            .position(old_phone)
            .ok_or_else(|| self.not_found(old_phone))?;
        let phone = Phone::new(new_phone)?;

        let taken = self
            .phones
            .iter()
            .enumerate()
            .any(|(i, existing)| i != idx && *existing == phone);
        if taken {
            return Err(self.duplicated(&phone));
        }

        debug!(name = %self.name, old = %self.phones[idx], new = %phone, "Editing phone");
        self.phones[idx] = phone;
        Ok(())
    }

    /// Remove a phone number.
    ///
    /// # Errors
    ///
    /// Returns `BookError::PhoneNotFound` if `phone` is not stored.
    pub fn remove_phone(&mut self, phone: &str) -> BookResult<Phone> {
        let idx = self.position(phone).ok_or_else(|| self.not_found(phone))?;
        let removed = self.phones.remove(idx);
        debug!(name = %self.name, phone = %removed, "Removed phone");
        Ok(removed)
    }

    /// Find a stored phone equal to `phone` once normalized.
    ///
    /// Input that is not a valid phone number finds nothing.
    pub fn find_phone(&self, phone: &str) -> Option<&Phone> {
        self.position(phone).map(|idx| &self.phones[idx])
    }

    /// Whether `term` is a substring of any stored phone number.
    ///
    /// Looser than [`Record::find_phone`]: used for searching.
    pub fn has_phone(&self, term: &str) -> bool {
        self.phones.iter().any(|phone| phone.contains(term))
    }

    /// Set or replace the birthday.
    pub fn add_birthday(&mut self, birthday: &str) -> Result<(), ValidationError> {
        self.birthday = Some(Birthday::new(birthday)?);
        Ok(())
    }

    /// Set or replace the address.
    pub fn add_address(&mut self, address: &str) {
        self.address = Some(Address::new(address));
    }

    /// Set or replace the email.
    pub fn add_email(&mut self, email: &str) -> Result<(), ValidationError> {
        self.email = Some(Email::new(email)?);
        Ok(())
    }

    pub fn clear_birthday(&mut self) -> Option<Birthday> {
        self.birthday.take()
    }

    pub fn clear_address(&mut self) -> Option<Address> {
        self.address.take()
    }

    pub fn clear_email(&mut self) -> Option<Email> {
        self.email.take()
    }

    /// Days until the next birthday counted from the local date, or `None`
    /// when no birthday is set.
    pub fn days_to_birthday(&self) -> Option<i64> {
        self.days_to_birthday_from(Local::now().date_naive())
    }

    /// Days from `today` until the next birthday, 0 if it is `today`.
    ///
    /// A Feb 29 birthday counts as Feb 28 in non-leap years. `None` when no
    /// birthday is set or the next one lies past the end of the calendar.
    pub fn days_to_birthday_from(&self, today: NaiveDate) -> Option<i64> {
        self.birthday.and_then(|birthday| birthday.days_until(today))
    }

    fn position(&self, phone: &str) -> Option<usize> {
        let phone = Phone::new(phone).ok()?;
        self.phones.iter().position(|existing| *existing == phone)
    }

    fn duplicated(&self, phone: &Phone) -> BookError {
        BookError::DuplicatedPhone {
            name: self.name.to_string(),
            phone: phone.to_string(),
        }
    }

    fn not_found(&self, phone: &str) -> BookError {
        BookError::PhoneNotFound {
            name: self.name.to_string(),
            phone: phone.to_string(),
        }
    }
}

fn or_not_set<T: ToString>(value: Option<&T>) -> String {
    value.map_or_else(|| NOT_SET.to_string(), ToString::to_string)
}

/// Fixed-width listing line: name, phones, email, birthday, address.
impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = self
            .phones
            .iter()
            .map(Phone::as_str)
            .collect::<Vec<_>>()
            .join("; ");

        write!(
            f,
            "{:<10} {:<40} {:<35} {:<15} {:<60}",
            self.name.as_str(),
            phones,
            or_not_set(self.email.as_ref()),
            or_not_set(self.birthday.as_ref()),
            or_not_set(self.address.as_ref()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn record_with_phones(phones: &[&str]) -> Record {
        let mut record = Record::new("Bill").unwrap();
        for phone in phones {
            record.add_phone(phone).unwrap();
        }
        record
    }

    #[test]
    fn test_new_record_has_nothing_set() {
        let record = Record::new("Bill").unwrap();
        assert_eq!(record.name().as_str(), "Bill");
        assert!(record.phones().is_empty());
        assert!(record.birthday().is_none());
        assert!(record.address().is_none());
        assert!(record.email().is_none());
        assert!(Record::new("").is_err());
    }

    #[test]
    fn test_create_validates_every_field() {
        let record = Record::create(NewRecord {
            name: "Bill".to_string(),
            phone: Some("(050)-123-4567".to_string()),
            birthday: Some("15.06.1990".to_string()),
            address: Some("Kyiv".to_string()),
            email: Some("bill@example.com".to_string()),
        })
        .unwrap();
        assert_eq!(record.phones()[0].as_str(), "0501234567");
        assert_eq!(record.birthday().unwrap().to_string(), "15-6-1990");
        assert_eq!(record.address().unwrap().as_str(), "Kyiv");
        assert_eq!(record.email().unwrap().as_str(), "bill@example.com");

        let err = Record::create(NewRecord {
            email: Some("bad@x".to_string()),
            ..NewRecord::new("Bill")
        })
        .unwrap_err();
        assert_eq!(err, ValidationError::InvalidEmail("bad@x".to_string()));
    }

    #[test]
    fn test_create_treats_empty_as_unset() {
        let record = Record::create(NewRecord {
            phone: Some(String::new()),
            birthday: Some(String::new()),
            ..NewRecord::new("Bill")
        })
        .unwrap();
        assert!(record.phones().is_empty());
        assert!(record.birthday().is_none());
    }

    #[test]
    fn test_add_phone_keeps_order() {
        let record = record_with_phones(&["0501111111", "0502222222", "0503333333"]);
        let phones: Vec<&str> = record.phones().iter().map(Phone::as_str).collect();
        assert_eq!(phones, vec!["0501111111", "0502222222", "0503333333"]);
    }

    #[test]
    fn test_add_phone_rejects_duplicate_after_normalizing() {
        let mut record = record_with_phones(&["(050)-123-4567"]);
        let err = record.add_phone("0501234567").unwrap_err();
        match err {
            BookError::DuplicatedPhone { name, phone } => {
                assert_eq!(name, "Bill");
                assert_eq!(phone, "0501234567");
            }
            other => panic!("Expected DuplicatedPhone, got: {:?}", other),
        }
        assert_eq!(record.phones().len(), 1);
    }

    #[test]
    fn test_add_phone_rejects_invalid() {
        let mut record = Record::new("Bill").unwrap();
        let err = record.add_phone("123").unwrap_err();
        assert!(matches!(
            err,
            BookError::Validation(ValidationError::InvalidPhone(_))
        ));
    }

    #[test]
    fn test_edit_phone_replaces_in_place() {
        let mut record = record_with_phones(&["0501111111", "0502222222"]);
        record.edit_phone("050-111-1111", "0509999999").unwrap();
        let phones: Vec<&str> = record.phones().iter().map(Phone::as_str).collect();
        assert_eq!(phones, vec!["0509999999", "0502222222"]);
    }

    #[test]
    fn test_edit_phone_missing_is_not_found() {
        let mut record = record_with_phones(&["0501111111"]);
        let err = record.edit_phone("0500000000", "0509999999").unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_edit_phone_invalid_new_leaves_record_untouched() {
        let mut record = record_with_phones(&["0501111111"]);
        let err = record.edit_phone("0501111111", "12").unwrap_err();
        assert!(matches!(err, BookError::Validation(_)));
        assert_eq!(record.phones()[0].as_str(), "0501111111");
    }

    #[test]
    fn test_edit_phone_to_other_slot_value_is_duplicate() {
        let mut record = record_with_phones(&["0501111111", "0502222222"]);
        let err = record.edit_phone("0501111111", "0502222222").unwrap_err();
        assert!(matches!(err, BookError::DuplicatedPhone { .. }));

        // Editing a phone to its own value is allowed
        record.edit_phone("0501111111", "(050)111-1111").unwrap();
    }

    #[test]
    fn test_remove_phone() {
        let mut record = record_with_phones(&["0501111111", "0502222222"]);
        let removed = record.remove_phone("0501111111").unwrap();
        assert_eq!(removed.as_str(), "0501111111");
        assert_eq!(record.phones().len(), 1);

        let err = record.remove_phone("0501111111").unwrap_err();
        assert!(matches!(err, BookError::PhoneNotFound { .. }));
    }

    #[test]
    fn test_find_phone_is_exact() {
        let record = record_with_phones(&["0501234567"]);
        assert_eq!(
            record.find_phone("050-123-4567").map(Phone::as_str),
            Some("0501234567")
        );
        assert!(record.find_phone("234").is_none());
        assert!(record.find_phone("not a phone").is_none());
    }

    #[test]
    fn test_has_phone_is_substring() {
        let record = record_with_phones(&["0501234567"]);
        assert!(record.has_phone("234"));
        assert!(record.has_phone("0501234567"));
        assert!(!record.has_phone("999"));
        assert!(!Record::new("Empty").unwrap().has_phone("0"));
    }

    #[test]
    fn test_optional_fields_replace_wholesale() {
        let mut record = Record::new("Bill").unwrap();
        record.add_email("first@example.com").unwrap();
        record.add_email("second@example.com").unwrap();
        assert_eq!(record.email().unwrap().as_str(), "second@example.com");

        assert!(record.add_email("nope").is_err());
        assert_eq!(record.email().unwrap().as_str(), "second@example.com");

        record.add_birthday("01/01/2000").unwrap();
        assert!(record.add_birthday("32/01/2000").is_err());
        assert_eq!(record.birthday().unwrap().to_string(), "1-1-2000");

        record.add_address("Lviv");
        record.add_address("Odesa");
        assert_eq!(record.address().unwrap().as_str(), "Odesa");

        assert!(record.clear_address().is_some());
        assert!(record.address().is_none());
    }

    #[test]
    fn test_days_to_birthday() {
        let mut record = Record::new("Bill").unwrap();
        assert_eq!(record.days_to_birthday_from(date(2024, 6, 15)), None);
        assert_eq!(record.days_to_birthday(), None);

        record.add_birthday("15.06.1990").unwrap();
        assert_eq!(record.days_to_birthday_from(date(2024, 6, 15)), Some(0));
        assert_eq!(record.days_to_birthday_from(date(2024, 6, 16)), Some(364));
        assert!(record.days_to_birthday().unwrap() >= 0);
    }

    #[test]
    fn test_days_to_birthday_at_calendar_end() {
        let mut record = Record::new("Bill").unwrap();
        record.add_birthday("15.06.1990").unwrap();
        assert_eq!(record.days_to_birthday_from(NaiveDate::MAX), None);
    }

    #[test]
    fn test_days_to_birthday_today_is_zero() {
        let today = Local::now().date_naive();
        let mut record = Record::new("Bill").unwrap();
        let raw = format!("{}.{}.1990", today.format("%d"), today.format("%m"));
        if raw.starts_with("29.02") {
            return;
        }
        record.add_birthday(&raw).unwrap();
        assert_eq!(record.days_to_birthday(), Some(0));
    }

    #[test]
    fn test_display_renders_fixed_width_line() {
        let mut record = record_with_phones(&["0501111111", "0502222222"]);
        record.add_email("bill@example.com").unwrap();

        let line = record.to_string();
        let expected = format!(
            "{:<10} {:<40} {:<35} {:<15} {:<60}",
            "Bill", "0501111111; 0502222222", "bill@example.com", "not set", "not set"
        );
        assert_eq!(line, expected);
        assert!(line.starts_with("Bill       0501111111; 0502222222"));
    }

    #[test]
    fn test_serialization_round_trip() {
        let mut record = record_with_phones(&["0501111111"]);
        record.add_birthday("15.06.1990").unwrap();

        let json = serde_json::to_string(&record).unwrap();
        assert!(!json.contains("email"));
        let back: Record = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn test_deserialization_rejects_duplicate_phones() {
        let json = r#"{"name":"Bill","phones":["0501111111","0501111111"]}"#;
        let result: Result<Record, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }
}
