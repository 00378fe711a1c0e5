//! Phone value object.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Formatting characters accepted in raw input and stripped before validation.
const FORMATTING_CHARS: [char; 4] = ['+', '(', ')', '-'];

/// Number of digits in a normalized phone number.
pub const PHONE_DIGITS: usize = 10;

/// Strip formatting characters and check that exactly ten digits remain.
///
/// Returns the normalized digit string.
///
/// # Errors
///
/// Returns `ValidationError::InvalidPhone` carrying the raw input if anything
/// other than ten ASCII digits is left after stripping.
pub fn normalize_phone(raw: &str) -> Result<String, ValidationError> {
    let digits: String = raw
        .chars()
        .filter(|c| !FORMATTING_CHARS.contains(c))
        .collect();

    if digits.len() == PHONE_DIGITS && digits.chars().all(|c| c.is_ascii_digit()) {
        Ok(digits)
    } else {
        Err(ValidationError::InvalidPhone(raw.to_string()))
    }
}

/// A type-safe wrapper for phone numbers.
///
/// The stored value is always the normalized ten-digit string, so two phones
/// compare equal whenever their digits do, whatever formatting they were
/// entered with.
///
/// # Example
///
/// ```
/// use contact_book::domain::Phone;
///
/// let phone = Phone::new("+(050)-123-4567").unwrap();
/// assert_eq!(phone.as_str(), "0501234567");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Phone(String);

impl Phone {
    /// Create a new Phone, normalizing and validating the input.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if the phone format is invalid.
    pub fn new(phone: impl AsRef<str>) -> Result<Self, ValidationError> {
        normalize_phone(phone.as_ref()).map(Self)
    }

    /// Get the normalized phone number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Whether `term` occurs anywhere in the normalized digits.
    pub fn contains(&self, term: &str) -> bool {
        self.0.contains(term)
    }
}

// Serde support - serialize as string
impl Serialize for Phone {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for Phone {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Phone::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
