//! Domain validation errors.

use std::fmt;

/// The kind of field a [`ValidationError`] was raised for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Name,
    Phone,
    Email,
    Birthday,
}

/// Errors that can occur during field value validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided name is empty.
    EmptyName,

    /// The provided email address is invalid.
    InvalidEmail(String),

    /// The provided phone number is invalid.
    InvalidPhone(String),

    /// The provided birthday is malformed or not a calendar date.
    InvalidBirthday { value: String, reason: String },
}

impl ValidationError {
    /// Which field rejected the value.
    pub fn kind(&self) -> FieldKind {
        match self {
            Self::EmptyName => FieldKind::Name,
            Self::InvalidEmail(_) => FieldKind::Email,
            Self::InvalidPhone(_) => FieldKind::Phone,
            Self::InvalidBirthday { .. } => FieldKind::Birthday,
        }
    }

    /// The raw input that was rejected.
    pub fn value(&self) -> &str {
        match self {
            Self::EmptyName => "",
            Self::InvalidEmail(value) | Self::InvalidPhone(value) => value.as_str(),
            Self::InvalidBirthday { value, .. } => value.as_str(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Name cannot be empty"),
            Self::InvalidEmail(email) => {
                write!(f, "Email '{}' is invalid. Check and try again", email)
            }
            Self::InvalidPhone(phone) => write!(
                f,
                "Phone number '{}' is incorrect. Phone number should consist of 10 digits",
                phone
            ),
            Self::InvalidBirthday { value, reason } => write!(
                f,
                "Birthday '{}' is incorrect ({}). Use DD-MM-YYYY format",
                value, reason
            ),
        }
    }
}

impl std::error::Error for ValidationError {}
