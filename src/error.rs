//! Error types for the contact book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Field validation errors live in [`crate::domain::errors`] and convert into
//! [`BookError`] with `?`.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors raised by record and address book operations.
#[derive(Error, Debug)]
pub enum BookError {
    /// A field value failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The phone number is already stored on the contact
    #[error("Phone number {phone} already exists for contact {name}")]
    DuplicatedPhone { name: String, phone: String },

    /// The phone number is not stored on the contact
    #[error("Phone number {phone} not found for contact {name}")]
    PhoneNotFound { name: String, phone: String },

    /// No contact is stored under the name
    #[error("Contact {0} not found")]
    RecordNotFound(String),

    /// Loading or saving the backing store failed
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl BookError {
    /// Whether this is one of the not-found errors.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::PhoneNotFound { .. } | Self::RecordNotFound(_))
    }
}

/// Errors that can occur while reading or writing the backing store.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Reading or writing the file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The stored document could not be encoded or decoded
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },

    /// Failed to load .env file
    #[error("Failed to load .env file: {0}")]
    DotenvError(String),
}

/// Convenience type alias for Results with BookError
pub type BookResult<T> = Result<T, BookError>;

/// Convenience type alias for Results with StorageError
pub type StorageResult<T> = Result<T, StorageError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
