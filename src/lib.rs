//! Contact Book - a personal contact store with validated fields.
//!
//! Contacts are kept in an [`AddressBook`] keyed by name. Every field is
//! validated when it is set, and the book is loaded from and saved to a
//! [`ContactStore`] around each session.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (name, phone, email, birthday, address)
//! - **models**: The `Record` aggregate for one contact
//! - **book**: The `AddressBook` collection, pagination and birthday queries
//! - **storage**: The `ContactStore` trait and the JSON file store
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables

pub mod book;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod storage;

pub use book::{
    AddressBook, OpenBook, Pages, UpcomingBirthdays, DEFAULT_BIRTHDAY_WINDOW, DEFAULT_PAGE_SIZE,
};
pub use config::Config;
pub use domain::{Address, Birthday, Email, FieldKind, Name, Phone, ValidationError};
pub use error::{BookError, BookResult, ConfigError, StorageError, StorageResult};
pub use models::{NewRecord, Record};
pub use storage::{ContactStore, JsonFileStore};
