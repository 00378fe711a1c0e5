//! Data models for contact book entities.
//!
//! A [`Record`] aggregates the validated fields from [`crate::domain`] for one
//! contact.

pub mod record;

pub use record::{NewRecord, Record, NOT_SET};
