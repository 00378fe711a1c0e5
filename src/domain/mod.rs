//! Domain value objects and types.
//!
//! Validated wrappers for the fields of a contact. Each one is checked and
//! normalized when it is constructed, so an invalid value can never be held.
//! There are no setters: a field is changed by building a new one.

pub mod address;
pub mod birthday;
pub mod email;
pub mod errors;
pub mod name;
pub mod phone;

pub use address::Address;
pub use birthday::{parse_birthday, Birthday};
pub use email::{validate_email, Email};
pub use errors::{FieldKind, ValidationError};
pub use name::Name;
pub use phone::{normalize_phone, Phone};
