//! Persistence for the address book.
//!
//! [`ContactStore`] abstracts "load the collection" / "save the collection";
//! [`JsonFileStore`] keeps it in a JSON document on disk.

mod json_file_store;
mod traits;

pub use json_file_store::JsonFileStore;
pub use traits::ContactStore;
