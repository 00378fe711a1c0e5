//! Scoped access to a persisted address book.

use super::AddressBook;
use crate::error::StorageResult;
use crate::storage::ContactStore;
use std::ops::{Deref, DerefMut};
use tracing::{error, info};

/// An address book loaded from a [`ContactStore`] and written back when the
/// scope ends.
///
/// Call [`OpenBook::close`] to save and see the outcome. If the value is
/// dropped without being closed (an early return, a `?`, a panic) it is saved
/// anyway and a failure is logged.
///
/// ```no_run
/// use contact_book::{AddressBook, JsonFileStore, Record};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut book = AddressBook::open(JsonFileStore::new("address_book.json"))?;
/// book.add_record(Record::new("Bill")?);
/// book.close()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct OpenBook<S: ContactStore> {
    book: AddressBook,
    store: S,
    closed: bool,
}

impl<S: ContactStore> OpenBook<S> {
    pub(crate) fn new(book: AddressBook, store: S) -> Self {
        Self {
            book,
            store,
            closed: false,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Save the book to its store and end the scope.
    pub fn close(mut self) -> StorageResult<()> {
        self.closed = true;
        self.persist()
    }

    fn persist(&self) -> StorageResult<()> {
        self.book.save_to(&self.store)?;
        info!(
            location = %self.store.location(),
            count = self.book.len(),
            "Closed address book"
        );
        Ok(())
    }
}

impl<S: ContactStore> Deref for OpenBook<S> {
    type Target = AddressBook;

    fn deref(&self) -> &AddressBook {
        &self.book
    }
}

impl<S: ContactStore> DerefMut for OpenBook<S> {
    fn deref_mut(&mut self) -> &mut AddressBook {
        &mut self.book
    }
}

impl<S: ContactStore> Drop for OpenBook<S> {
    fn drop(&mut self) {
        if self.closed {
            return;
        }
        if let Err(e) = self.persist() {
            error!(
                location = %self.store.location(),
                error = %e,
                "Failed to save address book on drop"
            );
        }
    }
}
