//! The address book: contacts keyed by name.

use super::{OpenBook, Pages, UpcomingBirthdays};
use crate::error::{BookError, BookResult, StorageResult};
use crate::models::Record;
use crate::storage::ContactStore;
use tracing::{debug, error, info};

/// Default number of records per page for [`AddressBook::iterator`].
pub const DEFAULT_PAGE_SIZE: usize = 5;

/// Default look-ahead in days for [`AddressBook::contacts_upcoming_birthdays`].
pub const DEFAULT_BIRTHDAY_WINDOW: i64 = 7;

/// An ordered collection of [`Record`]s keyed by name.
///
/// Records keep the order they were first added in. Adding a record whose
/// name is already present replaces the stored one in place without an
/// error: the later record wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    records: Vec<Record>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a book from records, with the same overwrite rule as
    /// [`AddressBook::add_record`].
    pub fn from_records(records: impl IntoIterator<Item = Record>) -> Self {
        let mut book = Self::new();
        for record in records {
            book.add_record(record);
        }
        book
    }

    /// Load a book from `store` and keep it open until the returned handle is
    /// closed or dropped.
    ///
    /// A store with nothing saved yet opens as an empty book.
    ///
    /// # Errors
    ///
    /// Returns `BookError::Storage` if the store exists but cannot be read.
    /// Nothing is written back in that case.
    pub fn open<S: ContactStore>(store: S) -> BookResult<OpenBook<S>> {
        let book = Self::from_records(store.load()?);
        info!(
            location = %store.location(),
            count = book.len(),
            "Opened address book"
        );
        Ok(OpenBook::new(book, store))
    }

    /// Run `f` against the book stored in `store`, then save it.
    ///
    /// The book is saved whether or not `f` fails. If `f` fails, its error is
    /// returned after saving; a save failure at that point is only logged.
    /// If `f` succeeds, a save failure is returned.
    pub fn session<S, T, E, F>(store: S, f: F) -> Result<T, E>
    where
        S: ContactStore,
        E: From<BookError>,
        F: FnOnce(&mut AddressBook) -> Result<T, E>,
    {
        let mut book = Self::open(store)?;
        let outcome = f(&mut *book);
        let saved = book.close();

        match (outcome, saved) {
            (Ok(value), Ok(())) => Ok(value),
            (Ok(_), Err(e)) => Err(BookError::from(e).into()),
            (Err(e), Ok(())) => Err(e),
            (Err(e), Err(save_err)) => {
                error!(error = %save_err, "Failed to save address book after a failed operation");
                Err(e)
            }
        }
    }

    /// Write every record to `store`.
    pub fn save_to<S: ContactStore>(&self, store: &S) -> StorageResult<()> {
        let records: Vec<&Record> = self.records.iter().collect();
        store.save(&records)
    }

    /// Insert `record` under its name, replacing any record already stored
    /// under that name. Returns the replaced record.
    pub fn add_record(&mut self, record: Record) -> Option<Record> {
        match self.position(record.name().as_str()) {
            Some(idx) => {
                debug!(name = %record.name(), "Replacing contact");
                Some(std::mem::replace(&mut self.records[idx], record))
            }
            None => {
                debug!(name = %record.name(), "Adding contact");
                self.records.push(record);
                None
            }
        }
    }

    /// Look up a record by its exact name.
    ///
    /// # Errors
    ///
    /// Returns `BookError::RecordNotFound` if no record has that name. Use
    /// [`AddressBook::get`] when a missing record is not an error.
    pub fn find(&self, name: &str) -> BookResult<&Record> {
        self.get(name)
            .ok_or_else(|| BookError::RecordNotFound(name.to_string()))
    }

    /// Mutable counterpart of [`AddressBook::find`].
    pub fn find_mut(&mut self, name: &str) -> BookResult<&mut Record> {
        self.get_mut(name)
            .ok_or_else(|| BookError::RecordNotFound(name.to_string()))
    }

    /// Look up a record by its exact name, `None` if absent.
    pub fn get(&self, name: &str) -> Option<&Record> {
        self.position(name).map(|idx| &self.records[idx])
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.position(name).map(move |idx| &mut self.records[idx])
    }

    /// Remove and return the record stored under `name`, if any.
    pub fn delete(&mut self, name: &str) -> Option<Record> {
        let idx = self.position(name)?;
        debug!(name, "Deleting contact");
        Some(self.records.remove(idx))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Record names in book order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|record| record.name().as_str())
    }

    /// Records in book order.
    pub fn records(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    /// Records whose name contains `term` ignoring case, or whose phone
    /// numbers contain `term`. Results keep book order.
    pub fn search_contacts(&self, term: &str) -> Vec<&Record> {
        let needle = term.to_lowercase();
        self.records
            .iter()
            .filter(|record| {
                record.name().as_str().to_lowercase().contains(&needle) || record.has_phone(term)
            })
            .collect()
    }

    /// Records with a birthday in the next `days` days, today included.
    ///
    /// The result is lazy and can be traversed any number of times; each
    /// traversal re-evaluates against the current date.
    pub fn contacts_upcoming_birthdays(&self, days: i64) -> UpcomingBirthdays<'_> {
        UpcomingBirthdays::new(&self.records, days)
    }

    /// Rendered records in pages of `page_size` lines, the last page possibly
    /// shorter.
    pub fn iterator(&self, page_size: usize) -> Pages<'_> {
        Pages::new(&self.records, page_size)
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.records
            .iter()
            .position(|record| record.name().as_str() == name)
    }
}

impl FromIterator<Record> for AddressBook {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        Self::from_records(iter)
    }
}

impl<'a> IntoIterator for &'a AddressBook {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
