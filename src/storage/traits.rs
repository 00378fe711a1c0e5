use crate::error::StorageResult;
use crate::models::Record;

/// Backing store for an address book.
///
/// The whole collection is read on open and written back on close; there is
/// no incremental persistence. Implementations exist for the JSON file on
/// disk and, in tests, an in-memory mock.
pub trait ContactStore {
    /// Read every stored record in stored order.
    ///
    /// A backing store that does not exist yet yields an empty list.
    fn load(&self) -> StorageResult<Vec<Record>>;

    /// Replace the stored collection with `records`.
    fn save(&self, records: &[&Record]) -> StorageResult<()>;

    /// Human-readable location used in log messages.
    fn location(&self) -> String;
}
