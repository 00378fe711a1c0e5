use contact_book::error::{StorageError, StorageResult};
use contact_book::models::Record;
use contact_book::storage::ContactStore;
use std::collections::HashMap;
use std::io;
use std::sync::{Arc, Mutex};

/// Mock contact store for testing.
///
/// Keeps the "stored" records in memory, counts calls, and can be told to
/// fail loads or saves. Clones share state, so a test can keep one handle
/// while another is moved into an open book.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockStore {
    records: Arc<Mutex<Vec<Record>>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
    fail_load: Arc<Mutex<bool>>,
    fail_save: Arc<Mutex<bool>>,
}

#[allow(dead_code)]
impl MockStore {
    /// Create a new empty MockStore.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a MockStore that already holds `records`.
    pub fn with_records(records: Vec<Record>) -> Self {
        let store = Self::new();
        *store.records.lock().unwrap() = records;
        store
    }

    /// Records as of the last save (or the initial records).
    pub fn stored(&self) -> Vec<Record> {
        self.records.lock().unwrap().clone()
    }

    pub fn set_fail_load(&self, fail: bool) {
        *self.fail_load.lock().unwrap() = fail;
    }

    pub fn set_fail_save(&self, fail: bool) {
        *self.fail_save.lock().unwrap() = fail;
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    fn record_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }
}

impl ContactStore for MockStore {
    fn load(&self) -> StorageResult<Vec<Record>> {
        self.record_call("load");
        if *self.fail_load.lock().unwrap() {
            return Err(StorageError::Io(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "mock load failure",
            )));
        }
        Ok(self.stored())
    }

    fn save(&self, records: &[&Record]) -> StorageResult<()> {
        self.record_call("save");
        if *self.fail_save.lock().unwrap() {
            return Err(StorageError::Io(io::Error::new(
                io::ErrorKind::Other,
                "mock save failure",
            )));
        }
        *self.records.lock().unwrap() = records.iter().map(|r| (*r).clone()).collect();
        Ok(())
    }

    fn location(&self) -> String {
        "memory".to_string()
    }
}
