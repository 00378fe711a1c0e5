use crate::error::StorageResult;
use crate::models::Record;
use crate::storage::traits::ContactStore;
use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// On-disk document: the records in book order.
#[derive(Serialize)]
struct StoredBookRef<'a> {
    contacts: &'a [&'a Record],
}

#[derive(Deserialize)]
struct StoredBook {
    #[serde(default)]
    contacts: Vec<Record>,
}

/// Contact store backed by a single pretty-printed JSON file.
///
/// Saving writes a sibling `.tmp` file and renames it over the target, so a
/// failed save leaves the previous contents intact.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store bound to `path`. Nothing is read or written until
    /// [`ContactStore::load`] or [`ContactStore::save`] is called.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(OsString::from)
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl ContactStore for JsonFileStore {
    fn load(&self) -> StorageResult<Vec<Record>> {
        let data = match fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "No contact store yet, starting empty");
                return Ok(Vec::new());
            }
            Err(e) => return Err(e.into()),
        };

        let stored: StoredBook = serde_json::from_str(&data)?;
        debug!(
            path = %self.path.display(),
            count = stored.contacts.len(),
            "Loaded contacts"
        );
        Ok(stored.contacts)
    }

    fn save(&self, records: &[&Record]) -> StorageResult<()> {
        let json = serde_json::to_string_pretty(&StoredBookRef { contacts: records })?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let temp = self.temp_path();
        if let Err(e) = fs::write(&temp, json).and_then(|()| fs::rename(&temp, &self.path)) {
            if let Err(cleanup) = fs::remove_file(&temp) {
                if cleanup.kind() != ErrorKind::NotFound {
                    warn!(path = %temp.display(), error = %cleanup, "Failed to remove temp file");
                }
            }
            return Err(e.into());
        }

        debug!(path = %self.path.display(), count = records.len(), "Saved contacts");
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
