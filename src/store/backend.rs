//! Persistence backends for the signup store
//!
//! The store itself only understands "load the full list" and "save the full
//! list". Where that list lives is a backend concern, so swapping the JSON
//! file for an in-memory map (tests, demos) never touches store logic.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use super::error::{StoreError, StoreResult};
use super::types::SignupRecord;

/// File name used by the JSON backend, mirroring the original storage key
pub const STORE_FILE_NAME: &str = "sorta_waitlist_signups.json";

/// Storage abstraction for the signup list
///
/// Implementations load and persist the entire list atomically from the
/// caller's point of view. Callers re-load before every mutation, so a
/// backend never needs to merge concurrent writes.
pub trait SignupBackend: Send + Sync {
    /// Load all records, newest first
    ///
    /// A missing or unreadable store reads as empty.
    fn load(&self) -> StoreResult<Vec<SignupRecord>>;

    /// Replace the stored list with `records`
    fn save(&self, records: &[SignupRecord]) -> StoreResult<()>;

    /// Remove all persisted state
    fn wipe(&self) -> StoreResult<()>;
}

/// JSON file backend
///
/// Persists the list as a single JSON array under the configured data
/// directory. Writes go to a temporary file first and are renamed into
/// place so a crash mid-write leaves the previous list intact.
pub struct JsonFileBackend {
    data_dir: PathBuf,
}

impl JsonFileBackend {
    /// Create a backend rooted at `data_dir`
    ///
    /// The directory is created on first save, not here.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Full path of the store file
    pub fn store_path(&self) -> PathBuf {
        self.data_dir.join(STORE_FILE_NAME)
    }

    fn read_file(&self, path: &Path) -> StoreResult<Vec<SignupRecord>> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Ok(Vec::new());
            }
            // Non-UTF-8 bytes fail the read before parsing; a corrupt
            // store reads as empty either way.
            Err(err) if err.kind() == std::io::ErrorKind::InvalidData => {
                tracing::warn!(
                    path = %path.display(),
                    error = %err,
                    "Signup store unreadable, treating as empty"
                );
                return Ok(Vec::new());
            }
            Err(err) => return Err(StoreError::Io(err)),
        };

        match serde_json::from_str(&contents) {
            Ok(records) => Ok(records),
            Err(err) => {
                // A corrupt store reads as empty; the next save replaces it.
                tracing::warn!(
                    path = %path.display(),
                    error = %err,
                    "Signup store unreadable, treating as empty"
                );
                Ok(Vec::new())
            }
        }
    }
}

impl SignupBackend for JsonFileBackend {
    fn load(&self) -> StoreResult<Vec<SignupRecord>> {
        self.read_file(&self.store_path())
    }

    fn save(&self, records: &[SignupRecord]) -> StoreResult<()> {
        fs::create_dir_all(&self.data_dir)?;

        let path = self.store_path();
        let tmp_path = path.with_extension("json.tmp");
        let json = serde_json::to_string(records)?;

        fs::write(&tmp_path, json)?;
        fs::rename(&tmp_path, &path)?;

        Ok(())
    }

    fn wipe(&self) -> StoreResult<()> {
        let path = self.store_path();
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(StoreError::Io(err)),
        }
    }
}

/// In-memory backend for tests and demos
#[derive(Default)]
pub struct MemoryBackend {
    records: RwLock<Vec<SignupRecord>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SignupBackend for MemoryBackend {
    fn load(&self) -> StoreResult<Vec<SignupRecord>> {
        let records = self
            .records
            .read()
            .map_err(|e| StoreError::Lock(e.to_string()))?;
        Ok(records.clone())
    }

    fn save(&self, records: &[SignupRecord]) -> StoreResult<()> {
        let mut guard = self
            .records
            .write()
            .map_err(|e| StoreError::Lock(e.to_string()))?;
        *guard = records.to_vec();
        Ok(())
    }

    fn wipe(&self) -> StoreResult<()> {
        let mut guard = self
            .records
            .write()
            .map_err(|e| StoreError::Lock(e.to_string()))?;
        guard.clear();
        Ok(())
    }
}
