//! Local key-value storage.
//!
//! Mirrors the browser's `localStorage`: string keys, string values, last
//! write wins. The controller uses exactly one key, [`CONFIRMATION_KEY`].

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use skybook_core::BookingConfirmation;

use crate::error::{FrontendError, StorageError};

/// Key holding the serialized last booking confirmation.
pub const CONFIRMATION_KEY: &str = "bookingData";

pub trait KeyValueStore {
    /// # Errors
    ///
    /// Returns [`StorageError`] if the backing store cannot be read.
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// # Errors
    ///
    /// Returns [`StorageError`] if the backing store cannot be written.
    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Process-local store; forgets everything on drop.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    items: HashMap<String, String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// Store backed by a single JSON object file, so values survive restarts.
///
/// The file is re-read on every access and rewritten through a temporary
/// sibling plus rename, so a crash mid-write leaves the previous contents.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>, StorageError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(source) => {
                return Err(StorageError::Io {
                    path: self.path.clone(),
                    source,
                })
            }
        };
        if raw.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        serde_json::from_str(&raw).map_err(|source| StorageError::Corrupt {
            path: self.path.clone(),
            source,
        })
    }

    fn write_all(&self, items: &BTreeMap<String, String>) -> Result<(), StorageError> {
        let io_err = |source| StorageError::Io {
            path: self.path.clone(),
            source,
        };
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        let body = serde_json::to_string_pretty(items).map_err(|source| StorageError::Corrupt {
            path: self.path.clone(),
            source,
        })?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, body).map_err(io_err)?;
        fs::rename(&tmp, &self.path).map_err(io_err)
    }
}

impl KeyValueStore for FileStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.read_all()?.remove(key))
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut items = self.read_all()?;
        items.insert(key.to_owned(), value.to_owned());
        self.write_all(&items)
    }
}

/// Serializes `confirmation` into the confirmation slot, replacing whatever
/// was there.
///
/// # Errors
///
/// Returns [`FrontendError::Storage`] if the store rejects the write.
pub fn save_confirmation<S: KeyValueStore>(
    store: &mut S,
    confirmation: &BookingConfirmation,
) -> Result<(), FrontendError> {
    let serialized =
        serde_json::to_string(confirmation).map_err(FrontendError::StoredConfirmation)?;
    store.set_item(CONFIRMATION_KEY, &serialized)?;
    Ok(())
}

/// Reads the confirmation slot.
///
/// # Errors
///
/// - [`FrontendError::NothingPersisted`] if the slot is empty.
/// - [`FrontendError::StoredConfirmation`] if it does not hold a JSON object.
/// - [`FrontendError::Storage`] if the store cannot be read.
pub fn load_confirmation<S: KeyValueStore>(
    store: &S,
) -> Result<BookingConfirmation, FrontendError> {
    let raw = store
        .get_item(CONFIRMATION_KEY)?
        .ok_or(FrontendError::NothingPersisted)?;
    serde_json::from_str(&raw).map_err(FrontendError::StoredConfirmation)
}
