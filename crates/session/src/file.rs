//! JSON-file storage under the OS data directory.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::storage::{StorageBackend, StorageError};

/// On-disk document: the key/value entries plus a write stamp.
#[derive(Debug, Default, Serialize, Deserialize)]
struct StoredDocument {
    entries: HashMap<String, String>,
    updated_at: Option<DateTime<Utc>>,
}

/// File-backed storage: one JSON document per origin.
///
/// Every read loads the file fresh, so a write from another process of the
/// same origin is visible as soon as this one next reads. Writes are
/// read-modify-write with no cross-process lock; concurrent writers are
/// last-write-wins, same as the in-browser medium this models.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    /// Use the document at `path`; the file is created on first write.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Open the default origin store at `{data_dir}/vetrina/session.json`.
    pub fn open_default() -> Result<Self, StorageError> {
        Ok(Self::at(default_storage_path()?))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<StoredDocument, StorageError> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Ok(StoredDocument::default());
            }
            Err(err) => return Err(StorageError::Read(err.to_string())),
        };

        match serde_json::from_str(&raw) {
            Ok(doc) => Ok(doc),
            Err(err) => {
                // A corrupt document degrades to empty rather than locking
                // the user out; the fail-safe defaults take over from here.
                tracing::warn!(
                    path = %self.path.display(),
                    "discarding unreadable session document: {err}"
                );
                Ok(StoredDocument::default())
            }
        }
    }

    fn save(&self, mut doc: StoredDocument) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|err| StorageError::Write(err.to_string()))?;
        }

        doc.updated_at = Some(Utc::now());
        let raw =
            serde_json::to_string_pretty(&doc).map_err(|err| StorageError::Write(err.to_string()))?;
        std::fs::write(&self.path, raw).map_err(|err| StorageError::Write(err.to_string()))
    }
}

impl StorageBackend for FileStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.load()?.entries.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut doc = self.load()?;
        doc.entries.insert(key.to_string(), value.to_string());
        self.save(doc)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut doc = self.load()?;
        if doc.entries.remove(key).is_none() {
            return Ok(());
        }
        self.save(doc)
    }
}

/// Resolve `{data_dir}/vetrina/session.json`, falling back to
/// `~/.local/share` when the platform reports no data directory.
fn default_storage_path() -> Result<PathBuf, StorageError> {
    let base = dirs::data_dir()
        .or_else(|| {
            dirs::home_dir().map(|mut home| {
                home.push(".local");
                home.push("share");
                home
            })
        })
        .ok_or(StorageError::NoDataDir)?;

    let mut path = base;
    path.push("vetrina");
    path.push("session.json");
    Ok(path)
}
