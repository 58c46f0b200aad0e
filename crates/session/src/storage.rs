//! Origin-scoped key/value storage contract.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    /// An internal lock was poisoned by a panicking writer.
    #[error("storage lock poisoned")]
    Poisoned,

    /// The backing medium could not be read.
    #[error("failed to read storage: {0}")]
    Read(String),

    /// The backing medium could not be written.
    #[error("failed to write storage: {0}")]
    Write(String),

    /// No per-user data directory exists on this platform.
    #[error("no data directory available for this platform")]
    NoDataDir,
}

/// Durable, origin-scoped key/value storage.
///
/// Writes are synchronous: a completed `write` must be visible to every
/// subsequent `read` in this context, and to other contexts of the same
/// origin when they next read. There is no locking across contexts; writes
/// are last-write-wins.
pub trait StorageBackend: Send + Sync {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Removing an absent key is a no-op, not an error.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

impl<B> StorageBackend for std::sync::Arc<B>
where
    B: StorageBackend + ?Sized,
{
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).read(key)
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).write(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        (**self).remove(key)
    }
}
