//! `vetrina-session` — the durable session store and its change signal.
//!
//! One writable resource shared by every portal surface. Reads are
//! fail-safe (drift degrades to guest, never to an error), writes are
//! synchronous, and any mounted surface can subscribe for changes without
//! caring which surface or which browsing context produced them.

pub mod file;
pub mod keys;
pub mod memory;
pub mod storage;
pub mod store;

pub use file::FileStorage;
pub use memory::MemoryStorage;
pub use storage::{StorageBackend, StorageError};
pub use store::SessionStore;
