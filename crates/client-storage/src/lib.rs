//! Session persistence for the account client core.
//!
//! This crate provides the durable key-value surface the client stores its
//! session under, plus the [`SessionStore`] adapter that owns
//! (de)serialization of the single persisted user record:
//! - [`FileStorage`]: a single JSON-object namespace file on disk
//! - [`MemoryStorage`]: a mutex-guarded map, also used as a test double

mod file;
mod keys;
mod memory;
mod record;
mod store;
mod traits;

pub use file::FileStorage;
pub use keys::StorageKeys;
pub use memory::MemoryStorage;
pub use record::UserSession;
pub use store::SessionStore;
pub use traits::SessionStorage;

use client_config_and_utils::Paths;
use thiserror::Error;

/// Error type for storage operations.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Backend read/write error
    #[error("Storage backend error: {0}")]
    Backend(String),

    /// Encoding/decoding error
    #[error("Encoding error: {0}")]
    Encoding(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Create the default file-backed storage implementation.
pub fn create_storage(paths: &Paths) -> Box<dyn SessionStorage> {
    Box::new(FileStorage::new(paths.session_file()))
}
