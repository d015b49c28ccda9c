//! In-memory storage backend.

use crate::{SessionStorage, StorageResult};
use std::collections::HashMap;
use std::sync::Mutex;

/// Mutex-guarded in-memory storage.
///
/// Nothing survives the process; useful for tests and for embedders that
/// manage persistence themselves.
#[derive(Default)]
pub struct MemoryStorage {
    data: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    /// Create a new empty storage.
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStorage for MemoryStorage {
    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        let mut data = self.data.lock().unwrap();
        data.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        let data = self.data.lock().unwrap();
        Ok(data.get(key).cloned())
    }

    fn delete(&self, key: &str) -> StorageResult<bool> {
        let mut data = self.data.lock().unwrap();
        Ok(data.remove(key).is_some())
    }

    fn clear_all(&self) -> StorageResult<()> {
        let mut data = self.data.lock().unwrap();
        data.clear();
        Ok(())
    }
}
