//! In-memory adapter for tests.

use std::collections::HashMap;
use std::sync::Mutex;

use super::{KeyValueStore, StoreError, StoreKey};

/// Key-value store held entirely in memory.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<StoreKey, String>>,
}

impl KeyValueStore for MemoryStore {
    fn load(&self, key: StoreKey) -> Result<Option<String>, StoreError> {
        let entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        Ok(entries.get(&key).cloned())
    }

    fn save(&self, key: StoreKey, value: &str) -> Result<(), StoreError> {
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.insert(key, value.to_owned());
        Ok(())
    }

    fn remove(&self, key: StoreKey) -> Result<(), StoreError> {
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.remove(&key);
        Ok(())
    }
}
