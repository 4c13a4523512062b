//! In-process key-value store.

use std::collections::HashMap;
use std::error::Error;
use std::sync::Mutex;

use crate::ports::kv_store::KeyValueStore;

/// Key-value store held entirely in memory.
///
/// Nothing survives the process; used by tests and by embedders that
/// manage persistence themselves.
#[derive(Default)]
pub struct MemoryKeyValueStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryKeyValueStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the store with `key` preset to `value`.
    #[must_use]
    pub fn with_entry(self, key: &str, value: &str) -> Self {
        self.entries
            .lock()
            .expect("memory store lock poisoned")
            .insert(key.to_string(), value.to_string());
        self
    }
}

impl KeyValueStore for MemoryKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, Box<dyn Error + Send + Sync>> {
        Ok(self.entries.lock().expect("memory store lock poisoned").get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.entries
            .lock()
            .expect("memory store lock poisoned")
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.entries.lock().expect("memory store lock poisoned").remove(key);
        Ok(())
    }
}
