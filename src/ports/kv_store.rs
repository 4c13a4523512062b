//! Key-value store port backing task and session persistence.

use std::error::Error;

/// A string-keyed, string-valued store.
///
/// This is the local-storage boundary: the task list and the session
/// tokens are each kept under a fixed key. Values are opaque to the store.
pub trait KeyValueStore: Send + Sync {
    /// Returns the value stored under `key`, or `None` when the key is absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, Box<dyn Error + Send + Sync>>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails (permissions, disk full, etc.).
    fn set(&self, key: &str, value: &str) -> Result<(), Box<dyn Error + Send + Sync>>;

    /// Removes `key`. Removing an absent key succeeds.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be updated.
    fn remove(&self, key: &str) -> Result<(), Box<dyn Error + Send + Sync>>;
}
