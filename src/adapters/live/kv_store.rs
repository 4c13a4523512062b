//! Live key-value store persisted as a single JSON object on disk.
//!
//! The whole map is rewritten on every `set`/`remove`, the same
//! whole-value semantics browser local storage gives the task list.

use std::collections::BTreeMap;
use std::error::Error;
use std::ffi::OsString;
use std::path::PathBuf;
use std::sync::Mutex;

use log::warn;

use crate::ports::kv_store::KeyValueStore;

/// Key-value store backed by one JSON file.
pub struct FileKeyValueStore {
    path: PathBuf,
    // Serializes read-modify-write cycles within this process.
    lock: Mutex<()>,
}

impl FileKeyValueStore {
    /// Creates a store that reads and writes `path`.
    ///
    /// The file and its parent directory are created on first write.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into(), lock: Mutex::new(()) }
    }

    /// Reads the whole map.
    ///
    /// A file that is not a JSON object is logged and read as empty, so the
    /// next write replaces it.
    fn read_map(&self) -> Result<BTreeMap<String, String>, Box<dyn Error + Send + Sync>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let contents = std::fs::read_to_string(&self.path)?;
        if contents.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        match serde_json::from_str(&contents) {
            Ok(map) => Ok(map),
            Err(err) => {
                warn!(
                    "event=storage_read status=recovered path={} reason={err}",
                    self.path.display()
                );
                Ok(BTreeMap::new())
            }
        }
    }

    /// Writes the whole map to a sibling temp file, then renames it over the
    /// storage file.
    fn write_map(
        &self,
        map: &BTreeMap<String, String>,
    ) -> Result<(), Box<dyn Error + Send + Sync>> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(map)?;
        let staging = self.staging_path();
        std::fs::write(&staging, json)?;
        std::fs::rename(&staging, &self.path).map_err(|e| {
            let _ = std::fs::remove_file(&staging);
            e.into()
        })
    }

    fn staging_path(&self) -> PathBuf {
        let mut name = self.path.file_name().map(OsString::from).unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl KeyValueStore for FileKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, Box<dyn Error + Send + Sync>> {
        let _guard = self.lock.lock().expect("storage lock poisoned");
        Ok(self.read_map()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), Box<dyn Error + Send + Sync>> {
        let _guard = self.lock.lock().expect("storage lock poisoned");
        let mut map = self.read_map()?;
        map.insert(key.to_string(), value.to_string());
        self.write_map(&map)
    }

    fn remove(&self, key: &str) -> Result<(), Box<dyn Error + Send + Sync>> {
        let _guard = self.lock.lock().expect("storage lock poisoned");
        let mut map = self.read_map()?;
        if map.remove(key).is_some() {
            self.write_map(&map)?;
        }
        Ok(())
    }
}
