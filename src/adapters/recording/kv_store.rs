//! Recording adapter for the `KeyValueStore` port.

use std::error::Error;

use serde::Serialize;

use super::{is_secret_key, record_result, REDACTED};
use crate::cassette::session::SharedRecorder;
use crate::ports::KeyValueStore;

/// Records storage calls while delegating to an inner store.
pub struct RecordingKeyValueStore {
    inner: Box<dyn KeyValueStore>,
    recorder: SharedRecorder,
}

impl RecordingKeyValueStore {
    /// Creates a new recording store wrapping the given implementation.
    pub fn new(inner: Box<dyn KeyValueStore>, recorder: SharedRecorder) -> Self {
        Self { inner, recorder }
    }
}

#[derive(Serialize)]
struct KeyInput<'a> {
    key: &'a str,
}

#[derive(Serialize)]
struct SetInput<'a> {
    key: &'a str,
    value: &'a str,
}

impl KeyValueStore for RecordingKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, Box<dyn Error + Send + Sync>> {
        let result = self.inner.get(key);
        if is_secret_key(key) {
            let redacted = result.as_ref().map(|value| value.as_ref().map(|_| REDACTED));
            record_result(&self.recorder, "kv", "get", &KeyInput { key }, &redacted);
        } else {
            record_result(&self.recorder, "kv", "get", &KeyInput { key }, &result);
        }
        result
    }

    fn set(&self, key: &str, value: &str) -> Result<(), Box<dyn Error + Send + Sync>> {
        let result = self.inner.set(key, value);
        let value = if is_secret_key(key) { REDACTED } else { value };
        record_result(&self.recorder, "kv", "set", &SetInput { key, value }, &result);
        result
    }

    fn remove(&self, key: &str) -> Result<(), Box<dyn Error + Send + Sync>> {
        let result = self.inner.remove(key);
        record_result(&self.recorder, "kv", "remove", &KeyInput { key }, &result);
        result
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::adapters::memory::MemoryKeyValueStore;
    use crate::cassette::format::Cassette;
    use crate::cassette::recorder::CassetteRecorder;
    use serde_json::json;

    fn record(actions: impl FnOnce(&RecordingKeyValueStore)) -> (Cassette, String) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("kv.cassette.yaml");
        let recorder = Arc::new(Mutex::new(CassetteRecorder::new(&path, "test")));
        {
            let kv = RecordingKeyValueStore::new(
                Box::new(MemoryKeyValueStore::new()),
                Arc::clone(&recorder),
            );
            actions(&kv);
        }
        let recorder = Arc::try_unwrap(recorder).unwrap().into_inner().unwrap();
        recorder.finish().unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        (serde_yaml::from_str(&content).unwrap(), content)
    }

    #[test]
    fn records_inputs_and_ok_results() {
        let (cassette, _) = record(|kv| {
            kv.set("tasks", "[]").unwrap();
            assert_eq!(kv.get("tasks").unwrap().as_deref(), Some("[]"));
            kv.remove("tasks").unwrap();
        });

        let methods: Vec<&str> =
            cassette.interactions.iter().map(|i| i.method.as_str()).collect();
        assert_eq!(methods, ["set", "get", "remove"]);
        assert_eq!(cassette.interactions[0].input, json!({"key": "tasks", "value": "[]"}));
        assert_eq!(cassette.interactions[1].output, json!({"ok": "[]"}));
    }

    #[test]
    fn session_tokens_are_redacted() {
        let (cassette, content) = record(|kv| {
            kv.set("access_token", "secret-access").unwrap();
            kv.set("refresh_token", "secret-refresh").unwrap();
            // The caller still sees the real value.
            assert_eq!(kv.get("access_token").unwrap().as_deref(), Some("secret-access"));
            assert_eq!(kv.get("refresh_token").unwrap(), Some("secret-refresh".to_string()));
        });

        assert!(!content.contains("secret-"), "{content}");
        assert_eq!(
            cassette.interactions[0].input,
            json!({"key": "access_token", "value": "<redacted>"})
        );
        assert_eq!(cassette.interactions[2].output, json!({"ok": "<redacted>"}));
    }
}
