//! Replaying adapter for the `KeyValueStore` port.

use std::error::Error;
use std::sync::Mutex;

use super::{next_output, replay_result};
use crate::cassette::replayer::CassetteReplayer;
use crate::ports::KeyValueStore;

/// Replays recorded storage results from a cassette.
///
/// Inputs are not checked; calls are matched by method in recorded order.
pub struct ReplayingKeyValueStore {
    replayer: Mutex<CassetteReplayer>,
}

impl ReplayingKeyValueStore {
    /// Creates a new replaying store from a cassette replayer.
    #[must_use]
    pub fn new(replayer: CassetteReplayer) -> Self {
        Self { replayer: Mutex::new(replayer) }
    }
}

impl KeyValueStore for ReplayingKeyValueStore {
    fn get(&self, _key: &str) -> Result<Option<String>, Box<dyn Error + Send + Sync>> {
        let output = next_output(&self.replayer, "kv", "get");
        replay_result(&output, "kv::get")
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), Box<dyn Error + Send + Sync>> {
        let output = next_output(&self.replayer, "kv", "set");
        replay_result(&output, "kv::set")
    }

    fn remove(&self, _key: &str) -> Result<(), Box<dyn Error + Send + Sync>> {
        let output = next_output(&self.replayer, "kv", "remove");
        replay_result(&output, "kv::remove")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::replaying::test_support::replayer;
    use serde_json::json;

    #[test]
    fn get_replays_present_and_absent_values() {
        let kv = ReplayingKeyValueStore::new(replayer(
            "kv",
            "get",
            vec![json!({"ok": "[]"}), json!({"ok": null})],
        ));
        assert_eq!(kv.get("tasks").unwrap().as_deref(), Some("[]"));
        assert_eq!(kv.get("tasks").unwrap(), None);
    }

    #[test]
    fn set_replays_recorded_failure() {
        let kv = ReplayingKeyValueStore::new(replayer(
            "kv",
            "set",
            vec![json!({"err": "quota exceeded"})],
        ));
        let err = kv.set("tasks", "[]").unwrap_err();
        assert_eq!(err.to_string(), "quota exceeded");
    }
}
