//! Replaying adapters that serve recorded interactions.

pub mod auth;
pub mod clock;
pub mod id_gen;
pub mod kv_store;

pub use auth::ReplayingAuthClient;
pub use clock::ReplayingClock;
pub use id_gen::ReplayingIdGenerator;
pub use kv_store::ReplayingKeyValueStore;

use std::error::Error;
use std::sync::Mutex;

use serde::de::DeserializeOwned;

use crate::cassette::replayer::CassetteReplayer;

/// Pop the next recorded output for `port::method`.
pub(crate) fn next_output(
    replayer: &Mutex<CassetteReplayer>,
    port: &str,
    method: &str,
) -> serde_json::Value {
    let mut replayer = replayer.lock().expect("replayer lock poisoned");
    replayer.next_interaction(port, method).output
}

/// Decode a `{"ok": v}` / `{"err": msg}` output into a `Result`.
pub(crate) fn replay_result<T: DeserializeOwned>(
    output: &serde_json::Value,
    context: &str,
) -> Result<T, Box<dyn Error + Send + Sync>> {
    if let Some(err) = output.get("err") {
        let msg = err.as_str().map_or_else(|| err.to_string(), String::from);
        return Err(msg.into());
    }
    let value = output.get("ok").unwrap_or(output);
    serde_json::from_value(value.clone())
        .map_err(|e| format!("{context}: failed to deserialize: {e}").into())
}
