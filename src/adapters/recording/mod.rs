//! Recording adapters that capture interactions to cassettes.
//!
//! Each adapter delegates to an inner implementation and records the call
//! and its result. Fallible results use the `{"ok": v}` / `{"err": msg}`
//! convention that the replaying adapters read back.

pub mod auth;
pub mod clock;
pub mod id_gen;
pub mod kv_store;

pub use auth::RecordingAuthClient;
pub use clock::RecordingClock;
pub use id_gen::RecordingIdGenerator;
pub use kv_store::RecordingKeyValueStore;

use serde::Serialize;

use crate::cassette::session::SharedRecorder;
use crate::session::{ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY};

/// Written to cassettes in place of session tokens.
pub(crate) const REDACTED: &str = "<redacted>";

/// Whether values stored under `key` must stay out of cassettes.
pub(crate) fn is_secret_key(key: &str) -> bool {
    key == ACCESS_TOKEN_KEY || key == REFRESH_TOKEN_KEY
}

/// Record an interaction with an infallible return value.
pub(crate) fn record_interaction<I, O>(
    recorder: &SharedRecorder,
    port: &str,
    method: &str,
    input: &I,
    output: &O,
) where
    I: Serialize,
    O: Serialize,
{
    let input_json = serde_json::to_value(input).expect("failed to serialize recording input");
    let output_json = serde_json::to_value(output).expect("failed to serialize recording output");

    let mut guard = recorder.lock().expect("recorder lock poisoned");
    guard.record(port, method, input_json, output_json);
}

/// Record a `Result<T, E>` interaction, storing the error as its display text.
pub(crate) fn record_result<T, E, I>(
    recorder: &SharedRecorder,
    port: &str,
    method: &str,
    input: &I,
    result: &Result<T, E>,
) where
    T: Serialize,
    E: std::fmt::Display,
    I: Serialize,
{
    let output = match result {
        Ok(v) => {
            let inner = serde_json::to_value(v).expect("failed to serialize Ok value");
            serde_json::json!({ "ok": inner })
        }
        Err(e) => serde_json::json!({ "err": e.to_string() }),
    };
    record_interaction(recorder, port, method, input, &output);
}
