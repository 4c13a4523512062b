//! Replaying adapter for the `AuthClient` port.

use std::sync::Mutex;

use super::next_output;
use crate::cassette::replayer::CassetteReplayer;
use crate::ports::{AuthClient, AuthError, AuthFuture, Credentials, TokenPair};

/// Serves recorded login results from a cassette.
pub struct ReplayingAuthClient {
    replayer: Mutex<CassetteReplayer>,
}

impl ReplayingAuthClient {
    /// Create a replaying auth client backed by the given replayer.
    #[must_use]
    pub fn new(replayer: CassetteReplayer) -> Self {
        Self { replayer: Mutex::new(replayer) }
    }
}

fn decode(output: &serde_json::Value) -> Result<TokenPair, AuthError> {
    if let Some(err) = output.get("err") {
        return Err(serde_json::from_value(err.clone())
            .unwrap_or_else(|_| AuthError::Transport(err.to_string())));
    }
    let value = output.get("ok").unwrap_or(output);
    serde_json::from_value(value.clone()).map_err(|e| AuthError::MalformedResponse(e.to_string()))
}

impl AuthClient for ReplayingAuthClient {
    fn obtain_tokens(&self, _credentials: &Credentials) -> AuthFuture<'_> {
        let result = decode(&next_output(&self.replayer, "auth", "obtain_tokens"));
        Box::pin(async move { result })
    }
}
