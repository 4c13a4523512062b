//! Recording adapter for the `AuthClient` port.

use serde::Serialize;

use super::{record_interaction, REDACTED};
use crate::cassette::session::SharedRecorder;
use crate::ports::{AuthClient, AuthFuture, Credentials, TokenPair};

/// Records login attempts while delegating to an inner client.
///
/// The password and the issued tokens are never written to the cassette.
pub struct RecordingAuthClient {
    inner: Box<dyn AuthClient>,
    recorder: SharedRecorder,
}

impl RecordingAuthClient {
    /// Creates a new recording auth client wrapping the given implementation.
    pub fn new(inner: Box<dyn AuthClient>, recorder: SharedRecorder) -> Self {
        Self { inner, recorder }
    }
}

#[derive(Serialize)]
struct LoginInput<'a> {
    username: &'a str,
}

impl AuthClient for RecordingAuthClient {
    fn obtain_tokens(&self, credentials: &Credentials) -> AuthFuture<'_> {
        let credentials = credentials.clone();

        Box::pin(async move {
            let result = self.inner.obtain_tokens(&credentials).await;

            // Errors are stored structurally so replay can tell a 401 from a
            // transport failure.
            let output = match &result {
                Ok(_) => serde_json::json!({
                    "ok": TokenPair { access: REDACTED.into(), refresh: REDACTED.into() }
                }),
                Err(err) => serde_json::json!({ "err": err }),
            };
            let input = LoginInput { username: &credentials.username };
            record_interaction(&self.recorder, "auth", "obtain_tokens", &input, &output);

            result
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::adapters::memory::OfflineAuthClient;
    use crate::cassette::recorder::CassetteRecorder;

    #[tokio::test]
    async fn records_failure_without_password() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("auth.cassette.yaml");
        let recorder = Arc::new(Mutex::new(CassetteRecorder::new(&path, "test")));

        {
            let auth = RecordingAuthClient::new(Box::new(OfflineAuthClient), Arc::clone(&recorder));
            let credentials = Credentials { username: "ada".into(), password: "hunter2".into() };
            assert!(auth.obtain_tokens(&credentials).await.is_err());
        }

        let recorder = Arc::try_unwrap(recorder).unwrap().into_inner().unwrap();
        recorder.finish().unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("ada"));
        assert!(content.contains("transport"));
        assert!(!content.contains("hunter2"));
    }

    struct Issuing;

    impl AuthClient for Issuing {
        fn obtain_tokens(&self, _credentials: &Credentials) -> AuthFuture<'_> {
            Box::pin(async {
                Ok(TokenPair { access: "live-access".into(), refresh: "live-refresh".into() })
            })
        }
    }

    #[tokio::test]
    async fn records_success_without_tokens() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("auth.cassette.yaml");
        let recorder = Arc::new(Mutex::new(CassetteRecorder::new(&path, "test")));

        let tokens = {
            let auth = RecordingAuthClient::new(Box::new(Issuing), Arc::clone(&recorder));
            let credentials = Credentials { username: "ada".into(), password: "hunter2".into() };
            auth.obtain_tokens(&credentials).await.unwrap()
        };
        assert_eq!(tokens.access, "live-access");

        let recorder = Arc::try_unwrap(recorder).unwrap().into_inner().unwrap();
        recorder.finish().unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(!content.contains("live-"), "{content}");
        assert!(!content.contains("hunter2"));
        assert!(content.contains("<redacted>"));
    }
}
