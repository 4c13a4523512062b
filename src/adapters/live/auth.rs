//! Live adapter for the `AuthClient` port using the token endpoint.

use reqwest::{Client, StatusCode};
use serde::Deserialize;

use crate::ports::auth::{AuthClient, AuthError, AuthFuture, Credentials, TokenPair};

/// Live auth client that posts credentials to `{base_url}/token/`.
pub struct LiveAuthClient {
    client: Client,
    token_url: String,
}

impl LiveAuthClient {
    /// Creates a client for the API rooted at `base_url`.
    ///
    /// Trailing slashes on `base_url` are ignored.
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self { client: Client::new(), token_url: token_url(base_url) }
    }
}

/// Success body of the token endpoint.
#[derive(Deserialize)]
struct TokenResponse {
    access: String,
    refresh: String,
}

fn token_url(base_url: &str) -> String {
    format!("{}/token/", base_url.trim_end_matches('/'))
}

impl AuthClient for LiveAuthClient {
    fn obtain_tokens(&self, credentials: &Credentials) -> AuthFuture<'_> {
        let credentials = credentials.clone();

        Box::pin(async move {
            let response = self
                .client
                .post(&self.token_url)
                .json(&credentials)
                .send()
                .await
                .map_err(|e| AuthError::Transport(e.to_string()))?;

            let status = response.status();
            if status == StatusCode::UNAUTHORIZED {
                return Err(AuthError::InvalidCredentials);
            }
            if !status.is_success() {
                return Err(AuthError::UnexpectedStatus(status.as_u16()));
            }

            let body =
                response.text().await.map_err(|e| AuthError::Transport(e.to_string()))?;
            let tokens: TokenResponse = serde_json::from_str(&body)
                .map_err(|e| AuthError::MalformedResponse(e.to_string()))?;

            Ok(TokenPair { access: tokens.access, refresh: tokens.refresh })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_url_appends_endpoint_once() {
        assert_eq!(token_url("http://localhost:8000/api"), "http://localhost:8000/api/token/");
        assert_eq!(token_url("http://localhost:8000/api/"), "http://localhost:8000/api/token/");
    }

    #[tokio::test]
    async fn unreachable_server_gets_generic_message() {
        // Port 9 (discard) on loopback is not expected to run an HTTP server.
        // A configured HTTP proxy may answer with an error status instead.
        let client = LiveAuthClient::new("http://127.0.0.1:9/api");
        let credentials = Credentials { username: "u".into(), password: "p".into() };

        let err = client.obtain_tokens(&credentials).await.unwrap_err();
        assert!(matches!(err, AuthError::Transport(_) | AuthError::UnexpectedStatus(_)));
        assert_eq!(err.user_message(), "An error occurred. Please try again.");
    }
}
