//! Auth port for exchanging credentials for bearer tokens.

use std::error::Error;
use std::fmt;
use std::future::Future;
use std::pin::Pin;

use serde::{Deserialize, Serialize};

/// Boxed future type alias used by [`AuthClient`] to keep the trait dyn-compatible.
pub type AuthFuture<'a> = Pin<Box<dyn Future<Output = Result<TokenPair, AuthError>> + Send + 'a>>;

/// Username and password submitted by the login flow.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Credentials {
    /// The account name.
    pub username: String,
    /// The account password.
    pub password: String,
}

/// The access/refresh token pair returned by the token endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenPair {
    /// Short-lived bearer token.
    pub access: String,
    /// Token used to obtain a new access token.
    pub refresh: String,
}

/// Failure modes of a login attempt.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum AuthError {
    /// The server rejected the credentials (HTTP 401).
    InvalidCredentials,
    /// The request never produced a response.
    Transport(String),
    /// The server answered with a status other than success or 401.
    UnexpectedStatus(u16),
    /// The success response body could not be parsed.
    MalformedResponse(String),
    /// Tokens were issued but could not be written to local storage.
    Storage(String),
}

impl AuthError {
    /// The message shown to the user for this failure.
    ///
    /// Rejected credentials get a specific message; everything else shares
    /// a generic retry prompt.
    #[must_use]
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::InvalidCredentials => "Invalid username or password.",
            _ => "An error occurred. Please try again.",
        }
    }
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCredentials => write!(f, "credentials rejected by token endpoint"),
            Self::Transport(detail) => write!(f, "token request failed: {detail}"),
            Self::UnexpectedStatus(status) => {
                write!(f, "token endpoint returned unexpected status {status}")
            }
            Self::MalformedResponse(detail) => write!(f, "malformed token response: {detail}"),
            Self::Storage(detail) => write!(f, "failed to store session tokens: {detail}"),
        }
    }
}

impl Error for AuthError {}

/// Exchanges credentials for a token pair against a remote API.
pub trait AuthClient: Send + Sync {
    /// Requests a token pair for the given credentials.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::InvalidCredentials`] when the server rejects the
    /// credentials, or another variant for transport and protocol failures.
    fn obtain_tokens(&self, credentials: &Credentials) -> AuthFuture<'_>;
}
