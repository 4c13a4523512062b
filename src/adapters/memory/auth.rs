//! Auth client used when no token endpoint is wired in.

use crate::ports::auth::{AuthClient, AuthError, AuthFuture, Credentials};

/// Auth client that fails every login with a transport error.
pub struct OfflineAuthClient;

impl AuthClient for OfflineAuthClient {
    fn obtain_tokens(&self, _credentials: &Credentials) -> AuthFuture<'_> {
        Box::pin(async { Err(AuthError::Transport("no auth endpoint configured".into())) })
    }
}
