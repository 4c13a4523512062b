//! Session tokens and the login flow.

use log::{info, warn};

use crate::context::ServiceContext;
use crate::ports::auth::{AuthError, Credentials, TokenPair};

/// Storage key for the access token.
pub const ACCESS_TOKEN_KEY: &str = "access_token";
/// Storage key for the refresh token.
pub const REFRESH_TOKEN_KEY: &str = "refresh_token";

/// Reads and writes the access/refresh token pair in local storage.
pub struct SessionTokens<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> SessionTokens<'a> {
    /// Creates a token holder over the context's key-value store.
    #[must_use]
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Writes both tokens.
    ///
    /// # Errors
    ///
    /// Returns an error if either write fails.
    pub fn store(&self, tokens: &TokenPair) -> Result<(), String> {
        self.ctx
            .kv
            .set(ACCESS_TOKEN_KEY, &tokens.access)
            .map_err(|e| format!("Failed to store access token: {e}"))?;
        self.ctx
            .kv
            .set(REFRESH_TOKEN_KEY, &tokens.refresh)
            .map_err(|e| format!("Failed to store refresh token: {e}"))
    }

    /// Returns the stored pair, or `None` unless both tokens are present.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    pub fn load(&self) -> Result<Option<TokenPair>, String> {
        let read = |key: &str| {
            self.ctx.kv.get(key).map_err(|e| format!("Failed to read `{key}`: {e}"))
        };
        Ok(match (read(ACCESS_TOKEN_KEY)?, read(REFRESH_TOKEN_KEY)?) {
            (Some(access), Some(refresh)) => Some(TokenPair { access, refresh }),
            _ => None,
        })
    }

    /// Removes both tokens. Both removals are attempted even if one fails.
    ///
    /// # Errors
    ///
    /// Returns the first removal error.
    pub fn clear(&self) -> Result<(), String> {
        let access = self.ctx.kv.remove(ACCESS_TOKEN_KEY);
        let refresh = self.ctx.kv.remove(REFRESH_TOKEN_KEY);
        access.map_err(|e| format!("Failed to remove access token: {e}"))?;
        refresh.map_err(|e| format!("Failed to remove refresh token: {e}"))
    }

    /// Whether an access token is stored. Read failures count as logged out.
    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        match self.ctx.kv.get(ACCESS_TOKEN_KEY) {
            Ok(token) => token.is_some(),
            Err(err) => {
                warn!("event=session_check status=failed reason={err}");
                false
            }
        }
    }
}

/// Exchanges credentials for tokens and stores them.
///
/// Never retries. Show [`AuthError::user_message`] to the user on failure.
///
/// # Errors
///
/// Returns the auth client's error, or [`AuthError::Storage`] when the
/// issued tokens cannot be written.
pub async fn login(
    ctx: &ServiceContext,
    username: &str,
    password: &str,
) -> Result<TokenPair, AuthError> {
    let credentials = Credentials { username: username.to_string(), password: password.to_string() };

    let tokens = match ctx.auth.obtain_tokens(&credentials).await {
        Ok(tokens) => tokens,
        Err(err) => {
            warn!("event=login status=failed user={username:?} reason={err}");
            return Err(err);
        }
    };

    SessionTokens::new(ctx).store(&tokens).map_err(AuthError::Storage)?;
    let at = ctx.clock.now();
    info!("event=login status=ok user={username:?} at={}", at.to_rfc3339());
    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::auth::{AuthClient, AuthFuture};

    /// Accepts exactly one username/password pair; rejects the rest with 401.
    struct FixedAccount;

    impl AuthClient for FixedAccount {
        fn obtain_tokens(&self, credentials: &Credentials) -> AuthFuture<'_> {
            let ok = credentials.username == "ada" && credentials.password == "lovelace";
            Box::pin(async move {
                if ok {
                    Ok(TokenPair { access: "access-1".into(), refresh: "refresh-1".into() })
                } else {
                    Err(AuthError::InvalidCredentials)
                }
            })
        }
    }

    fn ctx() -> ServiceContext {
        let mut ctx = ServiceContext::in_memory();
        ctx.auth = Box::new(FixedAccount);
        ctx
    }

    #[tokio::test]
    async fn successful_login_stores_both_tokens() {
        let ctx = ctx();

        let tokens = login(&ctx, "ada", "lovelace").await.unwrap();

        assert_eq!(tokens.access, "access-1");
        assert_eq!(ctx.kv.get(ACCESS_TOKEN_KEY).unwrap().as_deref(), Some("access-1"));
        assert_eq!(ctx.kv.get(REFRESH_TOKEN_KEY).unwrap().as_deref(), Some("refresh-1"));
        assert!(SessionTokens::new(&ctx).is_logged_in());
    }

    #[tokio::test]
    async fn rejected_login_stores_nothing() {
        let ctx = ctx();

        let err = login(&ctx, "ada", "wrong").await.unwrap_err();

        assert_eq!(err.user_message(), "Invalid username or password.");
        assert_eq!(SessionTokens::new(&ctx).load().unwrap(), None);
    }

    #[tokio::test]
    async fn offline_login_gets_generic_message() {
        let ctx = ServiceContext::in_memory();
        let err = login(&ctx, "ada", "lovelace").await.unwrap_err();
        assert_eq!(err.user_message(), "An error occurred. Please try again.");
    }

    #[test]
    fn clear_removes_both_tokens() {
        let ctx = ServiceContext::in_memory();
        let tokens = SessionTokens::new(&ctx);
        tokens.store(&TokenPair { access: "a".into(), refresh: "r".into() }).unwrap();

        tokens.clear().unwrap();

        assert_eq!(ctx.kv.get(ACCESS_TOKEN_KEY).unwrap(), None);
        assert_eq!(ctx.kv.get(REFRESH_TOKEN_KEY).unwrap(), None);
        assert!(!tokens.is_logged_in());
    }

    #[test]
    fn load_requires_both_tokens() {
        let ctx = ServiceContext::in_memory();
        ctx.kv.set(ACCESS_TOKEN_KEY, "a").unwrap();
        assert_eq!(SessionTokens::new(&ctx).load().unwrap(), None);
    }
}
