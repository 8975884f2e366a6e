//! Session handling for API requests.
//!
//! Tokens come from an injected [`SessionProvider`] rather than a global
//! client object, so the session's lifecycle is owned by whoever builds the
//! client (application startup for the real identity provider, a stub in
//! tests).

use std::sync::RwLock;

use async_trait::async_trait;

use crate::error::Result;

/// Per-request credential policy.
///
/// - `Required` fails fast with an auth error when no token is obtainable.
/// - `Optional` attaches a token if one is present and proceeds anonymously
///   otherwise.
/// - `None` never attaches credentials.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthMode {
    Required,
    Optional,
    #[default]
    None,
}

/// Source of bearer tokens for authenticated requests.
///
/// `access_token` is consulted before each request; `refresh` is invoked at
/// most once per logical request, when the server rejects the current token
/// with a 401. A refresh that yields `None` means the session is gone and
/// the user has to sign in again.
#[async_trait]
pub trait SessionProvider: Send + Sync {
    async fn access_token(&self) -> Result<Option<String>>;
    async fn refresh(&self) -> Result<Option<String>>;
}

/// Session provider holding a fixed token.
///
/// Covers the simple cases: a long-lived token from the environment, or an
/// anonymous session when constructed with `None`. `refresh` always yields
/// `None` since there is no identity provider to rotate against.
pub struct StaticSession {
    token: RwLock<Option<String>>,
}

impl StaticSession {
    pub fn new(token: Option<String>) -> Self {
        Self { token: RwLock::new(token) }
    }

    pub fn anonymous() -> Self {
        Self::new(None)
    }

    pub fn set_token(&self, token: Option<String>) {
        *self.token.write().expect("session token lock poisoned") = token;
    }
}

#[async_trait]
impl SessionProvider for StaticSession {
    async fn access_token(&self) -> Result<Option<String>> {
        Ok(self.token.read().expect("session token lock poisoned").clone())
    }

    async fn refresh(&self) -> Result<Option<String>> {
        tracing::debug!("static session cannot refresh; treating session as expired");
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn static_session_returns_configured_token() {
        let session = StaticSession::new(Some("tok_123".to_string()));
        assert_eq!(session.access_token().await.unwrap().as_deref(), Some("tok_123"));
    }

    #[tokio::test]
    async fn static_session_never_refreshes() {
        let session = StaticSession::new(Some("tok_123".to_string()));
        assert_eq!(session.refresh().await.unwrap(), None);
    }

    #[tokio::test]
    async fn anonymous_session_has_no_token() {
        let session = StaticSession::anonymous();
        assert_eq!(session.access_token().await.unwrap(), None);
    }
}
