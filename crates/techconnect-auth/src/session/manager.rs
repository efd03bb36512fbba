//! Login flow: credential verification, token minting, cookie parameters.

use chrono::Duration;
use tracing::{debug, info};

use techconnect_core::config::auth::AuthConfig;
use techconnect_core::error::AppError;
use techconnect_core::result::AppResult;
use techconnect_entity::credential::Credential;

use crate::credential::CredentialStore;
use crate::session::cookie::SessionCookie;
use crate::token::TokenCodec;

/// Result of a successful login.
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    /// The authenticated credential.
    pub credential: Credential,
    /// The freshly minted session token.
    pub token: String,
    /// Token TTL in seconds, also used as the cookie `Max-Age`.
    pub max_age_seconds: i64,
    /// Rendered `Set-Cookie` value for the session cookie.
    pub cookie: String,
}

/// Orchestrates login and logout against the credential store and codec.
///
/// A new token is minted on each login; tokens are never stored server-side
/// and simply expire. Revocation is impossible short of secret rotation.
#[derive(Clone)]
pub struct SessionManager {
    store: CredentialStore,
    codec: TokenCodec,
    cookie: SessionCookie,
    session_ttl: Duration,
    remember_ttl: Duration,
}

impl SessionManager {
    /// Creates a session manager from auth configuration.
    pub fn new(store: CredentialStore, codec: TokenCodec, config: &AuthConfig) -> Self {
        Self {
            store,
            codec,
            cookie: SessionCookie::from_config(config),
            session_ttl: Duration::hours(config.session_ttl_hours as i64),
            remember_ttl: Duration::days(config.remember_ttl_days as i64),
        }
    }

    /// Verifies credentials and mints a session token.
    ///
    /// An unknown login and a wrong password both fail with the same
    /// authentication error. The `remember` flag extends the TTL from the
    /// session default to the remember-me window.
    pub async fn login(
        &self,
        login: &str,
        password: &str,
        remember: bool,
    ) -> AppResult<LoginOutcome> {
        let Some(credential) = self.store.verify(login, password).await? else {
            debug!(login, "Login rejected");
            return Err(AppError::authentication("Invalid credentials"));
        };

        let ttl = if remember {
            self.remember_ttl
        } else {
            self.session_ttl
        };
        let token = self.codec.issue(credential.id, &credential.login, ttl)?;
        let max_age_seconds = ttl.num_seconds();
        let cookie = self.cookie.issue(&token, max_age_seconds);

        // Non-critical; never turns a successful login into a failure.
        self.store.touch_login(credential.id).await;

        info!(credential_id = %credential.id, remember, "Login succeeded");
        Ok(LoginOutcome {
            credential,
            token,
            max_age_seconds,
            cookie,
        })
    }

    /// Renders the cookie that clears the session at logout.
    pub fn logout_cookie(&self) -> String {
        self.cookie.clear()
    }
}

impl std::fmt::Debug for SessionManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionManager").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::Arc;

    use techconnect_core::error::ErrorKind;

    use crate::credential::store::tests::{MemoryBackend, store};
    use crate::session::SessionResolver;

    fn manager(backend: Arc<MemoryBackend>) -> SessionManager {
        let config = AuthConfig::default();
        SessionManager::new(store(backend), TokenCodec::new("test-secret"), &config)
    }

    #[tokio::test]
    async fn test_login_end_to_end() {
        let backend = Arc::new(MemoryBackend::default());
        let manager = manager(backend.clone());
        let resolver = SessionResolver::new(TokenCodec::new("test-secret"), backend.clone());

        let bob = store(backend.clone())
            .register("bob", "secretpw1")
            .await
            .expect("register");

        let outcome = manager.login("bob", "secretpw1", false).await.expect("login");
        assert_eq!(outcome.credential.id, bob.id);
        assert_eq!(outcome.max_age_seconds, 12 * 3600);
        assert!(outcome.cookie.starts_with("tc_session="));

        // The decoded payload subject equals bob's credential id.
        let claims = TokenCodec::new("test-secret")
            .verify(&outcome.token)
            .expect("claims");
        assert_eq!(claims.sub, bob.id);
        assert_eq!(claims.login, "bob");

        let resolved = resolver.resolve(&outcome.token).await.expect("resolve");
        assert_eq!(resolved.expect("authenticated").id, bob.id);
        assert!(resolver.resolve("garbage.token.value").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_login_failure_is_uniform() {
        let backend = Arc::new(MemoryBackend::default());
        let manager = manager(backend.clone());
        store(backend)
            .register("bob", "secretpw1")
            .await
            .expect("register");

        let wrong = manager.login("bob", "nope-nope", false).await.expect_err("wrong");
        let unknown = manager
            .login("nobody", "secretpw1", false)
            .await
            .expect_err("unknown");
        assert_eq!(wrong.kind, ErrorKind::Authentication);
        assert_eq!(unknown.kind, ErrorKind::Authentication);
        assert_eq!(wrong.message, unknown.message);
    }

    #[tokio::test]
    async fn test_remember_extends_ttl() {
        let backend = Arc::new(MemoryBackend::default());
        let manager = manager(backend.clone());
        store(backend.clone())
            .register("bob", "secretpw1")
            .await
            .expect("register");

        let outcome = manager.login("bob", "secretpw1", true).await.expect("login");
        assert_eq!(outcome.max_age_seconds, 30 * 24 * 3600);
    }

    #[tokio::test]
    async fn test_login_updates_last_login() {
        let backend = Arc::new(MemoryBackend::default());
        let manager = manager(backend.clone());
        let bob = store(backend.clone())
            .register("bob", "secretpw1")
            .await
            .expect("register");

        assert!(backend.last_login_at(bob.id).is_none());
        manager.login("bob", "secretpw1", false).await.expect("login");
        assert!(backend.last_login_at(bob.id).is_some());
    }

    #[test]
    fn test_logout_cookie_clears_session() {
        let backend = Arc::new(MemoryBackend::default());
        let manager = SessionManager::new(
            store(backend),
            TokenCodec::new("test-secret"),
            &AuthConfig::default(),
        );
        assert!(manager.logout_cookie().contains("Max-Age=0"));
    }
}
