//! Inbound token to authenticated identity resolution.

use std::sync::Arc;

use tracing::warn;

use techconnect_core::result::AppResult;
use techconnect_entity::credential::Credential;

use crate::credential::CredentialBackend;
use crate::token::TokenCodec;

/// Resolves an inbound session token into an authenticated identity.
///
/// A token is never trusted in isolation: even with a valid signature the
/// backing credential must still exist in the store.
#[derive(Clone)]
pub struct SessionResolver {
    codec: TokenCodec,
    backend: Arc<dyn CredentialBackend>,
}

impl SessionResolver {
    /// Creates a resolver over the given codec and credential backend.
    pub fn new(codec: TokenCodec, backend: Arc<dyn CredentialBackend>) -> Self {
        Self { codec, backend }
    }

    /// Resolves a token to the credential it was issued for.
    ///
    /// Malformed, tampered, and expired tokens all yield `Ok(None)`; the
    /// caller learns only "authenticated" vs "not authenticated". Only
    /// genuine storage faults propagate as errors.
    pub async fn resolve(&self, token: &str) -> AppResult<Option<Credential>> {
        let Some(claims) = self.codec.verify(token) else {
            return Ok(None);
        };

        match self.backend.find_by_id(claims.sub).await? {
            Some(credential) => Ok(Some(credential)),
            None => {
                // Valid signature over a deleted account.
                warn!(credential_id = %claims.sub, "Token subject no longer exists");
                Ok(None)
            }
        }
    }
}

impl std::fmt::Debug for SessionResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionResolver").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use chrono::Duration;
    use uuid::Uuid;

    use crate::credential::store::tests::{MemoryBackend, store};

    fn resolver(backend: Arc<MemoryBackend>) -> SessionResolver {
        SessionResolver::new(TokenCodec::new("test-secret"), backend)
    }

    #[tokio::test]
    async fn test_resolve_round_trip() {
        let backend = Arc::new(MemoryBackend::default());
        let store = store(backend.clone());
        let resolver = resolver(backend);

        let bob = store.register("bob", "secretpw1").await.expect("register");
        let token = TokenCodec::new("test-secret")
            .issue(bob.id, "bob", Duration::hours(12))
            .expect("issue");

        let resolved = resolver.resolve(&token).await.expect("resolve");
        assert_eq!(resolved.expect("authenticated").id, bob.id);
    }

    #[tokio::test]
    async fn test_garbage_token_resolves_to_none() {
        let backend = Arc::new(MemoryBackend::default());
        let resolver = resolver(backend);

        assert!(resolver.resolve("garbage.token.value").await.unwrap().is_none());
        assert!(resolver.resolve("").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_deleted_account_resolves_to_none() {
        let backend = Arc::new(MemoryBackend::default());
        let store = store(backend.clone());
        let resolver = resolver(backend.clone());

        let bob = store.register("bob", "secretpw1").await.expect("register");
        let token = TokenCodec::new("test-secret")
            .issue(bob.id, "bob", Duration::hours(12))
            .expect("issue");

        backend.remove(bob.id);
        assert!(!backend.contains(bob.id));
        // Signature is still valid, but the backing credential is gone.
        assert!(resolver.resolve(&token).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_token_for_unknown_subject_resolves_to_none() {
        let backend = Arc::new(MemoryBackend::default());
        let resolver = resolver(backend);

        let token = TokenCodec::new("test-secret")
            .issue(Uuid::new_v4(), "ghost", Duration::hours(1))
            .expect("issue");
        assert!(resolver.resolve(&token).await.unwrap().is_none());
    }
}
