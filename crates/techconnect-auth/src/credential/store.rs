//! Credential store: owns password hashing and the login/password contract.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::warn;
use uuid::Uuid;

use techconnect_core::config::auth::AuthConfig;
use techconnect_core::error::AppError;
use techconnect_core::result::AppResult;
use techconnect_database::repositories::CredentialRepository;
use techconnect_entity::credential::{Credential, NewCredential};

use crate::password::PasswordHasher;

/// Storage seam for credential records.
///
/// The database repository is the production implementation; tests
/// substitute in-memory fakes.
#[async_trait]
pub trait CredentialBackend: Send + Sync {
    /// Find a credential by primary key.
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Credential>>;
    /// Find a credential by exact login (case-sensitive).
    async fn find_by_login(&self, login: &str) -> AppResult<Option<Credential>>;
    /// Insert a new credential; duplicate logins surface as `Conflict`.
    async fn insert(&self, data: &NewCredential) -> AppResult<Credential>;
    /// Update the last login timestamp.
    async fn touch_last_login(&self, id: Uuid) -> AppResult<()>;
}

#[async_trait]
impl CredentialBackend for CredentialRepository {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Credential>> {
        CredentialRepository::find_by_id(self, id).await
    }

    async fn find_by_login(&self, login: &str) -> AppResult<Option<Credential>> {
        CredentialRepository::find_by_login(self, login).await
    }

    async fn insert(&self, data: &NewCredential) -> AppResult<Credential> {
        CredentialRepository::create(self, data).await
    }

    async fn touch_last_login(&self, id: Uuid) -> AppResult<()> {
        CredentialRepository::update_last_login(self, id).await
    }
}

/// Input length limits applied at registration.
#[derive(Debug, Clone, Copy)]
struct RegistrationPolicy {
    login_min: usize,
    login_max: usize,
    password_min: usize,
    password_max: usize,
}

/// Persists login/password-hash mappings and owns hashing and verification.
#[derive(Clone)]
pub struct CredentialStore {
    backend: Arc<dyn CredentialBackend>,
    hasher: PasswordHasher,
    policy: RegistrationPolicy,
}

impl CredentialStore {
    /// Creates a store over the given backend, configured from `AuthConfig`.
    pub fn new(backend: Arc<dyn CredentialBackend>, config: &AuthConfig) -> Self {
        Self {
            backend,
            hasher: PasswordHasher::new(config.hash_iterations),
            policy: RegistrationPolicy {
                login_min: config.login_min_length,
                login_max: config.login_max_length,
                password_min: config.password_min_length,
                password_max: config.password_max_length,
            },
        }
    }

    /// Registers a new credential.
    ///
    /// Fails with a `Validation` error on out-of-bounds input and with
    /// `Conflict` when the login already exists (case-sensitive exact
    /// match, enforced by the storage layer's uniqueness constraint).
    pub async fn register(&self, login: &str, password: &str) -> AppResult<Credential> {
        let login_len = login.chars().count();
        if login_len < self.policy.login_min || login_len > self.policy.login_max {
            return Err(AppError::validation(format!(
                "Login must be between {} and {} characters",
                self.policy.login_min, self.policy.login_max
            )));
        }
        let password_len = password.chars().count();
        if password_len < self.policy.password_min || password_len > self.policy.password_max {
            return Err(AppError::validation(format!(
                "Password must be between {} and {} characters",
                self.policy.password_min, self.policy.password_max
            )));
        }

        let data = NewCredential {
            login: login.to_string(),
            password_hash: self.hasher.hash_password(password),
        };
        self.backend.insert(&data).await
    }

    /// Verifies a login/password pair.
    ///
    /// Returns the credential only on a match. An unknown login and a wrong
    /// password are indistinguishable to the caller, to avoid enumeration.
    pub async fn verify(&self, login: &str, password: &str) -> AppResult<Option<Credential>> {
        let Some(credential) = self.backend.find_by_login(login).await? else {
            return Ok(None);
        };

        if self
            .hasher
            .verify_password(password, &credential.password_hash)
        {
            Ok(Some(credential))
        } else {
            Ok(None)
        }
    }

    /// Best-effort update of the last login timestamp.
    ///
    /// A failure here never fails the surrounding login operation.
    pub async fn touch_login(&self, id: Uuid) {
        if let Err(e) = self.backend.touch_last_login(id).await {
            warn!(credential_id = %id, error = %e, "Failed to update last login timestamp");
        }
    }

    /// Look up a credential by id (used by the session resolver).
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Credential>> {
        self.backend.find_by_id(id).await
    }
}

impl std::fmt::Debug for CredentialStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialStore")
            .field("hasher", &self.hasher)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    use std::collections::HashMap;
    use std::sync::Mutex;

    use chrono::Utc;
    use techconnect_core::error::ErrorKind;

    /// In-memory credential backend mirroring the unique-login constraint.
    #[derive(Default)]
    pub(crate) struct MemoryBackend {
        records: Mutex<HashMap<Uuid, Credential>>,
    }

    impl MemoryBackend {
        pub(crate) fn contains(&self, id: Uuid) -> bool {
            self.records.lock().unwrap().contains_key(&id)
        }

        pub(crate) fn remove(&self, id: Uuid) {
            self.records.lock().unwrap().remove(&id);
        }

        pub(crate) fn last_login_at(&self, id: Uuid) -> Option<chrono::DateTime<Utc>> {
            self.records
                .lock()
                .unwrap()
                .get(&id)
                .and_then(|c| c.last_login_at)
        }
    }

    #[async_trait]
    impl CredentialBackend for MemoryBackend {
        async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Credential>> {
            Ok(self.records.lock().unwrap().get(&id).cloned())
        }

        async fn find_by_login(&self, login: &str) -> AppResult<Option<Credential>> {
            Ok(self
                .records
                .lock()
                .unwrap()
                .values()
                .find(|c| c.login == login)
                .cloned())
        }

        async fn insert(&self, data: &NewCredential) -> AppResult<Credential> {
            let mut records = self.records.lock().unwrap();
            if records.values().any(|c| c.login == data.login) {
                return Err(AppError::conflict(format!(
                    "Login '{}' is already taken",
                    data.login
                )));
            }
            let credential = Credential {
                id: Uuid::new_v4(),
                login: data.login.clone(),
                password_hash: data.password_hash.clone(),
                created_at: Utc::now(),
                last_login_at: None,
            };
            records.insert(credential.id, credential.clone());
            Ok(credential)
        }

        async fn touch_last_login(&self, id: Uuid) -> AppResult<()> {
            let mut records = self.records.lock().unwrap();
            let record = records
                .get_mut(&id)
                .ok_or_else(|| AppError::not_found("No such credential"))?;
            record.last_login_at = Some(Utc::now());
            Ok(())
        }
    }

    pub(crate) fn store(backend: Arc<MemoryBackend>) -> CredentialStore {
        let config = AuthConfig {
            hash_iterations: 1_000,
            ..AuthConfig::default()
        };
        CredentialStore::new(backend, &config)
    }

    #[tokio::test]
    async fn test_register_and_verify() {
        let backend = Arc::new(MemoryBackend::default());
        let store = store(backend);

        let created = store.register("alice", "secretpw1").await.expect("register");
        assert_eq!(created.login, "alice");
        assert!(created.last_login_at.is_none());
        assert!(!created.password_hash.contains("secretpw1"));

        let verified = store.verify("alice", "secretpw1").await.expect("verify");
        assert_eq!(verified.expect("should match").id, created.id);
    }

    #[tokio::test]
    async fn test_wrong_password_and_unknown_login_look_alike() {
        let backend = Arc::new(MemoryBackend::default());
        let store = store(backend);
        store.register("alice", "secretpw1").await.expect("register");

        let wrong = store.verify("alice", "wrongpass").await.expect("verify");
        let unknown = store.verify("nobody", "secretpw1").await.expect("verify");
        assert!(wrong.is_none());
        assert!(unknown.is_none());
    }

    #[tokio::test]
    async fn test_login_is_case_sensitive() {
        let backend = Arc::new(MemoryBackend::default());
        let store = store(backend);
        store.register("alice", "secretpw1").await.expect("register");

        let other_case = store.verify("Alice", "secretpw1").await.expect("verify");
        assert!(other_case.is_none());
    }

    #[tokio::test]
    async fn test_duplicate_registration_conflicts() {
        let backend = Arc::new(MemoryBackend::default());
        let store = store(backend);

        store.register("alice", "secretpw1").await.expect("first");
        let err = store
            .register("alice", "otherpass99")
            .await
            .expect_err("duplicate");
        assert_eq!(err.kind, ErrorKind::Conflict);
    }

    #[tokio::test]
    async fn test_simultaneous_registrations_single_winner() {
        let backend = Arc::new(MemoryBackend::default());
        let store = store(backend);

        let (a, b, c) = tokio::join!(
            store.register("alice", "secretpw1"),
            store.register("alice", "secretpw2"),
            store.register("alice", "secretpw3"),
        );

        let results = [a, b, c];
        assert_eq!(results.iter().filter(|r| r.is_ok()).count(), 1);
        for lost in results.iter().filter(|r| r.is_err()) {
            assert_eq!(lost.as_ref().unwrap_err().kind, ErrorKind::Conflict);
        }
    }

    #[tokio::test]
    async fn test_registration_input_validation() {
        let backend = Arc::new(MemoryBackend::default());
        let store = store(backend);

        let short_login = store.register("ab", "secretpw1").await.expect_err("login");
        assert_eq!(short_login.kind, ErrorKind::Validation);

        let short_password = store.register("alice", "short").await.expect_err("password");
        assert_eq!(short_password.kind, ErrorKind::Validation);
    }

    #[tokio::test]
    async fn test_touch_login_is_best_effort() {
        let backend = Arc::new(MemoryBackend::default());
        let store = store(backend.clone());

        let created = store.register("alice", "secretpw1").await.expect("register");
        store.touch_login(created.id).await;
        assert!(backend.last_login_at(created.id).is_some());

        // Touching a missing record logs and swallows the failure.
        store.touch_login(Uuid::new_v4()).await;
    }
}
