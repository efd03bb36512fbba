//! Credential repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use techconnect_core::error::{AppError, ErrorKind};
use techconnect_core::result::AppResult;
use techconnect_entity::credential::{Credential, NewCredential};

/// Repository for credential lookup and registration.
#[derive(Debug, Clone)]
pub struct CredentialRepository {
    pool: PgPool,
}

impl CredentialRepository {
    /// Create a new credential repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a credential by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Credential>> {
        sqlx::query_as::<_, Credential>("SELECT * FROM credentials WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find credential by id", e)
            })
    }

    /// Find a credential by exact login (case-sensitive).
    pub async fn find_by_login(&self, login: &str) -> AppResult<Option<Credential>> {
        sqlx::query_as::<_, Credential>("SELECT * FROM credentials WHERE login = $1")
            .bind(login)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find credential by login", e)
            })
    }

    /// Insert a new credential.
    ///
    /// Duplicate logins are rejected by the unique constraint and surfaced
    /// as a conflict, so concurrent registrations of the same login yield
    /// exactly one success.
    pub async fn create(&self, data: &NewCredential) -> AppResult<Credential> {
        sqlx::query_as::<_, Credential>(
            "INSERT INTO credentials (login, password_hash) VALUES ($1, $2) RETURNING *",
        )
        .bind(&data.login)
        .bind(&data.password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("credentials_login_key") =>
            {
                AppError::conflict(format!("Login '{}' is already taken", data.login))
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create credential", e),
        })
    }

    /// Update the last login timestamp.
    pub async fn update_last_login(&self, id: Uuid) -> AppResult<()> {
        sqlx::query("UPDATE credentials SET last_login_at = NOW() WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to update last login", e)
            })?;
        Ok(())
    }
}
