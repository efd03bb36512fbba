//! Auth-link repository implementation.
//!
//! The `auth_links` table maps an authentication login to a domain user
//! owned by the surrounding application. This repository only reads it.

use sqlx::PgPool;
use uuid::Uuid;

use techconnect_core::error::{AppError, ErrorKind};
use techconnect_core::result::AppResult;
use techconnect_entity::user::DomainUser;

/// Repository for auth-login to domain-user link lookups.
#[derive(Debug, Clone)]
pub struct AuthLinkRepository {
    pool: PgPool,
}

impl AuthLinkRepository {
    /// Create a new auth-link repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find the domain user id linked to the given (normalized) auth login.
    pub async fn find_domain_user_id(&self, auth_login: &str) -> AppResult<Option<Uuid>> {
        sqlx::query_scalar::<_, Uuid>(
            "SELECT domain_user_id FROM auth_links WHERE auth_login = $1",
        )
        .bind(auth_login)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find auth link", e))
    }

    /// Find a domain user by primary key.
    pub async fn find_domain_user(&self, id: Uuid) -> AppResult<Option<DomainUser>> {
        sqlx::query_as::<_, DomainUser>(
            "SELECT id, full_name, email, role FROM users WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find domain user", e))
    }
}
