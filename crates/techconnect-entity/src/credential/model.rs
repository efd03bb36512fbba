//! Credential record entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A stored login + password hash used for authentication.
///
/// The credential is distinct from the domain user: it only proves identity,
/// it carries no role or permission information.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Credential {
    /// Unique credential identifier, assigned at registration.
    pub id: Uuid,
    /// Unique login name (case-sensitive, immutable after creation).
    pub login: String,
    /// Versioned PBKDF2 password hash (`pbkdf2_sha256$iters$salt$dk`).
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// When the credential was created.
    pub created_at: DateTime<Utc>,
    /// Last successful login time, if any.
    pub last_login_at: Option<DateTime<Utc>>,
}

/// Data required to insert a new credential.
#[derive(Debug, Clone)]
pub struct NewCredential {
    /// Desired login name.
    pub login: String,
    /// Pre-hashed password.
    pub password_hash: String,
}
