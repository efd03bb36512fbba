//! Section permission repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use techconnect_core::error::{AppError, ErrorKind};
use techconnect_core::result::AppResult;
use techconnect_entity::permission::SectionPermission;

/// Repository for read-only per-section permission lookups.
#[derive(Debug, Clone)]
pub struct SectionPermissionRepository {
    pool: PgPool,
}

impl SectionPermissionRepository {
    /// Create a new section permission repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find all permission grants a domain user holds on a section.
    pub async fn find_for_section(
        &self,
        user_id: Uuid,
        section_id: Uuid,
    ) -> AppResult<Vec<SectionPermission>> {
        sqlx::query_as::<_, SectionPermission>(
            "SELECT user_id, section_id, permission FROM section_permissions \
             WHERE user_id = $1 AND section_id = $2",
        )
        .bind(user_id)
        .bind(section_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to query section permissions", e)
        })
    }
}
