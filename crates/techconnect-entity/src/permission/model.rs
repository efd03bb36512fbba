//! Section permission entity model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A grant letting a specific domain user edit a specific section's data.
///
/// The `permission` column is stored as text; unrecognized values are
/// dropped at read time rather than surfaced as errors.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SectionPermission {
    /// The domain user holding the grant.
    pub user_id: Uuid,
    /// The section the grant applies to.
    pub section_id: Uuid,
    /// Raw stored permission value.
    pub permission: String,
}
