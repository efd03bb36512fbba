//! Domain user entity model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::role::Role;

/// A business-level user (student or teacher), distinct from the
/// authentication credential.
///
/// The `role` column is free-form text owned by the surrounding application;
/// it is interpreted through [`Role::from_db_value`] so that unrecognized
/// values never grant elevated privileges.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DomainUser {
    /// Unique domain user identifier.
    pub id: Uuid,
    /// Display name.
    pub full_name: String,
    /// Contact email (optional).
    pub email: Option<String>,
    /// Raw stored role value.
    pub role: Option<String>,
}

impl DomainUser {
    /// Resolve the coarse role from the stored column, fail-closed.
    pub fn coarse_role(&self) -> Role {
        Role::from_db_value(self.role.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(role: Option<&str>) -> DomainUser {
        DomainUser {
            id: Uuid::new_v4(),
            full_name: "Test User".to_string(),
            email: None,
            role: role.map(String::from),
        }
    }

    #[test]
    fn test_coarse_role_fail_closed() {
        assert_eq!(user(Some("Teacher")).coarse_role(), Role::Teacher);
        assert_eq!(user(Some("coach")).coarse_role(), Role::Student);
        assert_eq!(user(None).coarse_role(), Role::Student);
    }
}
