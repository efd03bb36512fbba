//! Identity-to-role linking and per-section permission resolution.
//!
//! The link table and the domain user table are owned by the surrounding
//! application; this module only reads them. Role resolution is re-derived
//! from the link table on every request rather than cached in the session
//! token.

use std::collections::HashSet;
use std::str::FromStr;
use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use techconnect_core::result::AppResult;
use techconnect_database::repositories::{AuthLinkRepository, SectionPermissionRepository};
use techconnect_entity::permission::{PermissionKind, SectionPermission};
use techconnect_entity::user::{DomainUser, Role};

/// Storage seam for link, role, and permission lookups.
#[async_trait]
pub trait LinkBackend: Send + Sync {
    /// Find the domain user id linked to a normalized auth login.
    async fn domain_user_id_for_login(&self, auth_login: &str) -> AppResult<Option<Uuid>>;
    /// Find a domain user by primary key.
    async fn domain_user(&self, id: Uuid) -> AppResult<Option<DomainUser>>;
    /// Find all permission grants a user holds on a section.
    async fn section_grants(
        &self,
        user_id: Uuid,
        section_id: Uuid,
    ) -> AppResult<Vec<SectionPermission>>;
}

/// Production [`LinkBackend`] over the database repositories.
#[derive(Debug, Clone)]
pub struct DbLinkBackend {
    links: AuthLinkRepository,
    permissions: SectionPermissionRepository,
}

impl DbLinkBackend {
    /// Create a backend over the given repositories.
    pub fn new(links: AuthLinkRepository, permissions: SectionPermissionRepository) -> Self {
        Self { links, permissions }
    }
}

#[async_trait]
impl LinkBackend for DbLinkBackend {
    async fn domain_user_id_for_login(&self, auth_login: &str) -> AppResult<Option<Uuid>> {
        self.links.find_domain_user_id(auth_login).await
    }

    async fn domain_user(&self, id: Uuid) -> AppResult<Option<DomainUser>> {
        self.links.find_domain_user(id).await
    }

    async fn section_grants(
        &self,
        user_id: Uuid,
        section_id: Uuid,
    ) -> AppResult<Vec<SectionPermission>> {
        self.permissions.find_for_section(user_id, section_id).await
    }
}

/// Maps an authentication identity to a domain user, role, and per-section
/// permissions.
#[derive(Clone)]
pub struct RoleLinker {
    backend: Arc<dyn LinkBackend>,
}

impl RoleLinker {
    /// Creates a linker over the given backend.
    pub fn new(backend: Arc<dyn LinkBackend>) -> Self {
        Self { backend }
    }

    /// Resolves an auth login to its domain user id and coarse role.
    ///
    /// The login is normalized (trimmed, lowercased) before the link table
    /// lookup. `None` means "not a recognized domain participant", which is
    /// distinct from "not authenticated".
    pub async fn role_for(&self, login: &str) -> AppResult<Option<(Uuid, Role)>> {
        let key = login.trim().to_lowercase();
        if key.is_empty() {
            return Ok(None);
        }

        let Some(user_id) = self.backend.domain_user_id_for_login(&key).await? else {
            return Ok(None);
        };

        let role = self.coarse_role(user_id).await?;
        Ok(Some((user_id, role)))
    }

    /// Resolves a domain user's coarse role.
    ///
    /// A missing user record or an unrecognized stored value resolves to
    /// the least-privileged role; this never grants teacher privileges by
    /// accident.
    pub async fn coarse_role(&self, domain_user_id: Uuid) -> AppResult<Role> {
        let user = self.backend.domain_user(domain_user_id).await?;
        Ok(Role::from_db_value(
            user.as_ref().and_then(|u| u.role.as_deref()),
        ))
    }

    /// Resolves the permission kinds a user holds on one section.
    ///
    /// Grants with unrecognized permission values are dropped rather than
    /// surfaced as errors. A teacher role grants nothing here by itself.
    pub async fn section_permissions(
        &self,
        domain_user_id: Uuid,
        section_id: Uuid,
    ) -> AppResult<HashSet<PermissionKind>> {
        let grants = self
            .backend
            .section_grants(domain_user_id, section_id)
            .await?;

        Ok(grants
            .iter()
            .filter_map(|g| PermissionKind::from_str(&g.permission).ok())
            .collect())
    }
}

impl std::fmt::Debug for RoleLinker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RoleLinker").finish_non_exhaustive()
    }
}
