//! # techconnect-entity
//!
//! Entity models shared across the TechConnect crates: authentication
//! credentials, domain users with their coarse role, and per-section
//! permission grants.

pub mod credential;
pub mod permission;
pub mod user;

pub use credential::Credential;
pub use permission::{PermissionKind, SectionPermission};
pub use user::{DomainUser, Role};
