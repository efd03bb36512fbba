//! Per-section permission entities.

pub mod kind;
pub mod model;

pub use kind::PermissionKind;
pub use model::SectionPermission;
