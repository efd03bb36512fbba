//! Authentication identity to domain role and permission resolution.

pub mod linker;

pub use linker::{DbLinkBackend, LinkBackend, RoleLinker};
