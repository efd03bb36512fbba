//! Repository implementations for the TechConnect auth entities.

pub mod credential;
pub mod link;
pub mod permission;

pub use credential::CredentialRepository;
pub use link::AuthLinkRepository;
pub use permission::SectionPermissionRepository;
