//! # techconnect-auth
//!
//! The TechConnect trust boundary: credential storage, stateless session
//! token issuance and verification, and resolution of an authenticated
//! identity into a domain role with section-level permissions.
//!
//! ## Modules
//!
//! - `password` — PBKDF2-HMAC-SHA256 password hashing and verification
//! - `token` — signed, self-contained session token codec
//! - `credential` — credential registration and login verification
//! - `session` — token-to-identity resolution, login flow, session cookie
//! - `roles` — auth identity to domain role and permission resolution

pub mod credential;
pub mod password;
pub mod roles;
pub mod session;
pub mod token;

pub use credential::{CredentialBackend, CredentialStore};
pub use password::PasswordHasher;
pub use roles::{DbLinkBackend, LinkBackend, RoleLinker};
pub use session::{SessionCookie, SessionManager, SessionResolver};
pub use token::{Claims, TokenCodec};
