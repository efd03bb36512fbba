//! Credential registration and login verification.

pub mod store;

pub use store::{CredentialBackend, CredentialStore};
