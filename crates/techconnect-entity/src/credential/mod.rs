//! Authentication credential entities.

pub mod model;

pub use model::{Credential, NewCredential};
