//! Domain user entities and roles.

pub mod model;
pub mod role;

pub use model::DomainUser;
pub use role::Role;
