//! # techconnect-database
//!
//! PostgreSQL connection management and concrete repository implementations
//! for the TechConnect auth core.

pub mod connection;
pub mod migration;
pub mod repositories;

pub use connection::DatabasePool;
