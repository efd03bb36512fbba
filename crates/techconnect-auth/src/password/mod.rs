//! PBKDF2 password hashing and verification.

pub mod hasher;

pub use hasher::PasswordHasher;
