//! Authentication configuration.

use serde::{Deserialize, Serialize};

/// Authentication and credential configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Secret key for session token signing (HMAC-SHA256).
    ///
    /// The default is a development placeholder and must be overridden in
    /// any non-development deployment.
    #[serde(default = "default_token_secret")]
    pub token_secret: String,
    /// PBKDF2 iteration count for password hashing.
    #[serde(default = "default_hash_iterations")]
    pub hash_iterations: u32,
    /// Session token TTL in hours.
    #[serde(default = "default_session_ttl")]
    pub session_ttl_hours: u64,
    /// Session token TTL in days when the "remember me" flag is set at login.
    #[serde(default = "default_remember_ttl")]
    pub remember_ttl_days: u64,
    /// Minimum login length at registration.
    #[serde(default = "default_login_min")]
    pub login_min_length: usize,
    /// Maximum login length at registration.
    #[serde(default = "default_login_max")]
    pub login_max_length: usize,
    /// Minimum password length at registration.
    #[serde(default = "default_password_min")]
    pub password_min_length: usize,
    /// Maximum password length at registration.
    #[serde(default = "default_password_max")]
    pub password_max_length: usize,
    /// Whether the session cookie carries the `Secure` attribute.
    #[serde(default)]
    pub cookie_secure: bool,
    /// `SameSite` attribute for the session cookie.
    #[serde(default = "default_cookie_samesite")]
    pub cookie_samesite: String,
    /// Optional `Domain` attribute for the session cookie.
    #[serde(default)]
    pub cookie_domain: Option<String>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            token_secret: default_token_secret(),
            hash_iterations: default_hash_iterations(),
            session_ttl_hours: default_session_ttl(),
            remember_ttl_days: default_remember_ttl(),
            login_min_length: default_login_min(),
            login_max_length: default_login_max(),
            password_min_length: default_password_min(),
            password_max_length: default_password_max(),
            cookie_secure: false,
            cookie_samesite: default_cookie_samesite(),
            cookie_domain: None,
        }
    }
}

fn default_token_secret() -> String {
    "dev-secret-change-me".to_string()
}

fn default_hash_iterations() -> u32 {
    240_000
}

fn default_session_ttl() -> u64 {
    12
}

fn default_remember_ttl() -> u64 {
    30
}

fn default_login_min() -> usize {
    3
}

fn default_login_max() -> usize {
    64
}

fn default_password_min() -> usize {
    8
}

fn default_password_max() -> usize {
    256
}

fn default_cookie_samesite() -> String {
    "lax".to_string()
}
