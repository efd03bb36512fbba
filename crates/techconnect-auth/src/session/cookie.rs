//! Session cookie wire format.
//!
//! The CRUD layer is responsible for extracting the token from the
//! request's cookie; this module only renders the `Set-Cookie` values.

use techconnect_core::config::auth::AuthConfig;

/// Name of the HTTP session cookie.
pub const SESSION_COOKIE_NAME: &str = "tc_session";

/// Renders the session cookie with its configured attributes.
#[derive(Debug, Clone)]
pub struct SessionCookie {
    secure: bool,
    same_site: String,
    domain: Option<String>,
}

impl SessionCookie {
    /// Creates a cookie renderer from auth configuration.
    pub fn from_config(config: &AuthConfig) -> Self {
        Self {
            secure: config.cookie_secure,
            same_site: normalize_same_site(&config.cookie_samesite),
            domain: config.cookie_domain.clone(),
        }
    }

    /// Renders the `Set-Cookie` value carrying a freshly issued token.
    ///
    /// `max_age_seconds` equals the token TTL so cookie and token expire
    /// together.
    pub fn issue(&self, token: &str, max_age_seconds: i64) -> String {
        let mut cookie = format!(
            "{SESSION_COOKIE_NAME}={token}; Max-Age={max_age_seconds}; Path=/; HttpOnly; SameSite={}",
            self.same_site
        );
        if self.secure {
            cookie.push_str("; Secure");
        }
        if let Some(domain) = &self.domain {
            cookie.push_str("; Domain=");
            cookie.push_str(domain);
        }
        cookie
    }

    /// Renders the `Set-Cookie` value that clears the session at logout.
    pub fn clear(&self) -> String {
        self.issue("", 0)
    }
}

fn normalize_same_site(value: &str) -> String {
    match value.to_ascii_lowercase().as_str() {
        "strict" => "Strict".to_string(),
        "none" => "None".to_string(),
        _ => "Lax".to_string(),
    }
}
