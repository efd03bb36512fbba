//! Compact signed session token codec.
//!
//! Tokens are three dot-separated base64url segments (header, payload,
//! signature) without padding. The signature is HMAC-SHA256 over the exact
//! transmitted `"<header>.<payload>"` bytes, keyed by a process-wide secret
//! injected at construction. This is a bespoke format, not standard JWT;
//! both sides must match the canonicalization exactly.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::{Duration, Utc};
use hmac::{Hmac, Mac};
use serde::Serialize;
use sha2::Sha256;
use uuid::Uuid;

use techconnect_core::config::auth::AuthConfig;
use techconnect_core::error::AppError;

use super::claims::Claims;

type HmacSha256 = Hmac<Sha256>;

/// Token header carrying the algorithm tag. The header is covered by the
/// signature but its contents are not interpreted at verification time.
#[derive(Debug, Serialize)]
struct Header {
    alg: &'static str,
    typ: &'static str,
}

const HEADER: Header = Header {
    alg: "HS256",
    typ: "JWT",
};

/// Creates and verifies signed session tokens.
#[derive(Clone)]
pub struct TokenCodec {
    /// HMAC signing secret. Immutable after construction.
    secret: Vec<u8>,
}

impl std::fmt::Debug for TokenCodec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenCodec").finish_non_exhaustive()
    }
}

impl TokenCodec {
    /// Creates a codec with an explicit secret.
    pub fn new(secret: impl AsRef<[u8]>) -> Self {
        Self {
            secret: secret.as_ref().to_vec(),
        }
    }

    /// Creates a codec from auth configuration.
    pub fn from_config(config: &AuthConfig) -> Self {
        Self::new(config.token_secret.as_bytes())
    }

    /// Issues a new token for the given subject, expiring after `ttl`.
    pub fn issue(&self, subject: Uuid, login: &str, ttl: Duration) -> Result<String, AppError> {
        let claims = Claims {
            sub: subject,
            login: login.to_string(),
            exp: (Utc::now() + ttl).timestamp(),
        };

        let header = URL_SAFE_NO_PAD.encode(serde_json::to_vec(&HEADER)?);
        let payload = URL_SAFE_NO_PAD.encode(serde_json::to_vec(&claims)?);
        let signature = self.sign(format!("{header}.{payload}").as_bytes());

        Ok(format!("{header}.{payload}.{signature}"))
    }

    /// Verifies a token and returns its claims.
    ///
    /// Fails closed: a wrong shape, bad signature, undecodable payload, or
    /// an `exp` that is not strictly in the future all yield `None`. The
    /// signature is checked over the transmitted segment bytes, never over
    /// a re-serialization of the decoded payload.
    pub fn verify(&self, token: &str) -> Option<Claims> {
        let mut parts = token.split('.');
        let (Some(header), Some(payload), Some(signature), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return None;
        };

        let mut mac = HmacSha256::new_from_slice(&self.secret).ok()?;
        mac.update(header.as_bytes());
        mac.update(b".");
        mac.update(payload.as_bytes());

        let supplied = decode_b64url(signature).ok()?;
        mac.verify_slice(&supplied).ok()?;

        let claims: Claims = serde_json::from_slice(&decode_b64url(payload).ok()?).ok()?;
        if claims.is_expired() {
            return None;
        }

        Some(claims)
    }

    fn sign(&self, data: &[u8]) -> String {
        // The key length is unconstrained for HMAC; new_from_slice cannot fail.
        let mut mac = HmacSha256::new_from_slice(&self.secret).expect("HMAC accepts any key size");
        mac.update(data);
        URL_SAFE_NO_PAD.encode(mac.finalize().into_bytes())
    }
}

/// Decode base64url input, tolerating both padded and unpadded forms.
fn decode_b64url(input: &str) -> Result<Vec<u8>, base64::DecodeError> {
    URL_SAFE_NO_PAD.decode(input.trim_end_matches('='))
}
