//! PBKDF2-HMAC-SHA256 password hashing and verification.
//!
//! Hashes are stored as a single versioned string
//! `pbkdf2_sha256$<iterations>$<salt>$<derived-key>` with the salt and key
//! base64url-encoded without padding. Verification re-derives the key with
//! the stored parameters and compares in constant time; any malformed or
//! unsupported encoding fails closed.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use sha2::Sha256;
use subtle::ConstantTimeEq;

/// Algorithm tag carried in the encoded hash string.
const ALGORITHM: &str = "pbkdf2_sha256";

/// Salt size in bytes.
const SALT_BYTES: usize = 16;

/// Derived key size in bytes (SHA-256 output width).
const KEY_BYTES: usize = 32;

/// Handles password hashing and verification using PBKDF2-HMAC-SHA256.
#[derive(Debug, Clone)]
pub struct PasswordHasher {
    /// PBKDF2 iteration count applied to newly created hashes.
    iterations: u32,
}

impl PasswordHasher {
    /// Creates a hasher with the given iteration count.
    pub fn new(iterations: u32) -> Self {
        Self { iterations }
    }

    /// Hashes a plaintext password with a fresh random salt.
    pub fn hash_password(&self, password: &str) -> String {
        let mut salt = [0u8; SALT_BYTES];
        use rand::RngCore;
        rand::rngs::OsRng.fill_bytes(&mut salt);

        let mut key = [0u8; KEY_BYTES];
        pbkdf2::pbkdf2_hmac::<Sha256>(password.as_bytes(), &salt, self.iterations, &mut key);

        format!(
            "{ALGORITHM}${}${}${}",
            self.iterations,
            URL_SAFE_NO_PAD.encode(salt),
            URL_SAFE_NO_PAD.encode(key)
        )
    }

    /// Verifies a plaintext password against a stored encoded hash.
    ///
    /// Returns `false` for a wrong password and for any hash string that
    /// cannot be parsed; verification never raises to the caller.
    pub fn verify_password(&self, password: &str, encoded: &str) -> bool {
        let mut parts = encoded.split('$');
        let (Some(algo), Some(iter_s), Some(salt_b64), Some(key_b64), None) = (
            parts.next(),
            parts.next(),
            parts.next(),
            parts.next(),
            parts.next(),
        ) else {
            return false;
        };

        if algo != ALGORITHM {
            return false;
        }
        let Ok(iterations) = iter_s.parse::<u32>() else {
            return false;
        };
        if iterations == 0 {
            return false;
        }
        let Ok(salt) = decode_b64url(salt_b64) else {
            return false;
        };
        let Ok(expected) = decode_b64url(key_b64) else {
            return false;
        };
        if expected.is_empty() {
            return false;
        }

        // Re-derive with the stored parameters, never the current defaults.
        let mut derived = vec![0u8; expected.len()];
        pbkdf2::pbkdf2_hmac::<Sha256>(password.as_bytes(), &salt, iterations, &mut derived);

        derived.ct_eq(&expected).into()
    }
}

/// Decode base64url input, tolerating both padded and unpadded forms.
fn decode_b64url(input: &str) -> Result<Vec<u8>, base64::DecodeError> {
    URL_SAFE_NO_PAD.decode(input.trim_end_matches('='))
}
