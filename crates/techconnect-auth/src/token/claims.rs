//! Claims payload embedded in every session token.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Session token payload.
///
/// Field order is the canonical serialization order; the codec signs the
/// exact transmitted bytes, so producers must not reorder keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject — the credential record id.
    pub sub: Uuid,
    /// Login, denormalized for cheap identity echo without a store hit.
    pub login: String,
    /// Expiration timestamp (integer seconds since epoch, UTC).
    pub exp: i64,
}

impl Claims {
    /// Checks whether this token has expired.
    ///
    /// Expiry is strict: a token whose `exp` equals the current second is
    /// already expired.
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_field_order() {
        let claims = Claims {
            sub: Uuid::nil(),
            login: "alice".to_string(),
            exp: 1_700_000_000,
        };
        let json = serde_json::to_string(&claims).expect("serialize");
        assert_eq!(
            json,
            "{\"sub\":\"00000000-0000-0000-0000-000000000000\",\"login\":\"alice\",\"exp\":1700000000}"
        );
    }

    #[test]
    fn test_is_expired_boundaries() {
        let claims = |exp| Claims {
            sub: Uuid::nil(),
            login: "alice".to_string(),
            exp,
        };
        let now = Utc::now().timestamp();
        assert!(claims(now - 10).is_expired());
        assert!(claims(now).is_expired());
        assert!(!claims(now + 10).is_expired());
    }
}
