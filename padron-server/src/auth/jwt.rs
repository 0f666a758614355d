//! Session token issuance and verification.

use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use uuid::Uuid;

use padron_core::Claims;

/// Session lifetime in seconds: two hours from issuance.
pub const SESSION_TTL_SECS: i64 = 2 * 60 * 60;

/// HS256 key pair derived once from the configured secret and shared
/// read-only by all requests.
pub struct TokenKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl TokenKeys {
    pub fn new(secret: &str) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
        }
    }
}

impl std::fmt::Debug for TokenKeys {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenKeys").finish_non_exhaustive()
    }
}

/// Sign a session token for the given account.
pub fn issue_session_token(
    keys: &TokenKeys,
    id_usuario: i64,
) -> Result<String, jsonwebtoken::errors::Error> {
    let now = Utc::now();
    let claims = Claims {
        sub: id_usuario,
        iat: now.timestamp(),
        exp: (now + Duration::seconds(SESSION_TTL_SECS)).timestamp(),
        jti: Uuid::new_v4().to_string(),
    };

    encode(&Header::new(Algorithm::HS256), &claims, &keys.encoding)
}

/// Verify signature and expiry, returning the embedded claims.
pub fn verify_session_token(
    keys: &TokenKeys,
    token: &str,
) -> Result<Claims, jsonwebtoken::errors::Error> {
    let validation = Validation::new(Algorithm::HS256);
    decode::<Claims>(token, &keys.decoding, &validation).map(|data| data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_keys() -> TokenKeys {
        TokenKeys::new("clave-de-prueba")
    }

    #[test]
    fn issued_token_round_trips_with_two_hour_expiry() {
        let keys = test_keys();
        let token = issue_session_token(&keys, 42).expect("token issued");

        let claims = verify_session_token(&keys, &token).expect("token verifies");
        assert_eq!(claims.sub, 42);
        assert_eq!(claims.exp - claims.iat, SESSION_TTL_SECS);
        assert!(!claims.jti.is_empty());
    }

    #[test]
    fn expired_token_is_rejected() {
        let keys = test_keys();
        let now = Utc::now();

        let claims = Claims {
            sub: 42,
            iat: (now - Duration::seconds(10_000)).timestamp(),
            exp: (now - Duration::seconds(3_600)).timestamp(),
            jti: Uuid::new_v4().to_string(),
        };
        let token = encode(&Header::new(Algorithm::HS256), &claims, &keys.encoding)
            .expect("token encoded");

        assert!(verify_session_token(&keys, &token).is_err());
    }

    #[test]
    fn token_signed_with_another_secret_is_rejected() {
        let token = issue_session_token(&test_keys(), 42).expect("token issued");
        let other = TokenKeys::new("otra-clave");
        assert!(verify_session_token(&other, &token).is_err());
    }
}
