//! Bearer-token verification.

use chrono::{DateTime, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, Validation};
use thiserror::Error;

use crate::claims::{validate_claims, AdminClaims};

/// Guard failure, kept two-valued on purpose: `Unauthenticated` means the
/// caller should discard its cached credential and log in again,
/// `Forbidden` means the credential is fine but the role is not.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("unauthenticated")]
    Unauthenticated,

    #[error("forbidden: missing permission '{0}'")]
    Forbidden(String),
}

/// Verifies a raw bearer token into validated claims.
///
/// A trait so the HTTP layer and tests can swap implementations without
/// caring about the signing scheme.
pub trait TokenValidator: Send + Sync {
    fn validate(&self, token: &str, now: DateTime<Utc>) -> Result<AdminClaims, AuthError>;
}

/// HS256-signed JWTs (shared secret).
pub struct Hs256TokenValidator {
    decoding_key: DecodingKey,
}

impl Hs256TokenValidator {
    pub fn new(secret: &[u8]) -> Self {
        Self {
            decoding_key: DecodingKey::from_secret(secret),
        }
    }
}

impl TokenValidator for Hs256TokenValidator {
    fn validate(&self, token: &str, now: DateTime<Utc>) -> Result<AdminClaims, AuthError> {
        // Claims carry their own chrono time window, so jsonwebtoken's
        // numeric exp/iat checks are disabled and validate_claims does the
        // time validation deterministically.
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.required_spec_claims.clear();

        let decoded = jsonwebtoken::decode::<AdminClaims>(token, &self.decoding_key, &validation)
            .map_err(|_| AuthError::Unauthenticated)?;

        validate_claims(&decoded.claims, now).map_err(|_| AuthError::Unauthenticated)?;

        Ok(decoded.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use jsonwebtoken::{EncodingKey, Header};
    use swapcart_core::AdminId;

    use crate::roles::Role;

    const SECRET: &[u8] = b"test-secret";

    fn mint(secret: &[u8], issued_at: DateTime<Utc>, expires_at: DateTime<Utc>) -> String {
        let claims = AdminClaims {
            sub: AdminId::new(),
            email: "ops@swapcart.example".to_string(),
            role: Role::new("admin"),
            issued_at,
            expires_at,
        };
        jsonwebtoken::encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(secret),
        )
        .unwrap()
    }

    #[test]
    fn valid_token_round_trips() {
        let now = Utc::now();
        let token = mint(SECRET, now - Duration::minutes(1), now + Duration::minutes(10));

        let validator = Hs256TokenValidator::new(SECRET);
        let claims = validator.validate(&token, now).unwrap();
        assert_eq!(claims.role, Role::new("admin"));
    }

    #[test]
    fn wrong_secret_is_unauthenticated() {
        let now = Utc::now();
        let token = mint(b"other-secret", now, now + Duration::minutes(10));

        let validator = Hs256TokenValidator::new(SECRET);
        assert_eq!(
            validator.validate(&token, now),
            Err(AuthError::Unauthenticated)
        );
    }

    #[test]
    fn expired_token_is_unauthenticated() {
        let now = Utc::now();
        let token = mint(SECRET, now - Duration::hours(2), now - Duration::hours(1));

        let validator = Hs256TokenValidator::new(SECRET);
        assert_eq!(
            validator.validate(&token, now),
            Err(AuthError::Unauthenticated)
        );
    }

    #[test]
    fn garbage_token_is_unauthenticated() {
        let validator = Hs256TokenValidator::new(SECRET);
        assert_eq!(
            validator.validate("not.a.jwt", Utc::now()),
            Err(AuthError::Unauthenticated)
        );
    }
}
