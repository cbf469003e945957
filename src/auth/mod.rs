use bcrypt::{hash, verify};
use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::error::AppError;

/// Matches the work factor the rest of the platform uses for stored
/// credentials.
pub const HASH_COST: u32 = 10;

pub fn hash_password(password: &str) -> Result<String, bcrypt::BcryptError> {
    hash(password.as_bytes(), HASH_COST)
}

pub fn verify_password(password: &str, hash: &str) -> Result<bool, bcrypt::BcryptError> {
    verify(password.as_bytes(), hash)
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // subject email
    pub exp: i64,    // expiry
    pub iat: i64,    // issued at
}

/// Signs a token for `email`, expiring exactly `config.jwt_expiration()`
/// after issuance.
pub fn generate_token(email: &str, config: &Config) -> Result<String, AppError> {
    let issued_at = Utc::now();
    let expiration = issued_at
        .checked_add_signed(Duration::seconds(config.jwt_expiration().as_secs() as i64))
        .ok_or_else(|| AppError::Internal("token expiry overflowed".to_string()))?;

    let claims = Claims {
        sub: email.to_string(),
        exp: expiration.timestamp(),
        iat: issued_at.timestamp(),
    };

    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.jwt_secret.as_bytes()),
    )?;

    Ok(token)
}

/// Decodes and checks a presented token. Expiry is enforced with zero leeway,
/// so a token is rejected the instant `exp` passes.
pub fn verify_token(token: &str, config: &Config) -> Result<Claims, AppError> {
    let mut validation = Validation::default();
    validation.leeway = 0;

    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.jwt_secret.as_bytes()),
        &validation,
    )
    .map_err(|e| match e.kind() {
        jsonwebtoken::errors::ErrorKind::ExpiredSignature => AppError::ExpiredToken,
        _ => AppError::InvalidToken,
    })?;

    Ok(token_data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sign_with_expiry(email: &str, config: &Config, exp: i64, iat: i64) -> String {
        let claims = Claims {
            sub: email.to_string(),
            exp,
            iat,
        };
        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(config.jwt_secret.as_bytes()),
        )
        .unwrap()
    }

    #[test]
    fn password_hash_round_trip() {
        let hash = hash_password("secret1").unwrap();
        assert_ne!(hash, "secret1");
        assert!(verify_password("secret1", &hash).unwrap());
        assert!(!verify_password("secret2", &hash).unwrap());
    }

    #[test]
    fn fresh_token_verifies_and_carries_subject() {
        let config = Config::for_tests("test-secret");
        let token = generate_token("a@example.com", &config).unwrap();

        let claims = verify_token(&token, &config).unwrap();
        assert_eq!(claims.sub, "a@example.com");
        assert_eq!(claims.exp - claims.iat, 3600);
    }

    #[test]
    fn token_valid_just_before_expiry() {
        let config = Config::for_tests("test-secret");
        let now = Utc::now().timestamp();
        // expiresAt - 1s is still inside the window
        let token = sign_with_expiry("a@example.com", &config, now + 1, now - 3599);

        assert!(verify_token(&token, &config).is_ok());
    }

    #[test]
    fn token_rejected_after_expiry() {
        let config = Config::for_tests("test-secret");
        let now = Utc::now().timestamp();
        let token = sign_with_expiry("a@example.com", &config, now - 1, now - 3601);

        match verify_token(&token, &config) {
            Err(AppError::ExpiredToken) => {}
            other => panic!("expected ExpiredToken, got {:?}", other),
        }
    }

    #[test]
    fn token_signed_with_other_secret_rejected() {
        let config = Config::for_tests("test-secret");
        let other = Config::for_tests("another-secret");
        let token = generate_token("a@example.com", &other).unwrap();

        match verify_token(&token, &config) {
            Err(AppError::InvalidToken) => {}
            other => panic!("expected InvalidToken, got {:?}", other),
        }
    }

    #[test]
    fn garbage_token_rejected() {
        let config = Config::for_tests("test-secret");
        match verify_token("not-a-jwt", &config) {
            Err(AppError::InvalidToken) => {}
            other => panic!("expected InvalidToken, got {:?}", other),
        }
    }
}
