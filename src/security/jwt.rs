//! Access and refresh token issuance and validation
//!
//! Tokens are HS256-signed JWTs. The signing key is loaded once at startup
//! from configuration and held in immutable statics; all later operations
//! read the initialized keys without locking.

use anyhow::{anyhow, Result};
use chrono::{Duration, Utc};
use jsonwebtoken::{
    decode, encode, Algorithm, DecodingKey, EncodingKey, Header, TokenData, Validation,
};
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

const ACCESS_TOKEN_EXPIRY_HOURS: i64 = 1;
const REFRESH_TOKEN_EXPIRY_DAYS: i64 = 30;

const JWT_ALGORITHM: Algorithm = Algorithm::HS256;

/// JWT claims: standard fields plus the account fields the frontend renders
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject (user ID as UUID string)
    pub sub: String,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    /// Token type: "access" or "refresh"
    pub token_type: String,
    pub email: String,
    pub username: String,
    pub full_name: String,
}

/// Access/refresh pair returned by the token endpoints
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

static JWT_ENCODING_KEY: OnceCell<EncodingKey> = OnceCell::new();
static JWT_DECODING_KEY: OnceCell<DecodingKey> = OnceCell::new();

/// Initialize the signing key from the configured secret.
///
/// Must be called during startup before any token operation. Subsequent
/// calls are ignored so test binaries can initialize from multiple entry
/// points.
pub fn initialize(secret: &str) -> Result<()> {
    if secret.is_empty() {
        return Err(anyhow!("JWT secret must not be empty"));
    }

    let _ = JWT_ENCODING_KEY.set(EncodingKey::from_secret(secret.as_bytes()));
    let _ = JWT_DECODING_KEY.set(DecodingKey::from_secret(secret.as_bytes()));
    Ok(())
}

fn encoding_key() -> Result<&'static EncodingKey> {
    JWT_ENCODING_KEY
        .get()
        .ok_or_else(|| anyhow!("JWT keys not initialized"))
}

fn decoding_key() -> Result<&'static DecodingKey> {
    JWT_DECODING_KEY
        .get()
        .ok_or_else(|| anyhow!("JWT keys not initialized"))
}

fn generate_token(
    user_id: Uuid,
    email: &str,
    username: &str,
    full_name: &str,
    token_type: &str,
    lifetime: Duration,
) -> Result<String> {
    let now = Utc::now();
    let claims = Claims {
        sub: user_id.to_string(),
        iat: now.timestamp(),
        exp: (now + lifetime).timestamp(),
        token_type: token_type.to_string(),
        email: email.to_string(),
        username: username.to_string(),
        full_name: full_name.to_string(),
    };

    encode(&Header::new(JWT_ALGORITHM), &claims, encoding_key()?)
        .map_err(|e| anyhow!("Failed to encode token: {}", e))
}

/// Generate an access/refresh token pair for a user
pub fn generate_token_pair(
    user_id: Uuid,
    email: &str,
    username: &str,
    full_name: &str,
) -> Result<TokenPair> {
    let access_token = generate_token(
        user_id,
        email,
        username,
        full_name,
        "access",
        Duration::hours(ACCESS_TOKEN_EXPIRY_HOURS),
    )?;
    let refresh_token = generate_token(
        user_id,
        email,
        username,
        full_name,
        "refresh",
        Duration::days(REFRESH_TOKEN_EXPIRY_DAYS),
    )?;

    Ok(TokenPair {
        access_token,
        refresh_token,
    })
}

/// Validate a token's signature and expiry, returning its claims
pub fn validate_token(token: &str) -> Result<TokenData<Claims>> {
    let validation = Validation::new(JWT_ALGORITHM);

    decode::<Claims>(token, decoding_key()?, &validation)
        .map_err(|e| anyhow!("Invalid token: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn init() {
        initialize("unit-test-secret").unwrap();
    }

    #[test]
    fn token_pair_round_trips() {
        init();
        let user_id = Uuid::new_v4();
        let pair = generate_token_pair(user_id, "a@b.com", "a", "A B").unwrap();

        let access = validate_token(&pair.access_token).unwrap();
        assert_eq!(access.claims.sub, user_id.to_string());
        assert_eq!(access.claims.token_type, "access");
        assert_eq!(access.claims.email, "a@b.com");

        let refresh = validate_token(&pair.refresh_token).unwrap();
        assert_eq!(refresh.claims.token_type, "refresh");
        assert!(refresh.claims.exp > access.claims.exp);
    }

    #[test]
    fn tampered_token_is_rejected() {
        init();
        let pair = generate_token_pair(Uuid::new_v4(), "a@b.com", "a", "A").unwrap();
        let mut tampered = pair.access_token.clone();
        tampered.push('x');
        assert!(validate_token(&tampered).is_err());
    }

    #[test]
    fn garbage_is_rejected() {
        init();
        assert!(validate_token("not-a-jwt").is_err());
    }
}
