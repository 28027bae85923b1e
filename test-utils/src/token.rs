//! Bearer token minting for tests that exercise the auth layer.

use chrono::Utc;
use jsonwebtoken::{encode, EncodingKey, Header};
use serde::Serialize;

use crate::error::TestError;

/// Shared HMAC secret used by tests that build a verifier and mint tokens.
pub const TEST_SECRET: &str = "brewery-test-secret";

/// Issuer used by tests that check issuer validation.
pub const TEST_ISSUER: &str = "http://localhost:9000";

#[derive(Serialize)]
struct Claims<'a> {
    sub: &'a str,
    iss: &'a str,
    iat: i64,
    nbf: i64,
    exp: i64,
}

/// Mints an HS256 token for `subject` valid for one hour.
///
/// # Arguments
/// - `secret` - HMAC secret shared with the verifier under test
/// - `subject` - `sub` claim
/// - `issuer` - `iss` claim
///
/// # Returns
/// - `Ok(String)` - Encoded compact JWT
/// - `Err(TestError::Token)` - Encoding failed
pub fn mint_hs256(secret: &str, subject: &str, issuer: &str) -> Result<String, TestError> {
    mint_hs256_with_expiry(secret, subject, issuer, 3600)
}

/// Mints an HS256 token whose `exp` lies `expires_in_secs` from now.
///
/// Negative values produce an already expired token.
pub fn mint_hs256_with_expiry(
    secret: &str,
    subject: &str,
    issuer: &str,
    expires_in_secs: i64,
) -> Result<String, TestError> {
    let now = Utc::now().timestamp();
    let claims = Claims {
        sub: subject,
        iss: issuer,
        iat: now,
        nbf: now,
        exp: now + expires_in_secs,
    };

    Ok(encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )?)
}
