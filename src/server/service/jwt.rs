//! Bearer token verification.
//!
//! `JwtVerifier` checks signature, expiry, not-before and (when configured) issuer of
//! incoming JWTs. Keys come either from a shared HMAC secret or from a JWK set that is
//! cached in memory and re-fetched when a token names an unknown `kid`, at most once
//! per `REFRESH_COOLDOWN`.

use jsonwebtoken::{
    decode, decode_header,
    jwk::{Jwk, JwkSet},
    Algorithm, DecodingKey, Validation,
};
use serde::Deserialize;
use std::time::{Duration, Instant};
use tokio::sync::{Mutex, RwLock};

use crate::server::error::{auth::AuthError, config::ConfigError, AppError};

/// Allowed clock skew in seconds for `exp` and `nbf`.
const LEEWAY_SECS: u64 = 60;

/// Minimum time between two key set fetches triggered by unknown `kid`s.
const REFRESH_COOLDOWN: Duration = Duration::from_secs(30);

/// Path of the OpenID provider metadata document relative to the issuer.
const OPENID_CONFIGURATION_PATH: &str = "/.well-known/openid-configuration";

/// Verified claims attached to the request by the auth middleware.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Claims {
    #[serde(default)]
    pub sub: String,
    pub iss: Option<String>,
    pub exp: u64,
    pub scope: Option<String>,
}

#[derive(Deserialize)]
struct OpenIdConfiguration {
    jwks_uri: Option<String>,
}

enum KeySource {
    Hmac(DecodingKey),
    Jwks {
        uri: String,
        http: reqwest::Client,
        keys: RwLock<JwkSet>,
        /// Start of the last refresh attempt, successful or not
        last_refresh: Mutex<Option<Instant>>,
    },
}

pub struct JwtVerifier {
    source: KeySource,
    issuer: Option<String>,
}

impl JwtVerifier {
    /// Verifier for HS256/HS384/HS512 tokens signed with a shared secret.
    pub fn hmac(secret: &[u8], issuer: Option<String>) -> Self {
        Self {
            source: KeySource::Hmac(DecodingKey::from_secret(secret)),
            issuer,
        }
    }

    /// Verifier over an already fetched key set; `uri` is used for refreshes.
    pub fn from_key_set(
        http: reqwest::Client,
        uri: String,
        keys: JwkSet,
        issuer: Option<String>,
    ) -> Self {
        Self {
            source: KeySource::Jwks {
                uri,
                http,
                keys: RwLock::new(keys),
                last_refresh: Mutex::new(None),
            },
            issuer,
        }
    }

    /// Fetches the key set at `uri` and builds a verifier over it.
    ///
    /// # Returns
    /// - `Ok(JwtVerifier)` - Verifier holding the fetched keys
    /// - `Err(AppError::ReqwestErr)` - Key set unreachable or malformed
    pub async fn from_jwks_uri(
        http: reqwest::Client,
        uri: String,
        issuer: Option<String>,
    ) -> Result<Self, AppError> {
        let keys = fetch_key_set(&http, &uri).await?;

        tracing::info!("Loaded {} signing keys from {}", keys.keys.len(), uri);

        Ok(Self::from_key_set(http, uri, keys, issuer))
    }

    /// Discovers the key set through the issuer's OpenID provider metadata.
    ///
    /// The issuer is also enforced on every token.
    ///
    /// # Returns
    /// - `Ok(JwtVerifier)` - Verifier holding the discovered keys
    /// - `Err(AppError::ConfigErr)` - Metadata names no `jwks_uri`
    /// - `Err(AppError::ReqwestErr)` - Metadata or key set unreachable
    pub async fn discover(http: reqwest::Client, issuer: String) -> Result<Self, AppError> {
        let metadata_url = format!(
            "{}{}",
            issuer.trim_end_matches('/'),
            OPENID_CONFIGURATION_PATH
        );

        let metadata: OpenIdConfiguration = http
            .get(&metadata_url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        let jwks_uri = metadata
            .jwks_uri
            .ok_or(ConfigError::MissingJwksUri(metadata_url))?;

        Self::from_jwks_uri(http, jwks_uri, Some(issuer)).await
    }

    /// Verifies `token` and returns its claims.
    ///
    /// # Returns
    /// - `Ok(Claims)` - Token valid
    /// - `Err(AuthError::InvalidToken)` - Malformed, badly signed, expired, not yet valid,
    ///   wrong issuer, or algorithm not allowed for the key source
    /// - `Err(AuthError::UnknownSigningKey)` - `kid` absent from the key set after a refresh,
    ///   or a refresh already ran within the cooldown
    /// - `Err(AuthError::KeySetUnavailable)` - Refresh of the key set failed
    pub async fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        let header = decode_header(token).map_err(|e| AuthError::InvalidToken(e.to_string()))?;

        match &self.source {
            KeySource::Hmac(key) => {
                if !is_hmac(header.alg) {
                    return Err(AuthError::InvalidToken(format!(
                        "Algorithm {:?} not accepted with a shared secret",
                        header.alg
                    )));
                }

                self.decode_with(token, key, header.alg)
            }
            KeySource::Jwks {
                uri,
                http,
                keys,
                last_refresh,
            } => {
                if is_hmac(header.alg) {
                    return Err(AuthError::InvalidToken(format!(
                        "Algorithm {:?} not accepted with a key set",
                        header.alg
                    )));
                }
                let Some(kid) = header.kid else {
                    return Err(AuthError::InvalidToken(
                        "Token header has no key id".to_string(),
                    ));
                };

                let cached = keys.read().await.find(&kid).cloned();
                let jwk = match cached {
                    Some(jwk) => jwk,
                    None => refresh_and_find(http, uri, keys, last_refresh, &kid).await?,
                };

                let key = DecodingKey::from_jwk(&jwk)
                    .map_err(|e| AuthError::InvalidToken(e.to_string()))?;

                self.decode_with(token, &key, header.alg)
            }
        }
    }

    fn decode_with(
        &self,
        token: &str,
        key: &DecodingKey,
        algorithm: Algorithm,
    ) -> Result<Claims, AuthError> {
        let mut validation = Validation::new(algorithm);
        validation.leeway = LEEWAY_SECS;
        validation.validate_exp = true;
        validation.validate_nbf = true;
        validation.validate_aud = false;
        validation.set_required_spec_claims(&["exp"]);
        if let Some(issuer) = &self.issuer {
            validation.set_issuer(&[issuer]);
        }

        decode::<Claims>(token, key, &validation)
            .map(|data| data.claims)
            .map_err(|e| AuthError::InvalidToken(e.to_string()))
    }
}

fn is_hmac(algorithm: Algorithm) -> bool {
    matches!(
        algorithm,
        Algorithm::HS256 | Algorithm::HS384 | Algorithm::HS512
    )
}

async fn fetch_key_set(http: &reqwest::Client, uri: &str) -> Result<JwkSet, reqwest::Error> {
    http.get(uri).send().await?.error_for_status()?.json().await
}

/// Re-fetches the key set and looks `kid` up again.
///
/// Refreshes are serialized by `last_refresh`. Within `REFRESH_COOLDOWN` of the previous
/// attempt only the cached set is consulted, so it may already hold a key loaded by a
/// concurrent caller.
async fn refresh_and_find(
    http: &reqwest::Client,
    uri: &str,
    keys: &RwLock<JwkSet>,
    last_refresh: &Mutex<Option<Instant>>,
    kid: &str,
) -> Result<Jwk, AuthError> {
    let mut last_refresh = last_refresh.lock().await;
    if last_refresh.is_some_and(|at| at.elapsed() < REFRESH_COOLDOWN) {
        tracing::debug!("Signing key '{}' not cached, key set refreshed recently", kid);

        return keys
            .read()
            .await
            .find(kid)
            .cloned()
            .ok_or_else(|| AuthError::UnknownSigningKey(kid.to_string()));
    }
    *last_refresh = Some(Instant::now());

    tracing::info!("Signing key '{}' not cached, refreshing key set", kid);

    let fresh = fetch_key_set(http, uri)
        .await
        .map_err(|e| AuthError::KeySetUnavailable(e.to_string()))?;
    let found = fresh.find(kid).cloned();
    *keys.write().await = fresh;

    found.ok_or_else(|| AuthError::UnknownSigningKey(kid.to_string()))
}
