use std::net::SocketAddr;

use url::Url;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";

/// Where entity services keep their data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    /// sea-orm against `DATABASE_URL`
    Database,
    /// Process-local maps, lost on restart
    Memory,
}

pub struct Config {
    pub store_backend: StoreBackend,
    /// Present whenever `store_backend` is `Database`.
    pub database_url: Option<String>,
    pub bind_address: SocketAddr,
    pub seed_data: bool,

    pub jwt_issuer_uri: Option<String>,
    pub jwt_jwk_set_uri: Option<String>,
    pub jwt_hmac_secret: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self::from_lookup(|name| std::env::var(name).ok())?)
    }

    /// Builds the configuration from `lookup`, which returns the value of a variable
    /// or `None` when it is unset. Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let store_backend = match var("STORE_BACKEND") {
            None => StoreBackend::Database,
            Some(value) => match value.to_ascii_lowercase().as_str() {
                "database" => StoreBackend::Database,
                "memory" => StoreBackend::Memory,
                _ => return Err(invalid("STORE_BACKEND", value)),
            },
        };

        let database_url = var("DATABASE_URL");
        if store_backend == StoreBackend::Database && database_url.is_none() {
            return Err(ConfigError::MissingEnvVar("DATABASE_URL".to_string()));
        }

        let bind_address = var("BIND_ADDRESS").unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string());
        let bind_address = bind_address
            .parse()
            .map_err(|_| invalid("BIND_ADDRESS", bind_address))?;

        let seed_data = match var("SEED_DATA") {
            None => true,
            Some(value) => value
                .parse::<bool>()
                .map_err(|_| invalid("SEED_DATA", value))?,
        };

        let jwt_issuer_uri = var("JWT_ISSUER_URI")
            .map(|value| http_url("JWT_ISSUER_URI", value))
            .transpose()?;
        let jwt_jwk_set_uri = var("JWT_JWK_SET_URI")
            .map(|value| http_url("JWT_JWK_SET_URI", value))
            .transpose()?;
        let jwt_hmac_secret = var("JWT_HMAC_SECRET");
        if jwt_issuer_uri.is_none() && jwt_jwk_set_uri.is_none() && jwt_hmac_secret.is_none() {
            return Err(ConfigError::MissingKeySource);
        }

        Ok(Self {
            store_backend,
            database_url,
            bind_address,
            seed_data,
            jwt_issuer_uri,
            jwt_jwk_set_uri,
            jwt_hmac_secret,
        })
    }
}

/// Accepts absolute http(s) URLs only.
fn http_url(name: &str, value: String) -> Result<String, ConfigError> {
    match Url::parse(&value) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => Ok(value),
        _ => Err(invalid(name, value)),
    }
}

fn invalid(name: &str, value: String) -> ConfigError {
    ConfigError::InvalidEnvVar {
        name: name.to_string(),
        value,
    }
}
