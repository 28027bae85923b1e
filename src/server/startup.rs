use std::sync::Arc;

use crate::server::{
    config::{Config, StoreBackend},
    data::{memory::MemoryStore, seed::seed_database},
    error::{config::ConfigError, AppError},
    service::jwt::JwtVerifier,
    state::AppState,
};

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the database using the connection string from
/// configuration, then runs all pending SeaORM migrations so the schema is up to date
/// before any request is served.
///
/// # Arguments
/// - `database_url` - Connection string, e.g. `sqlite://brewery.sqlite?mode=rwc`
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(
    database_url: &str,
) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

pub fn setup_reqwest_client() -> reqwest::Client {
    reqwest::Client::new()
}

/// Builds the bearer token verifier from the configured key source.
///
/// An explicit JWK set URI wins over issuer discovery, which wins over the shared
/// HMAC secret. A configured issuer is enforced whichever source is used.
///
/// # Returns
/// - `Ok(JwtVerifier)` - Verifier ready for the auth middleware
/// - `Err(AppError::ReqwestErr)` - Key set or discovery document unreachable
/// - `Err(AppError::ConfigErr)` - No key source configured
pub async fn build_jwt_verifier(
    config: &Config,
    http: reqwest::Client,
) -> Result<JwtVerifier, AppError> {
    let issuer = config.jwt_issuer_uri.clone();

    if let Some(uri) = &config.jwt_jwk_set_uri {
        return JwtVerifier::from_jwks_uri(http, uri.clone(), issuer).await;
    }

    if let Some(issuer) = issuer {
        tracing::info!("Discovering signing keys from issuer {}", issuer);
        return JwtVerifier::discover(http, issuer).await;
    }

    match &config.jwt_hmac_secret {
        Some(secret) => {
            tracing::warn!("Verifying bearer tokens with a shared HMAC secret");
            Ok(JwtVerifier::hmac(secret.as_bytes(), None))
        }
        None => Err(ConfigError::MissingKeySource.into()),
    }
}

/// Assembles the application state for the configured store backend.
///
/// The database backend connects, migrates and, when enabled, seeds empty tables.
/// The memory backend starts empty or with the sample data.
pub async fn build_state(config: &Config, jwt: JwtVerifier) -> Result<AppState, AppError> {
    let jwt = Arc::new(jwt);

    match config.store_backend {
        StoreBackend::Database => {
            let database_url = config
                .database_url
                .as_deref()
                .ok_or_else(|| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;
            let db = connect_to_database(database_url).await?;

            if config.seed_data {
                seed_database(&db).await?;
            }

            tracing::info!("Using database store");
            Ok(AppState::database(db, jwt))
        }
        StoreBackend::Memory => {
            let store = if config.seed_data {
                MemoryStore::seeded()
            } else {
                MemoryStore::new()
            };

            tracing::info!("Using in-memory store");
            Ok(AppState::memory(store, jwt))
        }
    }
}
