use thiserror::Error;

/// Errors raised while preparing a test environment.
#[derive(Error, Debug)]
pub enum TestError {
    /// Database connection or schema creation failed.
    #[error(transparent)]
    Database(#[from] sea_orm::DbErr),

    /// Minting a test token failed.
    #[error(transparent)]
    Token(#[from] jsonwebtoken::errors::Error),
}
