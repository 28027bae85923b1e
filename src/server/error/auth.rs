use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// The request carried no `Authorization: Bearer` header.
    #[error("Missing bearer token")]
    MissingBearerToken,

    /// The token failed to decode or failed signature, expiry, not-before or issuer checks.
    #[error("Invalid bearer token: {0}")]
    InvalidToken(String),

    /// The token names a signing key absent from the key set, even after a refresh.
    #[error("Unknown signing key id '{0}'")]
    UnknownSigningKey(String),

    /// The key set endpoint could not be reached or returned an unusable document.
    #[error("Failed to fetch signing keys: {0}")]
    KeySetUnavailable(String),
}

/// Converts authentication errors into HTTP responses.
///
/// Token problems are 401 with a `WWW-Authenticate: Bearer` challenge; the reason
/// is logged at debug level and a generic message returned. An unreachable key set
/// is a server-side failure and results in 500.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::KeySetUnavailable(reason) => {
                tracing::error!("Failed to fetch signing keys: {}", reason);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorDto {
                        error: "Internal server error".to_string(),
                    }),
                )
                    .into_response()
            }
            err => {
                tracing::debug!("Rejected request: {}", err);
                (
                    StatusCode::UNAUTHORIZED,
                    [(header::WWW_AUTHENTICATE, "Bearer")],
                    Json(ErrorDto {
                        error: "Unauthorized".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
