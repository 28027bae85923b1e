use axum::{
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;

use crate::server::error::{validation::ValidationErrors, AppError};

/// Field name reported when the request body itself cannot be read.
pub const BODY_FIELD: &str = "body";

/// JSON request body extractor.
///
/// Behaves like `axum::Json` but reports an unreadable body (malformed JSON, wrong
/// content type, unknown enum value, wrong field type) as a 400 field violation on
/// `body` instead of axum's plain-text 415/422 responses.
#[derive(Debug)]
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(body_error(rejection).into()),
        }
    }
}

fn body_error(rejection: JsonRejection) -> ValidationErrors {
    tracing::debug!("Rejected request body: {}", rejection.body_text());

    let mut errors = ValidationErrors::new();
    errors.push(BODY_FIELD, rejection.body_text());
    errors
}
