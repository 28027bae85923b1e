use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::FieldErrorDto;

/// A single field violation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// Field violations collected while validating one request body.
#[derive(Error, Debug, Default, Clone, PartialEq, Eq)]
#[error("Request failed validation with {} field error(s)", .0.len())]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Records a violation on `field`.
    pub fn push(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.push(FieldError {
            field: field.into(),
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.0
    }

    /// Returns true when at least one violation names `field`.
    pub fn has_field(&self, field: &str) -> bool {
        self.0.iter().any(|e| e.field == field)
    }

    /// Converts an empty collection into `Ok(value)`, otherwise returns the violations.
    pub fn finish<T>(self, value: impl FnOnce() -> T) -> Result<T, Self> {
        if self.is_empty() {
            Ok(value())
        } else {
            Err(self)
        }
    }
}

/// Converts validation failures into a 400 response whose body is the array of
/// `{field, message}` violations.
impl IntoResponse for ValidationErrors {
    fn into_response(self) -> Response {
        let body: Vec<FieldErrorDto> = self
            .0
            .into_iter()
            .map(|e| FieldErrorDto {
                field: e.field,
                message: e.message,
            })
            .collect();

        (StatusCode::BAD_REQUEST, Json(body)).into_response()
    }
}
