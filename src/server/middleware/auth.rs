use axum::{
    extract::{Request, State},
    http::{header, HeaderMap},
    middleware::Next,
    response::Response,
};

use crate::server::{error::auth::AuthError, state::AppState};

const BEARER_SCHEME: &str = "bearer";

/// Rejects requests without a valid bearer token.
///
/// On success the verified `Claims` are inserted into the request extensions so
/// handlers can extract them with `Extension<Claims>`.
///
/// # Returns
/// - `Ok(Response)` - Response of the wrapped handler
/// - `Err(AuthError)` - Missing or invalid token (401), or key set unavailable (500)
pub async fn require_bearer(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AuthError> {
    let token = extract_bearer_token(request.headers())?;
    let claims = state.jwt.verify(token).await?;

    tracing::debug!("Authenticated request for subject '{}'", claims.sub);

    request.extensions_mut().insert(claims);

    Ok(next.run(request).await)
}

/// Extracts the token of an `Authorization: Bearer <token>` header.
///
/// The scheme is matched case-insensitively.
pub fn extract_bearer_token(headers: &HeaderMap) -> Result<&str, AuthError> {
    let value = headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or(AuthError::MissingBearerToken)?;

    let (scheme, token) = value
        .split_once(' ')
        .ok_or(AuthError::MissingBearerToken)?;
    if !scheme.eq_ignore_ascii_case(BEARER_SCHEME) {
        return Err(AuthError::MissingBearerToken);
    }

    let token = token.trim();
    if token.is_empty() {
        return Err(AuthError::MissingBearerToken);
    }

    Ok(token)
}
