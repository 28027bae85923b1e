use axum::{
    body::Body,
    http::{header, HeaderMap, HeaderValue, Request, StatusCode},
    middleware::from_fn_with_state,
    routing::get,
    Extension, Router,
};
use std::sync::Arc;
use tower::ServiceExt;

use crate::server::{
    data::memory::MemoryStore,
    error::auth::AuthError,
    middleware::auth::{extract_bearer_token, require_bearer},
    service::jwt::{Claims, JwtVerifier},
    state::AppState,
};
use test_utils::token::{mint_hs256, mint_hs256_with_expiry, TEST_ISSUER, TEST_SECRET};

mod extract;
mod require;

fn app() -> Router {
    let jwt = Arc::new(JwtVerifier::hmac(
        TEST_SECRET.as_bytes(),
        Some(TEST_ISSUER.to_string()),
    ));
    let state = AppState::memory(MemoryStore::new(), jwt);

    Router::new()
        .route(
            "/whoami",
            get(|Extension(claims): Extension<Claims>| async move { claims.sub }),
        )
        .layer(from_fn_with_state(state.clone(), require_bearer))
        .with_state(state)
}

fn request(authorization: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().uri("/whoami");
    if let Some(value) = authorization {
        builder = builder.header(header::AUTHORIZATION, value);
    }
    builder.body(Body::empty()).unwrap()
}
