use super::*;

/// Tests a request carrying a valid token.
///
/// Expected: 200 with the handler seeing the verified subject
#[tokio::test]
async fn passes_valid_token_and_attaches_claims() {
    let token = mint_hs256(TEST_SECRET, "brewer", TEST_ISSUER).unwrap();

    let response = app()
        .oneshot(request(Some(&format!("Bearer {}", token))))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(&body[..], b"brewer");
}

/// Tests a request without an Authorization header.
///
/// Expected: 401 with a Bearer challenge
#[tokio::test]
async fn rejects_missing_token() {
    let response = app().oneshot(request(None)).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        response.headers().get(header::WWW_AUTHENTICATE).unwrap(),
        "Bearer"
    );
}

/// Tests a request with an expired token.
///
/// Expected: 401
#[tokio::test]
async fn rejects_expired_token() {
    let token = mint_hs256_with_expiry(TEST_SECRET, "brewer", TEST_ISSUER, -3600).unwrap();

    let response = app()
        .oneshot(request(Some(&format!("Bearer {}", token))))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// Tests a request with a token signed by another secret.
///
/// Expected: 401
#[tokio::test]
async fn rejects_foreign_signature() {
    let token = mint_hs256("someone-else", "brewer", TEST_ISSUER).unwrap();

    let response = app()
        .oneshot(request(Some(&format!("Bearer {}", token))))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
