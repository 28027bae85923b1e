use super::*;

fn headers(value: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(header::AUTHORIZATION, HeaderValue::from_str(value).unwrap());
    headers
}

/// Tests extracting a well-formed bearer token.
///
/// Expected: Ok with the token text
#[test]
fn extracts_token() {
    let headers = headers("Bearer abc.def.ghi");

    assert_eq!(extract_bearer_token(&headers).unwrap(), "abc.def.ghi");
}

/// Tests that the scheme is case-insensitive.
///
/// Expected: Ok for a lowercase scheme
#[test]
fn scheme_is_case_insensitive() {
    let headers = headers("bearer abc");

    assert_eq!(extract_bearer_token(&headers).unwrap(), "abc");
}

/// Tests headers that carry no usable bearer token.
///
/// Expected: Err(AuthError::MissingBearerToken) for each
#[test]
fn rejects_missing_or_foreign_schemes() {
    assert!(matches!(
        extract_bearer_token(&HeaderMap::new()),
        Err(AuthError::MissingBearerToken)
    ));

    for value in ["Basic dXNlcjpwYXNz", "Bearer", "Bearer    ", "abc"] {
        assert!(
            matches!(
                extract_bearer_token(&headers(value)),
                Err(AuthError::MissingBearerToken)
            ),
            "accepted {value:?}"
        );
    }
}
