use portal_verify::error::VerifyServiceError;
use portal_verify::usecase::token::{
    issue_access_token, issue_refresh_token, issue_token_pair, validate_token,
};

use crate::helpers::{TEST_JWT_SECRET, test_user};

#[tokio::test]
async fn should_issue_access_token_that_validates_successfully() {
    let user = test_user();
    let token = issue_access_token(&user, TEST_JWT_SECRET).unwrap();

    assert!(!token.is_empty());

    let claims = validate_token(&token, TEST_JWT_SECRET).unwrap();
    assert_eq!(claims.sub, user.id.to_string());
    assert!(claims.exp > 0);
}

#[tokio::test]
async fn should_issue_refresh_token_that_validates_successfully() {
    let user = test_user();
    let token = issue_refresh_token(&user, TEST_JWT_SECRET).unwrap();

    let claims = validate_token(&token, TEST_JWT_SECRET).unwrap();
    assert_eq!(claims.sub, user.id.to_string());
}

#[tokio::test]
async fn should_outlive_access_token_with_refresh_token() {
    let user = test_user();
    let access = issue_access_token(&user, TEST_JWT_SECRET).unwrap();
    let refresh = issue_refresh_token(&user, TEST_JWT_SECRET).unwrap();

    let access_claims = validate_token(&access, TEST_JWT_SECRET).unwrap();
    let refresh_claims = validate_token(&refresh, TEST_JWT_SECRET).unwrap();
    assert!(refresh_claims.exp > access_claims.exp);
}

#[tokio::test]
async fn should_issue_pair_of_distinct_valid_tokens() {
    let user = test_user();
    let pair = issue_token_pair(&user, TEST_JWT_SECRET).unwrap();

    assert_ne!(pair.access, pair.refresh);
    validate_token(&pair.access, TEST_JWT_SECRET).unwrap();
    validate_token(&pair.refresh, TEST_JWT_SECRET).unwrap();
}

#[tokio::test]
async fn should_reject_token_signed_with_wrong_secret() {
    let user = test_user();
    let token = issue_access_token(&user, TEST_JWT_SECRET).unwrap();

    let result = validate_token(&token, "wrong-secret");
    assert!(
        matches!(result, Err(VerifyServiceError::InvalidToken)),
        "expected InvalidToken, got {result:?}"
    );
}

#[tokio::test]
async fn should_reject_invalid_token_string() {
    let result = validate_token("not-a-jwt", TEST_JWT_SECRET);
    assert!(
        matches!(result, Err(VerifyServiceError::InvalidToken)),
        "expected InvalidToken, got {result:?}"
    );
}
