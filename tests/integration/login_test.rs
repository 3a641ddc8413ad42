use portal_verify::error::VerifyServiceError;
use portal_verify::usecase::login::{LoginInput, LoginUseCase};
use portal_verify::usecase::token::validate_token;

use crate::helpers::{MockUserDirectory, TEST_JWT_SECRET, test_user};

#[tokio::test]
async fn should_login_with_valid_credentials() {
    let user = test_user();

    let uc = LoginUseCase {
        users: MockUserDirectory::new(vec![user.clone()]),
        jwt_secret: TEST_JWT_SECRET.to_owned(),
    };

    let pair = uc
        .execute(LoginInput {
            username: user.username.clone(),
            password: "plain-secret".to_owned(),
        })
        .await
        .unwrap();

    assert!(!pair.access.is_empty());
    assert!(!pair.refresh.is_empty());

    let claims = validate_token(&pair.access, TEST_JWT_SECRET).unwrap();
    assert_eq!(claims.sub, user.id.to_string());
}

#[tokio::test]
async fn should_reject_unknown_username() {
    let uc = LoginUseCase {
        users: MockUserDirectory::empty(),
        jwt_secret: TEST_JWT_SECRET.to_owned(),
    };

    let result = uc
        .execute(LoginInput {
            username: "nobody".to_owned(),
            password: "whatever".to_owned(),
        })
        .await;

    assert!(
        matches!(result, Err(VerifyServiceError::InvalidCredential)),
        "expected InvalidCredential, got {result:?}"
    );
}

#[tokio::test]
async fn should_reject_wrong_password() {
    let user = test_user();

    let uc = LoginUseCase {
        users: MockUserDirectory::new(vec![user.clone()]),
        jwt_secret: TEST_JWT_SECRET.to_owned(),
    };

    let result = uc
        .execute(LoginInput {
            username: user.username,
            password: "wrong-password".to_owned(),
        })
        .await;

    assert!(
        matches!(result, Err(VerifyServiceError::InvalidCredential)),
        "expected InvalidCredential, got {result:?}"
    );
}

#[tokio::test]
async fn should_reject_inactive_user() {
    let mut user = test_user();
    user.is_active = false;

    let uc = LoginUseCase {
        users: MockUserDirectory::new(vec![user.clone()]),
        jwt_secret: TEST_JWT_SECRET.to_owned(),
    };

    let result = uc
        .execute(LoginInput {
            username: user.username,
            password: "plain-secret".to_owned(),
        })
        .await;

    assert!(
        matches!(result, Err(VerifyServiceError::InvalidCredential)),
        "expected InvalidCredential, got {result:?}"
    );
}

#[tokio::test]
async fn should_reject_blank_credentials() {
    let uc = LoginUseCase {
        users: MockUserDirectory::new(vec![test_user()]),
        jwt_secret: TEST_JWT_SECRET.to_owned(),
    };

    let result = uc
        .execute(LoginInput {
            username: String::new(),
            password: String::new(),
        })
        .await;

    assert!(
        matches!(result, Err(VerifyServiceError::Validation(_))),
        "expected Validation, got {result:?}"
    );
}
