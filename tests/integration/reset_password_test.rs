use portal_verify::error::VerifyServiceError;
use portal_verify::usecase::reset_password::{ResetPasswordInput, ResetPasswordUseCase};

use crate::helpers::{MockUserDirectory, TEST_PHONE_NUMBER, test_user};

#[tokio::test]
async fn should_reset_password_for_active_user() {
    let user = test_user();
    let users = MockUserDirectory::new(vec![user.clone()]);
    let writes_handle = users.password_writes_handle();

    let uc = ResetPasswordUseCase { users };

    let out = uc
        .execute(ResetPasswordInput {
            phone_number: TEST_PHONE_NUMBER.to_owned(),
            password: "new-password".to_owned(),
        })
        .await
        .unwrap();

    assert_eq!(out.phone_number, TEST_PHONE_NUMBER);
    assert_eq!(out.password, "new-password");

    let writes = writes_handle.lock().unwrap();
    assert_eq!(*writes, vec![(user.id, "new-password".to_owned())]);
}

#[tokio::test]
async fn should_return_not_found_for_unknown_phone_number() {
    let users = MockUserDirectory::empty();
    let writes_handle = users.password_writes_handle();

    let uc = ResetPasswordUseCase { users };

    let result = uc
        .execute(ResetPasswordInput {
            phone_number: TEST_PHONE_NUMBER.to_owned(),
            password: "new-password".to_owned(),
        })
        .await;

    assert!(
        matches!(result, Err(VerifyServiceError::UserNotFound)),
        "expected UserNotFound, got {result:?}"
    );
    assert!(writes_handle.lock().unwrap().is_empty());
}

#[tokio::test]
async fn should_return_not_found_for_inactive_user() {
    let mut user = test_user();
    user.is_active = false;
    let users = MockUserDirectory::new(vec![user]);
    let writes_handle = users.password_writes_handle();

    let uc = ResetPasswordUseCase { users };

    let result = uc
        .execute(ResetPasswordInput {
            phone_number: TEST_PHONE_NUMBER.to_owned(),
            password: "new-password".to_owned(),
        })
        .await;

    assert!(
        matches!(result, Err(VerifyServiceError::UserNotFound)),
        "expected UserNotFound for inactive user, got {result:?}"
    );
    assert!(writes_handle.lock().unwrap().is_empty());
}

#[tokio::test]
async fn should_reject_bad_phone_number_format() {
    let uc = ResetPasswordUseCase {
        users: MockUserDirectory::new(vec![test_user()]),
    };

    let result = uc
        .execute(ResetPasswordInput {
            phone_number: "12345".to_owned(),
            password: "new-password".to_owned(),
        })
        .await;

    assert!(
        matches!(result, Err(VerifyServiceError::Validation(_))),
        "expected Validation, got {result:?}"
    );
}

#[tokio::test]
async fn should_reject_blank_password() {
    let uc = ResetPasswordUseCase {
        users: MockUserDirectory::new(vec![test_user()]),
    };

    let result = uc
        .execute(ResetPasswordInput {
            phone_number: TEST_PHONE_NUMBER.to_owned(),
            password: String::new(),
        })
        .await;

    assert!(
        matches!(result, Err(VerifyServiceError::Validation(_))),
        "expected Validation, got {result:?}"
    );
}
