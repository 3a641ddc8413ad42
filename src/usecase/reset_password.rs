use crate::domain::repository::UserDirectory;
use crate::domain::types::validate_phone_number;
use crate::error::VerifyServiceError;

pub struct ResetPasswordInput {
    pub phone_number: String,
    pub password: String,
}

/// Validated inputs echoed back; a reset does not log the user in.
#[derive(Debug)]
pub struct ResetPasswordOutput {
    pub phone_number: String,
    pub password: String,
}

pub struct ResetPasswordUseCase<U: UserDirectory> {
    pub users: U,
}

impl<U: UserDirectory> ResetPasswordUseCase<U> {
    pub async fn execute(
        &self,
        input: ResetPasswordInput,
    ) -> Result<ResetPasswordOutput, VerifyServiceError> {
        if !validate_phone_number(&input.phone_number) {
            return Err(VerifyServiceError::Validation(
                "phone_number must be exactly 11 characters starting with 0".to_owned(),
            ));
        }
        if input.password.is_empty() {
            return Err(VerifyServiceError::Validation(
                "password is required".to_owned(),
            ));
        }

        // Only active accounts may be reset; a missing or inactive user is an
        // explicit checked failure, never a fault.
        let user = self
            .users
            .find_active_by_phone_number(&input.phone_number)
            .await?
            .ok_or(VerifyServiceError::UserNotFound)?;

        self.users.set_password(user.id, &input.password).await?;

        Ok(ResetPasswordOutput {
            phone_number: input.phone_number,
            password: input.password,
        })
    }
}
