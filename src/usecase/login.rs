use crate::domain::repository::UserDirectory;
use crate::error::VerifyServiceError;
use crate::usecase::token::{TokenPair, issue_token_pair};

pub struct LoginInput {
    pub username: String,
    pub password: String,
}

/// Username/password login. The credential check itself is owned by the user
/// directory; this use case only routes and issues the token pair.
pub struct LoginUseCase<U: UserDirectory> {
    pub users: U,
    pub jwt_secret: String,
}

impl<U: UserDirectory> LoginUseCase<U> {
    pub async fn execute(&self, input: LoginInput) -> Result<TokenPair, VerifyServiceError> {
        if input.username.is_empty() || input.password.is_empty() {
            return Err(VerifyServiceError::Validation(
                "username and password are required".to_owned(),
            ));
        }

        let user = self
            .users
            .verify_credential(&input.username, &input.password)
            .await?
            .ok_or(VerifyServiceError::InvalidCredential)?;

        issue_token_pair(&user, &self.jwt_secret)
    }
}
