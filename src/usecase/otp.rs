use rand::RngExt;

use crate::domain::repository::{OtpStore, UserDirectory};
use crate::domain::types::{MIN_EXPIRE_SECS, MIN_OTP_CODE_LENGTH, validate_phone_number};
use crate::error::VerifyServiceError;
use crate::usecase::token::{TokenPair, issue_token_pair};

/// Charset for generating random OTP codes (decimal digits).
const CHARSET: &[u8] = b"0123456789";

/// Generate `length` uniformly random digits. Repeats and leading zeros are
/// permitted, so the code stays a string end to end.
fn generate_code(length: u32) -> String {
    let mut rng = rand::rng();
    (0..length)
        .map(|_| CHARSET[rng.random_range(0..CHARSET.len())] as char)
        .collect()
}

fn check_phone_number(phone_number: &str) -> Result<(), VerifyServiceError> {
    if !validate_phone_number(phone_number) {
        return Err(VerifyServiceError::Validation(
            "phone_number must be exactly 11 characters starting with 0".to_owned(),
        ));
    }
    Ok(())
}

// ── CreateOtp ─────────────────────────────────────────────────────────────────

pub struct CreateOtpInput {
    pub phone_number: String,
    pub otp_code_length: u32,
    pub expire_time: u64,
    pub role_name: Option<String>,
}

/// Validated inputs echoed back alongside the generated code.
#[derive(Debug)]
pub struct CreateOtpOutput {
    pub otp_code: String,
    pub phone_number: String,
    pub otp_code_length: u32,
    pub expire_time: u64,
    pub role_name: Option<String>,
}

pub struct CreateOtpUseCase<U, S>
where
    U: UserDirectory,
    S: OtpStore,
{
    pub users: U,
    pub otp_store: S,
}

impl<U, S> CreateOtpUseCase<U, S>
where
    U: UserDirectory,
    S: OtpStore,
{
    pub async fn execute(
        &self,
        input: CreateOtpInput,
    ) -> Result<CreateOtpOutput, VerifyServiceError> {
        // 1. Field contracts, before any port call
        check_phone_number(&input.phone_number)?;
        if input.otp_code_length < MIN_OTP_CODE_LENGTH {
            return Err(VerifyServiceError::Validation(format!(
                "otp_code_length must be at least {MIN_OTP_CODE_LENGTH}"
            )));
        }
        if input.expire_time < MIN_EXPIRE_SECS {
            return Err(VerifyServiceError::Validation(format!(
                "expire_time must be at least {MIN_EXPIRE_SECS} seconds"
            )));
        }

        // 2. A user with this phone number must exist (scoped by role) → 404 otherwise
        self.users
            .find_by_phone_number(&input.phone_number, input.role_name.as_deref())
            .await?
            .ok_or(VerifyServiceError::UserNotFound)?;

        // 3. Generate and store. Overwrites any prior code for this phone
        //    number and resets its expiry.
        let code = generate_code(input.otp_code_length);
        self.otp_store
            .set_code(&input.phone_number, &code, input.expire_time)
            .await?;

        Ok(CreateOtpOutput {
            otp_code: code,
            phone_number: input.phone_number,
            otp_code_length: input.otp_code_length,
            expire_time: input.expire_time,
            role_name: input.role_name,
        })
    }
}

// ── ValidateOtp ───────────────────────────────────────────────────────────────

pub struct ValidateOtpInput {
    pub phone_number: String,
    pub otp_code: u64,
}

pub struct ValidateOtpUseCase<U, S>
where
    U: UserDirectory,
    S: OtpStore,
{
    pub users: U,
    pub otp_store: S,
    pub jwt_secret: String,
}

impl<U, S> ValidateOtpUseCase<U, S>
where
    U: UserDirectory,
    S: OtpStore,
{
    pub async fn execute(
        &self,
        input: ValidateOtpInput,
    ) -> Result<TokenPair, VerifyServiceError> {
        check_phone_number(&input.phone_number)?;

        let user = self
            .users
            .find_by_phone_number(&input.phone_number, None)
            .await?
            .ok_or(VerifyServiceError::UserNotFound)?;

        // Absent record (never created or already expired) and wrong value are
        // deliberately indistinguishable to the caller.
        let stored = self
            .otp_store
            .get_code(&input.phone_number)
            .await?
            .ok_or(VerifyServiceError::IncorrectOtpCode)?;

        // Compared numerically, so "00123" matches 123 regardless of leading zeros.
        let matches = stored
            .parse::<u64>()
            .is_ok_and(|value| value == input.otp_code);
        if !matches {
            return Err(VerifyServiceError::IncorrectOtpCode);
        }

        // Consume the code only after a successful compare — a wrong guess
        // must not burn the live record.
        self.otp_store.delete_code(&input.phone_number).await?;

        issue_token_pair(&user, &self.jwt_secret)
    }
}
