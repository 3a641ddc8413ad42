use chrono::{DateTime, Utc};
use uuid::Uuid;

/// User record from the portal user directory.
/// Only the fields the verification flows consume (lookup, active flag,
/// password hash, optional role scope).
#[derive(Debug, Clone)]
pub struct PortalUser {
    pub id: Uuid,
    pub username: String,
    pub phone_number: String,
    pub password_hash: String,
    pub role: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

/// Required phone number length in characters.
pub const PHONE_NUMBER_LEN: usize = 11;

/// Required leading digit of a phone number.
pub const PHONE_NUMBER_PREFIX: char = '0';

/// Default number of digits in a generated OTP code.
pub const DEFAULT_OTP_CODE_LENGTH: u32 = 5;

/// Minimum accepted OTP code length.
pub const MIN_OTP_CODE_LENGTH: u32 = 3;

/// Default OTP record time-to-live in seconds.
pub const DEFAULT_EXPIRE_SECS: u64 = 120;

/// Minimum accepted OTP record time-to-live in seconds.
pub const MIN_EXPIRE_SECS: u64 = 60;

/// Access token lifetime in seconds.
pub const ACCESS_TOKEN_TTL_SECS: u64 = 300;

/// Refresh token lifetime in seconds.
pub const REFRESH_TOKEN_TTL_SECS: u64 = 86_400;

/// Check the phone number contract: exactly [`PHONE_NUMBER_LEN`] characters,
/// starting with [`PHONE_NUMBER_PREFIX`].
pub fn validate_phone_number(value: &str) -> bool {
    value.chars().count() == PHONE_NUMBER_LEN && value.starts_with(PHONE_NUMBER_PREFIX)
}
