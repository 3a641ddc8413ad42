#![allow(async_fn_in_trait)]

use uuid::Uuid;

use crate::domain::types::PortalUser;
use crate::error::VerifyServiceError;

/// Port for the portal user directory.
pub trait UserDirectory: Send + Sync {
    /// Find a user by phone number, optionally scoped to a role.
    /// `role = None` searches across all accounts.
    async fn find_by_phone_number(
        &self,
        phone_number: &str,
        role: Option<&str>,
    ) -> Result<Option<PortalUser>, VerifyServiceError>;

    /// Find an active user by phone number.
    async fn find_active_by_phone_number(
        &self,
        phone_number: &str,
    ) -> Result<Option<PortalUser>, VerifyServiceError>;

    /// Check a username/password credential against an active account.
    /// Returns the user on success, `None` on unknown user or wrong password.
    async fn verify_credential(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<PortalUser>, VerifyServiceError>;

    /// Overwrite the stored password hash for a user.
    async fn set_password(
        &self,
        user_id: Uuid,
        password: &str,
    ) -> Result<(), VerifyServiceError>;
}

/// Store for transient phone-number → OTP code associations (Redis, short TTL).
pub trait OtpStore: Send + Sync {
    /// Write a code under the phone number key with the given TTL.
    /// Overwrites any existing record and resets its expiry.
    async fn set_code(
        &self,
        phone_number: &str,
        code: &str,
        expire_secs: u64,
    ) -> Result<(), VerifyServiceError>;

    /// Read the live code for a phone number, if any.
    async fn get_code(&self, phone_number: &str) -> Result<Option<String>, VerifyServiceError>;

    /// Remove the record for a phone number. Removing an absent key is not an error.
    async fn delete_code(&self, phone_number: &str) -> Result<(), VerifyServiceError>;
}
