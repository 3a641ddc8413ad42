//! PBKDF2 password hashing behind the user directory.
//!
//! Use cases never see hashes; the directory implementation calls these
//! helpers on credential checks and password mutation.

use pbkdf2::Pbkdf2;
use pbkdf2::password_hash::{
    PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng,
};

use crate::error::VerifyServiceError;

/// Hash a plaintext password into a PHC-format string with a fresh salt.
pub fn hash_password(password: &str) -> Result<String, VerifyServiceError> {
    let salt = SaltString::generate(&mut OsRng);
    Pbkdf2
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| VerifyServiceError::Internal(anyhow::anyhow!("hash password: {e}")))
}

/// Check a plaintext password against a stored PHC-format hash.
/// A malformed stored hash counts as a mismatch.
pub fn verify_password(password: &str, stored_hash: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(stored_hash) else {
        return false;
    };
    Pbkdf2.verify_password(password.as_bytes(), &parsed).is_ok()
}
