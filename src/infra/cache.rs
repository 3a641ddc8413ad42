use deadpool_redis::Pool;
use deadpool_redis::redis::AsyncCommands;

use crate::domain::repository::OtpStore;
use crate::error::VerifyServiceError;

/// OTP store backed by the shared Redis pool. Connections are taken from the
/// pool per call; single-key atomicity (`SET ... EX`, `GET`, `DEL`) is
/// delegated to Redis.
#[derive(Clone)]
pub struct RedisOtpStore {
    pub pool: Pool,
}

fn otp_key(phone_number: &str) -> String {
    format!("otp:{phone_number}")
}

impl OtpStore for RedisOtpStore {
    async fn set_code(
        &self,
        phone_number: &str,
        code: &str,
        expire_secs: u64,
    ) -> Result<(), VerifyServiceError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|e| VerifyServiceError::Internal(e.into()))?;
        let key = otp_key(phone_number);
        let (): () = conn
            .set_ex(&key, code, expire_secs)
            .await
            .map_err(|e: deadpool_redis::redis::RedisError| VerifyServiceError::Internal(e.into()))?;
        Ok(())
    }

    async fn get_code(&self, phone_number: &str) -> Result<Option<String>, VerifyServiceError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|e| VerifyServiceError::Internal(e.into()))?;
        let key = otp_key(phone_number);
        let value: Option<String> = conn
            .get(&key)
            .await
            .map_err(|e| VerifyServiceError::Internal(e.into()))?;
        Ok(value)
    }

    async fn delete_code(&self, phone_number: &str) -> Result<(), VerifyServiceError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|e| VerifyServiceError::Internal(e.into()))?;
        let key = otp_key(phone_number);
        let (): () = conn
            .del(&key)
            .await
            .map_err(|e: deadpool_redis::redis::RedisError| VerifyServiceError::Internal(e.into()))?;
        Ok(())
    }
}
