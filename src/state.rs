use deadpool_redis::Pool as RedisPool;
use sea_orm::DatabaseConnection;

use crate::infra::cache::RedisOtpStore;
use crate::infra::db::DbUserDirectory;

/// Shared application state passed to every handler via axum `State`.
/// Both pools are created once at startup and shared across requests.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub redis: RedisPool,
    pub jwt_secret: String,
}

impl AppState {
    pub fn user_directory(&self) -> DbUserDirectory {
        DbUserDirectory {
            db: self.db.clone(),
        }
    }

    pub fn otp_store(&self) -> RedisOtpStore {
        RedisOtpStore {
            pool: self.redis.clone(),
        }
    }
}
