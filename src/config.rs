/// Verification service configuration loaded from environment variables.
#[derive(Debug)]
pub struct VerifyConfig {
    /// PostgreSQL connection URL for the user directory.
    pub database_url: String,
    /// Redis connection URL for the OTP store.
    pub redis_url: String,
    /// HMAC secret for signing JWT access and refresh tokens.
    pub jwt_secret: String,
    /// TCP port to listen on (default 3114). Env var: `VERIFY_PORT`.
    pub verify_port: u16,
}

impl VerifyConfig {
    pub fn from_env() -> Self {
        Self {
            database_url: std::env::var("DATABASE_URL").expect("DATABASE_URL"),
            redis_url: std::env::var("REDIS_URL").expect("REDIS_URL"),
            jwt_secret: std::env::var("JWT_SECRET").expect("JWT_SECRET"),
            verify_port: std::env::var("VERIFY_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3114),
        }
    }
}
