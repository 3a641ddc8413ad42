use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::handlers::{
    login::login,
    otp_code::{create_otp_code, validate_otp_code},
    reset_password::reset_password,
};
use crate::health::{healthz, readyz};
use crate::middleware::request_id_layer;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Login
        .route("/auth/login", post(login))
        // OTP lifecycle
        .route("/auth/otp_code/create", post(create_otp_code))
        .route("/auth/otp_code/validate", post(validate_otp_code))
        // Password reset (authenticated)
        .route("/auth/reset_password", post(reset_password))
        .layer(TraceLayer::new_for_http())
        .layer(request_id_layer())
        .with_state(state)
}
