use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde::Deserialize;

use crate::error::VerifyServiceError;
use crate::state::AppState;
use crate::usecase::login::{LoginInput, LoginUseCase};

#[derive(Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

// ── POST /auth/login ──────────────────────────────────────────────────────────

pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<impl IntoResponse, VerifyServiceError> {
    let usecase = LoginUseCase {
        users: state.user_directory(),
        jwt_secret: state.jwt_secret.clone(),
    };

    let pair = usecase
        .execute(LoginInput {
            username: body.username,
            password: body.password,
        })
        .await?;

    Ok((StatusCode::OK, Json(pair)))
}
