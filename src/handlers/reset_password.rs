use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use axum_extra::TypedHeader;
use axum_extra::headers::{Authorization, authorization::Bearer};
use serde::{Deserialize, Serialize};

use crate::error::VerifyServiceError;
use crate::state::AppState;
use crate::usecase::reset_password::{ResetPasswordInput, ResetPasswordUseCase};
use crate::usecase::token::validate_token;

#[derive(Deserialize)]
pub struct ResetPasswordRequest {
    pub phone_number: String,
    pub password: String,
}

#[derive(Serialize)]
pub struct ResetPasswordResponse {
    pub phone_number: String,
    pub password: String,
}

// ── POST /auth/reset_password ─────────────────────────────────────────────────

/// Unlike the other operations this one requires an authenticated caller:
/// a valid access token in the `Authorization: Bearer` header.
pub async fn reset_password(
    State(state): State<AppState>,
    bearer: Option<TypedHeader<Authorization<Bearer>>>,
    Json(body): Json<ResetPasswordRequest>,
) -> Result<impl IntoResponse, VerifyServiceError> {
    let TypedHeader(authorization) = bearer.ok_or(VerifyServiceError::InvalidToken)?;
    validate_token(authorization.token(), &state.jwt_secret)?;

    let usecase = ResetPasswordUseCase {
        users: state.user_directory(),
    };

    let out = usecase
        .execute(ResetPasswordInput {
            phone_number: body.phone_number,
            password: body.password,
        })
        .await?;

    let response = ResetPasswordResponse {
        phone_number: out.phone_number,
        password: out.password,
    };

    Ok((StatusCode::OK, Json(response)))
}
