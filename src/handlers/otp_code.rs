use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde::{Deserialize, Serialize};

use crate::domain::types::{DEFAULT_EXPIRE_SECS, DEFAULT_OTP_CODE_LENGTH};
use crate::error::VerifyServiceError;
use crate::state::AppState;
use crate::usecase::otp::{
    CreateOtpInput, CreateOtpUseCase, ValidateOtpInput, ValidateOtpUseCase,
};

fn default_otp_code_length() -> u32 {
    DEFAULT_OTP_CODE_LENGTH
}

fn default_expire_time() -> u64 {
    DEFAULT_EXPIRE_SECS
}

// ── POST /auth/otp_code/create ────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CreateOtpRequest {
    pub phone_number: String,
    #[serde(default = "default_otp_code_length")]
    pub otp_code_length: u32,
    #[serde(default = "default_expire_time")]
    pub expire_time: u64,
    #[serde(default)]
    pub role_name: Option<String>,
}

/// The generated code plus the validated inputs, echoed back.
/// `otp_code` stays a string so leading zeros survive serialization.
#[derive(Serialize)]
pub struct CreateOtpResponse {
    pub otp_code: String,
    pub phone_number: String,
    pub otp_code_length: u32,
    pub expire_time: u64,
    pub role_name: Option<String>,
}

pub async fn create_otp_code(
    State(state): State<AppState>,
    Json(body): Json<CreateOtpRequest>,
) -> Result<impl IntoResponse, VerifyServiceError> {
    let usecase = CreateOtpUseCase {
        users: state.user_directory(),
        otp_store: state.otp_store(),
    };

    let out = usecase
        .execute(CreateOtpInput {
            phone_number: body.phone_number,
            otp_code_length: body.otp_code_length,
            expire_time: body.expire_time,
            role_name: body.role_name,
        })
        .await?;

    let response = CreateOtpResponse {
        otp_code: out.otp_code,
        phone_number: out.phone_number,
        otp_code_length: out.otp_code_length,
        expire_time: out.expire_time,
        role_name: out.role_name,
    };

    Ok((StatusCode::OK, Json(response)))
}

// ── POST /auth/otp_code/validate ──────────────────────────────────────────────

#[derive(Deserialize)]
pub struct ValidateOtpRequest {
    pub phone_number: String,
    pub otp_code: u64,
}

pub async fn validate_otp_code(
    State(state): State<AppState>,
    Json(body): Json<ValidateOtpRequest>,
) -> Result<impl IntoResponse, VerifyServiceError> {
    let usecase = ValidateOtpUseCase {
        users: state.user_directory(),
        otp_store: state.otp_store(),
        jwt_secret: state.jwt_secret.clone(),
    };

    let pair = usecase
        .execute(ValidateOtpInput {
            phone_number: body.phone_number,
            otp_code: body.otp_code,
        })
        .await?;

    Ok((StatusCode::OK, Json(pair)))
}
