use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::domain::types::{ACCESS_TOKEN_TTL_SECS, PortalUser, REFRESH_TOKEN_TTL_SECS};
use crate::error::VerifyServiceError;

/// JWT claims for both access and refresh tokens.
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenClaims {
    pub sub: String,
    pub exp: u64,
}

/// A `{refresh, access}` credential pair issued to an authenticated session.
#[derive(Debug, Serialize)]
pub struct TokenPair {
    pub refresh: String,
    pub access: String,
}

fn now_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system clock before UNIX epoch")
        .as_secs()
}

fn issue_token(
    user: &PortalUser,
    ttl_secs: u64,
    secret: &str,
) -> Result<String, VerifyServiceError> {
    let claims = TokenClaims {
        sub: user.id.to_string(),
        exp: now_secs() + ttl_secs,
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| VerifyServiceError::Internal(e.into()))
}

pub fn issue_access_token(user: &PortalUser, secret: &str) -> Result<String, VerifyServiceError> {
    issue_token(user, ACCESS_TOKEN_TTL_SECS, secret)
}

pub fn issue_refresh_token(user: &PortalUser, secret: &str) -> Result<String, VerifyServiceError> {
    issue_token(user, REFRESH_TOKEN_TTL_SECS, secret)
}

/// Issue the credential pair returned by login and OTP validation.
pub fn issue_token_pair(user: &PortalUser, secret: &str) -> Result<TokenPair, VerifyServiceError> {
    Ok(TokenPair {
        refresh: issue_refresh_token(user, secret)?,
        access: issue_access_token(user, secret)?,
    })
}

/// Validate a token and return its claims. Used to authenticate the
/// password-reset caller.
pub fn validate_token(token: &str, secret: &str) -> Result<TokenClaims, VerifyServiceError> {
    let mut validation = Validation::new(jsonwebtoken::Algorithm::HS256);
    validation.validate_exp = true;
    validation.required_spec_claims.clear();
    validation.set_required_spec_claims(&["exp", "sub"]);

    let data = decode::<TokenClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map_err(|_| VerifyServiceError::InvalidToken)?;

    Ok(data.claims)
}
