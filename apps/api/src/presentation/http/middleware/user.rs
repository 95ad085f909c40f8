use crate::{
    domain::identity::user::AuthenticatedUser,
    infrastructure::security::jwt::verify_token,
    presentation::http::errors::AppError,
};
use axum::http::{HeaderMap, header};

pub fn extract_bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

/// `None` for anonymous callers and for tokens that fail verification.
pub fn decode_optional_user(headers: &HeaderMap, secret: &str) -> Option<AuthenticatedUser> {
    extract_bearer_token(headers).and_then(|token| verify_token(token, secret))
}

pub fn decode_required_user(
    headers: &HeaderMap,
    secret: &str,
) -> Result<AuthenticatedUser, AppError> {
    decode_optional_user(headers, secret)
        .ok_or_else(|| AppError::Unauthorized("Login required".to_string()))
}
