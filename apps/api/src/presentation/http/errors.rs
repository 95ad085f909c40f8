//! HTTP error handling and response conversion.
//!
//! Handlers return [`AppError`], which maps onto a status code and the JSON
//! body `{"success": false, "error": "<message>"}`. Internal details are
//! logged but never sent to the client.

use crate::domain::content::errors::DomainError;
use axum::{
    Json,
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::fmt;

/// Application-level errors returned from handlers.
#[derive(Debug)]
pub enum AppError {
    /// Resource not found (404).
    NotFound(String),

    /// Malformed request (400).
    BadRequest(String),

    /// Missing or invalid bearer token (401).
    Unauthorized(String),

    /// Authenticated but not allowed (403).
    Forbidden(String),

    /// Request data failed validation (400).
    ValidationError(String),

    /// Rate limit exceeded (429).
    RateLimited,

    /// Database operation failed (500).
    Database(String),

    /// Blob storage operation failed (500).
    Storage(String),

    /// Redis operation failed (500).
    Redis(String),

    /// Unclassified internal error (500).
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound(msg) => write!(f, "Not found: {}", msg),
            Self::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            Self::Unauthorized(msg) => write!(f, "Unauthorized: {}", msg),
            Self::Forbidden(msg) => write!(f, "Forbidden: {}", msg),
            Self::ValidationError(msg) => write!(f, "Validation error: {}", msg),
            Self::RateLimited => write!(f, "Rate limit exceeded"),
            Self::Database(msg) => write!(f, "Database error: {}", msg),
            Self::Storage(msg) => write!(f, "Storage error: {}", msg),
            Self::Redis(msg) => write!(f, "Redis error: {}", msg),
            Self::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::BadRequest(_) | Self::ValidationError(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::Forbidden(_) => StatusCode::FORBIDDEN,
            Self::RateLimited => StatusCode::TOO_MANY_REQUESTS,
            Self::Database(_) | Self::Storage(_) | Self::Redis(_) | Self::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Message safe to show to the caller.
    fn user_message(&self) -> String {
        match self {
            Self::NotFound(msg)
            | Self::BadRequest(msg)
            | Self::Unauthorized(msg)
            | Self::ValidationError(msg) => msg.clone(),
            Self::Storage(_) => "File upload failed".into(),
            Self::Forbidden(_) => "Access denied".into(),
            Self::RateLimited => "Too many requests, please try again later".into(),
            Self::Database(_) => "Database operation failed".into(),
            Self::Redis(_) | Self::Internal(_) => "Internal server error".into(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.user_message();

        match status {
            StatusCode::INTERNAL_SERVER_ERROR => tracing::error!("error={}", self),
            StatusCode::TOO_MANY_REQUESTS => tracing::debug!("error={}", self),
            _ => tracing::warn!("error={}", self),
        }

        (status, Json(json!({ "success": false, "error": message }))).into_response()
    }
}

// === Domain Error Conversion ===

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::NotFound(msg) => AppError::NotFound(msg),
            DomainError::ValidationError(msg) => AppError::ValidationError(msg),
            DomainError::StorageError(msg) => AppError::Storage(msg),
            DomainError::Conflict(msg) => AppError::BadRequest(msg),
            DomainError::InfrastructureError(msg) => AppError::Internal(msg),
            DomainError::RateLimitExceeded => AppError::RateLimited,
            DomainError::Unauthorized => AppError::Unauthorized("Authentication required".into()),
        }
    }
}

// === Database Error Conversion ===

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => AppError::NotFound("Record not found".into()),
            sqlx::Error::PoolTimedOut => {
                tracing::warn!("Database connection pool exhausted, timing out");
                AppError::Database("Connection pool exhausted".into())
            }
            sqlx::Error::PoolClosed => AppError::Database("Database connection unavailable".into()),
            other => {
                tracing::error!(database_error = %other);
                AppError::Database(other.to_string())
            }
        }
    }
}

impl From<redis::RedisError> for AppError {
    fn from(err: redis::RedisError) -> Self {
        AppError::Redis(err.to_string())
    }
}

impl From<MultipartError> for AppError {
    fn from(err: MultipartError) -> Self {
        AppError::BadRequest(format!("Invalid multipart form: {}", err.body_text()))
    }
}

// === General Fallback Error Conversion ===

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        err.chain().skip(1).for_each(|cause| {
            tracing::error!(cause = %cause, "Error source");
        });
        AppError::Internal(err.to_string())
    }
}
