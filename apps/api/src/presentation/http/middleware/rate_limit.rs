use crate::presentation::http::{errors::AppError, state::AppState};
use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};

pub fn extract_client_ip(headers: &HeaderMap) -> String {
    headers
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.split(',').next())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .or_else(|| {
            headers
                .get("x-real-ip")
                .and_then(|v| v.to_str().ok())
                .map(str::trim)
                .filter(|s| !s.is_empty())
        })
        .unwrap_or("unknown")
        .to_string()
}

/// Caps likes and comments per client IP per minute.
pub async fn rate_limit_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let limit = state.config.rate_limit_interactions_per_minute;
    let ip = extract_client_ip(request.headers());

    if !state
        .rate_limiter
        .check(&format!("interact:{}", ip), limit)
        .await
    {
        tracing::debug!("Interaction rate limit hit for {}", ip);
        return Err(AppError::RateLimited);
    }

    Ok(next.run(request).await)
}
