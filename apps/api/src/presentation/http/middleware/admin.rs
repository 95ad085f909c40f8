use crate::presentation::http::{
    errors::AppError, middleware::user::decode_required_user, state::AppState,
};
use axum::{extract::State, middleware::Next, response::Response};

/// Lets the request through only for a verified ADMIN token and stores the
/// caller's [`AuthenticatedUser`](crate::domain::identity::user::AuthenticatedUser)
/// in the request extensions.
pub async fn require_admin(
    State(state): State<AppState>,
    mut req: axum::extract::Request,
    next: Next,
) -> Result<Response, AppError> {
    let user = decode_required_user(req.headers(), &state.config.jwt_secret)?;
    if !user.is_admin() {
        tracing::warn!("User {} attempted an admin operation", user.id);
        return Err(AppError::Forbidden("Administrator role required".to_string()));
    }

    req.extensions_mut().insert(user);

    Ok(next.run(req).await)
}
