use crate::{
    application::accounts::dto::{AuthSession, LoginRequest, RegisterRequest},
    domain::{content::errors::DomainError, identity::user::User},
    presentation::http::{
        errors::AppError, middleware::user::decode_required_user, state::AppState,
    },
};
use axum::{
    Json,
    extract::State,
    http::{HeaderMap, StatusCode},
};

pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<User>), AppError> {
    let user = state.accounts.register(body).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<AuthSession>, AppError> {
    let session = state.accounts.login(body).await.map_err(|e| match e {
        DomainError::Unauthorized => {
            AppError::Unauthorized("Invalid username or password".to_string())
        }
        other => other.into(),
    })?;
    Ok(Json(session))
}

pub async fn me(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<User>, AppError> {
    let identity = decode_required_user(&headers, &state.config.jwt_secret)?;
    Ok(Json(state.accounts.current_user(&identity).await?))
}
