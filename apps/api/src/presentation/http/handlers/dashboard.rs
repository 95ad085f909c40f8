use crate::{
    application::browse_content::dto::{DashboardRequest, DashboardView},
    presentation::http::{
        errors::AppError, middleware::user::decode_optional_user, state::AppState,
    },
};
use axum::{
    Json,
    extract::{Query, State},
    http::HeaderMap,
};

/// `GET /` and `GET /dashboard`
pub async fn dashboard(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(request): Query<DashboardRequest>,
) -> Result<Json<DashboardView>, AppError> {
    let user = decode_optional_user(&headers, &state.config.jwt_secret);
    let view = state.browse.dashboard(request, user.as_ref()).await?;
    Ok(Json(view))
}
