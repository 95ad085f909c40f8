use crate::{
    application::interaction::dto::{AddCommentRequest, CommentResponse, ContentView, LikeResponse},
    domain::social::comment::Comment,
    presentation::http::{
        errors::AppError,
        middleware::user::{decode_optional_user, decode_required_user},
        state::AppState,
    },
};
use axum::{
    Json,
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
};

pub async fn view_content(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    headers: HeaderMap,
) -> Result<Json<ContentView>, AppError> {
    let user = decode_optional_user(&headers, &state.config.jwt_secret);
    let view = state.interaction.view_content(id, user.as_ref()).await?;
    Ok(Json(view))
}

/// Anonymous callers get 401; liking is tied to an account.
pub async fn like_content(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    headers: HeaderMap,
) -> Result<Json<LikeResponse>, AppError> {
    let user = decode_required_user(&headers, &state.config.jwt_secret)?;
    let toggle = state.interaction.toggle_like(id, &user).await?;
    Ok(Json(toggle.into()))
}

pub async fn add_comment(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    headers: HeaderMap,
    Json(body): Json<AddCommentRequest>,
) -> Result<(StatusCode, Json<CommentResponse>), AppError> {
    let user = decode_required_user(&headers, &state.config.jwt_secret)?;
    let comment = state.interaction.add_comment(id, &user, &body.comment).await?;
    Ok((
        StatusCode::CREATED,
        Json(CommentResponse {
            success: true,
            comment,
        }),
    ))
}

pub async fn get_comments(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Vec<Comment>>, AppError> {
    Ok(Json(state.interaction.comments(id).await?))
}
