use crate::{
    application::manage_content::dto::{MediaUpload, UpdateContentRequest, UploadContentRequest},
    domain::{content::entity::ContentItem, identity::user::AuthenticatedUser},
    infrastructure::security::upload_validation::UploadPolicy,
    presentation::http::{errors::AppError, state::AppState},
};
use axum::{
    Extension, Json,
    extract::{Multipart, Path, State},
    http::StatusCode,
};
use serde::Serialize;

/// Fields of the upload and edit forms.
#[derive(Default)]
struct ContentForm {
    id: Option<String>,
    title: Option<String>,
    description: Option<String>,
    tags: Option<String>,
    file: Option<MediaUpload>,
}

async fn read_content_form(mut multipart: Multipart) -> Result<ContentForm, AppError> {
    let mut form = ContentForm::default();

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "file" => {
                let file_name = field.file_name().map(str::to_string);
                let content_type = field.content_type().map(str::to_string);
                let data = field.bytes().await?;
                form.file = Some(MediaUpload {
                    file_name,
                    content_type,
                    data,
                });
            }
            "id" => form.id = Some(field.text().await?),
            "title" => form.title = Some(field.text().await?),
            "description" => form.description = Some(field.text().await?),
            "tags" => form.tags = Some(field.text().await?),
            other => tracing::debug!("Ignoring unknown form field '{}'", other),
        }
    }

    Ok(form)
}

/// `GET /upload`: what the upload form accepts.
pub async fn upload_form(State(state): State<AppState>) -> Json<UploadPolicy> {
    Json(state.manage.policy().clone())
}

pub async fn upload_content(
    State(state): State<AppState>,
    Extension(admin): Extension<AuthenticatedUser>,
    multipart: Multipart,
) -> Result<(StatusCode, Json<ContentItem>), AppError> {
    let form = read_content_form(multipart).await?;
    let item = state
        .manage
        .upload(UploadContentRequest {
            title: form.title.unwrap_or_default(),
            description: form.description,
            tags: form.tags,
            file: form.file,
        })
        .await?;

    tracing::info!("Admin {} uploaded content {}", admin.id, item.id);
    Ok((StatusCode::CREATED, Json(item)))
}

pub async fn edit_form(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ContentItem>, AppError> {
    Ok(Json(state.manage.get(id).await?))
}

pub async fn update_content(
    State(state): State<AppState>,
    Extension(admin): Extension<AuthenticatedUser>,
    multipart: Multipart,
) -> Result<Json<ContentItem>, AppError> {
    let form = read_content_form(multipart).await?;
    let id = form
        .id
        .as_deref()
        .map(str::trim)
        .and_then(|raw| raw.parse::<i64>().ok())
        .ok_or_else(|| AppError::BadRequest("A numeric content id is required".into()))?;

    let item = state
        .manage
        .update(UpdateContentRequest {
            id,
            title: form.title.unwrap_or_default(),
            description: form.description,
            tags: form.tags,
            file: form.file,
        })
        .await?;

    tracing::info!("Admin {} updated content {}", admin.id, item.id);
    Ok(Json(item))
}

#[derive(Serialize)]
pub struct DeleteResponse {
    success: bool,
    id: i64,
}

pub async fn delete_content(
    State(state): State<AppState>,
    Extension(admin): Extension<AuthenticatedUser>,
    Path(id): Path<i64>,
) -> Result<Json<DeleteResponse>, AppError> {
    state.manage.delete(id).await?;
    tracing::info!("Admin {} deleted content {}", admin.id, id);
    Ok(Json(DeleteResponse { success: true, id }))
}
