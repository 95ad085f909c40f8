use super::dto::{MediaUpload, UpdateContentRequest, UploadContentRequest};
use crate::{
    domain::content::{
        entity::{ContentChanges, ContentItem, NewContent, StoredMedia},
        errors::DomainError,
        repository::ContentRepository,
        value_objects::{ContentDescription, ContentTitle, TagList},
    },
    infrastructure::{
        security::upload_validation::{UploadPolicy, UploadRejection},
        storage::traits::StorageService,
    },
};
use std::sync::Arc;
use tracing::{error, info, instrument, warn};
use uuid::Uuid;

/// Validated metadata shared by upload and edit.
struct ContentFields {
    title: String,
    description: Option<String>,
    tags: String,
}

fn validate_fields(
    title: String,
    description: Option<String>,
    tags: Option<&str>,
) -> Result<ContentFields, DomainError> {
    let title = ContentTitle::new(title).map_err(|_| {
        DomainError::ValidationError("Title is required and must be at most 255 characters.".into())
    })?;
    let description = ContentDescription::new(description).map_err(|_| {
        DomainError::ValidationError("Description must be at most 500 characters.".into())
    })?;
    let tags = TagList::parse(tags.unwrap_or_default()).map_err(DomainError::ValidationError)?;
    Ok(ContentFields {
        title: title.value,
        description: description.map(|d| d.value),
        tags: tags.to_column(),
    })
}

/// Admin-side lifecycle of content items: upload, edit and delete, keeping
/// the blob store in step with the database.
pub struct ManageContentUseCase {
    repository: Arc<dyn ContentRepository>,
    storage: Arc<dyn StorageService>,
    policy: UploadPolicy,
}

impl ManageContentUseCase {
    pub fn new(
        repository: Arc<dyn ContentRepository>,
        storage: Arc<dyn StorageService>,
        policy: UploadPolicy,
    ) -> Self {
        info!(
            max_bytes = policy.max_bytes,
            "Initializing ManageContentUseCase"
        );
        Self {
            repository,
            storage,
            policy,
        }
    }

    pub fn policy(&self) -> &UploadPolicy {
        &self.policy
    }

    /// Validates the file and writes it to blob storage under a fresh key.
    async fn store_media(&self, file: &MediaUpload) -> Result<StoredMedia, DomainError> {
        let media = self
            .policy
            .validate(&file.data, file.content_type.as_deref())
            .map_err(|rejection| match rejection {
                UploadRejection::Empty => DomainError::ValidationError(
                    "Cannot save content: Uploaded file is missing or empty.".into(),
                ),
                other => DomainError::ValidationError(format!("Cannot save content: {}.", other)),
            })?;

        let key = format!("content/{}.{}", Uuid::now_v7(), media.extension);
        let url = self
            .storage
            .upload(&key, file.data.clone(), &media.content_type)
            .await
            .map_err(|e| {
                error!("Upload of {:?} to {} failed: {}", file.file_name, key, e);
                DomainError::StorageError("File upload failed".into())
            })?;

        Ok(StoredMedia {
            url,
            key,
            media_type: media.media_type,
        })
    }

    /// Blob removal never fails the surrounding operation.
    async fn discard_blob(&self, key: &str) {
        if let Err(e) = self.storage.delete(key).await {
            warn!("Could not delete stored object {}: {}", key, e);
        }
    }

    #[instrument(skip(self, request), fields(title = %request.title))]
    pub async fn upload(&self, request: UploadContentRequest) -> Result<ContentItem, DomainError> {
        let fields = validate_fields(request.title, request.description, request.tags.as_deref())?;
        let file = request.file.filter(|f| !f.is_empty()).ok_or_else(|| {
            DomainError::ValidationError(
                "Cannot save content: Uploaded file is missing or empty.".into(),
            )
        })?;

        let media = self.store_media(&file).await?;
        let new_content = NewContent {
            title: fields.title,
            description: fields.description,
            media_url: media.url,
            media_key: media.key.clone(),
            media_type: media.media_type,
            tags: fields.tags,
        };

        match self.repository.create(&new_content).await {
            Ok(item) => {
                info!("Content {} uploaded as {}", item.id, media.key);
                Ok(item)
            }
            Err(e) => {
                self.discard_blob(&media.key).await;
                Err(e)
            }
        }
    }

    pub async fn get(&self, id: i64) -> Result<ContentItem, DomainError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::content_not_found(id))
    }

    #[instrument(skip(self, request), fields(content_id = request.id))]
    pub async fn update(&self, request: UpdateContentRequest) -> Result<ContentItem, DomainError> {
        let existing = self.get(request.id).await?;
        let fields = validate_fields(request.title, request.description, request.tags.as_deref())?;

        let media = match request.file.filter(|f| !f.is_empty()) {
            Some(file) => Some(self.store_media(&file).await?),
            None => None,
        };
        let new_key = media.as_ref().map(|m| m.key.clone());

        let changes = ContentChanges {
            title: fields.title,
            description: fields.description,
            tags: fields.tags,
            media,
        };

        let updated = match self.repository.update(request.id, &changes).await {
            Ok(updated) => updated,
            Err(e) => {
                if let Some(key) = &new_key {
                    self.discard_blob(key).await;
                }
                return Err(e);
            }
        };

        if new_key.is_some() {
            if let Some(old_key) = existing.media_key.as_deref() {
                self.discard_blob(old_key).await;
            }
        }

        info!("Content {} updated", updated.id);
        Ok(updated)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> Result<ContentItem, DomainError> {
        let deleted = self.repository.delete(id).await?;
        if let Some(key) = deleted.media_key.as_deref() {
            self.discard_blob(key).await;
        }
        Ok(deleted)
    }
}
