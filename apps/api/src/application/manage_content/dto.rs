use bytes::Bytes;

/// A file part received from a multipart form.
#[derive(Debug, Clone)]
pub struct MediaUpload {
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub data: Bytes,
}

impl MediaUpload {
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct UploadContentRequest {
    pub title: String,
    pub description: Option<String>,
    pub tags: Option<String>,
    pub file: Option<MediaUpload>,
}

/// Edit form submission. A missing or empty file keeps the current media.
#[derive(Debug, Clone)]
pub struct UpdateContentRequest {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub tags: Option<String>,
    pub file: Option<MediaUpload>,
}
