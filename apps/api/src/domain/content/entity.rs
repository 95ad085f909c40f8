use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// An uploaded media record shown on the dashboard.
///
/// `like_count` is a denormalized copy of the number of rows in the like
/// ledger for this item and is only ever changed inside the same transaction
/// that mutates the ledger. `view_count` is only changed through an atomic
/// `UPDATE ... SET view_count = view_count + 1`.
///
/// # Invariants
/// - `like_count >= 0` and `view_count >= 0`
/// - `like_count == count(likes where content_id = id)`
/// - `tags` is the normalized, comma-joined form produced by [`TagList`](super::value_objects::TagList)
#[derive(Debug, Clone, Serialize, Deserialize, TS, PartialEq)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ContentItem {
    pub id: i64,

    pub title: String,

    pub description: Option<String>,

    /// Public URL returned by blob storage
    pub media_url: String,

    /// Object key inside the bucket, kept so the blob can be removed later
    #[serde(skip)]
    #[ts(skip)]
    pub media_key: Option<String>,

    pub media_type: MediaType,

    /// Comma-delimited tag list, e.g. `"travel,sunset"`
    pub tags: String,

    pub like_count: i64,

    pub view_count: i64,

    pub uploaded_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

/// Kind of media behind a content item, derived from the uploaded file's
/// declared MIME type.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, TS, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum MediaType {
    Image,
    Video,
    Other,
    #[default]
    Unknown,
}

impl MediaType {
    /// Classifies a declared content type: `video/*` wins over `image/*`,
    /// anything else declared is `Other`, nothing declared is `Unknown`.
    pub fn from_content_type(content_type: Option<&str>) -> Self {
        match content_type.map(|c| c.trim().to_ascii_lowercase()) {
            None => MediaType::Unknown,
            Some(ct) if ct.is_empty() => MediaType::Unknown,
            Some(ct) if ct.starts_with("video") => MediaType::Video,
            Some(ct) if ct.starts_with("image") => MediaType::Image,
            Some(_) => MediaType::Other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MediaType::Image => "image",
            MediaType::Video => "video",
            MediaType::Other => "other",
            MediaType::Unknown => "unknown",
        }
    }

    pub fn parse(value: &str) -> Self {
        match value {
            "image" => MediaType::Image,
            "video" => MediaType::Video,
            "other" => MediaType::Other,
            _ => MediaType::Unknown,
        }
    }
}

/// Fields needed to insert a freshly uploaded item. Counters start at zero.
#[derive(Debug, Clone, PartialEq)]
pub struct NewContent {
    pub title: String,
    pub description: Option<String>,
    pub media_url: String,
    pub media_key: String,
    pub media_type: MediaType,
    pub tags: String,
}

/// Metadata edit applied by an administrator. Media fields are only present
/// when a replacement file was uploaded.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentChanges {
    pub title: String,
    pub description: Option<String>,
    pub tags: String,
    pub media: Option<StoredMedia>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StoredMedia {
    pub url: String,
    pub key: String,
    pub media_type: MediaType,
}
