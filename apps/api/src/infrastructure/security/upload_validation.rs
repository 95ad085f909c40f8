use crate::domain::content::entity::MediaType;
use image::ImageFormat;
use serde::Serialize;
use thiserror::Error;
use tracing::{instrument, warn};
use ts_rs::TS;

/// MIME types accepted for upload and the file extension used for the stored object.
const ALLOWED_TYPES: &[(&str, &str)] = &[
    ("image/jpeg", "jpg"),
    ("image/png", "png"),
    ("image/webp", "webp"),
    ("image/gif", "gif"),
    ("video/mp4", "mp4"),
    ("video/webm", "webm"),
    ("video/quicktime", "mov"),
];

#[derive(Error, Debug, Clone, PartialEq)]
pub enum UploadRejection {
    #[error("Uploaded file is missing or empty")]
    Empty,

    #[error("File size {size} exceeds maximum {max}")]
    TooLarge { size: usize, max: usize },

    #[error("File type '{0}' is not allowed")]
    DisallowedType(String),

    #[error("File content does not match declared type '{0}'")]
    ContentMismatch(String),
}

/// Upload constraints, also served to admin clients before they pick a file.
#[derive(Debug, Clone, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct UploadPolicy {
    pub max_bytes: usize,
    pub allowed_types: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedMedia {
    pub content_type: String,
    pub extension: &'static str,
    pub media_type: MediaType,
}

impl UploadPolicy {
    pub fn new(max_bytes: usize) -> Self {
        Self {
            max_bytes,
            allowed_types: ALLOWED_TYPES.iter().map(|(t, _)| t.to_string()).collect(),
        }
    }

    /// Checks size, declared type and, where the format allows it, the
    /// leading magic bytes of the payload.
    #[instrument(skip(self, data), fields(file_size = data.len()))]
    pub fn validate(
        &self,
        data: &[u8],
        declared_type: Option<&str>,
    ) -> Result<ValidatedMedia, UploadRejection> {
        if data.is_empty() {
            return Err(UploadRejection::Empty);
        }
        if data.len() > self.max_bytes {
            return Err(UploadRejection::TooLarge {
                size: data.len(),
                max: self.max_bytes,
            });
        }

        let content_type = declared_type
            .map(|t| t.split(';').next().unwrap_or("").trim().to_ascii_lowercase())
            .unwrap_or_default();
        let extension = ALLOWED_TYPES
            .iter()
            .find(|(t, _)| *t == content_type)
            .map(|(_, ext)| *ext)
            .ok_or_else(|| UploadRejection::DisallowedType(content_type.clone()))?;

        let media_type = MediaType::from_content_type(Some(&content_type));
        let matches = match media_type {
            MediaType::Image => image_matches(data, &content_type),
            MediaType::Video => video_matches(data, &content_type),
            _ => false,
        };
        if !matches {
            warn!("Rejected upload: payload does not look like {}", content_type);
            return Err(UploadRejection::ContentMismatch(content_type));
        }

        Ok(ValidatedMedia {
            content_type,
            extension,
            media_type,
        })
    }
}

fn image_matches(data: &[u8], content_type: &str) -> bool {
    let expected = match content_type {
        "image/jpeg" => ImageFormat::Jpeg,
        "image/png" => ImageFormat::Png,
        "image/webp" => ImageFormat::WebP,
        "image/gif" => ImageFormat::Gif,
        _ => return false,
    };
    image::guess_format(data).is_ok_and(|format| format == expected)
}

fn video_matches(data: &[u8], content_type: &str) -> bool {
    match content_type {
        // ISO base media: size(4) + "ftyp"
        "video/mp4" | "video/quicktime" => data.len() >= 8 && &data[4..8] == b"ftyp",
        // EBML header
        "video/webm" => data.starts_with(&[0x1A, 0x45, 0xDF, 0xA3]),
        _ => false,
    }
}
