use async_trait::async_trait;
use bytes::Bytes;

/// Blob storage for uploaded media. Implementations return the public URL
/// under which the object can be fetched.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StorageService: Send + Sync {
    async fn upload(&self, key: &str, data: Bytes, content_type: &str) -> anyhow::Result<String>;
    async fn delete(&self, key: &str) -> anyhow::Result<()>;
    fn public_url(&self, key: &str) -> String;
}
