use super::comment::Comment;
use super::like::LikeToggle;
use crate::domain::content::errors::DomainError;
use async_trait::async_trait;

/// Like ledger and comment log.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SocialRepository: Send + Sync {
    /// Flips the like for `(content_id, user_id)` and keeps the item's
    /// `like_count` in step, all in one transaction.
    async fn toggle_like(&self, content_id: i64, user_id: i64) -> Result<LikeToggle, DomainError>;
    async fn has_liked(&self, content_id: i64, user_id: i64) -> Result<bool, DomainError>;
    async fn liked_content_ids(&self, user_id: i64) -> Result<Vec<i64>, DomainError>;
    async fn add_comment(
        &self,
        content_id: i64,
        user_name: &str,
        text: &str,
    ) -> Result<Comment, DomainError>;
    /// Newest first.
    async fn get_comments(&self, content_id: i64) -> Result<Vec<Comment>, DomainError>;
}
