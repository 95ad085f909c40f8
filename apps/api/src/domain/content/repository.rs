use super::entity::{ContentChanges, ContentItem, NewContent};
use super::errors::DomainError;
use crate::domain::shared::pagination::PageRequest;
use async_trait::async_trait;

/// Which slice of the content store a page is cut from, and in what order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentQuery {
    /// Upload time descending, optionally narrowed to titles or tags containing the keyword.
    Latest { keyword: Option<String> },
    /// Items whose tag list contains the tag, upload time descending.
    Tagged { tag: String },
    MostLiked,
    MostViewed,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContentRepository: Send + Sync {
    async fn create(&self, content: &NewContent) -> Result<ContentItem, DomainError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<ContentItem>, DomainError>;
    async fn update(&self, id: i64, changes: &ContentChanges) -> Result<ContentItem, DomainError>;
    /// Removes the item and, through the foreign keys, its likes and comments.
    async fn delete(&self, id: i64) -> Result<ContentItem, DomainError>;
    /// Returns one page of items plus the total number of matching items.
    async fn find_page(
        &self,
        query: &ContentQuery,
        page: PageRequest,
    ) -> Result<(Vec<ContentItem>, i64), DomainError>;
    /// Atomically bumps the view counter and returns the new value.
    async fn increment_views(&self, id: i64) -> Result<i64, DomainError>;
}
