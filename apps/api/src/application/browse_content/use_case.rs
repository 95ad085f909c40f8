use super::dto::{ContentFilter, DashboardRequest, DashboardView};
use crate::domain::{
    content::{
        entity::ContentItem,
        errors::DomainError,
        repository::{ContentQuery, ContentRepository},
    },
    identity::user::AuthenticatedUser,
    shared::pagination::{Page, PageRequest},
    social::repository::SocialRepository,
};
use std::sync::Arc;
use tracing::{debug, instrument};

pub struct BrowseContentUseCase {
    content: Arc<dyn ContentRepository>,
    social: Arc<dyn SocialRepository>,
    default_page_size: i64,
}

/// Trims and drops blank query input.
fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

impl BrowseContentUseCase {
    pub fn new(
        content: Arc<dyn ContentRepository>,
        social: Arc<dyn SocialRepository>,
        default_page_size: i64,
    ) -> Self {
        Self {
            content,
            social,
            default_page_size,
        }
    }

    async fn page(
        &self,
        query: ContentQuery,
        request: PageRequest,
    ) -> Result<Page<ContentItem>, DomainError> {
        let (items, total) = self.content.find_page(&query, request).await?;
        debug!(?query, total, "Content page loaded");
        Ok(Page::new(items, request, total))
    }

    /// Newest first; a non-blank keyword narrows to titles or tags containing it.
    pub async fn get_paginated(
        &self,
        keyword: Option<&str>,
        page: i64,
        size: i64,
    ) -> Result<Page<ContentItem>, DomainError> {
        let query = ContentQuery::Latest {
            keyword: non_blank(keyword),
        };
        self.page(query, PageRequest::new(page, size)).await
    }

    pub async fn get_most_liked(&self, page: i64, size: i64) -> Result<Page<ContentItem>, DomainError> {
        self.page(ContentQuery::MostLiked, PageRequest::new(page, size))
            .await
    }

    pub async fn get_most_viewed(&self, page: i64, size: i64) -> Result<Page<ContentItem>, DomainError> {
        self.page(ContentQuery::MostViewed, PageRequest::new(page, size))
            .await
    }

    pub async fn get_by_tag(
        &self,
        tag: &str,
        page: i64,
        size: i64,
    ) -> Result<Page<ContentItem>, DomainError> {
        let tag = non_blank(Some(tag))
            .ok_or_else(|| DomainError::ValidationError("Tag must not be blank.".into()))?;
        self.page(ContentQuery::Tagged { tag }, PageRequest::new(page, size))
            .await
    }

    /// Picks the listing for the dashboard. A recognised `filter` wins, then a
    /// non-blank `tag`, then a non-blank `keyword`, and otherwise the latest
    /// uploads are shown.
    #[instrument(skip(self, request, user), fields(filter = ?request.filter, user_id = user.map(|u| u.id)))]
    pub async fn dashboard(
        &self,
        request: DashboardRequest,
        user: Option<&AuthenticatedUser>,
    ) -> Result<DashboardView, DomainError> {
        let page = request.page.unwrap_or(1);
        let size = request.page_size.unwrap_or(self.default_page_size);
        let filter = request.filter.as_deref().and_then(ContentFilter::parse);
        let tag = non_blank(request.tag.as_deref());
        let keyword = non_blank(request.keyword.as_deref());

        let (result, filter_title) = match (filter, &tag, &keyword) {
            (Some(ContentFilter::MostLiked), _, _) => {
                (self.get_most_liked(page, size).await?, "Most Liked".to_string())
            }
            (Some(ContentFilter::MostViewed), _, _) => {
                (self.get_most_viewed(page, size).await?, "Most Viewed".to_string())
            }
            (None, Some(tag), _) => (
                self.get_by_tag(tag, page, size).await?,
                format!("Tag: {}", tag),
            ),
            (None, None, Some(keyword)) => (
                self.get_paginated(Some(keyword), page, size).await?,
                format!("Search: {}", keyword),
            ),
            (None, None, None) => (
                self.get_paginated(None, page, size).await?,
                "Latest Content".to_string(),
            ),
        };

        let liked_content_ids = match user {
            Some(user) => self.social.liked_content_ids(user.id).await?,
            None => Vec::new(),
        };

        Ok(DashboardView {
            page: result,
            filter_title,
            filter,
            keyword,
            tag,
            liked_content_ids,
        })
    }
}
