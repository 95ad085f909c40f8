use super::dto::ContentView;
use crate::domain::{
    content::{errors::DomainError, repository::ContentRepository, value_objects::CommentText},
    identity::user::AuthenticatedUser,
    social::{comment::Comment, like::LikeToggle, repository::SocialRepository},
};
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Likes, views and comments on a single content item.
///
/// Every operation that acts on behalf of a person takes the
/// [`AuthenticatedUser`] explicitly; anonymous callers pass `None` where the
/// operation allows it.
pub struct InteractionService {
    content: Arc<dyn ContentRepository>,
    social: Arc<dyn SocialRepository>,
}

impl InteractionService {
    pub fn new(content: Arc<dyn ContentRepository>, social: Arc<dyn SocialRepository>) -> Self {
        Self { content, social }
    }

    #[instrument(skip(self, user), fields(user_id = user.id))]
    pub async fn toggle_like(
        &self,
        content_id: i64,
        user: &AuthenticatedUser,
    ) -> Result<LikeToggle, DomainError> {
        let toggle = self.social.toggle_like(content_id, user.id).await?;
        info!(
            liked = toggle.liked,
            like_count = toggle.like_count,
            "User {} toggled like on content {}",
            user.id,
            content_id
        );
        Ok(toggle)
    }

    pub async fn increment_views(&self, content_id: i64) -> Result<i64, DomainError> {
        self.content.increment_views(content_id).await
    }

    /// Anonymous callers never like anything.
    pub async fn is_liked_by_user(
        &self,
        content_id: i64,
        user: Option<&AuthenticatedUser>,
    ) -> Result<bool, DomainError> {
        match user {
            Some(user) => self.social.has_liked(content_id, user.id).await,
            None => Ok(false),
        }
    }

    pub async fn liked_content_ids(
        &self,
        user: Option<&AuthenticatedUser>,
    ) -> Result<Vec<i64>, DomainError> {
        match user {
            Some(user) => self.social.liked_content_ids(user.id).await,
            None => Ok(Vec::new()),
        }
    }

    #[instrument(skip(self, user, text), fields(user_id = user.id))]
    pub async fn add_comment(
        &self,
        content_id: i64,
        user: &AuthenticatedUser,
        text: &str,
    ) -> Result<Comment, DomainError> {
        let text = CommentText::new(text).map_err(|_| {
            DomainError::ValidationError("Comment must be between 1 and 500 characters.".into())
        })?;
        let comment = self
            .social
            .add_comment(content_id, &user.username, &text.value)
            .await?;
        debug!("Comment {} added to content {}", comment.id, content_id);
        Ok(comment)
    }

    pub async fn comments(&self, content_id: i64) -> Result<Vec<Comment>, DomainError> {
        self.social.get_comments(content_id).await
    }

    /// Loads the item for its detail page and counts the view.
    #[instrument(skip(self, user))]
    pub async fn view_content(
        &self,
        content_id: i64,
        user: Option<&AuthenticatedUser>,
    ) -> Result<ContentView, DomainError> {
        let mut content = self
            .content
            .find_by_id(content_id)
            .await?
            .ok_or_else(|| DomainError::content_not_found(content_id))?;

        let is_liked = self.is_liked_by_user(content_id, user).await?;
        content.view_count = self.content.increment_views(content_id).await?;
        let comments = self.social.get_comments(content_id).await?;

        Ok(ContentView {
            content,
            is_liked,
            comments,
        })
    }
}
