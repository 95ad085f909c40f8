use crate::domain::{
    content::entity::ContentItem,
    social::{comment::Comment, like::LikeToggle},
};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Detail page payload: the item with its view already counted.
#[derive(Debug, Clone, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ContentView {
    pub content: ContentItem,
    pub is_liked: bool,
    pub comments: Vec<Comment>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct LikeResponse {
    pub success: bool,
    pub new_likes: i64,
    pub is_liked: bool,
}

impl From<LikeToggle> for LikeResponse {
    fn from(toggle: LikeToggle) -> Self {
        Self {
            success: true,
            new_likes: toggle.like_count,
            is_liked: toggle.liked,
        }
    }
}

#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export)]
pub struct AddCommentRequest {
    pub comment: String,
}

#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
pub struct CommentResponse {
    pub success: bool,
    pub comment: Comment,
}
