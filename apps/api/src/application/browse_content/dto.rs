use crate::domain::{content::entity::ContentItem, shared::pagination::Page};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Query string accepted by the dashboard.
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct DashboardRequest {
    pub page: Option<i64>,
    pub page_size: Option<i64>,
    pub keyword: Option<String>,
    pub filter: Option<String>,
    pub tag: Option<String>,
}

/// Named orderings selectable through `?filter=`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, TS, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ContentFilter {
    MostLiked,
    MostViewed,
}

impl ContentFilter {
    /// `best_videos` is kept as an alias of `most_liked` for old links.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "best_videos" | "most_liked" => Some(ContentFilter::MostLiked),
            "most_viewed" => Some(ContentFilter::MostViewed),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct DashboardView {
    pub page: Page<ContentItem>,
    /// Heading for the current listing, e.g. `"Most Liked"` or `"Tag: travel"`
    pub filter_title: String,
    pub filter: Option<ContentFilter>,
    pub keyword: Option<String>,
    pub tag: Option<String>,
    /// Items on any page the caller has liked; empty for anonymous callers
    pub liked_content_ids: Vec<i64>,
}
