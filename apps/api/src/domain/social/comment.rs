use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Serialize, Deserialize, TS, sqlx::FromRow, PartialEq)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Comment {
    pub id: i64,
    pub content_id: i64,
    pub user_name: String,
    pub text: String,
    pub posted_at: DateTime<Utc>,
}
