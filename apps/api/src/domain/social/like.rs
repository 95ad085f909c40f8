use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Result of flipping a user's like on an item.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, TS, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct LikeToggle {
    /// Whether the user likes the item after the toggle
    pub liked: bool,
    /// Like counter after the toggle
    pub like_count: i64,
}
