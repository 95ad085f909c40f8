use serde::{Deserialize, Serialize};
use ts_rs::TS;

pub const MAX_PAGE_SIZE: i64 = 100;

/// 1-based page request as received at the API boundary.
///
/// Out-of-range input is clamped rather than rejected: `page < 1` becomes 1
/// and `size` is forced into `1..=MAX_PAGE_SIZE`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, TS, PartialEq, Eq)]
#[ts(export)]
pub struct PageRequest {
    pub page: i64,
    pub size: i64,
}

impl PageRequest {
    pub fn new(page: i64, size: i64) -> Self {
        Self {
            page: page.max(1),
            size: size.clamp(1, MAX_PAGE_SIZE),
        }
    }

    /// Zero-based row offset for SQL. Saturates, so a page far past the end
    /// yields an empty page instead of overflowing.
    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.size)
    }

    pub fn limit(&self) -> i64 {
        self.size
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, TS, PartialEq)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: i64,
    pub page_size: i64,
    pub total_items: i64,
    pub total_pages: i64,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, request: PageRequest, total_items: i64) -> Self {
        Self {
            items,
            page: request.page,
            page_size: request.size,
            total_items,
            total_pages: total_pages(total_items, request.size),
        }
    }
}

/// `ceil(total / size)`, zero when there is nothing to show.
pub fn total_pages(total_items: i64, size: i64) -> i64 {
    if total_items <= 0 || size <= 0 {
        return 0;
    }
    (total_items - 1) / size + 1
}
