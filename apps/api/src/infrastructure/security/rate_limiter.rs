use redis::{AsyncCommands, Client};
use tracing::warn;

/// Fixed-window request counter kept in Redis.
///
/// Fails open: when Redis cannot be reached the request is allowed and a
/// warning is logged.
#[derive(Clone)]
pub struct RateLimiter {
    client: Client,
    window_seconds: i64,
}

impl RateLimiter {
    pub fn new(client: Client, window_seconds: i64) -> Self {
        Self {
            client,
            window_seconds,
        }
    }

    /// Counts one hit for `key` and returns whether it is still within `limit`.
    pub async fn check(&self, key: &str, limit: u32) -> bool {
        if limit == 0 {
            return true;
        }
        let mut conn = match self.client.get_multiplexed_async_connection().await {
            Ok(conn) => conn,
            Err(e) => {
                warn!("Rate limiter unavailable, allowing request: {}", e);
                return true;
            }
        };
        let k = format!("rl:{}", key);
        let count: u32 = match conn.incr(&k, 1_u32).await {
            Ok(count) => count,
            Err(e) => {
                warn!("Rate limiter INCR failed, allowing request: {}", e);
                return true;
            }
        };
        if count == 1 {
            let _: Result<(), _> = conn.expire(&k, self.window_seconds).await;
        }
        count <= limit
    }
}
