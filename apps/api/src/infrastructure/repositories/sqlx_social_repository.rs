use crate::domain::{
    content::errors::DomainError,
    social::{comment::Comment, like::LikeToggle, repository::SocialRepository},
};
use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{debug, instrument};

const COMMENT_COLUMNS: &str = "id, content_id, user_name, comment_text AS text, posted_at";

pub struct SqlxSocialRepository {
    pub pool: PgPool,
}

impl SqlxSocialRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// The content row is locked before the insert, so a foreign key violation
/// here means the account behind the token no longer exists.
fn map_like_insert_error(e: sqlx::Error) -> DomainError {
    if let sqlx::Error::Database(db_err) = &e {
        if db_err.code().as_deref() == Some("23503") {
            return DomainError::Unauthorized;
        }
    }
    DomainError::InfrastructureError(e.to_string())
}

#[async_trait]
impl SocialRepository for SqlxSocialRepository {
    /// Locks the content row for the duration of the transaction so concurrent
    /// toggles on the same item are applied one after another and the counter
    /// always equals the number of ledger rows.
    #[instrument(skip(self))]
    async fn toggle_like(&self, content_id: i64, user_id: i64) -> Result<LikeToggle, DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DomainError::InfrastructureError(e.to_string()))?;

        let locked = sqlx::query_scalar::<_, i64>("SELECT id FROM content WHERE id = $1 FOR UPDATE")
            .bind(content_id)
            .fetch_optional(&mut *tx)
            .await
            .map_err(|e| DomainError::InfrastructureError(e.to_string()))?;
        if locked.is_none() {
            return Err(DomainError::content_not_found(content_id));
        }

        let removed = sqlx::query("DELETE FROM likes WHERE content_id = $1 AND user_id = $2")
            .bind(content_id)
            .bind(user_id)
            .execute(&mut *tx)
            .await
            .map_err(|e| DomainError::InfrastructureError(e.to_string()))?
            .rows_affected();

        let (liked, like_count) = if removed > 0 {
            let count = sqlx::query_scalar::<_, i64>(
                "UPDATE content SET like_count = GREATEST(0, like_count - 1) WHERE id = $1 RETURNING like_count",
            )
            .bind(content_id)
            .fetch_one(&mut *tx)
            .await
            .map_err(|e| DomainError::InfrastructureError(e.to_string()))?;
            (false, count)
        } else {
            let inserted = sqlx::query(
                "INSERT INTO likes (user_id, content_id) VALUES ($1, $2)
                 ON CONFLICT ON CONSTRAINT likes_user_content_key DO NOTHING",
            )
            .bind(user_id)
            .bind(content_id)
            .execute(&mut *tx)
            .await
            .map_err(map_like_insert_error)?
            .rows_affected();

            let count = if inserted > 0 {
                sqlx::query_scalar::<_, i64>(
                    "UPDATE content SET like_count = like_count + 1 WHERE id = $1 RETURNING like_count",
                )
                .bind(content_id)
                .fetch_one(&mut *tx)
                .await
            } else {
                sqlx::query_scalar::<_, i64>("SELECT like_count FROM content WHERE id = $1")
                    .bind(content_id)
                    .fetch_one(&mut *tx)
                    .await
            }
            .map_err(|e| DomainError::InfrastructureError(e.to_string()))?;
            (true, count)
        };

        tx.commit()
            .await
            .map_err(|e| DomainError::InfrastructureError(e.to_string()))?;

        debug!(liked, like_count, "Like toggled");
        Ok(LikeToggle { liked, like_count })
    }

    async fn has_liked(&self, content_id: i64, user_id: i64) -> Result<bool, DomainError> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM likes WHERE content_id = $1 AND user_id = $2)",
        )
        .bind(content_id)
        .bind(user_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::InfrastructureError(e.to_string()))?;
        Ok(exists)
    }

    async fn liked_content_ids(&self, user_id: i64) -> Result<Vec<i64>, DomainError> {
        let ids = sqlx::query_scalar::<_, i64>(
            "SELECT content_id FROM likes WHERE user_id = $1 ORDER BY content_id",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::InfrastructureError(e.to_string()))?;
        Ok(ids)
    }

    #[instrument(skip(self, text), fields(text_len = text.len()))]
    async fn add_comment(
        &self,
        content_id: i64,
        user_name: &str,
        text: &str,
    ) -> Result<Comment, DomainError> {
        // The existence check and the insert are one statement, so a missing
        // item surfaces as no row rather than a foreign key error.
        let row = sqlx::query_as::<_, Comment>(&format!(
            "INSERT INTO comments (content_id, user_name, comment_text)
             SELECT $1::bigint, $2::text, $3::text WHERE EXISTS (SELECT 1 FROM content WHERE id = $1)
             RETURNING {COMMENT_COLUMNS}"
        ))
        .bind(content_id)
        .bind(user_name)
        .bind(text)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::InfrastructureError(e.to_string()))?;

        row.ok_or_else(|| DomainError::content_not_found(content_id))
    }

    async fn get_comments(&self, content_id: i64) -> Result<Vec<Comment>, DomainError> {
        let rows = sqlx::query_as::<_, Comment>(&format!(
            "SELECT {COMMENT_COLUMNS} FROM comments
             WHERE content_id = $1
             ORDER BY posted_at DESC, id DESC"
        ))
        .bind(content_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::InfrastructureError(e.to_string()))?;
        Ok(rows)
    }
}
