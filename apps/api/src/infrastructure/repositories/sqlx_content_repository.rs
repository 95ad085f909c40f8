use crate::domain::{
    content::{
        entity::{ContentChanges, ContentItem, MediaType, NewContent},
        errors::DomainError,
        repository::{ContentQuery, ContentRepository},
        value_objects::escape_like,
    },
    shared::pagination::PageRequest,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};
use tracing::{debug, error, info, instrument};

const CONTENT_COLUMNS: &str = "id, title, description, media_url, media_key, media_type, tags, \
     like_count, view_count, uploaded_at, updated_at";

#[derive(FromRow)]
struct ContentRow {
    id: i64,
    title: String,
    description: Option<String>,
    media_url: String,
    media_key: Option<String>,
    media_type: String,
    tags: String,
    like_count: i64,
    view_count: i64,
    uploaded_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<ContentRow> for ContentItem {
    fn from(r: ContentRow) -> Self {
        ContentItem {
            id: r.id,
            title: r.title,
            description: r.description,
            media_url: r.media_url,
            media_key: r.media_key,
            media_type: MediaType::parse(&r.media_type),
            tags: r.tags,
            like_count: r.like_count.max(0),
            view_count: r.view_count.max(0),
            uploaded_at: r.uploaded_at,
            updated_at: r.updated_at,
        }
    }
}

pub struct SqlxContentRepository {
    pub pool: PgPool,
}

impl SqlxContentRepository {
    pub fn new(pool: PgPool) -> Self {
        info!("Initializing SqlxContentRepository with connection pool");
        Self { pool }
    }
}

/// Appends the WHERE clause for a query. Both the count and the data query
/// go through here so totals always agree with the rows returned.
fn apply_filters(qb: &mut QueryBuilder<'_, Postgres>, query: &ContentQuery) {
    match query {
        ContentQuery::Latest {
            keyword: Some(keyword),
        } => {
            let pattern = format!("%{}%", escape_like(keyword));
            debug!("Filtering by keyword: {}", keyword);
            qb.push(" WHERE (title ILIKE ")
                .push_bind(pattern.clone())
                .push(" OR tags ILIKE ")
                .push_bind(pattern)
                .push(")");
        }
        ContentQuery::Tagged { tag } => {
            debug!("Filtering by tag: {}", tag);
            qb.push(" WHERE tags ILIKE ")
                .push_bind(format!("%{}%", escape_like(tag)));
        }
        ContentQuery::Latest { keyword: None } | ContentQuery::MostLiked | ContentQuery::MostViewed => {}
    }
}

fn order_clause(query: &ContentQuery) -> &'static str {
    match query {
        ContentQuery::MostLiked => " ORDER BY like_count DESC, uploaded_at DESC, id DESC",
        ContentQuery::MostViewed => " ORDER BY view_count DESC, uploaded_at DESC, id DESC",
        ContentQuery::Latest { .. } | ContentQuery::Tagged { .. } => {
            " ORDER BY uploaded_at DESC, id DESC"
        }
    }
}

#[async_trait]
impl ContentRepository for SqlxContentRepository {
    #[instrument(skip(self, content), fields(title = %content.title))]
    async fn create(&self, content: &NewContent) -> Result<ContentItem, DomainError> {
        let row = sqlx::query_as::<_, ContentRow>(&format!(
            "INSERT INTO content (title, description, media_url, media_key, media_type, tags)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {CONTENT_COLUMNS}"
        ))
        .bind(&content.title)
        .bind(&content.description)
        .bind(&content.media_url)
        .bind(&content.media_key)
        .bind(content.media_type.as_str())
        .bind(&content.tags)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            error!("Failed to create content '{}': {}", content.title, e);
            DomainError::InfrastructureError(format!("Failed to create content: {}", e))
        })?;

        info!("Created content {}", row.id);
        Ok(row.into())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<ContentItem>, DomainError> {
        let row = sqlx::query_as::<_, ContentRow>(&format!(
            "SELECT {CONTENT_COLUMNS} FROM content WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::InfrastructureError(e.to_string()))?;
        Ok(row.map(ContentItem::from))
    }

    #[instrument(skip(self, changes), fields(content_id = id, replaces_media = changes.media.is_some()))]
    async fn update(&self, id: i64, changes: &ContentChanges) -> Result<ContentItem, DomainError> {
        let media = changes.media.as_ref();
        let row = sqlx::query_as::<_, ContentRow>(&format!(
            "UPDATE content
             SET title = $2,
                 description = $3,
                 tags = $4,
                 media_url = COALESCE($5, media_url),
                 media_key = CASE WHEN $5::text IS NULL THEN media_key ELSE $6 END,
                 media_type = COALESCE($7, media_type),
                 updated_at = NOW()
             WHERE id = $1
             RETURNING {CONTENT_COLUMNS}"
        ))
        .bind(id)
        .bind(&changes.title)
        .bind(&changes.description)
        .bind(&changes.tags)
        .bind(media.map(|m| m.url.clone()))
        .bind(media.map(|m| m.key.clone()))
        .bind(media.map(|m| m.media_type.as_str()))
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::InfrastructureError(e.to_string()))?;

        let updated = row.ok_or_else(|| DomainError::content_not_found(id))?;
        Ok(updated.into())
    }

    #[instrument(skip(self), fields(content_id = id))]
    async fn delete(&self, id: i64) -> Result<ContentItem, DomainError> {
        let row = sqlx::query_as::<_, ContentRow>(&format!(
            "DELETE FROM content WHERE id = $1 RETURNING {CONTENT_COLUMNS}"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!("Failed to delete content {}: {}", id, e);
            DomainError::InfrastructureError(format!("Failed to delete content: {}", e))
        })?;

        let deleted = row.ok_or_else(|| DomainError::content_not_found(id))?;
        info!("Deleted content {}", id);
        Ok(deleted.into())
    }

    #[instrument(skip(self), fields(page = page.page, size = page.size))]
    async fn find_page(
        &self,
        query: &ContentQuery,
        page: PageRequest,
    ) -> Result<(Vec<ContentItem>, i64), DomainError> {
        let mut count_qb = QueryBuilder::<Postgres>::new("SELECT COUNT(*)::bigint FROM content");
        apply_filters(&mut count_qb, query);
        let total: i64 = count_qb
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                error!("Content count query failed: {}", e);
                DomainError::InfrastructureError(format!("Failed to count content: {}", e))
            })?;

        let mut data_qb =
            QueryBuilder::<Postgres>::new(format!("SELECT {CONTENT_COLUMNS} FROM content"));
        apply_filters(&mut data_qb, query);
        data_qb
            .push(order_clause(query))
            .push(" LIMIT ")
            .push_bind(page.limit())
            .push(" OFFSET ")
            .push_bind(page.offset());

        let rows: Vec<ContentRow> = data_qb
            .build_query_as()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                error!("Content page query failed: {}", e);
                DomainError::InfrastructureError(format!("Failed to retrieve content: {}", e))
            })?;

        debug!("Content page returned {} of {} items", rows.len(), total);
        Ok((rows.into_iter().map(ContentItem::from).collect(), total))
    }

    async fn increment_views(&self, id: i64) -> Result<i64, DomainError> {
        let views = sqlx::query_scalar::<_, i64>(
            "UPDATE content SET view_count = view_count + 1 WHERE id = $1 RETURNING view_count",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::InfrastructureError(e.to_string()))?;

        views.ok_or_else(|| DomainError::content_not_found(id))
    }
}
