use crate::domain::{
    content::errors::DomainError,
    identity::{
        repository::UserRepository,
        user::{Role, User},
    },
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use tracing::{info, instrument, warn};

const USER_COLUMNS: &str = "id, username, email, name, password_hash, role, created_at";

#[derive(FromRow)]
struct UserRow {
    id: i64,
    username: String,
    email: Option<String>,
    name: Option<String>,
    password_hash: String,
    role: String,
    created_at: DateTime<Utc>,
}

impl From<UserRow> for User {
    fn from(r: UserRow) -> Self {
        User {
            id: r.id,
            username: r.username,
            email: r.email,
            name: r.name,
            password_hash: r.password_hash,
            role: Role::parse(&r.role),
            created_at: r.created_at,
        }
    }
}

pub struct SqlxUserRepository {
    pub pool: PgPool,
}

impl SqlxUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Turns a unique violation on `users` into the message shown to the person registering.
fn map_unique_violation(e: sqlx::Error) -> DomainError {
    if let sqlx::Error::Database(db_err) = &e {
        if db_err.code().as_deref() == Some("23505") {
            return match db_err.constraint() {
                Some("users_email_key") => {
                    DomainError::ValidationError("Email is already in use.".into())
                }
                _ => DomainError::ValidationError("Username is already taken.".into()),
            };
        }
    }
    DomainError::InfrastructureError(e.to_string())
}

#[async_trait]
impl UserRepository for SqlxUserRepository {
    #[instrument(skip(self, email, name, password_hash))]
    async fn create(
        &self,
        username: &str,
        email: Option<String>,
        name: Option<String>,
        password_hash: &str,
    ) -> Result<User, DomainError> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "INSERT INTO users (username, email, name, password_hash, role)
             VALUES ($1, $2, $3, $4, 'USER')
             RETURNING {USER_COLUMNS}"
        ))
        .bind(username)
        .bind(email)
        .bind(name)
        .bind(password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(map_unique_violation)?;

        info!("Registered user {}", row.id);
        Ok(row.into())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE username = $1"
        ))
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::InfrastructureError(e.to_string()))?;
        Ok(row.map(User::from))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, DomainError> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::InfrastructureError(e.to_string()))?;
        Ok(row.map(User::from))
    }

    #[instrument(skip(self, email, password_hash))]
    async fn upsert_admin(
        &self,
        username: &str,
        email: Option<String>,
        password_hash: &str,
    ) -> Result<User, DomainError> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "INSERT INTO users (username, email, name, password_hash, role)
             VALUES ($1, $2, 'Administrator', $3, 'ADMIN')
             ON CONFLICT ON CONSTRAINT users_username_key DO UPDATE
             SET role = 'ADMIN',
                 password_hash = EXCLUDED.password_hash,
                 email = COALESCE(users.email, EXCLUDED.email)
             RETURNING {USER_COLUMNS}"
        ))
        .bind(username)
        .bind(email)
        .bind(password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            warn!("Admin bootstrap for '{}' failed: {}", username, e);
            map_unique_violation(e)
        })?;

        Ok(row.into())
    }
}
