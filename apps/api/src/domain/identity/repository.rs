use super::user::User;
use crate::domain::content::errors::DomainError;
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Fails with `ValidationError` when the username or email is taken.
    async fn create(
        &self,
        username: &str,
        email: Option<String>,
        name: Option<String>,
        password_hash: &str,
    ) -> Result<User, DomainError>;
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, DomainError>;
    /// Creates the account as ADMIN, or promotes it and resets the password hash.
    async fn upsert_admin(
        &self,
        username: &str,
        email: Option<String>,
        password_hash: &str,
    ) -> Result<User, DomainError>;
}
