use super::dto::{AuthSession, LoginRequest, RegisterRequest};
use crate::{
    domain::{
        content::errors::DomainError,
        identity::{
            repository::UserRepository,
            user::{AuthenticatedUser, NewUser, User},
        },
    },
    infrastructure::security::jwt,
};
use std::sync::Arc;
use tracing::{info, instrument, warn};
use validator::Validate;

pub struct AccountsUseCase {
    users: Arc<dyn UserRepository>,
    jwt_secret: String,
    hash_cost: u32,
}

impl AccountsUseCase {
    pub fn new(users: Arc<dyn UserRepository>, jwt_secret: String) -> Self {
        Self {
            users,
            jwt_secret,
            hash_cost: bcrypt::DEFAULT_COST,
        }
    }

    /// Lower bcrypt cost, for tests.
    pub fn with_hash_cost(mut self, cost: u32) -> Self {
        self.hash_cost = cost;
        self
    }

    async fn hash_password(&self, password: String) -> Result<String, DomainError> {
        let cost = self.hash_cost;
        tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
            .await
            .map_err(|e| DomainError::InfrastructureError(e.to_string()))?
            .map_err(|e| DomainError::InfrastructureError(format!("Password hashing failed: {}", e)))
    }

    #[instrument(skip(self, request), fields(username = %request.username))]
    pub async fn register(&self, request: RegisterRequest) -> Result<User, DomainError> {
        let new_user = NewUser {
            username: request.username.trim().to_string(),
            email: request
                .email
                .map(|e| e.trim().to_ascii_lowercase())
                .filter(|e| !e.is_empty()),
            name: request
                .name
                .map(|n| n.trim().to_string())
                .filter(|n| !n.is_empty()),
            password: request.password,
        };
        new_user.validate()?;

        let password_hash = self.hash_password(new_user.password).await?;
        let user = self
            .users
            .create(&new_user.username, new_user.email, new_user.name, &password_hash)
            .await?;
        info!("Account {} registered", user.id);
        Ok(user)
    }

    #[instrument(skip(self, request), fields(username = %request.username))]
    pub async fn login(&self, request: LoginRequest) -> Result<AuthSession, DomainError> {
        let Some(user) = self.users.find_by_username(request.username.trim()).await? else {
            warn!("Login attempt for unknown account");
            return Err(DomainError::Unauthorized);
        };

        let hash = user.password_hash.clone();
        let verified = tokio::task::spawn_blocking(move || bcrypt::verify(request.password, &hash))
            .await
            .map_err(|e| DomainError::InfrastructureError(e.to_string()))?
            .unwrap_or(false);
        if !verified {
            warn!("Wrong password for account {}", user.id);
            return Err(DomainError::Unauthorized);
        }

        let token = jwt::issue_token(&user, &self.jwt_secret)
            .map_err(|e| DomainError::InfrastructureError(format!("Token signing failed: {}", e)))?;
        Ok(AuthSession { token, user })
    }

    /// Accounts deleted after the token was issued are treated as logged out.
    pub async fn current_user(&self, identity: &AuthenticatedUser) -> Result<User, DomainError> {
        self.users
            .find_by_id(identity.id)
            .await?
            .ok_or(DomainError::Unauthorized)
    }

    /// Creates the configured administrator, or promotes an existing account
    /// of that name, using a precomputed bcrypt hash.
    pub async fn ensure_admin(
        &self,
        username: &str,
        password_hash: &str,
        email: Option<String>,
    ) -> Result<User, DomainError> {
        let admin = self
            .users
            .upsert_admin(username, email, password_hash)
            .await?;
        info!("Administrator account '{}' is ready", admin.username);
        Ok(admin)
    }
}
