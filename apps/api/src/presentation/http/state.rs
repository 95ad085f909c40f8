use crate::{
    application::{
        accounts::use_case::AccountsUseCase, browse_content::use_case::BrowseContentUseCase,
        interaction::use_case::InteractionService, manage_content::use_case::ManageContentUseCase,
    },
    config::Config,
    infrastructure::{
        repositories::{
            sqlx_content_repository::SqlxContentRepository,
            sqlx_social_repository::SqlxSocialRepository,
            sqlx_user_repository::SqlxUserRepository,
        },
        security::{rate_limiter::RateLimiter, upload_validation::UploadPolicy},
        storage::traits::StorageService,
    },
};
use sqlx::PgPool;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub config: Config,
    pub rate_limiter: RateLimiter,
    pub browse: Arc<BrowseContentUseCase>,
    pub interaction: Arc<InteractionService>,
    pub manage: Arc<ManageContentUseCase>,
    pub accounts: Arc<AccountsUseCase>,
}

impl AppState {
    /// Wires the Postgres repositories into the use cases.
    pub fn new(
        db: PgPool,
        config: Config,
        storage: Arc<dyn StorageService>,
        rate_limiter: RateLimiter,
    ) -> Self {
        let content = Arc::new(SqlxContentRepository::new(db.clone()));
        let social = Arc::new(SqlxSocialRepository::new(db.clone()));
        let users = Arc::new(SqlxUserRepository::new(db.clone()));

        let browse = BrowseContentUseCase::new(
            content.clone(),
            social.clone(),
            config.dashboard_page_size,
        );
        let interaction = InteractionService::new(content.clone(), social);
        let manage =
            ManageContentUseCase::new(content, storage, UploadPolicy::new(config.max_upload_bytes));
        let accounts = AccountsUseCase::new(users, config.jwt_secret.clone());

        Self {
            db,
            config,
            rate_limiter,
            browse: Arc::new(browse),
            interaction: Arc::new(interaction),
            manage: Arc::new(manage),
            accounts: Arc::new(accounts),
        }
    }
}
