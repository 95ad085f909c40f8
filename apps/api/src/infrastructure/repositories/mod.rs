pub mod sqlx_content_repository;
pub mod sqlx_social_repository;
pub mod sqlx_user_repository;
