//! Application configuration loaded from environment variables.
//!
//! `main` calls `dotenvy::dotenv()` first, so a local `.env` file works the
//! same as a real environment.
//!
//! # Environment Variables
//!
//! ## Required Variables
//! - `DATABASE_URL`: PostgreSQL connection string
//! - `REDIS_URL`: Redis connection URL, used by the interaction rate limiter
//! - `STORAGE_ACCESS_KEY_ID` / `STORAGE_SECRET_ACCESS_KEY`: S3 credentials
//! - `STORAGE_ENDPOINT`: S3-compatible API endpoint
//! - `STORAGE_BUCKET_NAME`: bucket receiving uploaded media
//! - `STORAGE_PUBLIC_URL`: public base URL for stored objects
//! - `JWT_SECRET`: secret for signing bearer tokens
//! - `ADMIN_USERNAME`: administrator account created or promoted at startup
//! - `ADMIN_PASSWORD_HASH`: bcrypt hash of the administrator password (see the `hash_password` binary)
//!
//! ## Optional Variables
//! - `RUST_LOG`: log filter (default: "info,mediashowcase=debug,tower_http=debug")
//! - `HOST`: bind address (default: "0.0.0.0")
//! - `PORT`: bind port (default: 8080)
//! - `DATABASE_MAX_CONNECTIONS`: pool size (default: 20)
//! - `STORAGE_REGION`: region (default: "auto")
//! - `STORAGE_FORCE_PATH_STYLE`: path-style bucket addressing (default: false)
//! - `ADMIN_EMAIL`: administrator email
//! - `DASHBOARD_PAGE_SIZE`: items per dashboard page (default: 9)
//! - `MAX_UPLOAD_BYTES`: largest accepted media file (default: 100 MiB)
//! - `RATE_LIMIT_INTERACTIONS_PER_MINUTE`: likes and comments per client IP per minute, 0 disables (default: 60)
//! - `CORS_ALLOWED_ORIGINS`: comma-separated origins; unset allows any origin
//! - `IGNORE_MISSING_MIGRATIONS`: skip migrations missing locally (default: true)

use serde::Deserialize;

pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 100 * 1024 * 1024;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub database_url: String,

    pub database_max_connections: u32,

    pub redis_url: String,

    pub storage_access_key_id: String,

    pub storage_secret_access_key: String,

    /// e.g. `https://<account>.r2.cloudflarestorage.com` or a MinIO URL
    pub storage_endpoint: String,

    pub storage_region: String,

    pub storage_force_path_style: bool,

    pub storage_bucket_name: String,

    /// Base URL prepended to object keys to build `mediaUrl`
    pub storage_public_url: String,

    pub host: String,

    pub port: u16,

    pub jwt_secret: String,

    pub admin_username: String,

    pub admin_password_hash: String,

    pub admin_email: Option<String>,

    pub dashboard_page_size: i64,

    pub max_upload_bytes: usize,

    pub rate_limit_interactions_per_minute: u32,

    pub cors_allowed_origins: Vec<String>,

    pub ignore_missing_migrations: bool,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a required variable is missing or any variable
    /// cannot be parsed to the expected type.
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            database_url: env_required("DATABASE_URL")?,
            database_max_connections: env_or("DATABASE_MAX_CONNECTIONS", 20)?,
            redis_url: env_required("REDIS_URL")?,
            storage_access_key_id: env_required("STORAGE_ACCESS_KEY_ID")?,
            storage_secret_access_key: env_required("STORAGE_SECRET_ACCESS_KEY")?,
            storage_endpoint: env_required("STORAGE_ENDPOINT")?,
            storage_region: env_or("STORAGE_REGION", "auto".to_string())?,
            storage_force_path_style: env_or("STORAGE_FORCE_PATH_STYLE", false)?,
            storage_bucket_name: env_required("STORAGE_BUCKET_NAME")?,
            storage_public_url: env_required("STORAGE_PUBLIC_URL")?,
            host: env_or("HOST", "0.0.0.0".to_string())?,
            port: env_or("PORT", 8080)?,
            jwt_secret: env_required("JWT_SECRET")?,
            admin_username: env_required("ADMIN_USERNAME")?,
            admin_password_hash: env_required("ADMIN_PASSWORD_HASH")?,
            admin_email: std::env::var("ADMIN_EMAIL")
                .ok()
                .filter(|v| !v.trim().is_empty()),
            dashboard_page_size: env_or("DASHBOARD_PAGE_SIZE", 9)?,
            max_upload_bytes: env_or("MAX_UPLOAD_BYTES", DEFAULT_MAX_UPLOAD_BYTES)?,
            rate_limit_interactions_per_minute: env_or("RATE_LIMIT_INTERACTIONS_PER_MINUTE", 60)?,
            cors_allowed_origins: std::env::var("CORS_ALLOWED_ORIGINS")
                .map(|v| parse_list(&v))
                .unwrap_or_default(),
            ignore_missing_migrations: env_or("IGNORE_MISSING_MIGRATIONS", true)?,
        })
    }
}

/// Load a required environment variable.
fn env_required(key: &str) -> anyhow::Result<String> {
    std::env::var(key).map_err(|_| anyhow::anyhow!("Missing required environment variable: {}", key))
}

/// Load an environment variable, falling back to `default` when unset.
///
/// # Errors
///
/// Returns an error if the variable is set but cannot be parsed.
fn env_or<T>(key: &str, default: T) -> anyhow::Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(val) => val
            .trim()
            .parse::<T>()
            .map_err(|e| anyhow::anyhow!("Failed to parse {}: {}", key, e)),
        Err(_) => Ok(default),
    }
}

fn parse_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
