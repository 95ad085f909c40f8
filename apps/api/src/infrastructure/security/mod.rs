pub mod jwt;
pub mod rate_limiter;
pub mod upload_validation;
