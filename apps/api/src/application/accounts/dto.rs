use crate::domain::identity::user::User;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
    pub email: Option<String>,
    pub name: Option<String>,
}

#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Bearer token plus the account it was issued for.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
pub struct AuthSession {
    pub token: String,
    pub user: User,
}
