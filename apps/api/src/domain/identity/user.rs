use chrono::{DateTime, Utc};
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use validator::Validate;

lazy_static! {
    static ref USERNAME_REGEX: regex::Regex = regex::Regex::new(r"^[A-Za-z0-9_.-]{3,30}$").unwrap();
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, TS, Default, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[ts(export)]
pub enum Role {
    #[default]
    User,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "USER",
            Role::Admin => "ADMIN",
        }
    }

    pub fn parse(value: &str) -> Self {
        if value.eq_ignore_ascii_case("ADMIN") {
            Role::Admin
        } else {
            Role::User
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, TS, PartialEq)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: Option<String>,
    pub name: Option<String>,
    #[serde(skip)]
    #[ts(skip)]
    pub password_hash: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

/// The caller on whose behalf a service operation runs.
///
/// Built by the presentation layer from a verified bearer token and passed
/// explicitly into every interaction that needs to know who is acting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub id: i64,
    pub username: String,
    pub role: Role,
}

impl AuthenticatedUser {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

impl From<&User> for AuthenticatedUser {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            role: user.role,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewUser {
    #[validate(regex(path = *USERNAME_REGEX, message = "Username must be 3-30 letters, digits, '.', '_' or '-'"))]
    pub username: String,
    #[validate(email(message = "Email address is invalid"))]
    pub email: Option<String>,
    #[validate(length(max = 100))]
    pub name: Option<String>,
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
}
