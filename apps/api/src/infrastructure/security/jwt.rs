use crate::domain::identity::user::{AuthenticatedUser, Role, User};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

pub const TOKEN_TTL_DAYS: i64 = 7;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserClaims {
    pub sub: String,
    pub username: String,
    pub role: String,
    pub exp: usize,
}

impl UserClaims {
    /// `None` when the subject is not a numeric user id.
    pub fn into_identity(self) -> Option<AuthenticatedUser> {
        let id = self.sub.parse::<i64>().ok()?;
        Some(AuthenticatedUser {
            id,
            username: self.username,
            role: Role::parse(&self.role),
        })
    }
}

pub fn issue_token(user: &User, secret: &str) -> anyhow::Result<String> {
    let exp = (chrono::Utc::now() + chrono::Duration::days(TOKEN_TTL_DAYS)).timestamp() as usize;
    let claims = UserClaims {
        sub: user.id.to_string(),
        username: user.username.clone(),
        role: user.role.as_str().to_string(),
        exp,
    };
    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )?;
    Ok(token)
}

pub fn verify_token(token: &str, secret: &str) -> Option<AuthenticatedUser> {
    decode::<UserClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .ok()
    .and_then(|data| data.claims.into_identity())
}
