//! Verify login credentials
//!
//! Checks a username/password pair against the stored bcrypt hash and
//! returns the user profile on success. Unknown usernames and wrong
//! passwords are deliberately indistinguishable to the caller.

use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

use crate::features::users::types::UserProfile;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginCommand {
    pub username: String,
    #[serde(skip_serializing)]
    pub password: String,
}

pub type LoginResponse = UserProfile;

#[derive(Debug, thiserror::Error)]
pub enum LoginError {
    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error("Password verification failed: {0}")]
    Hash(#[from] bcrypt::BcryptError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

#[derive(Debug, sqlx::FromRow)]
struct StoredUser {
    id: Uuid,
    username: String,
    email: String,
    password_hash: String,
    created_at: chrono::DateTime<chrono::Utc>,
}

#[tracing::instrument(skip(pool, command), fields(username = %command.username))]
pub async fn handle(pool: PgPool, command: LoginCommand) -> Result<LoginResponse, LoginError> {
    let user: Option<StoredUser> = sqlx::query_as(
        "SELECT id, username, email, password_hash, created_at FROM users WHERE username = $1",
    )
    .bind(&command.username)
    .fetch_optional(&pool)
    .await?;

    let user = user.ok_or(LoginError::InvalidCredentials)?;

    if !bcrypt::verify(&command.password, &user.password_hash)? {
        return Err(LoginError::InvalidCredentials);
    }

    tracing::info!(user_id = %user.id, "Login verified");

    Ok(UserProfile {
        id: user.id,
        username: user.username,
        email: user.email,
        created_at: user.created_at,
    })
}
