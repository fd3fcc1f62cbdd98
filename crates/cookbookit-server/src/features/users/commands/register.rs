//! Register a new user
//!
//! Creates the account row and its default dietary preferences in one
//! transaction, so a user always has a preferences row. Passwords are
//! stored as bcrypt hashes only.

use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::features::shared::validation::{
    validate_email, validate_name, EmailValidationError, NameValidationError,
};
use crate::features::users::types::UserProfile;

const MIN_PASSWORD_LENGTH: usize = 8;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterUserCommand {
    pub username: String,
    pub email: String,
    /// Never serialized back out.
    #[serde(skip_serializing)]
    pub password: String,
}

pub type RegisterUserResponse = UserProfile;

#[derive(Debug, thiserror::Error)]
pub enum RegisterUserError {
    #[error("{0}")]
    Username(#[from] NameValidationError),

    #[error("{0}")]
    Email(#[from] EmailValidationError),

    #[error("Password must be at least {MIN_PASSWORD_LENGTH} characters")]
    PasswordTooShort,

    #[error("A user with that username or email already exists")]
    Duplicate,

    #[error("Password hashing failed: {0}")]
    Hash(#[from] bcrypt::BcryptError),

    #[error("Database error: {0}")]
    Database(sqlx::Error),
}

impl From<sqlx::Error> for RegisterUserError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(ref db_err) = err {
            if db_err.is_unique_violation() {
                return Self::Duplicate;
            }
        }
        Self::Database(err)
    }
}

impl RegisterUserCommand {
    pub fn validate(&self) -> Result<(), RegisterUserError> {
        validate_name(&self.username, "Username", 100)?;
        validate_email(&self.email)?;
        if self.password.len() < MIN_PASSWORD_LENGTH {
            return Err(RegisterUserError::PasswordTooShort);
        }
        Ok(())
    }
}

#[tracing::instrument(skip(pool, command), fields(username = %command.username))]
pub async fn handle(
    pool: PgPool,
    command: RegisterUserCommand,
) -> Result<RegisterUserResponse, RegisterUserError> {
    command.validate()?;

    let password_hash = bcrypt::hash(&command.password, bcrypt::DEFAULT_COST)?;

    let mut tx = pool.begin().await?;

    let user: UserProfile = sqlx::query_as(
        "INSERT INTO users (username, email, password_hash) \
         VALUES ($1, $2, $3) \
         RETURNING id, username, email, created_at",
    )
    .bind(&command.username)
    .bind(&command.email)
    .bind(&password_hash)
    .fetch_one(&mut *tx)
    .await?;

    sqlx::query("INSERT INTO user_preferences (user_id) VALUES ($1)")
        .bind(user.id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;

    tracing::info!(user_id = %user.id, "User registered");

    Ok(user)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command() -> RegisterUserCommand {
        RegisterUserCommand {
            username: "homecook".to_string(),
            email: "cook@example.com".to_string(),
            password: "correct horse".to_string(),
        }
    }

    #[test]
    fn valid_command_passes() {
        assert!(command().validate().is_ok());
    }

    #[test]
    fn short_password_rejected() {
        let mut cmd = command();
        cmd.password = "short".to_string();
        assert!(matches!(
            cmd.validate(),
            Err(RegisterUserError::PasswordTooShort)
        ));
    }

    #[test]
    fn bad_email_rejected() {
        let mut cmd = command();
        cmd.email = "not-an-email".to_string();
        assert!(matches!(cmd.validate(), Err(RegisterUserError::Email(_))));
    }
}
