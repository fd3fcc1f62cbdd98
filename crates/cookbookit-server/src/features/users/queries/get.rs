//! Get a user profile

use sqlx::PgPool;
use uuid::Uuid;

use crate::features::users::types::UserProfile;

#[derive(Debug, Clone)]
pub struct GetUserQuery {
    pub id: Uuid,
}

pub type GetUserResponse = UserProfile;

#[derive(Debug, thiserror::Error)]
pub enum GetUserError {
    #[error("User '{0}' not found")]
    NotFound(Uuid),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

#[tracing::instrument(skip(pool), fields(user_id = %query.id))]
pub async fn handle(pool: PgPool, query: GetUserQuery) -> Result<GetUserResponse, GetUserError> {
    let user: Option<UserProfile> =
        sqlx::query_as("SELECT id, username, email, created_at FROM users WHERE id = $1")
            .bind(query.id)
            .fetch_optional(&pool)
            .await?;

    user.ok_or(GetUserError::NotFound(query.id))
}
