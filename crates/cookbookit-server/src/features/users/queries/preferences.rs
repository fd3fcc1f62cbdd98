//! Get a user's dietary preferences

use sqlx::PgPool;
use uuid::Uuid;

use crate::features::users::types::UserPreferences;

#[derive(Debug, Clone)]
pub struct GetPreferencesQuery {
    pub user_id: Uuid,
}

pub type GetPreferencesResponse = UserPreferences;

#[derive(Debug, thiserror::Error)]
pub enum GetPreferencesError {
    #[error("Preferences for user '{0}' not found")]
    NotFound(Uuid),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

#[tracing::instrument(skip(pool), fields(user_id = %query.user_id))]
pub async fn handle(
    pool: PgPool,
    query: GetPreferencesQuery,
) -> Result<GetPreferencesResponse, GetPreferencesError> {
    let preferences: Option<UserPreferences> = sqlx::query_as(
        "SELECT user_id, is_vegetarian, is_vegan, is_gluten_free, is_dairy_free \
         FROM user_preferences WHERE user_id = $1",
    )
    .bind(query.user_id)
    .fetch_optional(&pool)
    .await?;

    preferences.ok_or(GetPreferencesError::NotFound(query.user_id))
}
