//! Update a user's dietary preferences

use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

use crate::features::users::types::UserPreferences;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdatePreferencesCommand {
    /// Set from the URL path, not the request body.
    #[serde(default)]
    pub user_id: Uuid,

    #[serde(default)]
    pub is_vegetarian: bool,
    #[serde(default)]
    pub is_vegan: bool,
    #[serde(default)]
    pub is_gluten_free: bool,
    #[serde(default)]
    pub is_dairy_free: bool,
}

pub type UpdatePreferencesResponse = UserPreferences;

#[derive(Debug, thiserror::Error)]
pub enum UpdatePreferencesError {
    #[error("User '{0}' not found")]
    UserNotFound(Uuid),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

#[tracing::instrument(skip(pool, command), fields(user_id = %command.user_id))]
pub async fn handle(
    pool: PgPool,
    command: UpdatePreferencesCommand,
) -> Result<UpdatePreferencesResponse, UpdatePreferencesError> {
    // Upsert covers accounts created before the preferences row existed.
    let preferences: Option<UserPreferences> = sqlx::query_as(
        "INSERT INTO user_preferences \
         (user_id, is_vegetarian, is_vegan, is_gluten_free, is_dairy_free) \
         SELECT id, $2, $3, $4, $5 FROM users WHERE id = $1 \
         ON CONFLICT (user_id) DO UPDATE SET \
           is_vegetarian = EXCLUDED.is_vegetarian, \
           is_vegan = EXCLUDED.is_vegan, \
           is_gluten_free = EXCLUDED.is_gluten_free, \
           is_dairy_free = EXCLUDED.is_dairy_free \
         RETURNING user_id, is_vegetarian, is_vegan, is_gluten_free, is_dairy_free",
    )
    .bind(command.user_id)
    .bind(command.is_vegetarian)
    .bind(command.is_vegan)
    .bind(command.is_gluten_free)
    .bind(command.is_dairy_free)
    .fetch_optional(&pool)
    .await?;

    let preferences =
        preferences.ok_or(UpdatePreferencesError::UserNotFound(command.user_id))?;

    tracing::info!(user_id = %preferences.user_id, "Preferences updated");

    Ok(preferences)
}
