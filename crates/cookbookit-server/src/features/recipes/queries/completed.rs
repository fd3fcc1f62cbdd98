//! Recently completed recipes for a user

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

const DEFAULT_LIMIT: i64 = 10;
const MAX_LIMIT: i64 = 100;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletedRecipesQuery {
    pub user_id: Uuid,
    /// Maximum entries to return, default 10.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
}

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct CompletedRecipeEntry {
    pub id: Uuid,
    pub recipe_id: Uuid,
    pub recipe_name: String,
    pub completed_date: DateTime<Utc>,
    pub servings_made: i32,
}

#[derive(Debug, Clone, Serialize)]
pub struct CompletedRecipesResponse {
    pub completions: Vec<CompletedRecipeEntry>,
}

#[derive(Debug, thiserror::Error)]
pub enum CompletedRecipesError {
    #[error("Limit must be between 1 and {MAX_LIMIT}")]
    InvalidLimit,

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl CompletedRecipesQuery {
    pub fn validate(&self) -> Result<(), CompletedRecipesError> {
        if let Some(limit) = self.limit {
            if !(1..=MAX_LIMIT).contains(&limit) {
                return Err(CompletedRecipesError::InvalidLimit);
            }
        }
        Ok(())
    }

    pub fn limit(&self) -> i64 {
        self.limit.unwrap_or(DEFAULT_LIMIT)
    }
}

#[tracing::instrument(skip(pool), fields(user_id = %query.user_id))]
pub async fn handle(
    pool: PgPool,
    query: CompletedRecipesQuery,
) -> Result<CompletedRecipesResponse, CompletedRecipesError> {
    query.validate()?;

    let completions: Vec<CompletedRecipeEntry> = sqlx::query_as(
        "SELECT c.id, c.recipe_id, r.name AS recipe_name, c.completed_date, c.servings_made \
         FROM completed_recipes c \
         JOIN recipes r ON r.id = c.recipe_id \
         WHERE c.user_id = $1 \
         ORDER BY c.completed_date DESC \
         LIMIT $2",
    )
    .bind(query.user_id)
    .bind(query.limit())
    .fetch_all(&pool)
    .await?;

    Ok(CompletedRecipesResponse { completions })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limit_defaults_and_bounds() {
        let query = CompletedRecipesQuery {
            user_id: Uuid::new_v4(),
            limit: None,
        };
        assert!(query.validate().is_ok());
        assert_eq!(query.limit(), 10);

        let too_big = CompletedRecipesQuery {
            user_id: Uuid::new_v4(),
            limit: Some(101),
        };
        assert!(matches!(
            too_big.validate(),
            Err(CompletedRecipesError::InvalidLimit)
        ));
    }
}
