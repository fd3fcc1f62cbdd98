//! Rank recipes against a user's pantry
//!
//! Every recipe sharing at least one ingredient with the user's inventory
//! comes back with a match percentage, best matches first. An `exclude`
//! list switches the matcher into avoidance mode instead. The user's stored
//! dietary preferences are always applied on top.

use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

use cookbookit_common::DietaryFilters;

use crate::domain::matching::{rank_by_ingredients, ScoredRecipe};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CanMakeQuery {
    pub user_id: Uuid,
    /// Comma-separated ingredient names to avoid.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CanMakeResponse {
    pub recipes: Vec<ScoredRecipe>,
}

#[derive(Debug, thiserror::Error)]
pub enum CanMakeError {
    #[error("User '{0}' not found")]
    UserNotFound(Uuid),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl CanMakeQuery {
    /// Parsed exclusion list; whitespace and empty entries dropped.
    pub fn excluded_names(&self) -> Vec<String> {
        self.exclude
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(String::from)
            .collect()
    }
}

#[tracing::instrument(skip(pool), fields(user_id = %query.user_id))]
pub async fn handle(pool: PgPool, query: CanMakeQuery) -> Result<CanMakeResponse, CanMakeError> {
    let user_exists: Option<(Uuid,)> = sqlx::query_as("SELECT id FROM users WHERE id = $1")
        .bind(query.user_id)
        .fetch_optional(&pool)
        .await?;
    if user_exists.is_none() {
        return Err(CanMakeError::UserNotFound(query.user_id));
    }

    let owned: Vec<(String,)> =
        sqlx::query_as("SELECT ingredient_name FROM inventory WHERE user_id = $1")
            .bind(query.user_id)
            .fetch_all(&pool)
            .await?;
    let owned: Vec<String> = owned.into_iter().map(|(name,)| name).collect();

    let recipes = super::super::store::fetch_all(&pool).await?;

    let excluded = query.excluded_names();
    let excluded = if excluded.is_empty() {
        None
    } else {
        Some(excluded)
    };
    let mut scored = rank_by_ingredients(recipes, &owned, excluded.as_deref());

    // Stored preferences narrow the result; only flags set true apply.
    let prefs: Option<(bool, bool, bool, bool)> = sqlx::query_as(
        "SELECT is_vegetarian, is_vegan, is_gluten_free, is_dairy_free \
         FROM user_preferences WHERE user_id = $1",
    )
    .bind(query.user_id)
    .fetch_optional(&pool)
    .await?;

    if let Some((vegetarian, vegan, gluten_free, dairy_free)) = prefs {
        let filters = DietaryFilters::from_preferences(vegetarian, vegan, gluten_free, dairy_free);
        if !filters.is_empty() {
            scored.retain(|entry| filters.matches(&entry.recipe.dietary_info));
        }
    }

    tracing::debug!(count = scored.len(), "Recipe matches ranked");

    Ok(CanMakeResponse { recipes: scored })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exclude_list_parsing() {
        let query = CanMakeQuery {
            user_id: Uuid::new_v4(),
            exclude: Some("peanuts, shellfish,,  ".to_string()),
        };
        assert_eq!(query.excluded_names(), vec!["peanuts", "shellfish"]);

        let none = CanMakeQuery {
            user_id: Uuid::new_v4(),
            exclude: None,
        };
        assert!(none.excluded_names().is_empty());
    }
}
