//! Get a single recipe
//!
//! When a `user_id` is supplied the response also reports which of the
//! recipe's ingredients are missing from that user's inventory, so a client
//! can show "you need 2 more things" on the detail page.

use cookbookit_common::Recipe;
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use std::collections::HashSet;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetRecipeQuery {
    pub id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<Uuid>,
}

#[derive(Debug, Clone, Serialize)]
pub struct GetRecipeResponse {
    #[serde(flatten)]
    pub recipe: Recipe,
    /// Ingredient names the user does not have. Only present when the query
    /// named a user.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub missing_ingredients: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_make: Option<bool>,
}

#[derive(Debug, thiserror::Error)]
pub enum GetRecipeError {
    #[error("Recipe '{0}' not found")]
    NotFound(Uuid),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

#[tracing::instrument(skip(pool), fields(recipe_id = %query.id, user_id = ?query.user_id))]
pub async fn handle(pool: PgPool, query: GetRecipeQuery) -> Result<GetRecipeResponse, GetRecipeError> {
    let recipe = super::super::store::fetch_by_id(&pool, query.id)
        .await?
        .ok_or(GetRecipeError::NotFound(query.id))?;

    let (missing_ingredients, can_make) = match query.user_id {
        Some(user_id) => {
            let owned: Vec<(String,)> =
                sqlx::query_as("SELECT ingredient_name FROM inventory WHERE user_id = $1")
                    .bind(user_id)
                    .fetch_all(&pool)
                    .await?;
            let owned: HashSet<&str> = owned.iter().map(|(name,)| name.as_str()).collect();

            let missing: Vec<String> = recipe
                .ingredients
                .iter()
                .filter(|ingredient| !owned.contains(ingredient.name.as_str()))
                .map(|ingredient| ingredient.name.clone())
                .collect();
            let can_make = missing.is_empty();
            (Some(missing), Some(can_make))
        },
        None => (None, None),
    };

    Ok(GetRecipeResponse {
        recipe,
        missing_ingredients,
        can_make,
    })
}
