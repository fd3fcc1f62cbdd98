//! Record a completed recipe and deplete the pantry
//!
//! Appends a completion log entry and decrements the user's inventory by
//! the per-serving amount of each recipe ingredient. The append and every
//! decrement run in one transaction; any failure rolls the whole completion
//! back. A decrement that drives a quantity to zero or below deletes the
//! row, and ingredients the user never had are skipped.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::depletion;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompleteRecipeCommand {
    /// Set from the URL path, not the request body.
    #[serde(default)]
    pub recipe_id: Uuid,

    pub user_id: Uuid,

    /// How many servings were actually cooked.
    #[serde(default = "default_servings")]
    pub servings_made: i32,
}

fn default_servings() -> i32 {
    1
}

#[derive(Debug, Clone, Serialize)]
pub struct CompleteRecipeResponse {
    pub id: Uuid,
    pub recipe_id: Uuid,
    pub recipe_name: String,
    pub servings_made: i32,
    pub completed_date: DateTime<Utc>,
    /// Ingredient names whose inventory rows were removed because the
    /// completion used them up.
    pub depleted_ingredients: Vec<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum CompleteRecipeError {
    #[error("Servings made must be at least 1, got {0}")]
    InvalidServings(i32),

    #[error("Recipe '{0}' not found")]
    RecipeNotFound(Uuid),

    #[error("User '{0}' not found")]
    UserNotFound(Uuid),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl CompleteRecipeCommand {
    pub fn validate(&self) -> Result<(), CompleteRecipeError> {
        if self.servings_made < 1 {
            return Err(CompleteRecipeError::InvalidServings(self.servings_made));
        }
        Ok(())
    }
}

#[tracing::instrument(
    skip(pool, command),
    fields(recipe_id = %command.recipe_id, user_id = %command.user_id)
)]
pub async fn handle(
    pool: PgPool,
    command: CompleteRecipeCommand,
) -> Result<CompleteRecipeResponse, CompleteRecipeError> {
    command.validate()?;

    let mut tx = pool.begin().await?;

    let user: Option<(Uuid,)> = sqlx::query_as("SELECT id FROM users WHERE id = $1")
        .bind(command.user_id)
        .fetch_optional(&mut *tx)
        .await?;
    if user.is_none() {
        return Err(CompleteRecipeError::UserNotFound(command.user_id));
    }

    let recipe = super::super::store::fetch_by_id(&mut *tx, command.recipe_id)
        .await?
        .ok_or(CompleteRecipeError::RecipeNotFound(command.recipe_id))?;

    let (id, completed_date): (Uuid, DateTime<Utc>) = sqlx::query_as(
        "INSERT INTO completed_recipes (user_id, recipe_id, servings_made) \
         VALUES ($1, $2, $3) \
         RETURNING id, completed_date",
    )
    .bind(command.user_id)
    .bind(command.recipe_id)
    .bind(command.servings_made)
    .fetch_one(&mut *tx)
    .await?;

    let mut depleted = Vec::new();
    for (name, used) in depletion::depletions(&recipe, command.servings_made) {
        let row: Option<(Uuid, f64)> = sqlx::query_as(
            "SELECT id, quantity FROM inventory \
             WHERE user_id = $1 AND ingredient_name = $2",
        )
        .bind(command.user_id)
        .bind(&name)
        .fetch_optional(&mut *tx)
        .await?;

        let Some((item_id, quantity)) = row else {
            continue;
        };

        let remaining = quantity - used;
        if remaining <= 0.0 {
            sqlx::query("DELETE FROM inventory WHERE id = $1")
                .bind(item_id)
                .execute(&mut *tx)
                .await?;
            depleted.push(name);
        } else {
            sqlx::query("UPDATE inventory SET quantity = $2 WHERE id = $1")
                .bind(item_id)
                .bind(remaining)
                .execute(&mut *tx)
                .await?;
        }
    }

    tx.commit().await?;

    tracing::info!(
        completion_id = %id,
        depleted = depleted.len(),
        "Recipe completion recorded"
    );

    Ok(CompleteRecipeResponse {
        id,
        recipe_id: recipe.id,
        recipe_name: recipe.name,
        servings_made: command.servings_made,
        completed_date,
        depleted_ingredients: depleted,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_positive_servings() {
        let command = CompleteRecipeCommand {
            recipe_id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            servings_made: 0,
        };
        assert!(matches!(
            command.validate(),
            Err(CompleteRecipeError::InvalidServings(0))
        ));
    }

    #[test]
    fn accepts_single_serving() {
        let command = CompleteRecipeCommand {
            recipe_id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            servings_made: 1,
        };
        assert!(command.validate().is_ok());
    }
}
