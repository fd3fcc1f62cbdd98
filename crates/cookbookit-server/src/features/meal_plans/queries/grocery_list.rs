//! Consolidated grocery list for a plan
//!
//! Gathers every recipe in the plan (a recipe planned twice counts twice),
//! subtracts what the pantry already covers, and merges the remainder into
//! one shopping list via the domain consolidator.

use serde::Serialize;
use sqlx::PgPool;
use std::collections::HashMap;
use uuid::Uuid;

use cookbookit_common::Recipe;

use crate::domain::grocery::{consolidate, GroceryItem};
use crate::features::inventory::store as inventory_store;
use crate::features::meal_plans::types;
use crate::features::recipes::store as recipe_store;

#[derive(Debug, Clone)]
pub struct GroceryListQuery {
    pub user_id: Uuid,
    pub plan_id: Uuid,
}

#[derive(Debug, Clone, Serialize)]
pub struct GroceryListResponse {
    pub plan_id: Uuid,
    pub items: Vec<GroceryItem>,
}

#[derive(Debug, thiserror::Error)]
pub enum GroceryListError {
    #[error("Meal plan '{0}' not found")]
    PlanNotFound(Uuid),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

#[tracing::instrument(skip(pool), fields(plan_id = %query.plan_id, user_id = %query.user_id))]
pub async fn handle(
    pool: PgPool,
    query: GroceryListQuery,
) -> Result<GroceryListResponse, GroceryListError> {
    let plan = types::fetch_plan_for_user(&pool, query.plan_id, query.user_id)
        .await?
        .ok_or(GroceryListError::PlanNotFound(query.plan_id))?;

    let items = types::fetch_plan_items(&pool, plan.id).await?;

    let unique_ids: Vec<Uuid> = {
        let mut ids: Vec<Uuid> = items.iter().map(|item| item.recipe_id).collect();
        ids.sort_unstable();
        ids.dedup();
        ids
    };
    let by_id: HashMap<Uuid, Recipe> = recipe_store::fetch_by_ids(&pool, &unique_ids)
        .await?
        .into_iter()
        .map(|recipe| (recipe.id, recipe))
        .collect();

    // Plan multiplicity matters: every slot contributes its recipe's needs.
    let planned_recipes: Vec<Recipe> = items
        .iter()
        .filter_map(|item| by_id.get(&item.recipe_id).cloned())
        .collect();

    let inventory = inventory_store::levels_for_user(&pool, query.user_id).await?;

    let grocery_items = consolidate(&planned_recipes, &inventory);

    tracing::debug!(
        recipes = planned_recipes.len(),
        items = grocery_items.len(),
        "Grocery list consolidated"
    );

    Ok(GroceryListResponse {
        plan_id: plan.id,
        items: grocery_items,
    })
}
