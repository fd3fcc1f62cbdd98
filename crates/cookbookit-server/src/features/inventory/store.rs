//! Inventory row mapping and fetch helpers
//!
//! Ingredient names are stored lowercased so pantry matching against recipe
//! ingredient names stays consistent regardless of how the user typed them.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use sqlx::PgPool;
use std::collections::HashMap;
use uuid::Uuid;

use crate::domain::grocery::InventoryLevel;

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct InventoryItem {
    pub id: Uuid,
    pub user_id: Uuid,
    pub ingredient_name: String,
    pub category: String,
    pub quantity: f64,
    pub unit: String,
    pub expiry_date: Option<NaiveDate>,
    pub added_date: DateTime<Utc>,
}

/// All inventory rows for a user, alphabetical by ingredient.
pub async fn fetch_for_user<'e>(
    executor: impl sqlx::PgExecutor<'e>,
    user_id: Uuid,
) -> Result<Vec<InventoryItem>, sqlx::Error> {
    sqlx::query_as(
        "SELECT id, user_id, ingredient_name, category, quantity, unit, expiry_date, added_date \
         FROM inventory WHERE user_id = $1 ORDER BY ingredient_name",
    )
    .bind(user_id)
    .fetch_all(executor)
    .await
}

/// Ingredient names a user currently owns, for recipe matching.
pub async fn ingredient_names<'e>(
    executor: impl sqlx::PgExecutor<'e>,
    user_id: Uuid,
) -> Result<Vec<String>, sqlx::Error> {
    let rows: Vec<(String,)> =
        sqlx::query_as("SELECT ingredient_name FROM inventory WHERE user_id = $1")
            .bind(user_id)
            .fetch_all(executor)
            .await?;
    Ok(rows.into_iter().map(|(name,)| name).collect())
}

/// Ingredient name to quantity/unit map, the shape the grocery
/// consolidator consumes.
pub async fn levels_for_user(
    pool: &PgPool,
    user_id: Uuid,
) -> Result<HashMap<String, InventoryLevel>, sqlx::Error> {
    let rows: Vec<(String, f64, String)> =
        sqlx::query_as("SELECT ingredient_name, quantity, unit FROM inventory WHERE user_id = $1")
            .bind(user_id)
            .fetch_all(pool)
            .await?;

    Ok(rows
        .into_iter()
        .map(|(name, quantity, unit)| (name, InventoryLevel { quantity, unit }))
        .collect())
}

/// Does this user exist at all. Commands use it to distinguish an empty
/// pantry from a bogus user id.
pub async fn user_exists<'e>(
    executor: impl sqlx::PgExecutor<'e>,
    user_id: Uuid,
) -> Result<bool, sqlx::Error> {
    let row: Option<(Uuid,)> = sqlx::query_as("SELECT id FROM users WHERE id = $1")
        .bind(user_id)
        .fetch_optional(executor)
        .await?;
    Ok(row.is_some())
}
