//! Inventory items expiring soon
//!
//! Items with an expiry date inside the configured warning window,
//! soonest first. Items without an expiry date never show up here.

use serde::Serialize;
use sqlx::PgPool;
use uuid::Uuid;

use crate::features::inventory::store::InventoryItem;

#[derive(Debug, Clone)]
pub struct ExpiringItemsQuery {
    pub user_id: Uuid,
    /// Warning window in days, from configuration.
    pub within_days: i32,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExpiringItemsResponse {
    pub items: Vec<InventoryItem>,
    pub within_days: i32,
}

#[derive(Debug, thiserror::Error)]
pub enum ExpiringItemsError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

#[tracing::instrument(skip(pool), fields(user_id = %query.user_id, within_days = query.within_days))]
pub async fn handle(
    pool: PgPool,
    query: ExpiringItemsQuery,
) -> Result<ExpiringItemsResponse, ExpiringItemsError> {
    let items: Vec<InventoryItem> = sqlx::query_as(
        "SELECT id, user_id, ingredient_name, category, quantity, unit, expiry_date, added_date \
         FROM inventory \
         WHERE user_id = $1 \
           AND expiry_date IS NOT NULL \
           AND expiry_date <= CURRENT_DATE + $2::int \
         ORDER BY expiry_date",
    )
    .bind(query.user_id)
    .bind(query.within_days)
    .fetch_all(&pool)
    .await?;

    tracing::debug!(count = items.len(), "Expiring items listed");

    Ok(ExpiringItemsResponse {
        items,
        within_days: query.within_days,
    })
}
