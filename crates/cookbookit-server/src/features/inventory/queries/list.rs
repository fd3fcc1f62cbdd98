//! List a user's inventory

use serde::Serialize;
use sqlx::PgPool;
use uuid::Uuid;

use crate::features::inventory::store::{self, InventoryItem};

#[derive(Debug, Clone)]
pub struct ListInventoryQuery {
    pub user_id: Uuid,
}

#[derive(Debug, Clone, Serialize)]
pub struct ListInventoryResponse {
    pub items: Vec<InventoryItem>,
}

#[derive(Debug, thiserror::Error)]
pub enum ListInventoryError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

#[tracing::instrument(skip(pool), fields(user_id = %query.user_id))]
pub async fn handle(
    pool: PgPool,
    query: ListInventoryQuery,
) -> Result<ListInventoryResponse, ListInventoryError> {
    let items = store::fetch_for_user(&pool, query.user_id).await?;
    Ok(ListInventoryResponse { items })
}
