//! Delete an inventory item

use serde::Serialize;
use sqlx::PgPool;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct DeleteInventoryItemCommand {
    pub item_id: Uuid,
    pub user_id: Uuid,
}

#[derive(Debug, Clone, Serialize)]
pub struct DeleteInventoryItemResponse {
    pub id: Uuid,
}

#[derive(Debug, thiserror::Error)]
pub enum DeleteInventoryItemError {
    #[error("Inventory item '{0}' not found")]
    NotFound(Uuid),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

#[tracing::instrument(skip(pool), fields(item_id = %command.item_id, user_id = %command.user_id))]
pub async fn handle(
    pool: PgPool,
    command: DeleteInventoryItemCommand,
) -> Result<DeleteInventoryItemResponse, DeleteInventoryItemError> {
    let result = sqlx::query("DELETE FROM inventory WHERE id = $1 AND user_id = $2")
        .bind(command.item_id)
        .bind(command.user_id)
        .execute(&pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(DeleteInventoryItemError::NotFound(command.item_id));
    }

    tracing::info!(item_id = %command.item_id, "Inventory item deleted");

    Ok(DeleteInventoryItemResponse {
        id: command.item_id,
    })
}
