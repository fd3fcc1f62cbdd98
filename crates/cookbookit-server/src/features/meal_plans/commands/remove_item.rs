//! Remove a slot from a plan

use serde::Serialize;
use sqlx::PgPool;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct RemovePlanItemCommand {
    pub user_id: Uuid,
    pub item_id: Uuid,
}

#[derive(Debug, Clone, Serialize)]
pub struct RemovePlanItemResponse {
    pub id: Uuid,
}

#[derive(Debug, thiserror::Error)]
pub enum RemovePlanItemError {
    #[error("Meal plan item '{0}' not found")]
    NotFound(Uuid),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

#[tracing::instrument(skip(pool), fields(item_id = %command.item_id, user_id = %command.user_id))]
pub async fn handle(
    pool: PgPool,
    command: RemovePlanItemCommand,
) -> Result<RemovePlanItemResponse, RemovePlanItemError> {
    // Ownership check rides along in the join to the plan.
    let result = sqlx::query(
        "DELETE FROM meal_plan_items i \
         USING meal_plans p \
         WHERE i.id = $1 AND i.meal_plan_id = p.id AND p.user_id = $2",
    )
    .bind(command.item_id)
    .bind(command.user_id)
    .execute(&pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(RemovePlanItemError::NotFound(command.item_id));
    }

    tracing::info!(item_id = %command.item_id, "Plan item removed");

    Ok(RemovePlanItemResponse {
        id: command.item_id,
    })
}
