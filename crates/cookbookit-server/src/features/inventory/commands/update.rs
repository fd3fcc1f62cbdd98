//! Update an inventory item
//!
//! Full replacement of the editable fields, scoped to the owning user so
//! one user cannot edit another's pantry.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

use crate::features::inventory::store::InventoryItem;
use crate::features::shared::validation::{
    validate_name, validate_quantity, NameValidationError, QuantityValidationError,
};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateInventoryItemCommand {
    /// Set from the URL path, not the request body.
    #[serde(default)]
    pub item_id: Uuid,
    #[serde(default)]
    pub user_id: Uuid,

    pub ingredient_name: String,
    pub category: String,
    pub quantity: f64,
    pub unit: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiry_date: Option<NaiveDate>,
}

pub type UpdateInventoryItemResponse = InventoryItem;

#[derive(Debug, thiserror::Error)]
pub enum UpdateInventoryItemError {
    #[error("{0}")]
    Name(#[from] NameValidationError),

    #[error("{0}")]
    Quantity(#[from] QuantityValidationError),

    #[error("Inventory item '{0}' not found")]
    NotFound(Uuid),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl UpdateInventoryItemCommand {
    pub fn validate(&self) -> Result<(), UpdateInventoryItemError> {
        validate_name(&self.ingredient_name, "Ingredient name", 100)?;
        validate_name(&self.category, "Category", 50)?;
        validate_name(&self.unit, "Unit", 20)?;
        validate_quantity(self.quantity)?;
        Ok(())
    }
}

#[tracing::instrument(
    skip(pool, command),
    fields(item_id = %command.item_id, user_id = %command.user_id)
)]
pub async fn handle(
    pool: PgPool,
    command: UpdateInventoryItemCommand,
) -> Result<UpdateInventoryItemResponse, UpdateInventoryItemError> {
    command.validate()?;

    let item: Option<InventoryItem> = sqlx::query_as(
        "UPDATE inventory \
         SET ingredient_name = $3, category = $4, quantity = $5, unit = $6, expiry_date = $7 \
         WHERE id = $1 AND user_id = $2 \
         RETURNING id, user_id, ingredient_name, category, quantity, unit, expiry_date, added_date",
    )
    .bind(command.item_id)
    .bind(command.user_id)
    .bind(command.ingredient_name.to_lowercase())
    .bind(&command.category)
    .bind(command.quantity)
    .bind(&command.unit)
    .bind(command.expiry_date)
    .fetch_optional(&pool)
    .await?;

    let item = item.ok_or(UpdateInventoryItemError::NotFound(command.item_id))?;

    tracing::info!(item_id = %item.id, "Inventory item updated");

    Ok(item)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_quantity_rejected() {
        let command = UpdateInventoryItemCommand {
            item_id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            ingredient_name: "rice".to_string(),
            category: "grain".to_string(),
            quantity: -1.0,
            unit: "cups".to_string(),
            expiry_date: None,
        };
        assert!(matches!(
            command.validate(),
            Err(UpdateInventoryItemError::Quantity(_))
        ));
    }
}
