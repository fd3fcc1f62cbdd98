//! Add an inventory item

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

use crate::features::inventory::store::{self, InventoryItem};
use crate::features::shared::validation::{
    validate_name, validate_quantity, NameValidationError, QuantityValidationError,
};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddInventoryItemCommand {
    /// Set from the URL path, not the request body.
    #[serde(default)]
    pub user_id: Uuid,

    pub ingredient_name: String,
    pub category: String,
    pub quantity: f64,
    pub unit: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiry_date: Option<NaiveDate>,
}

pub type AddInventoryItemResponse = InventoryItem;

#[derive(Debug, thiserror::Error)]
pub enum AddInventoryItemError {
    #[error("{0}")]
    Name(#[from] NameValidationError),

    #[error("{0}")]
    Quantity(#[from] QuantityValidationError),

    #[error("User '{0}' not found")]
    UserNotFound(Uuid),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl AddInventoryItemCommand {
    pub fn validate(&self) -> Result<(), AddInventoryItemError> {
        validate_name(&self.ingredient_name, "Ingredient name", 100)?;
        validate_name(&self.category, "Category", 50)?;
        validate_name(&self.unit, "Unit", 20)?;
        validate_quantity(self.quantity)?;
        Ok(())
    }
}

#[tracing::instrument(
    skip(pool, command),
    fields(user_id = %command.user_id, ingredient = %command.ingredient_name)
)]
pub async fn handle(
    pool: PgPool,
    command: AddInventoryItemCommand,
) -> Result<AddInventoryItemResponse, AddInventoryItemError> {
    command.validate()?;

    if !store::user_exists(&pool, command.user_id).await? {
        return Err(AddInventoryItemError::UserNotFound(command.user_id));
    }

    let item: InventoryItem = sqlx::query_as(
        "INSERT INTO inventory (user_id, ingredient_name, category, quantity, unit, expiry_date) \
         VALUES ($1, $2, $3, $4, $5, $6) \
         RETURNING id, user_id, ingredient_name, category, quantity, unit, expiry_date, added_date",
    )
    .bind(command.user_id)
    .bind(command.ingredient_name.to_lowercase())
    .bind(&command.category)
    .bind(command.quantity)
    .bind(&command.unit)
    .bind(command.expiry_date)
    .fetch_one(&pool)
    .await?;

    tracing::info!(item_id = %item.id, "Inventory item added");

    Ok(item)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command() -> AddInventoryItemCommand {
        AddInventoryItemCommand {
            user_id: Uuid::new_v4(),
            ingredient_name: "Egg".to_string(),
            category: "dairy".to_string(),
            quantity: 12.0,
            unit: "whole".to_string(),
            expiry_date: None,
        }
    }

    #[test]
    fn valid_command_passes() {
        assert!(command().validate().is_ok());
    }

    #[test]
    fn empty_name_rejected() {
        let mut cmd = command();
        cmd.ingredient_name = "  ".to_string();
        assert!(matches!(
            cmd.validate(),
            Err(AddInventoryItemError::Name(_))
        ));
    }

    #[test]
    fn zero_quantity_rejected() {
        let mut cmd = command();
        cmd.quantity = 0.0;
        assert!(matches!(
            cmd.validate(),
            Err(AddInventoryItemError::Quantity(_))
        ));
    }
}
