//! Adjust an ingredient's quantity by a signed delta
//!
//! Used by clients that tweak pantry levels by name rather than editing a
//! row. A delta that drives the quantity to zero or below removes the row
//! entirely; the pantry never holds non-positive quantities.

use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdjustQuantityCommand {
    /// Set from the URL path, not the request body.
    #[serde(default)]
    pub user_id: Uuid,

    pub ingredient_name: String,

    /// Signed change; negative consumes, positive restocks.
    pub delta: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct AdjustQuantityResponse {
    pub ingredient_name: String,
    /// Quantity after the adjustment, absent when the row was removed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remaining: Option<f64>,
    pub removed: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum AdjustQuantityError {
    #[error("Ingredient name is required")]
    NameRequired,

    #[error("Delta must be a finite number")]
    DeltaNotFinite,

    #[error("Ingredient '{0}' not found in inventory")]
    IngredientNotFound(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl AdjustQuantityCommand {
    pub fn validate(&self) -> Result<(), AdjustQuantityError> {
        if self.ingredient_name.trim().is_empty() {
            return Err(AdjustQuantityError::NameRequired);
        }
        if !self.delta.is_finite() {
            return Err(AdjustQuantityError::DeltaNotFinite);
        }
        Ok(())
    }
}

/// Quantity left after applying a delta; `None` means the row goes away.
fn apply_delta(current: f64, delta: f64) -> Option<f64> {
    let remaining = current + delta;
    if remaining <= 0.0 {
        None
    } else {
        Some(remaining)
    }
}

#[tracing::instrument(
    skip(pool, command),
    fields(user_id = %command.user_id, ingredient = %command.ingredient_name)
)]
pub async fn handle(
    pool: PgPool,
    command: AdjustQuantityCommand,
) -> Result<AdjustQuantityResponse, AdjustQuantityError> {
    command.validate()?;

    let name = command.ingredient_name.to_lowercase();

    let row: Option<(Uuid, f64)> = sqlx::query_as(
        "SELECT id, quantity FROM inventory WHERE user_id = $1 AND ingredient_name = $2",
    )
    .bind(command.user_id)
    .bind(&name)
    .fetch_optional(&pool)
    .await?;

    let (item_id, quantity) =
        row.ok_or_else(|| AdjustQuantityError::IngredientNotFound(name.clone()))?;

    match apply_delta(quantity, command.delta) {
        Some(remaining) => {
            sqlx::query("UPDATE inventory SET quantity = $2 WHERE id = $1")
                .bind(item_id)
                .bind(remaining)
                .execute(&pool)
                .await?;

            Ok(AdjustQuantityResponse {
                ingredient_name: name,
                remaining: Some(remaining),
                removed: false,
            })
        },
        None => {
            sqlx::query("DELETE FROM inventory WHERE id = $1")
                .bind(item_id)
                .execute(&pool)
                .await?;

            tracing::info!(ingredient = %name, "Inventory row removed by adjustment");

            Ok(AdjustQuantityResponse {
                ingredient_name: name,
                remaining: None,
                removed: true,
            })
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_remainder_updates() {
        assert_eq!(apply_delta(5.0, -2.0), Some(3.0));
        assert_eq!(apply_delta(1.0, 4.0), Some(5.0));
    }

    #[test]
    fn zero_or_below_removes() {
        assert_eq!(apply_delta(2.0, -2.0), None);
        assert_eq!(apply_delta(1.0, -3.5), None);
    }

    #[test]
    fn validation() {
        let command = AdjustQuantityCommand {
            user_id: Uuid::new_v4(),
            ingredient_name: String::new(),
            delta: 1.0,
        };
        assert!(matches!(
            command.validate(),
            Err(AdjustQuantityError::NameRequired)
        ));

        let command = AdjustQuantityCommand {
            user_id: Uuid::new_v4(),
            ingredient_name: "egg".to_string(),
            delta: f64::NAN,
        };
        assert!(matches!(
            command.validate(),
            Err(AdjustQuantityError::DeltaNotFinite)
        ));
    }
}
