//! Add a recipe to a plan slot

use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

use crate::features::meal_plans::types::{self, MEAL_TYPES};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddPlanItemCommand {
    /// Set from the URL path, not the request body.
    #[serde(default)]
    pub user_id: Uuid,

    pub plan_id: Uuid,
    pub recipe_id: Uuid,
    /// 0 = Monday through 6 = Sunday.
    pub day_of_week: i16,
    pub meal_type: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct AddPlanItemResponse {
    pub id: Uuid,
    pub plan_id: Uuid,
    pub recipe_id: Uuid,
    pub day_of_week: i16,
    pub meal_type: String,
}

#[derive(Debug, thiserror::Error)]
pub enum AddPlanItemError {
    #[error("Day of week must be between 0 and 6, got {0}")]
    InvalidDay(i16),

    #[error("Meal type must be one of breakfast, lunch, dinner")]
    InvalidMealType,

    #[error("Meal plan '{0}' not found")]
    PlanNotFound(Uuid),

    #[error("Recipe '{0}' not found")]
    RecipeNotFound(Uuid),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl AddPlanItemCommand {
    pub fn validate(&self) -> Result<(), AddPlanItemError> {
        if !(0..=6).contains(&self.day_of_week) {
            return Err(AddPlanItemError::InvalidDay(self.day_of_week));
        }
        if !MEAL_TYPES.contains(&self.meal_type.as_str()) {
            return Err(AddPlanItemError::InvalidMealType);
        }
        Ok(())
    }
}

#[tracing::instrument(
    skip(pool, command),
    fields(plan_id = %command.plan_id, recipe_id = %command.recipe_id)
)]
pub async fn handle(
    pool: PgPool,
    command: AddPlanItemCommand,
) -> Result<AddPlanItemResponse, AddPlanItemError> {
    command.validate()?;

    let plan = types::fetch_plan_for_user(&pool, command.plan_id, command.user_id)
        .await?
        .ok_or(AddPlanItemError::PlanNotFound(command.plan_id))?;

    let recipe: Option<(Uuid,)> = sqlx::query_as("SELECT id FROM recipes WHERE id = $1")
        .bind(command.recipe_id)
        .fetch_optional(&pool)
        .await?;
    if recipe.is_none() {
        return Err(AddPlanItemError::RecipeNotFound(command.recipe_id));
    }

    let (id,): (Uuid,) = sqlx::query_as(
        "INSERT INTO meal_plan_items (meal_plan_id, recipe_id, day_of_week, meal_type) \
         VALUES ($1, $2, $3, $4) \
         RETURNING id",
    )
    .bind(plan.id)
    .bind(command.recipe_id)
    .bind(command.day_of_week)
    .bind(&command.meal_type)
    .fetch_one(&pool)
    .await?;

    tracing::info!(item_id = %id, "Plan item added");

    Ok(AddPlanItemResponse {
        id,
        plan_id: plan.id,
        recipe_id: command.recipe_id,
        day_of_week: command.day_of_week,
        meal_type: command.meal_type,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command() -> AddPlanItemCommand {
        AddPlanItemCommand {
            user_id: Uuid::new_v4(),
            plan_id: Uuid::new_v4(),
            recipe_id: Uuid::new_v4(),
            day_of_week: 3,
            meal_type: "dinner".to_string(),
        }
    }

    #[test]
    fn valid_command_passes() {
        assert!(command().validate().is_ok());
    }

    #[test]
    fn out_of_range_day_rejected() {
        let mut cmd = command();
        cmd.day_of_week = 7;
        assert!(matches!(cmd.validate(), Err(AddPlanItemError::InvalidDay(7))));
    }

    #[test]
    fn unknown_meal_type_rejected() {
        let mut cmd = command();
        cmd.meal_type = "brunch".to_string();
        assert!(matches!(
            cmd.validate(),
            Err(AddPlanItemError::InvalidMealType)
        ));
    }
}
