//! Shared meal plan types

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Meal types a plan slot can hold, in day order.
pub const MEAL_TYPES: [&str; 3] = ["breakfast", "lunch", "dinner"];

/// Days per plan week; slots = days x meal types.
pub const DAYS_PER_WEEK: i16 = 7;

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct MealPlan {
    pub id: Uuid,
    pub user_id: Uuid,
    pub week_start_date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

/// A plan slot joined with its recipe name for display.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct PlanItemView {
    pub id: Uuid,
    pub recipe_id: Uuid,
    pub recipe_name: String,
    pub day_of_week: i16,
    pub meal_type: String,
}

/// Fetch a plan only if it belongs to the given user.
pub async fn fetch_plan_for_user<'e>(
    executor: impl sqlx::PgExecutor<'e>,
    plan_id: Uuid,
    user_id: Uuid,
) -> Result<Option<MealPlan>, sqlx::Error> {
    sqlx::query_as(
        "SELECT id, user_id, week_start_date, created_at \
         FROM meal_plans WHERE id = $1 AND user_id = $2",
    )
    .bind(plan_id)
    .bind(user_id)
    .fetch_optional(executor)
    .await
}

/// All slots of a plan with recipe names, in week order.
pub async fn fetch_plan_items<'e>(
    executor: impl sqlx::PgExecutor<'e>,
    plan_id: Uuid,
) -> Result<Vec<PlanItemView>, sqlx::Error> {
    sqlx::query_as(
        "SELECT i.id, i.recipe_id, r.name AS recipe_name, i.day_of_week, i.meal_type \
         FROM meal_plan_items i \
         JOIN recipes r ON r.id = i.recipe_id \
         WHERE i.meal_plan_id = $1 \
         ORDER BY i.day_of_week, \
                  array_position(ARRAY['breakfast', 'lunch', 'dinner'], i.meal_type)",
    )
    .bind(plan_id)
    .fetch_all(executor)
    .await
}
