//! Get or create the plan for a week
//!
//! The first visit in a week creates an empty plan; later visits return
//! the same one. Weeks start on Monday, and an explicit `week_start` that
//! is not a Monday is rejected rather than silently shifted.

use chrono::{Datelike, Days, NaiveDate, Utc, Weekday};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

use crate::features::meal_plans::types::{self, MealPlan, PlanItemView};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentPlanCommand {
    pub user_id: Uuid,
    /// Defaults to the Monday of the current week.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub week_start: Option<NaiveDate>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CurrentPlanResponse {
    #[serde(flatten)]
    pub plan: MealPlan,
    pub items: Vec<PlanItemView>,
}

#[derive(Debug, thiserror::Error)]
pub enum CurrentPlanError {
    #[error("Week start date {0} is not a Monday")]
    NotAMonday(NaiveDate),

    #[error("User '{0}' not found")]
    UserNotFound(Uuid),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// The Monday on or before the given date.
pub fn monday_of(date: NaiveDate) -> NaiveDate {
    let days_since_monday = date.weekday().num_days_from_monday() as u64;
    date.checked_sub_days(Days::new(days_since_monday))
        .unwrap_or(date)
}

impl CurrentPlanCommand {
    pub fn resolve_week_start(&self) -> Result<NaiveDate, CurrentPlanError> {
        match self.week_start {
            Some(date) if date.weekday() != Weekday::Mon => {
                Err(CurrentPlanError::NotAMonday(date))
            },
            Some(date) => Ok(date),
            None => Ok(monday_of(Utc::now().date_naive())),
        }
    }
}

#[tracing::instrument(skip(pool), fields(user_id = %command.user_id))]
pub async fn handle(
    pool: PgPool,
    command: CurrentPlanCommand,
) -> Result<CurrentPlanResponse, CurrentPlanError> {
    let week_start = command.resolve_week_start()?;

    let user: Option<(Uuid,)> = sqlx::query_as("SELECT id FROM users WHERE id = $1")
        .bind(command.user_id)
        .fetch_optional(&pool)
        .await?;
    if user.is_none() {
        return Err(CurrentPlanError::UserNotFound(command.user_id));
    }

    let existing: Option<MealPlan> = sqlx::query_as(
        "SELECT id, user_id, week_start_date, created_at \
         FROM meal_plans WHERE user_id = $1 AND week_start_date = $2 \
         ORDER BY created_at LIMIT 1",
    )
    .bind(command.user_id)
    .bind(week_start)
    .fetch_optional(&pool)
    .await?;

    let plan = match existing {
        Some(plan) => plan,
        None => {
            let plan: MealPlan = sqlx::query_as(
                "INSERT INTO meal_plans (user_id, week_start_date) \
                 VALUES ($1, $2) \
                 RETURNING id, user_id, week_start_date, created_at",
            )
            .bind(command.user_id)
            .bind(week_start)
            .fetch_one(&pool)
            .await?;

            tracing::info!(plan_id = %plan.id, %week_start, "Meal plan created for week");
            plan
        },
    };

    let items = types::fetch_plan_items(&pool, plan.id).await?;

    Ok(CurrentPlanResponse { plan, items })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    #[test]
    fn monday_of_mid_week() {
        // 2024-01-18 is a Thursday.
        assert_eq!(monday_of(date(2024, 1, 18)), date(2024, 1, 15));
    }

    #[test]
    fn monday_of_monday_is_itself() {
        assert_eq!(monday_of(date(2024, 1, 15)), date(2024, 1, 15));
    }

    #[test]
    fn monday_of_sunday_goes_back_six_days() {
        assert_eq!(monday_of(date(2024, 1, 21)), date(2024, 1, 15));
    }

    #[test]
    fn explicit_non_monday_rejected() {
        let command = CurrentPlanCommand {
            user_id: Uuid::new_v4(),
            week_start: Some(date(2024, 1, 17)),
        };
        assert!(matches!(
            command.resolve_week_start(),
            Err(CurrentPlanError::NotAMonday(_))
        ));
    }

    #[test]
    fn explicit_monday_accepted() {
        let command = CurrentPlanCommand {
            user_id: Uuid::new_v4(),
            week_start: Some(date(2024, 1, 15)),
        };
        assert_eq!(
            command.resolve_week_start().expect("monday accepted"),
            date(2024, 1, 15)
        );
    }
}
