//! Meal plan API routes, nested under `/api/v1/users/:user_id/meal-plans`
//!
//! - `GET /current?week_start=` - Get (or lazily create) the week's plan
//! - `POST /items` - Add a recipe to a slot
//! - `DELETE /items/:item_id` - Remove a slot
//! - `POST /:plan_id/generate` - Fill the week with random matching recipes
//! - `GET /:plan_id/grocery-list` - Consolidated shopping list

use crate::api::response::{ApiResponse, ErrorResponse};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post},
    Json, Router,
};
use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Deserialize;
use sqlx::PgPool;
use uuid::Uuid;

use super::commands::{
    AddPlanItemCommand, AddPlanItemError, CurrentPlanCommand, CurrentPlanError,
    GeneratePlanCommand, GeneratePlanError, RemovePlanItemCommand, RemovePlanItemError,
};
use super::queries::{GroceryListError, GroceryListQuery};
use crate::AppState;

pub fn meal_plans_routes() -> Router<AppState> {
    Router::new()
        .route("/current", get(current_plan))
        .route("/items", post(add_item))
        .route("/items/:item_id", delete(remove_item))
        .route("/:plan_id/generate", post(generate_plan))
        .route("/:plan_id/grocery-list", get(grocery_list))
}

#[derive(Debug, Deserialize)]
struct CurrentPlanParams {
    week_start: Option<NaiveDate>,
}

#[tracing::instrument(skip(pool), fields(user_id = %user_id))]
async fn current_plan(
    State(pool): State<PgPool>,
    Path(user_id): Path<Uuid>,
    Query(params): Query<CurrentPlanParams>,
) -> Result<Response, MealPlanApiError> {
    let command = CurrentPlanCommand {
        user_id,
        week_start: params.week_start,
    };
    let response = super::commands::current::handle(pool, command).await?;
    Ok((StatusCode::OK, Json(ApiResponse::success(response))).into_response())
}

#[tracing::instrument(skip(pool, command), fields(user_id = %user_id))]
async fn add_item(
    State(pool): State<PgPool>,
    Path(user_id): Path<Uuid>,
    Json(mut command): Json<AddPlanItemCommand>,
) -> Result<Response, MealPlanApiError> {
    command.user_id = user_id;

    let response = super::commands::add_item::handle(pool, command).await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::success(response))).into_response())
}

#[tracing::instrument(skip(pool), fields(user_id = %user_id, item_id = %item_id))]
async fn remove_item(
    State(pool): State<PgPool>,
    Path((user_id, item_id)): Path<(Uuid, Uuid)>,
) -> Result<Response, MealPlanApiError> {
    let command = RemovePlanItemCommand { user_id, item_id };
    let response = super::commands::remove_item::handle(pool, command).await?;
    Ok((StatusCode::OK, Json(ApiResponse::success(response))).into_response())
}

#[tracing::instrument(skip(pool), fields(user_id = %user_id, plan_id = %plan_id))]
async fn generate_plan(
    State(pool): State<PgPool>,
    Path((user_id, plan_id)): Path<(Uuid, Uuid)>,
) -> Result<Response, MealPlanApiError> {
    let command = GeneratePlanCommand { user_id, plan_id };

    let mut rng = StdRng::from_entropy();
    let response = super::commands::generate::handle(pool, command, &mut rng).await?;

    tracing::info!(
        plan_id = %response.plan_id,
        items = response.items_created,
        "Meal plan generated via API"
    );

    Ok((StatusCode::OK, Json(ApiResponse::success(response))).into_response())
}

#[tracing::instrument(skip(pool), fields(user_id = %user_id, plan_id = %plan_id))]
async fn grocery_list(
    State(pool): State<PgPool>,
    Path((user_id, plan_id)): Path<(Uuid, Uuid)>,
) -> Result<Response, MealPlanApiError> {
    let query = GroceryListQuery { user_id, plan_id };
    let response = super::queries::grocery_list::handle(pool, query).await?;
    Ok((StatusCode::OK, Json(ApiResponse::success(response))).into_response())
}

/// Unified error type for meal plan API endpoints
#[derive(Debug)]
enum MealPlanApiError {
    Current(CurrentPlanError),
    AddItem(AddPlanItemError),
    RemoveItem(RemovePlanItemError),
    Generate(GeneratePlanError),
    GroceryList(GroceryListError),
}

impl From<CurrentPlanError> for MealPlanApiError {
    fn from(err: CurrentPlanError) -> Self {
        Self::Current(err)
    }
}

impl From<AddPlanItemError> for MealPlanApiError {
    fn from(err: AddPlanItemError) -> Self {
        Self::AddItem(err)
    }
}

impl From<RemovePlanItemError> for MealPlanApiError {
    fn from(err: RemovePlanItemError) -> Self {
        Self::RemoveItem(err)
    }
}

impl From<GeneratePlanError> for MealPlanApiError {
    fn from(err: GeneratePlanError) -> Self {
        Self::Generate(err)
    }
}

impl From<GroceryListError> for MealPlanApiError {
    fn from(err: GroceryListError) -> Self {
        Self::GroceryList(err)
    }
}

impl IntoResponse for MealPlanApiError {
    fn into_response(self) -> Response {
        match self {
            MealPlanApiError::Current(CurrentPlanError::NotAMonday(_))
            | MealPlanApiError::AddItem(AddPlanItemError::InvalidDay(_))
            | MealPlanApiError::AddItem(AddPlanItemError::InvalidMealType)
            | MealPlanApiError::Generate(GeneratePlanError::NotEnoughCandidates(_)) => {
                let error = ErrorResponse::new("VALIDATION_ERROR", self.to_string());
                (StatusCode::BAD_REQUEST, Json(error)).into_response()
            },

            MealPlanApiError::Current(CurrentPlanError::UserNotFound(_))
            | MealPlanApiError::AddItem(AddPlanItemError::PlanNotFound(_))
            | MealPlanApiError::AddItem(AddPlanItemError::RecipeNotFound(_))
            | MealPlanApiError::RemoveItem(RemovePlanItemError::NotFound(_))
            | MealPlanApiError::Generate(GeneratePlanError::PlanNotFound(_))
            | MealPlanApiError::GroceryList(GroceryListError::PlanNotFound(_)) => {
                let error = ErrorResponse::new("NOT_FOUND", self.to_string());
                (StatusCode::NOT_FOUND, Json(error)).into_response()
            },

            MealPlanApiError::Current(CurrentPlanError::Database(_))
            | MealPlanApiError::AddItem(AddPlanItemError::Database(_))
            | MealPlanApiError::RemoveItem(RemovePlanItemError::Database(_))
            | MealPlanApiError::Generate(GeneratePlanError::Database(_))
            | MealPlanApiError::GroceryList(GroceryListError::Database(_)) => {
                tracing::error!("Database error in meal plan endpoint: {}", self);
                let error = ErrorResponse::new("INTERNAL_ERROR", "A database error occurred");
                (StatusCode::INTERNAL_SERVER_ERROR, Json(error)).into_response()
            },
        }
    }
}

impl std::fmt::Display for MealPlanApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Current(e) => write!(f, "{}", e),
            Self::AddItem(e) => write!(f, "{}", e),
            Self::RemoveItem(e) => write!(f, "{}", e),
            Self::Generate(e) => write!(f, "{}", e),
            Self::GroceryList(e) => write!(f, "{}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_structure() {
        let router = meal_plans_routes();
        assert!(format!("{:?}", router).contains("Router"));
    }

    #[test]
    fn error_display() {
        let err = MealPlanApiError::Generate(GeneratePlanError::NotEnoughCandidates(1));
        assert!(err.to_string().contains("at least 3"));
    }
}
