//! Recipe API routes
//!
//! - `GET /api/v1/recipes` - List recipes, optional full-text `?search=`
//! - `GET /api/v1/recipes/can-make` - Rank recipes against a user's pantry
//! - `GET /api/v1/recipes/completed` - Recent completions for a user
//! - `GET /api/v1/recipes/:id` - Recipe detail, optional `?user_id=` gap check
//! - `POST /api/v1/recipes/:id/complete` - Record a completion and deplete inventory

use crate::api::response::{ApiResponse, ErrorResponse};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;
use sqlx::PgPool;
use uuid::Uuid;

use super::{
    commands::{CompleteRecipeCommand, CompleteRecipeError},
    queries::{
        CanMakeError, CanMakeQuery, CompletedRecipesError, CompletedRecipesQuery, GetRecipeError,
        GetRecipeQuery, ListRecipesError, ListRecipesQuery,
    },
};
use crate::AppState;

pub fn recipes_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_recipes))
        .route("/can-make", get(can_make))
        .route("/completed", get(completed_recipes))
        .route("/:id", get(get_recipe))
        .route("/:id/complete", post(complete_recipe))
}

#[tracing::instrument(skip(pool, query), fields(search = ?query.search))]
async fn list_recipes(
    State(pool): State<PgPool>,
    Query(query): Query<ListRecipesQuery>,
) -> Result<Response, RecipeApiError> {
    let response = super::queries::list::handle(pool, query).await?;

    let meta = json!({ "pagination": response.pagination });
    Ok((
        StatusCode::OK,
        Json(ApiResponse::success_with_meta(response.items, meta)),
    )
        .into_response())
}

#[derive(Debug, Deserialize)]
struct GetRecipeParams {
    user_id: Option<Uuid>,
}

#[tracing::instrument(skip(pool), fields(recipe_id = %id))]
async fn get_recipe(
    State(pool): State<PgPool>,
    Path(id): Path<Uuid>,
    Query(params): Query<GetRecipeParams>,
) -> Result<Response, RecipeApiError> {
    let query = GetRecipeQuery {
        id,
        user_id: params.user_id,
    };
    let response = super::queries::get::handle(pool, query).await?;
    Ok((StatusCode::OK, Json(ApiResponse::success(response))).into_response())
}

#[tracing::instrument(skip(pool, query), fields(user_id = %query.user_id))]
async fn can_make(
    State(pool): State<PgPool>,
    Query(query): Query<CanMakeQuery>,
) -> Result<Response, RecipeApiError> {
    let response = super::queries::can_make::handle(pool, query).await?;

    tracing::debug!(count = response.recipes.len(), "Pantry matches returned");

    Ok((StatusCode::OK, Json(ApiResponse::success(response))).into_response())
}

#[tracing::instrument(skip(pool, query), fields(user_id = %query.user_id))]
async fn completed_recipes(
    State(pool): State<PgPool>,
    Query(query): Query<CompletedRecipesQuery>,
) -> Result<Response, RecipeApiError> {
    let response = super::queries::completed::handle(pool, query).await?;
    Ok((StatusCode::OK, Json(ApiResponse::success(response))).into_response())
}

#[tracing::instrument(skip(pool, command), fields(recipe_id = %id))]
async fn complete_recipe(
    State(pool): State<PgPool>,
    Path(id): Path<Uuid>,
    Json(mut command): Json<CompleteRecipeCommand>,
) -> Result<Response, RecipeApiError> {
    command.recipe_id = id;

    let response = super::commands::complete::handle(pool, command).await?;

    tracing::info!(
        completion_id = %response.id,
        recipe = %response.recipe_name,
        "Recipe completed via API"
    );

    Ok((StatusCode::CREATED, Json(ApiResponse::success(response))).into_response())
}

/// Unified error type for recipe API endpoints
#[derive(Debug)]
enum RecipeApiError {
    List(ListRecipesError),
    Get(GetRecipeError),
    CanMake(CanMakeError),
    Completed(CompletedRecipesError),
    Complete(CompleteRecipeError),
}

impl From<ListRecipesError> for RecipeApiError {
    fn from(err: ListRecipesError) -> Self {
        Self::List(err)
    }
}

impl From<GetRecipeError> for RecipeApiError {
    fn from(err: GetRecipeError) -> Self {
        Self::Get(err)
    }
}

impl From<CanMakeError> for RecipeApiError {
    fn from(err: CanMakeError) -> Self {
        Self::CanMake(err)
    }
}

impl From<CompletedRecipesError> for RecipeApiError {
    fn from(err: CompletedRecipesError) -> Self {
        Self::Completed(err)
    }
}

impl From<CompleteRecipeError> for RecipeApiError {
    fn from(err: CompleteRecipeError) -> Self {
        Self::Complete(err)
    }
}

impl IntoResponse for RecipeApiError {
    fn into_response(self) -> Response {
        match self {
            RecipeApiError::List(ListRecipesError::InvalidPagination(_))
            | RecipeApiError::Completed(CompletedRecipesError::InvalidLimit)
            | RecipeApiError::Complete(CompleteRecipeError::InvalidServings(_)) => {
                let error = ErrorResponse::new("VALIDATION_ERROR", self.to_string());
                (StatusCode::BAD_REQUEST, Json(error)).into_response()
            },

            RecipeApiError::Get(GetRecipeError::NotFound(_))
            | RecipeApiError::CanMake(CanMakeError::UserNotFound(_))
            | RecipeApiError::Complete(CompleteRecipeError::RecipeNotFound(_))
            | RecipeApiError::Complete(CompleteRecipeError::UserNotFound(_)) => {
                let error = ErrorResponse::new("NOT_FOUND", self.to_string());
                (StatusCode::NOT_FOUND, Json(error)).into_response()
            },

            RecipeApiError::List(ListRecipesError::Database(_))
            | RecipeApiError::Get(GetRecipeError::Database(_))
            | RecipeApiError::CanMake(CanMakeError::Database(_))
            | RecipeApiError::Completed(CompletedRecipesError::Database(_))
            | RecipeApiError::Complete(CompleteRecipeError::Database(_)) => {
                tracing::error!("Database error in recipe endpoint: {}", self);
                let error = ErrorResponse::new("INTERNAL_ERROR", "A database error occurred");
                (StatusCode::INTERNAL_SERVER_ERROR, Json(error)).into_response()
            },
        }
    }
}

impl std::fmt::Display for RecipeApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::List(e) => write!(f, "{}", e),
            Self::Get(e) => write!(f, "{}", e),
            Self::CanMake(e) => write!(f, "{}", e),
            Self::Completed(e) => write!(f, "{}", e),
            Self::Complete(e) => write!(f, "{}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = RecipeApiError::Complete(CompleteRecipeError::InvalidServings(0));
        assert!(err.to_string().contains("at least 1"));
    }

    #[test]
    fn routes_structure() {
        let router = recipes_routes();
        assert!(format!("{:?}", router).contains("Router"));
    }
}
