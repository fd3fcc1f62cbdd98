//! Ingredient catalog API routes
//!
//! - `GET /api/v1/ingredients` - Static reference catalog

use crate::api::response::{ApiResponse, ErrorResponse};
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use sqlx::PgPool;

use super::queries::ListIngredientsError;
use crate::AppState;

pub fn ingredients_routes() -> Router<AppState> {
    Router::new().route("/", get(list_ingredients))
}

#[tracing::instrument(skip(pool))]
async fn list_ingredients(State(pool): State<PgPool>) -> Result<Response, IngredientApiError> {
    let response = super::queries::list::handle(pool).await?;
    Ok((StatusCode::OK, Json(ApiResponse::success(response))).into_response())
}

#[derive(Debug)]
enum IngredientApiError {
    List(ListIngredientsError),
}

impl From<ListIngredientsError> for IngredientApiError {
    fn from(err: ListIngredientsError) -> Self {
        Self::List(err)
    }
}

impl IntoResponse for IngredientApiError {
    fn into_response(self) -> Response {
        match self {
            IngredientApiError::List(ListIngredientsError::Database(err)) => {
                tracing::error!("Database error listing ingredients: {}", err);
                let error = ErrorResponse::new("INTERNAL_ERROR", "A database error occurred");
                (StatusCode::INTERNAL_SERVER_ERROR, Json(error)).into_response()
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_structure() {
        let router = ingredients_routes();
        assert!(format!("{:?}", router).contains("Router"));
    }
}
