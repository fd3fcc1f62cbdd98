//! Inventory API routes, nested under `/api/v1/users/:user_id/inventory`
//!
//! - `GET /` - List the user's pantry
//! - `POST /` - Add an item
//! - `GET /expiring` - Items inside the expiry warning window
//! - `POST /adjust` - Adjust a named ingredient's quantity by a delta
//! - `PUT /:item_id` - Replace an item's fields
//! - `DELETE /:item_id` - Remove an item

use crate::api::response::{ApiResponse, ErrorResponse};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post, put},
    Json, Router,
};
use sqlx::PgPool;
use uuid::Uuid;

use super::{
    commands::{
        AddInventoryItemCommand, AddInventoryItemError, AdjustQuantityCommand,
        AdjustQuantityError, DeleteInventoryItemCommand, DeleteInventoryItemError,
        UpdateInventoryItemCommand, UpdateInventoryItemError,
    },
    queries::{
        ExpiringItemsError, ExpiringItemsQuery, ListInventoryError, ListInventoryQuery,
    },
};
use crate::config::PantryConfig;
use crate::AppState;

pub fn inventory_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_inventory))
        .route("/", post(add_item))
        .route("/expiring", get(expiring_items))
        .route("/adjust", post(adjust_quantity))
        .route("/:item_id", put(update_item))
        .route("/:item_id", delete(delete_item))
}

#[tracing::instrument(skip(pool), fields(user_id = %user_id))]
async fn list_inventory(
    State(pool): State<PgPool>,
    Path(user_id): Path<Uuid>,
) -> Result<Response, InventoryApiError> {
    let response = super::queries::list::handle(pool, ListInventoryQuery { user_id }).await?;
    Ok((StatusCode::OK, Json(ApiResponse::success(response))).into_response())
}

#[tracing::instrument(skip(pool, pantry), fields(user_id = %user_id))]
async fn expiring_items(
    State(pool): State<PgPool>,
    State(pantry): State<PantryConfig>,
    Path(user_id): Path<Uuid>,
) -> Result<Response, InventoryApiError> {
    let query = ExpiringItemsQuery {
        user_id,
        within_days: pantry.expiry_warning_days,
    };
    let response = super::queries::expiring::handle(pool, query).await?;
    Ok((StatusCode::OK, Json(ApiResponse::success(response))).into_response())
}

#[tracing::instrument(skip(pool, command), fields(user_id = %user_id))]
async fn add_item(
    State(pool): State<PgPool>,
    Path(user_id): Path<Uuid>,
    Json(mut command): Json<AddInventoryItemCommand>,
) -> Result<Response, InventoryApiError> {
    command.user_id = user_id;

    let response = super::commands::add::handle(pool, command).await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::success(response))).into_response())
}

#[tracing::instrument(skip(pool, command), fields(user_id = %user_id, item_id = %item_id))]
async fn update_item(
    State(pool): State<PgPool>,
    Path((user_id, item_id)): Path<(Uuid, Uuid)>,
    Json(mut command): Json<UpdateInventoryItemCommand>,
) -> Result<Response, InventoryApiError> {
    command.user_id = user_id;
    command.item_id = item_id;

    let response = super::commands::update::handle(pool, command).await?;

    Ok((StatusCode::OK, Json(ApiResponse::success(response))).into_response())
}

#[tracing::instrument(skip(pool), fields(user_id = %user_id, item_id = %item_id))]
async fn delete_item(
    State(pool): State<PgPool>,
    Path((user_id, item_id)): Path<(Uuid, Uuid)>,
) -> Result<Response, InventoryApiError> {
    let command = DeleteInventoryItemCommand { item_id, user_id };
    let response = super::commands::delete::handle(pool, command).await?;
    Ok((StatusCode::OK, Json(ApiResponse::success(response))).into_response())
}

#[tracing::instrument(skip(pool, command), fields(user_id = %user_id))]
async fn adjust_quantity(
    State(pool): State<PgPool>,
    Path(user_id): Path<Uuid>,
    Json(mut command): Json<AdjustQuantityCommand>,
) -> Result<Response, InventoryApiError> {
    command.user_id = user_id;

    let response = super::commands::adjust::handle(pool, command).await?;

    Ok((StatusCode::OK, Json(ApiResponse::success(response))).into_response())
}

/// Unified error type for inventory API endpoints
#[derive(Debug)]
enum InventoryApiError {
    Add(AddInventoryItemError),
    Update(UpdateInventoryItemError),
    Delete(DeleteInventoryItemError),
    Adjust(AdjustQuantityError),
    List(ListInventoryError),
    Expiring(ExpiringItemsError),
}

impl From<AddInventoryItemError> for InventoryApiError {
    fn from(err: AddInventoryItemError) -> Self {
        Self::Add(err)
    }
}

impl From<UpdateInventoryItemError> for InventoryApiError {
    fn from(err: UpdateInventoryItemError) -> Self {
        Self::Update(err)
    }
}

impl From<DeleteInventoryItemError> for InventoryApiError {
    fn from(err: DeleteInventoryItemError) -> Self {
        Self::Delete(err)
    }
}

impl From<AdjustQuantityError> for InventoryApiError {
    fn from(err: AdjustQuantityError) -> Self {
        Self::Adjust(err)
    }
}

impl From<ListInventoryError> for InventoryApiError {
    fn from(err: ListInventoryError) -> Self {
        Self::List(err)
    }
}

impl From<ExpiringItemsError> for InventoryApiError {
    fn from(err: ExpiringItemsError) -> Self {
        Self::Expiring(err)
    }
}

impl IntoResponse for InventoryApiError {
    fn into_response(self) -> Response {
        match self {
            InventoryApiError::Add(AddInventoryItemError::Name(_))
            | InventoryApiError::Add(AddInventoryItemError::Quantity(_))
            | InventoryApiError::Update(UpdateInventoryItemError::Name(_))
            | InventoryApiError::Update(UpdateInventoryItemError::Quantity(_))
            | InventoryApiError::Adjust(AdjustQuantityError::NameRequired)
            | InventoryApiError::Adjust(AdjustQuantityError::DeltaNotFinite) => {
                let error = ErrorResponse::new("VALIDATION_ERROR", self.to_string());
                (StatusCode::BAD_REQUEST, Json(error)).into_response()
            },

            InventoryApiError::Add(AddInventoryItemError::UserNotFound(_))
            | InventoryApiError::Update(UpdateInventoryItemError::NotFound(_))
            | InventoryApiError::Delete(DeleteInventoryItemError::NotFound(_))
            | InventoryApiError::Adjust(AdjustQuantityError::IngredientNotFound(_)) => {
                let error = ErrorResponse::new("NOT_FOUND", self.to_string());
                (StatusCode::NOT_FOUND, Json(error)).into_response()
            },

            InventoryApiError::Add(AddInventoryItemError::Database(_))
            | InventoryApiError::Update(UpdateInventoryItemError::Database(_))
            | InventoryApiError::Delete(DeleteInventoryItemError::Database(_))
            | InventoryApiError::Adjust(AdjustQuantityError::Database(_))
            | InventoryApiError::List(ListInventoryError::Database(_))
            | InventoryApiError::Expiring(ExpiringItemsError::Database(_)) => {
                tracing::error!("Database error in inventory endpoint: {}", self);
                let error = ErrorResponse::new("INTERNAL_ERROR", "A database error occurred");
                (StatusCode::INTERNAL_SERVER_ERROR, Json(error)).into_response()
            },
        }
    }
}

impl std::fmt::Display for InventoryApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Add(e) => write!(f, "{}", e),
            Self::Update(e) => write!(f, "{}", e),
            Self::Delete(e) => write!(f, "{}", e),
            Self::Adjust(e) => write!(f, "{}", e),
            Self::List(e) => write!(f, "{}", e),
            Self::Expiring(e) => write!(f, "{}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_structure() {
        let router = inventory_routes();
        assert!(format!("{:?}", router).contains("Router"));
    }
}
