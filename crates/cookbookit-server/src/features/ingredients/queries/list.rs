//! List the static ingredient catalog

use serde::Serialize;
use sqlx::PgPool;

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct CatalogIngredient {
    pub name: String,
    pub category: String,
    pub default_unit: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ListIngredientsResponse {
    pub ingredients: Vec<CatalogIngredient>,
}

#[derive(Debug, thiserror::Error)]
pub enum ListIngredientsError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

#[tracing::instrument(skip(pool))]
pub async fn handle(pool: PgPool) -> Result<ListIngredientsResponse, ListIngredientsError> {
    let ingredients: Vec<CatalogIngredient> =
        sqlx::query_as("SELECT name, category, default_unit FROM ingredients ORDER BY name")
            .fetch_all(&pool)
            .await?;

    Ok(ListIngredientsResponse { ingredients })
}
