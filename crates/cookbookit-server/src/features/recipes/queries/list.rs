//! List and search recipes
//!
//! Without a search term the full catalog is returned (paginated). With a
//! `search` parameter the term is matched against recipe names and
//! descriptions using Postgres full-text search. An empty search term
//! yields an empty list rather than the whole catalog.

use cookbookit_common::Recipe;
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::features::shared::pagination::{Paginated, PaginationParams};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ListRecipesQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<i64>,
}

pub type ListRecipesResponse = Paginated<Recipe>;

#[derive(Debug, thiserror::Error)]
pub enum ListRecipesError {
    #[error("Invalid pagination: {0}")]
    InvalidPagination(&'static str),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl ListRecipesQuery {
    fn pagination(&self) -> PaginationParams {
        PaginationParams::new(self.page, self.per_page)
    }

    pub fn validate(&self) -> Result<(), ListRecipesError> {
        self.pagination()
            .validate()
            .map_err(ListRecipesError::InvalidPagination)
    }
}

#[tracing::instrument(skip(pool), fields(search = ?query.search))]
pub async fn handle(
    pool: PgPool,
    query: ListRecipesQuery,
) -> Result<ListRecipesResponse, ListRecipesError> {
    query.validate()?;

    let pagination = query.pagination();
    let (page, total) = match query.search.as_deref() {
        Some(term) if term.trim().is_empty() => (Vec::new(), 0),
        Some(term) => {
            let total = super::super::store::count_search(&pool, term).await?;
            let page =
                super::super::store::search_page(&pool, term, pagination.per_page(), pagination.offset())
                    .await?;
            (page, total)
        },
        None => {
            let total = super::super::store::count(&pool).await?;
            let page =
                super::super::store::fetch_page(&pool, pagination.per_page(), pagination.offset())
                    .await?;
            (page, total)
        },
    };

    tracing::debug!(count = page.len(), total, "Recipes listed");

    Ok(Paginated::from_items(page, &pagination, total))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_rejects_bad_pagination() {
        let query = ListRecipesQuery {
            search: None,
            page: Some(0),
            per_page: None,
        };
        assert!(matches!(
            query.validate(),
            Err(ListRecipesError::InvalidPagination(_))
        ));
    }

    #[test]
    fn validation_accepts_defaults() {
        assert!(ListRecipesQuery::default().validate().is_ok());
    }

    // A blank search term never reaches the database, so a lazy pool with
    // nothing behind it is enough to exercise the short-circuit.
    #[tokio::test]
    async fn blank_search_term_yields_empty_page() {
        let pool = sqlx::postgres::PgPoolOptions::new()
            .connect_lazy("postgresql://localhost/cookbookit")
            .expect("lazy pool");

        let query = ListRecipesQuery {
            search: Some("   ".to_string()),
            page: None,
            per_page: None,
        };
        let response = handle(pool, query).await.expect("no database access");

        assert!(response.items.is_empty());
        assert_eq!(response.pagination.total, 0);
        assert_eq!(response.pagination.pages, 0);
    }
}
