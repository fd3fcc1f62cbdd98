//! Recipe store access
//!
//! Row mapping and fetch helpers shared by every feature that resolves
//! recipes (matching, meal plans, grocery lists, completions). Recipes are
//! stored with their ingredient list, instructions, and nutrition as JSONB
//! payloads and dietary flags as typed columns.

use cookbookit_common::{DietaryInfo, Nutrition, Recipe, RecipeIngredient};
use sqlx::types::Json;
use uuid::Uuid;

const RECIPE_COLUMNS: &str = "id, name, description, ingredients, instructions, prep_time, \
     cook_time, servings, difficulty, tags, is_vegetarian, is_vegan, is_gluten_free, \
     is_dairy_free, nutrition, image_url";

#[derive(Debug, sqlx::FromRow)]
pub struct RecipeRow {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub ingredients: Json<Vec<RecipeIngredient>>,
    pub instructions: Json<Vec<String>>,
    pub prep_time: i32,
    pub cook_time: i32,
    pub servings: i32,
    pub difficulty: String,
    pub tags: Vec<String>,
    pub is_vegetarian: bool,
    pub is_vegan: bool,
    pub is_gluten_free: bool,
    pub is_dairy_free: bool,
    pub nutrition: Json<Nutrition>,
    pub image_url: Option<String>,
}

impl From<RecipeRow> for Recipe {
    fn from(row: RecipeRow) -> Self {
        Recipe {
            id: row.id,
            name: row.name,
            description: row.description,
            ingredients: row.ingredients.0,
            instructions: row.instructions.0,
            prep_time: row.prep_time,
            cook_time: row.cook_time,
            servings: row.servings,
            difficulty: row.difficulty,
            tags: row.tags,
            dietary_info: DietaryInfo {
                vegetarian: row.is_vegetarian,
                vegan: row.is_vegan,
                gluten_free: row.is_gluten_free,
                dairy_free: row.is_dairy_free,
            },
            nutrition: row.nutrition.0,
            image_url: row.image_url,
        }
    }
}

/// Fetch the whole catalog, ordered by id for deterministic iteration.
pub async fn fetch_all<'e>(executor: impl sqlx::PgExecutor<'e>) -> Result<Vec<Recipe>, sqlx::Error> {
    let rows: Vec<RecipeRow> =
        sqlx::query_as(&format!("SELECT {} FROM recipes ORDER BY id", RECIPE_COLUMNS))
            .fetch_all(executor)
            .await?;
    Ok(rows.into_iter().map(Recipe::from).collect())
}

/// Fetch one recipe by id.
pub async fn fetch_by_id<'e>(
    executor: impl sqlx::PgExecutor<'e>,
    id: Uuid,
) -> Result<Option<Recipe>, sqlx::Error> {
    let row: Option<RecipeRow> =
        sqlx::query_as(&format!("SELECT {} FROM recipes WHERE id = $1", RECIPE_COLUMNS))
            .bind(id)
            .fetch_optional(executor)
            .await?;
    Ok(row.map(Recipe::from))
}

/// Fetch a batch of recipes by id. Missing ids are silently absent.
pub async fn fetch_by_ids<'e>(
    executor: impl sqlx::PgExecutor<'e>,
    ids: &[Uuid],
) -> Result<Vec<Recipe>, sqlx::Error> {
    let rows: Vec<RecipeRow> = sqlx::query_as(&format!(
        "SELECT {} FROM recipes WHERE id = ANY($1) ORDER BY id",
        RECIPE_COLUMNS
    ))
    .bind(ids)
    .fetch_all(executor)
    .await?;
    Ok(rows.into_iter().map(Recipe::from).collect())
}

/// Fetch one page of the catalog, ordered by id.
pub async fn fetch_page<'e>(
    executor: impl sqlx::PgExecutor<'e>,
    limit: i64,
    offset: i64,
) -> Result<Vec<Recipe>, sqlx::Error> {
    let rows: Vec<RecipeRow> = sqlx::query_as(&format!(
        "SELECT {} FROM recipes ORDER BY id LIMIT $1 OFFSET $2",
        RECIPE_COLUMNS
    ))
    .bind(limit)
    .bind(offset)
    .fetch_all(executor)
    .await?;
    Ok(rows.into_iter().map(Recipe::from).collect())
}

/// Full-text search over recipe names and descriptions, one page at a
/// time, best matches first.
pub async fn search_page<'e>(
    executor: impl sqlx::PgExecutor<'e>,
    term: &str,
    limit: i64,
    offset: i64,
) -> Result<Vec<Recipe>, sqlx::Error> {
    let rows: Vec<RecipeRow> = sqlx::query_as(&format!(
        "SELECT {} FROM recipes \
         WHERE search_vec @@ websearch_to_tsquery('english', $1) \
         ORDER BY ts_rank(search_vec, websearch_to_tsquery('english', $1)) DESC, id \
         LIMIT $2 OFFSET $3",
        RECIPE_COLUMNS
    ))
    .bind(term)
    .bind(limit)
    .bind(offset)
    .fetch_all(executor)
    .await?;
    Ok(rows.into_iter().map(Recipe::from).collect())
}

/// Number of recipes in the catalog.
pub async fn count<'e>(executor: impl sqlx::PgExecutor<'e>) -> Result<i64, sqlx::Error> {
    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM recipes")
        .fetch_one(executor)
        .await?;
    Ok(count)
}

/// Number of recipes matching a full-text search term.
pub async fn count_search<'e>(
    executor: impl sqlx::PgExecutor<'e>,
    term: &str,
) -> Result<i64, sqlx::Error> {
    let (count,): (i64,) = sqlx::query_as(
        "SELECT COUNT(*) FROM recipes WHERE search_vec @@ websearch_to_tsquery('english', $1)",
    )
    .bind(term)
    .fetch_one(executor)
    .await?;
    Ok(count)
}
