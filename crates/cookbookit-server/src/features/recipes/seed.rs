//! Startup seeding
//!
//! The recipe catalog and ingredient reference data ship with the binary as
//! embedded JSON and are inserted on first boot against an empty database.
//! Both tables are read-only afterwards, so seeding is skipped whenever
//! they already contain rows.

use cookbookit_common::{DietaryInfo, Nutrition, RecipeIngredient};
use serde::Deserialize;
use sqlx::types::Json;
use sqlx::PgPool;

const RECIPES_JSON: &str = include_str!("seed_data/recipes.json");
const INGREDIENTS_JSON: &str = include_str!("seed_data/ingredients.json");

#[derive(Debug, Deserialize)]
struct SeedRecipe {
    name: String,
    description: String,
    ingredients: Vec<RecipeIngredient>,
    instructions: Vec<String>,
    prep_time: i32,
    cook_time: i32,
    servings: i32,
    difficulty: String,
    tags: Vec<String>,
    dietary_info: DietaryInfo,
    nutrition: Nutrition,
    image_url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SeedIngredient {
    name: String,
    category: String,
    unit: String,
}

#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("Embedded seed data is malformed: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Seed recipes and the ingredient catalog if their tables are empty.
#[tracing::instrument(skip(pool))]
pub async fn run(pool: &PgPool) -> Result<(), SeedError> {
    if super::store::count(pool).await? == 0 {
        seed_recipes(pool).await?;
    }

    let (ingredient_count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM ingredients")
        .fetch_one(pool)
        .await?;
    if ingredient_count == 0 {
        seed_ingredients(pool).await?;
    }

    Ok(())
}

async fn seed_recipes(pool: &PgPool) -> Result<(), SeedError> {
    let recipes: Vec<SeedRecipe> = serde_json::from_str(RECIPES_JSON)?;
    let count = recipes.len();

    let mut tx = pool.begin().await?;
    for recipe in recipes {
        sqlx::query(
            "INSERT INTO recipes \
             (name, description, ingredients, instructions, prep_time, cook_time, servings, \
              difficulty, tags, is_vegetarian, is_vegan, is_gluten_free, is_dairy_free, \
              nutrition, image_url) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15)",
        )
        .bind(&recipe.name)
        .bind(&recipe.description)
        .bind(Json(&recipe.ingredients))
        .bind(Json(&recipe.instructions))
        .bind(recipe.prep_time)
        .bind(recipe.cook_time)
        .bind(recipe.servings)
        .bind(&recipe.difficulty)
        .bind(&recipe.tags)
        .bind(recipe.dietary_info.vegetarian)
        .bind(recipe.dietary_info.vegan)
        .bind(recipe.dietary_info.gluten_free)
        .bind(recipe.dietary_info.dairy_free)
        .bind(Json(&recipe.nutrition))
        .bind(&recipe.image_url)
        .execute(&mut *tx)
        .await?;
    }
    tx.commit().await?;

    tracing::info!(count, "Seeded recipe catalog");
    Ok(())
}

async fn seed_ingredients(pool: &PgPool) -> Result<(), SeedError> {
    let ingredients: Vec<SeedIngredient> = serde_json::from_str(INGREDIENTS_JSON)?;
    let count = ingredients.len();

    let mut tx = pool.begin().await?;
    for ingredient in ingredients {
        sqlx::query(
            "INSERT INTO ingredients (name, category, default_unit) \
             VALUES ($1, $2, $3) \
             ON CONFLICT (name) DO NOTHING",
        )
        .bind(&ingredient.name)
        .bind(&ingredient.category)
        .bind(&ingredient.unit)
        .execute(&mut *tx)
        .await?;
    }
    tx.commit().await?;

    tracing::info!(count, "Seeded ingredient catalog");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_recipes_parse() {
        let recipes: Vec<SeedRecipe> =
            serde_json::from_str(RECIPES_JSON).expect("seed recipes must parse");
        assert_eq!(recipes.len(), 5);
        for recipe in &recipes {
            assert!(!recipe.ingredients.is_empty());
            assert!(!recipe.instructions.is_empty());
            assert!(recipe.servings > 0);
        }
    }

    #[test]
    fn embedded_ingredients_parse() {
        let ingredients: Vec<SeedIngredient> =
            serde_json::from_str(INGREDIENTS_JSON).expect("seed ingredients must parse");
        assert_eq!(ingredients.len(), 33);
    }

    #[test]
    fn every_seed_recipe_ingredient_is_in_the_catalog() {
        let recipes: Vec<SeedRecipe> =
            serde_json::from_str(RECIPES_JSON).expect("seed recipes must parse");
        let ingredients: Vec<SeedIngredient> =
            serde_json::from_str(INGREDIENTS_JSON).expect("seed ingredients must parse");
        let catalog: std::collections::HashSet<&str> =
            ingredients.iter().map(|i| i.name.as_str()).collect();

        for recipe in &recipes {
            for ingredient in &recipe.ingredients {
                assert!(
                    catalog.contains(ingredient.name.as_str()),
                    "{} is missing from the ingredient catalog",
                    ingredient.name
                );
            }
        }
    }
}
