//! Generate a week's plan from matching recipes
//!
//! Candidates are the recipes that share at least one ingredient with the
//! user's pantry, narrowed by the user's stored dietary preferences. One
//! candidate is picked uniformly at random for each of the 21 slots
//! (7 days, 3 meals). Clearing the previous slots and inserting the new
//! ones happens in a single transaction.
//!
//! The randomness source is a parameter so tests can seed it.

use rand::Rng;
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

use cookbookit_common::DietaryFilters;

use crate::domain::matching::rank_by_ingredients;
use crate::features::inventory::store as inventory_store;
use crate::features::meal_plans::types::{self, DAYS_PER_WEEK, MEAL_TYPES};
use crate::features::recipes::store as recipe_store;

/// Minimum candidate pool for a plan worth generating.
const MIN_CANDIDATES: usize = 3;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratePlanCommand {
    /// Both set from the URL path.
    #[serde(default)]
    pub user_id: Uuid,
    #[serde(default)]
    pub plan_id: Uuid,
}

#[derive(Debug, Clone, Serialize)]
pub struct GeneratePlanResponse {
    pub plan_id: Uuid,
    pub items_created: usize,
    pub candidate_count: usize,
}

#[derive(Debug, thiserror::Error)]
pub enum GeneratePlanError {
    #[error("Meal plan '{0}' not found")]
    PlanNotFound(Uuid),

    #[error("Not enough matching recipes to generate a plan: need at least {MIN_CANDIDATES}, found {0}")]
    NotEnoughCandidates(usize),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// One generated slot: day, meal type, recipe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanSlot {
    pub day_of_week: i16,
    pub meal_type: &'static str,
    pub recipe_id: Uuid,
}

/// Fill every day/meal slot with a uniformly random candidate.
fn assemble_slots<R: Rng>(candidates: &[Uuid], rng: &mut R) -> Vec<PlanSlot> {
    let mut slots = Vec::with_capacity(DAYS_PER_WEEK as usize * MEAL_TYPES.len());
    for day in 0..DAYS_PER_WEEK {
        for meal_type in MEAL_TYPES {
            let recipe_id = candidates[rng.gen_range(0..candidates.len())];
            slots.push(PlanSlot {
                day_of_week: day,
                meal_type,
                recipe_id,
            });
        }
    }
    slots
}

#[tracing::instrument(
    skip(pool, command, rng),
    fields(plan_id = %command.plan_id, user_id = %command.user_id)
)]
pub async fn handle<R: Rng + Send>(
    pool: PgPool,
    command: GeneratePlanCommand,
    rng: &mut R,
) -> Result<GeneratePlanResponse, GeneratePlanError> {
    let plan = types::fetch_plan_for_user(&pool, command.plan_id, command.user_id)
        .await?
        .ok_or(GeneratePlanError::PlanNotFound(command.plan_id))?;

    let owned = inventory_store::ingredient_names(&pool, command.user_id).await?;
    let recipes = recipe_store::fetch_all(&pool).await?;

    let mut candidates: Vec<_> = rank_by_ingredients(recipes, &owned, None)
        .into_iter()
        .map(|scored| scored.recipe)
        .collect();

    let prefs: Option<(bool, bool, bool, bool)> = sqlx::query_as(
        "SELECT is_vegetarian, is_vegan, is_gluten_free, is_dairy_free \
         FROM user_preferences WHERE user_id = $1",
    )
    .bind(command.user_id)
    .fetch_optional(&pool)
    .await?;

    if let Some((vegetarian, vegan, gluten_free, dairy_free)) = prefs {
        let filters = DietaryFilters::from_preferences(vegetarian, vegan, gluten_free, dairy_free);
        if !filters.is_empty() {
            candidates.retain(|recipe| filters.matches(&recipe.dietary_info));
        }
    }

    if candidates.len() < MIN_CANDIDATES {
        return Err(GeneratePlanError::NotEnoughCandidates(candidates.len()));
    }

    let candidate_ids: Vec<Uuid> = candidates.iter().map(|recipe| recipe.id).collect();
    let slots = assemble_slots(&candidate_ids, rng);

    let mut tx = pool.begin().await?;

    sqlx::query("DELETE FROM meal_plan_items WHERE meal_plan_id = $1")
        .bind(plan.id)
        .execute(&mut *tx)
        .await?;

    for slot in &slots {
        sqlx::query(
            "INSERT INTO meal_plan_items (meal_plan_id, recipe_id, day_of_week, meal_type) \
             VALUES ($1, $2, $3, $4)",
        )
        .bind(plan.id)
        .bind(slot.recipe_id)
        .bind(slot.day_of_week)
        .bind(slot.meal_type)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;

    tracing::info!(
        plan_id = %plan.id,
        items = slots.len(),
        candidates = candidate_ids.len(),
        "Meal plan generated"
    );

    Ok(GeneratePlanResponse {
        plan_id: plan.id,
        items_created: slots.len(),
        candidate_count: candidate_ids.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn fills_every_slot_from_candidates() {
        let candidates: Vec<Uuid> = (0..5).map(|_| Uuid::new_v4()).collect();
        let candidate_set: HashSet<Uuid> = candidates.iter().copied().collect();

        let mut rng = StdRng::seed_from_u64(42);
        let slots = assemble_slots(&candidates, &mut rng);

        assert_eq!(slots.len(), 21);
        for slot in &slots {
            assert!(candidate_set.contains(&slot.recipe_id));
        }
    }

    #[test]
    fn covers_all_days_and_meal_types() {
        let candidates: Vec<Uuid> = (0..3).map(|_| Uuid::new_v4()).collect();
        let mut rng = StdRng::seed_from_u64(7);
        let slots = assemble_slots(&candidates, &mut rng);

        for day in 0..7i16 {
            for meal_type in MEAL_TYPES {
                assert_eq!(
                    slots
                        .iter()
                        .filter(|s| s.day_of_week == day && s.meal_type == meal_type)
                        .count(),
                    1,
                    "expected exactly one slot for day {} {}",
                    day,
                    meal_type
                );
            }
        }
    }

    #[test]
    fn seeded_rng_is_deterministic() {
        let candidates: Vec<Uuid> = (0..4).map(|_| Uuid::new_v4()).collect();

        let mut first_rng = StdRng::seed_from_u64(99);
        let mut second_rng = StdRng::seed_from_u64(99);

        assert_eq!(
            assemble_slots(&candidates, &mut first_rng),
            assemble_slots(&candidates, &mut second_rng)
        );
    }
}
