//! Recipe matching and ranking
//!
//! Scores recipes against the set of ingredient names a user currently
//! owns and ranks them by the fraction of required ingredients present.

use cookbookit_common::{DietaryFilters, Recipe};
use std::collections::HashSet;

/// A recipe together with its ingredient-match score.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct ScoredRecipe {
    #[serde(flatten)]
    pub recipe: Recipe,
    /// Fraction (0-100) of the recipe's ingredients present in the owned set.
    pub match_percentage: f64,
}

/// Score and rank recipes against a set of owned ingredient names.
///
/// Ingredient names are compared case-sensitively, exactly as stored.
/// Returns an empty list when `owned_names` is empty.
///
/// When `excluded_names` is non-empty it *replaces* the inclusion filter:
/// only recipes containing none of the excluded ingredients are selected,
/// and owned-ingredient membership no longer gates selection (scores are
/// still computed against `owned_names`). The two filters cannot be
/// combined in one call; this mirrors the store query the feature was
/// specified with.
///
/// Results are sorted by descending match percentage, ties broken by
/// recipe id ascending so the ordering is deterministic.
pub fn rank_by_ingredients(
    recipes: Vec<Recipe>,
    owned_names: &[String],
    excluded_names: Option<&[String]>,
) -> Vec<ScoredRecipe> {
    if owned_names.is_empty() {
        return Vec::new();
    }

    let owned: HashSet<&str> = owned_names.iter().map(String::as_str).collect();
    let excluded: Option<HashSet<&str>> = excluded_names
        .filter(|names| !names.is_empty())
        .map(|names| names.iter().map(String::as_str).collect());

    let mut scored: Vec<ScoredRecipe> = recipes
        .into_iter()
        .filter(|recipe| match &excluded {
            Some(excluded) => recipe
                .ingredients
                .iter()
                .all(|i| !excluded.contains(i.name.as_str())),
            None => recipe
                .ingredients
                .iter()
                .any(|i| owned.contains(i.name.as_str())),
        })
        .map(|recipe| {
            let match_percentage = match_percentage(&recipe, &owned);
            ScoredRecipe {
                recipe,
                match_percentage,
            }
        })
        .collect();

    scored.sort_by(|a, b| {
        b.match_percentage
            .partial_cmp(&a.match_percentage)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.recipe.id.cmp(&b.recipe.id))
    });

    scored
}

fn match_percentage(recipe: &Recipe, owned: &HashSet<&str>) -> f64 {
    let total = recipe.ingredients.len();
    if total == 0 {
        return 0.0;
    }
    let matching = recipe
        .ingredients
        .iter()
        .filter(|i| owned.contains(i.name.as_str()))
        .count();
    (matching as f64 / total as f64) * 100.0
}

/// Filter recipes against dietary constraints.
///
/// A recipe passes iff every provided flag equals the recipe's flag. Empty
/// filters pass the input through unchanged.
pub fn filter_by_dietary(recipes: Vec<Recipe>, filters: &DietaryFilters) -> Vec<Recipe> {
    if filters.is_empty() {
        return recipes;
    }
    recipes
        .into_iter()
        .filter(|recipe| filters.matches(&recipe.dietary_info))
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use cookbookit_common::{DietaryInfo, Nutrition, RecipeIngredient};
    use uuid::Uuid;

    fn recipe(id: u128, name: &str, ingredients: &[&str]) -> Recipe {
        Recipe {
            id: Uuid::from_u128(id),
            name: name.to_string(),
            description: String::new(),
            ingredients: ingredients
                .iter()
                .map(|n| RecipeIngredient::new(*n, 1.0, "whole"))
                .collect(),
            instructions: Vec::new(),
            prep_time: 5,
            cook_time: 10,
            servings: 2,
            difficulty: "Easy".to_string(),
            tags: Vec::new(),
            dietary_info: DietaryInfo::default(),
            nutrition: Nutrition::default(),
            image_url: None,
        }
    }

    fn owned(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn empty_owned_set_yields_nothing() {
        let recipes = vec![recipe(1, "toast", &["bread", "butter"])];
        assert!(rank_by_ingredients(recipes, &[], None).is_empty());
    }

    #[test]
    fn match_percentage_is_fraction_of_recipe_ingredients() {
        let recipes = vec![recipe(1, "carbonara", &["spaghetti", "egg", "pancetta", "salt"])];
        let ranked = rank_by_ingredients(recipes, &owned(&["egg", "salt"]), None);
        assert_eq!(ranked.len(), 1);
        assert!((ranked[0].match_percentage - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn percentage_stays_within_bounds() {
        let recipes = vec![
            recipe(1, "full match", &["egg"]),
            recipe(2, "partial", &["egg", "bread", "butter", "jam"]),
        ];
        for scored in rank_by_ingredients(recipes, &owned(&["egg"]), None) {
            assert!(scored.match_percentage >= 0.0);
            assert!(scored.match_percentage <= 100.0);
        }
    }

    #[test]
    fn ranking_is_non_increasing() {
        let recipes = vec![
            recipe(1, "a", &["egg", "flour", "milk", "sugar"]),
            recipe(2, "b", &["egg", "flour"]),
            recipe(3, "c", &["egg"]),
        ];
        let ranked = rank_by_ingredients(recipes, &owned(&["egg", "flour"]), None);
        for pair in ranked.windows(2) {
            assert!(pair[0].match_percentage >= pair[1].match_percentage);
        }
    }

    #[test]
    fn ties_break_by_recipe_id() {
        let recipes = vec![
            recipe(7, "later", &["egg"]),
            recipe(3, "earlier", &["egg"]),
        ];
        let ranked = rank_by_ingredients(recipes, &owned(&["egg"]), None);
        assert_eq!(ranked[0].recipe.id, Uuid::from_u128(3));
        assert_eq!(ranked[1].recipe.id, Uuid::from_u128(7));
    }

    #[test]
    fn matching_is_case_sensitive() {
        let recipes = vec![recipe(1, "toast", &["Bread"])];
        assert!(rank_by_ingredients(recipes, &owned(&["bread"]), None).is_empty());
    }

    #[test]
    fn exclusion_replaces_inclusion_filter() {
        let recipes = vec![
            recipe(1, "has peanut", &["peanut", "egg"]),
            recipe(2, "no peanut no owned", &["tofu", "rice"]),
        ];
        // With exclusions, selection ignores the owned set entirely: the
        // recipe sharing no ingredient with "egg" is still returned.
        let ranked = rank_by_ingredients(
            recipes,
            &owned(&["egg"]),
            Some(&owned(&["peanut"])),
        );
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].recipe.id, Uuid::from_u128(2));
        assert_eq!(ranked[0].match_percentage, 0.0);
    }

    #[test]
    fn empty_exclusion_list_falls_back_to_inclusion() {
        let recipes = vec![recipe(1, "toast", &["bread"])];
        let ranked = rank_by_ingredients(recipes, &owned(&["bread"]), Some(&[]));
        assert_eq!(ranked.len(), 1);
    }

    #[test]
    fn dietary_filter_identity_when_empty() {
        let recipes = vec![recipe(1, "a", &["egg"]), recipe(2, "b", &["rice"])];
        let filtered = filter_by_dietary(recipes.clone(), &DietaryFilters::default());
        assert_eq!(filtered, recipes);
    }

    #[test]
    fn dietary_filter_selects_exact_subset() {
        let mut vegan = recipe(1, "chili", &["beans"]);
        vegan.dietary_info.vegan = true;
        let not_vegan = recipe(2, "carbonara", &["egg"]);

        let filters = DietaryFilters {
            vegan: Some(true),
            ..Default::default()
        };
        let filtered = filter_by_dietary(vec![vegan.clone(), not_vegan], &filters);
        assert_eq!(filtered, vec![vegan]);
    }
}
