//! Inventory-depletion arithmetic for completed recipes

use cookbookit_common::Recipe;

/// Amount of one ingredient consumed when a recipe is cooked for
/// `servings_made` servings.
///
/// Ingredient amounts are scaled linearly from the recipe's base yield:
/// `amount / servings * servings_made`. Returns `None` when the recipe's
/// base serving count is zero or negative, in which case depletion must be
/// skipped entirely rather than dividing by zero.
pub fn amount_used(ingredient_amount: f64, recipe_servings: i32, servings_made: i32) -> Option<f64> {
    if recipe_servings <= 0 {
        return None;
    }
    Some(ingredient_amount / f64::from(recipe_servings) * f64::from(servings_made))
}

/// Per-ingredient depletion for a whole recipe, in ingredient order.
///
/// Empty when the recipe's serving count makes scaling impossible.
pub fn depletions(recipe: &Recipe, servings_made: i32) -> Vec<(String, f64)> {
    recipe
        .ingredients
        .iter()
        .filter_map(|ingredient| {
            amount_used(ingredient.amount, recipe.servings, servings_made)
                .map(|used| (ingredient.name.clone(), used))
        })
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use cookbookit_common::{DietaryInfo, Nutrition, RecipeIngredient};
    use uuid::Uuid;

    #[test]
    fn scales_by_servings_made() {
        // 3 eggs for 4 servings, 2 servings made: (3/4) * 2 = 1.5
        let used = amount_used(3.0, 4, 2).unwrap();
        assert!((used - 1.5).abs() < f64::EPSILON);
    }

    #[test]
    fn zero_base_servings_skips_depletion() {
        assert_eq!(amount_used(3.0, 0, 2), None);
        assert_eq!(amount_used(3.0, -1, 2), None);
    }

    #[test]
    fn whole_recipe_depletion_covers_every_ingredient() {
        let recipe = Recipe {
            id: Uuid::from_u128(1),
            name: "pancakes".to_string(),
            description: String::new(),
            ingredients: vec![
                RecipeIngredient::new("flour", 200.0, "g"),
                RecipeIngredient::new("egg", 2.0, "whole"),
            ],
            instructions: Vec::new(),
            prep_time: 5,
            cook_time: 10,
            servings: 4,
            difficulty: "Easy".to_string(),
            tags: Vec::new(),
            dietary_info: DietaryInfo::default(),
            nutrition: Nutrition::default(),
            image_url: None,
        };

        let used = depletions(&recipe, 2);
        assert_eq!(used.len(), 2);
        assert_eq!(used[0].0, "flour");
        assert!((used[0].1 - 100.0).abs() < f64::EPSILON);
        assert!((used[1].1 - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn zero_servings_recipe_depletes_nothing() {
        let recipe = Recipe {
            id: Uuid::from_u128(1),
            name: "broken".to_string(),
            description: String::new(),
            ingredients: vec![RecipeIngredient::new("egg", 2.0, "whole")],
            instructions: Vec::new(),
            prep_time: 0,
            cook_time: 0,
            servings: 0,
            difficulty: "Easy".to_string(),
            tags: Vec::new(),
            dietary_info: DietaryInfo::default(),
            nutrition: Nutrition::default(),
            image_url: None,
        };

        assert!(depletions(&recipe, 3).is_empty());
    }
}
