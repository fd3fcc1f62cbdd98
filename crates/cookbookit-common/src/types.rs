//! Shared domain types for CookbookIt
//!
//! Recipes are modeled as fixed-schema records rather than loosely typed
//! documents: the ingredient list is a list of `{name, amount, unit}`
//! triples and dietary flags are named booleans.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One ingredient line of a recipe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeIngredient {
    pub name: String,
    pub amount: f64,
    pub unit: String,
}

impl RecipeIngredient {
    pub fn new(name: impl Into<String>, amount: f64, unit: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            amount,
            unit: unit.into(),
        }
    }
}

/// Dietary flags carried by every recipe.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DietaryInfo {
    pub vegetarian: bool,
    pub vegan: bool,
    pub gluten_free: bool,
    pub dairy_free: bool,
}

/// Dietary constraints for filtering recipes.
///
/// `None` means "don't care"; `Some(v)` requires the recipe flag to equal
/// `v` exactly. All-`None` filters pass every recipe through unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DietaryFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vegetarian: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vegan: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gluten_free: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dairy_free: Option<bool>,
}

impl DietaryFilters {
    /// True when no constraint is set.
    pub fn is_empty(&self) -> bool {
        self.vegetarian.is_none()
            && self.vegan.is_none()
            && self.gluten_free.is_none()
            && self.dairy_free.is_none()
    }

    /// True when `info` satisfies every provided constraint.
    pub fn matches(&self, info: &DietaryInfo) -> bool {
        fn ok(filter: Option<bool>, flag: bool) -> bool {
            filter.map_or(true, |required| flag == required)
        }

        ok(self.vegetarian, info.vegetarian)
            && ok(self.vegan, info.vegan)
            && ok(self.gluten_free, info.gluten_free)
            && ok(self.dairy_free, info.dairy_free)
    }

    /// Build filters from stored user preferences.
    ///
    /// Only flags the user has switched on become constraints; a false
    /// preference is "don't care", not "must not be".
    pub fn from_preferences(
        vegetarian: bool,
        vegan: bool,
        gluten_free: bool,
        dairy_free: bool,
    ) -> Self {
        Self {
            vegetarian: vegetarian.then_some(true),
            vegan: vegan.then_some(true),
            gluten_free: gluten_free.then_some(true),
            dairy_free: dairy_free.then_some(true),
        }
    }
}

/// Per-serving nutrition summary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Nutrition {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

/// A recipe from the catalog. Immutable once seeded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    /// Ordered ingredient list.
    pub ingredients: Vec<RecipeIngredient>,
    /// Ordered instruction steps.
    pub instructions: Vec<String>,
    /// Preparation time in minutes.
    pub prep_time: i32,
    /// Cooking time in minutes.
    pub cook_time: i32,
    /// Base yield the ingredient amounts are scaled for.
    pub servings: i32,
    pub difficulty: String,
    pub tags: Vec<String>,
    pub dietary_info: DietaryInfo,
    pub nutrition: Nutrition,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn empty_filters_match_everything() {
        let filters = DietaryFilters::default();
        assert!(filters.is_empty());
        assert!(filters.matches(&DietaryInfo::default()));
        assert!(filters.matches(&DietaryInfo {
            vegan: true,
            vegetarian: true,
            ..Default::default()
        }));
    }

    #[test]
    fn filters_honor_both_polarities() {
        let must_be_vegan = DietaryFilters {
            vegan: Some(true),
            ..Default::default()
        };
        let must_not_be_vegan = DietaryFilters {
            vegan: Some(false),
            ..Default::default()
        };
        let vegan = DietaryInfo {
            vegan: true,
            ..Default::default()
        };
        let not_vegan = DietaryInfo::default();

        assert!(must_be_vegan.matches(&vegan));
        assert!(!must_be_vegan.matches(&not_vegan));
        assert!(must_not_be_vegan.matches(&not_vegan));
        assert!(!must_not_be_vegan.matches(&vegan));
    }

    #[test]
    fn preferences_only_promote_enabled_flags() {
        let filters = DietaryFilters::from_preferences(true, false, true, false);
        assert_eq!(filters.vegetarian, Some(true));
        assert_eq!(filters.vegan, None);
        assert_eq!(filters.gluten_free, Some(true));
        assert_eq!(filters.dairy_free, None);
    }

    #[test]
    fn recipe_round_trips_through_json() {
        let recipe = Recipe {
            id: Uuid::new_v4(),
            name: "Avocado Toast".to_string(),
            description: "Simple breakfast.".to_string(),
            ingredients: vec![
                RecipeIngredient::new("bread", 2.0, "slices"),
                RecipeIngredient::new("avocado", 1.0, "whole"),
            ],
            instructions: vec!["Toast bread.".to_string(), "Add avocado.".to_string()],
            prep_time: 5,
            cook_time: 5,
            servings: 2,
            difficulty: "Easy".to_string(),
            tags: vec!["breakfast".to_string()],
            dietary_info: DietaryInfo {
                vegetarian: true,
                dairy_free: true,
                ..Default::default()
            },
            nutrition: Nutrition {
                calories: 280.0,
                protein: 10.0,
                carbs: 20.0,
                fat: 18.0,
            },
            image_url: None,
        };

        let json = serde_json::to_string(&recipe).unwrap();
        let back: Recipe = serde_json::from_str(&json).unwrap();
        assert_eq!(back, recipe);
    }
}
