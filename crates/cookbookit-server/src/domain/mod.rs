//! Core meal-planning logic
//!
//! Pure, synchronous functions over data already fetched from the store:
//! recipe matching and ranking, grocery-list consolidation, and
//! inventory-depletion arithmetic. Nothing in here touches the database,
//! so all of it is unit-testable without fixtures.

pub mod depletion;
pub mod grocery;
pub mod matching;

pub use depletion::amount_used;
pub use grocery::{consolidate, GroceryItem, InventoryLevel};
pub use matching::{filter_by_dietary, rank_by_ingredients, ScoredRecipe};
