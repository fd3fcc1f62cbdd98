pub mod list;

pub use list::{CatalogIngredient, ListIngredientsError, ListIngredientsResponse};
