pub mod can_make;
pub mod completed;
pub mod get;
pub mod list;

pub use can_make::{CanMakeError, CanMakeQuery, CanMakeResponse};
pub use completed::{CompletedRecipesError, CompletedRecipesQuery, CompletedRecipesResponse};
pub use get::{GetRecipeError, GetRecipeQuery, GetRecipeResponse};
pub use list::{ListRecipesError, ListRecipesQuery, ListRecipesResponse};
