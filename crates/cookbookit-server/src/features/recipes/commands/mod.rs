pub mod complete;

pub use complete::{CompleteRecipeCommand, CompleteRecipeError, CompleteRecipeResponse};
