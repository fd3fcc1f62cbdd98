pub mod add_item;
pub mod current;
pub mod generate;
pub mod remove_item;

pub use add_item::{AddPlanItemCommand, AddPlanItemError, AddPlanItemResponse};
pub use current::{CurrentPlanCommand, CurrentPlanError, CurrentPlanResponse};
pub use generate::{GeneratePlanCommand, GeneratePlanError, GeneratePlanResponse};
pub use remove_item::{RemovePlanItemCommand, RemovePlanItemError, RemovePlanItemResponse};
