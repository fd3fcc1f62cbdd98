pub mod add;
pub mod adjust;
pub mod delete;
pub mod update;

pub use add::{AddInventoryItemCommand, AddInventoryItemError, AddInventoryItemResponse};
pub use adjust::{AdjustQuantityCommand, AdjustQuantityError, AdjustQuantityResponse};
pub use delete::{
    DeleteInventoryItemCommand, DeleteInventoryItemError, DeleteInventoryItemResponse,
};
pub use update::{
    UpdateInventoryItemCommand, UpdateInventoryItemError, UpdateInventoryItemResponse,
};
