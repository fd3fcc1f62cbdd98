pub mod expiring;
pub mod list;

pub use expiring::{ExpiringItemsError, ExpiringItemsQuery, ExpiringItemsResponse};
pub use list::{ListInventoryError, ListInventoryQuery, ListInventoryResponse};
