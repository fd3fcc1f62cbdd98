pub mod grocery_list;

pub use grocery_list::{GroceryListError, GroceryListQuery, GroceryListResponse};
