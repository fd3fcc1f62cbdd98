//! Static ingredient catalog feature

pub mod queries;
pub mod routes;

pub use routes::ingredients_routes;
