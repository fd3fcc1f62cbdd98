//! User accounts and dietary preferences
//!
//! Registration, credential verification, and the per-user dietary flags
//! the recipe matcher applies. No session or token handling lives here.

pub mod commands;
pub mod queries;
pub mod routes;
pub mod types;

pub use routes::users_routes;
