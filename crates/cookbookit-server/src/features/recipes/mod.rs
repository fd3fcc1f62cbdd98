//! Recipe catalog feature
//!
//! Read-only catalog seeded at startup, full-text search, pantry matching
//! with match percentages, and completion recording with inventory
//! depletion.

pub mod commands;
pub mod queries;
pub mod routes;
pub mod seed;
pub mod store;

pub use routes::recipes_routes;
