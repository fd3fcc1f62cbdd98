//! Pantry inventory feature
//!
//! Per-user ingredient stock with quantities, units and optional expiry
//! dates. The quantity invariant is enforced everywhere rows are written:
//! an inventory row never holds a quantity of zero or below, it is deleted
//! instead.

pub mod commands;
pub mod queries;
pub mod routes;
pub mod store;

pub use routes::inventory_routes;
