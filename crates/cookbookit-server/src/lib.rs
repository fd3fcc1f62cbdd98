//! CookbookIt server library
//!
//! HTTP API for household meal planning: pantry inventory, a seeded recipe
//! catalog with full-text search, recipe suggestions scored against owned
//! ingredients, weekly meal plans, consolidated grocery lists, and
//! completion tracking that depletes the pantry.
//!
//! # Architecture
//!
//! The server follows a feature-sliced CQRS layout:
//!
//! - **`domain`**: pure, synchronous core logic (recipe matching, grocery
//!   consolidation, inventory depletion) over already-fetched data, unit
//!   tested without a database.
//! - **`features`**: one slice per resource, each with `commands/` (writes),
//!   `queries/` (reads) and `routes.rs`. Handlers are standalone functions
//!   taking a `PgPool`; no global state.
//! - **`api`** / **`middleware`**: response envelopes, CORS and request
//!   tracing.
//!
//! # Framework stack
//!
//! - **Axum** for HTTP, **SQLx** for PostgreSQL, **Tower** middleware,
//!   **tracing** for structured logs.

pub mod api;
pub mod config;
pub mod domain;
pub mod features;
pub mod middleware;

use axum::extract::FromRef;
use sqlx::PgPool;

use crate::config::PantryConfig;

/// Application state shared across handlers. Handlers extract the piece
/// they need via `FromRef`.
#[derive(Clone, FromRef)]
pub struct AppState {
    pub db: PgPool,
    pub pantry: PantryConfig,
}
