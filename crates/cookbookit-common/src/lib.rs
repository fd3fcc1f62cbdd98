//! CookbookIt Common Library
#![deny(clippy::unwrap_used, clippy::expect_used)]
//!
//! Shared types, utilities, and error handling for the CookbookIt workspace.
//!
//! # Overview
//!
//! This crate provides functionality used across all CookbookIt workspace
//! members:
//!
//! - **Logging**: Centralized tracing initialization
//! - **Types**: Shared domain types (recipes, dietary flags, nutrition)
//!
//! # Example
//!
//! ```no_run
//! use cookbookit_common::logging::{init_logging, LogConfig};
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = LogConfig::from_env()?;
//!     init_logging(&config)?;
//!     Ok(())
//! }
//! ```

pub mod logging;
pub mod types;

// Re-export commonly used types
pub use types::{DietaryFilters, DietaryInfo, Nutrition, Recipe, RecipeIngredient};
