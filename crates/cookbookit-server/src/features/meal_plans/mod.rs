//! Weekly meal planning feature
//!
//! One plan per user per week (weeks start on Monday), holding recipe
//! slots for 7 days x breakfast/lunch/dinner. Plans can be filled by hand
//! or generated from pantry-matching recipes, and feed the consolidated
//! grocery list.

pub mod commands;
pub mod queries;
pub mod routes;
pub mod types;

pub use routes::meal_plans_routes;
