//! Configuration loading and management for the Labor Cost Engine.
//!
//! This module provides functionality to load restaurant configurations from
//! YAML files: the restaurant settings and the employee roster.
//!
//! # Example
//!
//! ```no_run
//! use labor_cost_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/restaurant").unwrap();
//! println!("Loaded restaurant: {}", config.settings().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    DEFAULT_LABOR_GOAL_PERCENTAGE, EmployeeRoster, RestaurantConfig, RestaurantSettings,
};
