//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading restaurant
//! configurations from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};
use crate::models::Employee;

use super::types::{EmployeeRoster, RestaurantConfig, RestaurantSettings};

/// Loads and provides access to restaurant configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory
/// and provides methods to query settings and the employee roster.
///
/// # Directory Structure
///
/// ```text
/// config/restaurant/
/// ├── restaurant.yaml  # Name, labor goal, closed days, closed-day marker
/// └── employees.yaml   # Employee roster
/// ```
///
/// # Example
///
/// ```no_run
/// use labor_cost_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/restaurant").unwrap();
/// println!("Labor goal: {}%", loader.settings().labor_goal_percentage);
/// for employee in loader.employees() {
///     println!("{} ({:?})", employee.name, employee.pay_type);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: RestaurantConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Errors
    ///
    /// - [`EngineError::ConfigNotFound`] if either file is missing
    /// - [`EngineError::ConfigParseError`] if either file is invalid YAML
    /// - [`EngineError::InvalidEmployee`] if a roster entry fails validation
    ///
    /// Settings are not rejected here; a negative labor goal is reported as a
    /// warning when a week is costed.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let settings = Self::load_yaml::<RestaurantSettings>(&path.join("restaurant.yaml"))?;

        let roster = Self::load_yaml::<EmployeeRoster>(&path.join("employees.yaml"))?;
        for employee in &roster.employees {
            employee.validate()?;
        }

        Ok(Self::from_config(RestaurantConfig::new(settings, roster.employees)))
    }

    /// Wraps an already-built configuration.
    pub fn from_config(config: RestaurantConfig) -> Self {
        Self { config }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying restaurant configuration.
    pub fn config(&self) -> &RestaurantConfig {
        &self.config
    }

    /// Returns the restaurant settings.
    pub fn settings(&self) -> &RestaurantSettings {
        self.config.settings()
    }

    /// Returns the active employees, in roster order.
    pub fn employees(&self) -> Vec<Employee> {
        self.config
            .employees()
            .iter()
            .filter(|e| e.active)
            .cloned()
            .collect()
    }

    /// Returns every employee, including inactive ones.
    pub fn all_employees(&self) -> &[Employee] {
        self.config.employees()
    }

    /// Gets an employee by id, active or not.
    pub fn get_employee(&self, id: &str) -> Option<&Employee> {
        self.config.employees().iter().find(|e| e.id == id)
    }
}
