//! Configuration types for restaurant labor costing.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use chrono::Weekday;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::DEFAULT_CLOSED_DAY_MARKER;
use crate::error::{EngineError, EngineResult};
use crate::models::Employee;

/// Labor goal applied when the settings do not specify one (25%).
pub const DEFAULT_LABOR_GOAL_PERCENTAGE: Decimal = Decimal::from_parts(25, 0, 0, false, 0);

/// Restaurant-wide settings that shape a week's calculation.
///
/// # Example
///
/// ```
/// use labor_cost_engine::config::RestaurantSettings;
/// use chrono::Weekday;
/// use rust_decimal::Decimal;
///
/// let settings: RestaurantSettings = serde_yaml::from_str(
///     "name: Corner Bistro\nclosed_days: [Mon]\n",
/// ).unwrap();
/// assert_eq!(settings.labor_goal_percentage, Decimal::from(25));
/// assert_eq!(settings.closed_days, vec![Weekday::Mon]);
/// assert_eq!(settings.closed_day_marker, "CLOSED");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestaurantSettings {
    /// Display name of the restaurant.
    #[serde(default)]
    pub name: String,
    /// Target labor cost as a percentage of sales.
    #[serde(default = "default_labor_goal")]
    pub labor_goal_percentage: Decimal,
    /// Weekdays the restaurant does not operate.
    #[serde(default)]
    pub closed_days: Vec<Weekday>,
    /// Shift text that marks a closed day in the schedule grid.
    #[serde(default = "default_closed_day_marker")]
    pub closed_day_marker: String,
}

fn default_labor_goal() -> Decimal {
    DEFAULT_LABOR_GOAL_PERCENTAGE
}

fn default_closed_day_marker() -> String {
    DEFAULT_CLOSED_DAY_MARKER.to_string()
}

impl Default for RestaurantSettings {
    fn default() -> Self {
        Self {
            name: String::new(),
            labor_goal_percentage: DEFAULT_LABOR_GOAL_PERCENTAGE,
            closed_days: Vec::new(),
            closed_day_marker: default_closed_day_marker(),
        }
    }
}

impl RestaurantSettings {
    /// Checks the settings the calculation depends on.
    ///
    /// A zero labor goal is allowed and yields zero required sales. A
    /// negative goal also yields zero required sales, but is flagged here so
    /// the calculation can warn about it.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidSettings`] when the labor goal is negative.
    pub fn validate(&self) -> EngineResult<()> {
        if self.labor_goal_percentage < Decimal::ZERO {
            return Err(EngineError::InvalidSettings {
                field: "labor_goal_percentage".to_string(),
                message: format!("must not be negative, got {}", self.labor_goal_percentage),
            });
        }
        Ok(())
    }
}

/// Employee roster file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct EmployeeRoster {
    /// Every employee, active or not.
    pub employees: Vec<Employee>,
}

/// Complete restaurant configuration.
#[derive(Debug, Clone)]
pub struct RestaurantConfig {
    settings: RestaurantSettings,
    employees: Vec<Employee>,
}

impl RestaurantConfig {
    /// Creates a new RestaurantConfig from its component parts.
    pub fn new(settings: RestaurantSettings, employees: Vec<Employee>) -> Self {
        Self {
            settings,
            employees,
        }
    }

    /// Returns the restaurant settings.
    pub fn settings(&self) -> &RestaurantSettings {
        &self.settings
    }

    /// Returns every employee in the roster, including inactive ones.
    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }
}
