//! Employee model and related types.
//!
//! This module defines the Employee struct and PayType enum for representing
//! staff whose scheduled shifts are costed by the engine.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Largest pay rate accepted, per hour or per week.
///
/// Keeps a week of costs for any roster well inside `Decimal` range.
pub const MAX_PAY_RATE: Decimal = Decimal::from_parts(1_000_000_000, 0, 0, false, 0);

/// How an employee is paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayType {
    /// Paid per hour worked; subject to weekly overtime.
    #[serde(alias = "Hourly")]
    Hourly,
    /// Paid a fixed weekly salary spread across the days worked.
    #[serde(alias = "Salary", alias = "salaried")]
    Salary,
}

/// Represents an employee whose shifts are costed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: String,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Job position (e.g., "Chef", "Server").
    #[serde(default)]
    pub position: String,
    /// How the employee is paid.
    pub pay_type: PayType,
    /// Dollars per hour for hourly staff, dollars per week for salaried staff.
    pub pay_rate: Decimal,
    /// Informational weekly hours target (salaried staff only).
    #[serde(default)]
    pub weekly_hours: Option<Decimal>,
    /// Inactive employees are kept in the registry but not scheduled.
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

impl Employee {
    /// Creates an active hourly employee.
    ///
    /// # Examples
    ///
    /// ```
    /// use labor_cost_engine::models::{Employee, PayType};
    /// use rust_decimal::Decimal;
    ///
    /// let cook = Employee::hourly("emp_001", Decimal::new(2000, 2));
    /// assert_eq!(cook.pay_type, PayType::Hourly);
    /// assert!(cook.is_hourly());
    /// ```
    pub fn hourly(id: impl Into<String>, pay_rate: Decimal) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            position: String::new(),
            pay_type: PayType::Hourly,
            pay_rate,
            weekly_hours: None,
            active: true,
        }
    }

    /// Creates an active salaried employee paid `weekly_salary` per week.
    pub fn salaried(id: impl Into<String>, weekly_salary: Decimal) -> Self {
        Self {
            pay_type: PayType::Salary,
            ..Self::hourly(id, weekly_salary)
        }
    }

    /// Returns true if the employee is paid by the hour.
    pub fn is_hourly(&self) -> bool {
        self.pay_type == PayType::Hourly
    }

    /// Checks the fields the calculation depends on.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidEmployee`] when the id is blank or the
    /// pay rate is negative or above [`MAX_PAY_RATE`].
    pub fn validate(&self) -> EngineResult<()> {
        if self.id.trim().is_empty() {
            return Err(EngineError::InvalidEmployee {
                field: "id".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        if self.pay_rate.is_sign_negative() && !self.pay_rate.is_zero() {
            return Err(EngineError::InvalidEmployee {
                field: "pay_rate".to_string(),
                message: format!("must not be negative (employee '{}')", self.id),
            });
        }
        if self.pay_rate > MAX_PAY_RATE {
            return Err(EngineError::InvalidEmployee {
                field: "pay_rate".to_string(),
                message: format!(
                    "must not exceed {} (employee '{}')",
                    MAX_PAY_RATE, self.id
                ),
            });
        }
        Ok(())
    }
}
