//! Request types for the Labor Cost Engine API.
//!
//! This module defines the JSON request structures for the `/calculate` endpoint.

use chrono::{NaiveDate, Weekday};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::RestaurantSettings;
use crate::models::{Employee, PayType, ScheduleWeek, ShiftTextEntry};

/// Request body for the `/calculate` endpoint.
///
/// Carries one week of the schedule grid. Any setting left out falls back to
/// the server's loaded restaurant configuration, and an omitted employee list
/// falls back to the active roster.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// The first date of the week to cost.
    pub week_start: NaiveDate,
    /// Employees to cost; the configured roster when omitted.
    #[serde(default)]
    pub employees: Option<Vec<EmployeeRequest>>,
    /// The shift text grid for the week.
    #[serde(default)]
    pub shifts: Vec<ShiftTextRequest>,
    /// Overrides the configured labor goal.
    #[serde(default)]
    pub labor_goal_percentage: Option<Decimal>,
    /// Overrides the configured closed weekdays.
    #[serde(default)]
    pub closed_days: Option<Vec<Weekday>>,
    /// Overrides the configured closed-day marker.
    #[serde(default)]
    pub closed_day_marker: Option<String>,
}

impl CalculationRequest {
    /// The week this request covers.
    pub fn week(&self) -> ScheduleWeek {
        ScheduleWeek::starting(self.week_start)
    }

    /// Applies this request's overrides on top of `base`.
    pub fn settings(&self, base: &RestaurantSettings) -> RestaurantSettings {
        RestaurantSettings {
            name: base.name.clone(),
            labor_goal_percentage: self
                .labor_goal_percentage
                .unwrap_or(base.labor_goal_percentage),
            closed_days: self
                .closed_days
                .clone()
                .unwrap_or_else(|| base.closed_days.clone()),
            closed_day_marker: self
                .closed_day_marker
                .clone()
                .unwrap_or_else(|| base.closed_day_marker.clone()),
        }
    }
}

/// Employee information in a calculation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeRequest {
    /// Unique identifier for the employee.
    pub id: String,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Job position.
    #[serde(default)]
    pub position: String,
    /// How the employee is paid.
    pub pay_type: PayType,
    /// Hourly rate, or weekly salary for salaried staff.
    pub pay_rate: Decimal,
    /// Informational weekly hours target.
    #[serde(default)]
    pub weekly_hours: Option<Decimal>,
}

/// One cell of the schedule grid in a calculation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShiftTextRequest {
    /// The employee the cell belongs to.
    pub employee_id: String,
    /// The date of the cell.
    pub date: NaiveDate,
    /// The text typed into the cell.
    #[serde(default)]
    pub text: String,
}

impl From<EmployeeRequest> for Employee {
    fn from(req: EmployeeRequest) -> Self {
        Employee {
            id: req.id,
            name: req.name,
            position: req.position,
            pay_type: req.pay_type,
            pay_rate: req.pay_rate,
            weekly_hours: req.weekly_hours,
            active: true,
        }
    }
}

impl From<ShiftTextRequest> for ShiftTextEntry {
    fn from(req: ShiftTextRequest) -> Self {
        ShiftTextEntry::new(req.employee_id, req.date, req.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_request_uses_base_settings() {
        let request: CalculationRequest =
            serde_json::from_str(r#"{ "week_start": "2025-03-03" }"#).unwrap();
        let base = RestaurantSettings {
            closed_days: vec![Weekday::Mon],
            ..RestaurantSettings::default()
        };

        assert!(request.employees.is_none());
        assert!(request.shifts.is_empty());
        assert_eq!(request.settings(&base), base);
        assert_eq!(request.week().end_date(), NaiveDate::from_ymd_opt(2025, 3, 9).unwrap());
    }

    #[test]
    fn test_overrides_replace_base_settings() {
        let request: CalculationRequest = serde_json::from_str(
            r#"{
                "week_start": "2025-03-03",
                "labor_goal_percentage": "30",
                "closed_days": ["Sun"],
                "closed_day_marker": "OFF"
            }"#,
        )
        .unwrap();
        let settings = request.settings(&RestaurantSettings::default());

        assert_eq!(settings.labor_goal_percentage, Decimal::from(30));
        assert_eq!(settings.closed_days, vec![Weekday::Sun]);
        assert_eq!(settings.closed_day_marker, "OFF");
    }

    #[test]
    fn test_employee_request_conversion() {
        let req: EmployeeRequest = serde_json::from_str(
            r#"{ "id": "emp_001", "pay_type": "salary", "pay_rate": "1000.00" }"#,
        )
        .unwrap();
        let employee: Employee = req.into();
        assert_eq!(employee.pay_type, PayType::Salary);
        assert!(employee.active);
    }
}
