//! Labor cost result models.
//!
//! This module contains [`AllocationResult`] and its associated structures
//! that capture all outputs of costing a schedule week: per-shift cost
//! entries, per-day totals, per-employee and weekly summaries, and the
//! warnings raised along the way.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{PayType, ScheduleWeek, StaffingGuide};
use crate::error::EngineError;

/// The cost of one employee's shift on one date.
///
/// Persisted by the storage collaborator keyed by `(employee_id, date)`.
///
/// # Example
///
/// ```
/// use labor_cost_engine::models::ShiftCostEntry;
/// use chrono::{NaiveDate, NaiveTime};
/// use rust_decimal::Decimal;
///
/// let entry = ShiftCostEntry {
///     employee_id: "emp_002".to_string(),
///     date: NaiveDate::from_ymd_opt(2025, 3, 3).unwrap(),
///     start_time: NaiveTime::from_hms_opt(9, 0, 0),
///     end_time: NaiveTime::from_hms_opt(17, 0, 0),
///     hours: Decimal::from(8),
///     regular_hours: Decimal::from(8),
///     overtime_hours: Decimal::ZERO,
///     cost: Decimal::from(180),
///     is_overtime: false,
/// };
/// assert_eq!(entry.key(), ("emp_002", NaiveDate::from_ymd_opt(2025, 3, 3).unwrap()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftCostEntry {
    /// The employee who works the shift.
    pub employee_id: String,
    /// The date of the shift.
    pub date: NaiveDate,
    /// Shift start time.
    pub start_time: Option<NaiveTime>,
    /// Shift end time.
    pub end_time: Option<NaiveTime>,
    /// Total hours in the shift.
    pub hours: Decimal,
    /// Hours paid at the base rate.
    pub regular_hours: Decimal,
    /// Hours paid at the overtime rate.
    pub overtime_hours: Decimal,
    /// Total cost of the shift.
    pub cost: Decimal,
    /// True if any part of the shift is overtime.
    pub is_overtime: bool,
}

impl ShiftCostEntry {
    /// The upsert key for this entry.
    pub fn key(&self) -> (&str, NaiveDate) {
        (self.employee_id.as_str(), self.date)
    }
}

/// Aggregate labor for one date across all employees.
///
/// Persisted by the storage collaborator keyed by `date`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyLaborTotal {
    /// The date these totals cover.
    pub date: NaiveDate,
    /// Total scheduled hours.
    pub total_hours: Decimal,
    /// Hours paid at base rate.
    pub regular_hours: Decimal,
    /// Hours paid at the overtime rate.
    pub overtime_hours: Decimal,
    /// Total labor cost.
    pub total_cost: Decimal,
    /// The labor goal used to derive `required_sales`.
    pub labor_goal_percentage: Decimal,
    /// Sales needed for `total_cost` to equal the labor goal.
    pub required_sales: Decimal,
}

/// One employee's totals for the week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeWeekSummary {
    /// The employee.
    pub employee_id: String,
    /// How the employee is paid.
    pub pay_type: PayType,
    /// Days with a nonzero-duration shift.
    pub working_days: u32,
    /// Total hours across the week.
    pub total_hours: Decimal,
    /// Hours paid at base rate.
    pub regular_hours: Decimal,
    /// Hours paid at the overtime rate.
    pub overtime_hours: Decimal,
    /// Total cost across the week.
    pub total_cost: Decimal,
    /// Portion of `total_cost` paid above the base rate for overtime.
    pub overtime_premium: Decimal,
}

/// Totals across the whole week.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WeeklyLaborSummary {
    /// Total scheduled hours.
    pub total_hours: Decimal,
    /// Hours paid at base rate.
    pub regular_hours: Decimal,
    /// Hours paid at the overtime rate.
    pub overtime_hours: Decimal,
    /// Total labor cost.
    pub total_cost: Decimal,
    /// Sum of the daily required sales.
    pub required_sales: Decimal,
    /// `total_cost / required_sales * 100`, or zero when no sales are required.
    pub projected_labor_percentage: Decimal,
    /// Number of shifts with any overtime portion.
    pub overtime_shift_count: u32,
    /// Extra paid above base rate for overtime hours.
    pub overtime_premium: Decimal,
}

/// How serious a warning is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningSeverity {
    /// Informational.
    Low,
    /// Part of the input was ignored.
    Medium,
    /// An employee's contribution was dropped.
    High,
}

/// A warning generated during calculation.
///
/// Warnings indicate input that was skipped or degraded to "no shift"
/// without stopping the calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level.
    pub severity: WarningSeverity,
}

impl CalculationWarning {
    /// Builds a warning from a recoverable engine error.
    ///
    /// # Example
    ///
    /// ```
    /// use labor_cost_engine::error::EngineError;
    /// use labor_cost_engine::models::{CalculationWarning, WarningSeverity};
    ///
    /// let warning = CalculationWarning::from_error(&EngineError::MalformedShift {
    ///     text: "9am".to_string(),
    ///     message: "missing '-' separator".to_string(),
    /// });
    /// assert_eq!(warning.code, "MALFORMED_SHIFT");
    /// assert_eq!(warning.severity, WarningSeverity::Medium);
    /// ```
    pub fn from_error(error: &EngineError) -> Self {
        let severity = match error {
            EngineError::MalformedShift { .. } => WarningSeverity::Medium,
            EngineError::UnknownEmployee { .. } | EngineError::InvalidEmployee { .. } => {
                WarningSeverity::High
            }
            _ => WarningSeverity::Low,
        };
        Self {
            code: error.code().to_string(),
            message: error.to_string(),
            severity,
        }
    }
}

/// The complete output of allocating one week's labor cost.
///
/// Deterministic for identical inputs.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AllocationResult {
    /// One entry per worked shift, ordered by employee id then date.
    pub shift_costs: Vec<ShiftCostEntry>,
    /// One total per date with nonzero cost, in date order.
    pub daily_totals: Vec<DailyLaborTotal>,
    /// One summary per costed employee, ordered by employee id.
    pub employee_summaries: Vec<EmployeeWeekSummary>,
    /// Totals across the week.
    pub weekly_summary: WeeklyLaborSummary,
    /// Warnings raised while building and allocating the week.
    pub warnings: Vec<CalculationWarning>,
}

impl AllocationResult {
    /// Returns true if nothing was costed.
    pub fn is_empty(&self) -> bool {
        self.shift_costs.is_empty() && self.daily_totals.is_empty()
    }

    /// Looks up the daily total for `date`.
    pub fn daily_total(&self, date: NaiveDate) -> Option<&DailyLaborTotal> {
        self.daily_totals.iter().find(|t| t.date == date)
    }

    /// Looks up the weekly summary for an employee.
    pub fn employee_summary(&self, employee_id: &str) -> Option<&EmployeeWeekSummary> {
        self.employee_summaries
            .iter()
            .find(|s| s.employee_id == employee_id)
    }
}

/// An [`AllocationResult`] stamped with the run's identity and context.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaborCostReport {
    /// Unique identifier for this calculation run.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// Version of the engine that produced the report.
    pub engine_version: String,
    /// The week that was costed.
    pub week: ScheduleWeek,
    /// The labor goal used for required sales.
    pub labor_goal_percentage: Decimal,
    /// The calculated figures.
    #[serde(flatten)]
    pub result: AllocationResult,
    /// Scheduled headcount per position per open day.
    #[serde(default)]
    pub staffing: StaffingGuide,
}

impl LaborCostReport {
    /// Wraps `result` with a fresh id and timestamp.
    pub fn new(
        week: ScheduleWeek,
        labor_goal_percentage: Decimal,
        result: AllocationResult,
    ) -> Self {
        Self {
            calculation_id: Uuid::new_v4(),
            timestamp: Utc::now(),
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            week,
            labor_goal_percentage,
            result,
            staffing: StaffingGuide::default(),
        }
    }

    /// Attaches the week's staffing guide.
    pub fn with_staffing(mut self, staffing: StaffingGuide) -> Self {
        self.staffing = staffing;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, d).unwrap()
    }

    fn daily(d: u32, cost: i64) -> DailyLaborTotal {
        DailyLaborTotal {
            date: date(d),
            total_hours: Decimal::from(8),
            regular_hours: Decimal::from(8),
            overtime_hours: Decimal::ZERO,
            total_cost: Decimal::from(cost),
            labor_goal_percentage: Decimal::from(25),
            required_sales: Decimal::from(cost * 4),
        }
    }

    #[test]
    fn test_daily_total_lookup() {
        let result = AllocationResult {
            daily_totals: vec![daily(3, 100), daily(4, 200)],
            ..Default::default()
        };
        assert_eq!(result.daily_total(date(4)).unwrap().total_cost, Decimal::from(200));
        assert!(result.daily_total(date(5)).is_none());
        assert!(!result.is_empty());
    }

    #[test]
    fn test_default_result_is_empty() {
        assert!(AllocationResult::default().is_empty());
    }

    #[test]
    fn test_warning_from_unknown_employee_is_high_severity() {
        let warning = CalculationWarning::from_error(&EngineError::UnknownEmployee {
            employee_id: "ghost".to_string(),
            date: date(3),
        });
        assert_eq!(warning.code, "UNKNOWN_EMPLOYEE");
        assert_eq!(warning.severity, WarningSeverity::High);
        assert!(warning.message.contains("ghost"));
    }

    #[test]
    fn test_report_flattens_result_fields() {
        let result = AllocationResult {
            daily_totals: vec![daily(3, 100)],
            ..Default::default()
        };
        let report = LaborCostReport::new(
            ScheduleWeek::starting(date(3)),
            Decimal::from(25),
            result,
        );

        let json = serde_json::to_value(&report).unwrap();
        assert!(json.get("calculation_id").is_some());
        assert_eq!(json["week"]["start_date"], "2025-03-03");
        assert_eq!(json["daily_totals"][0]["required_sales"], "400");
        assert_eq!(json["engine_version"], env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn test_reports_get_unique_ids() {
        let week = ScheduleWeek::starting(date(3));
        let a = LaborCostReport::new(week, Decimal::from(25), AllocationResult::default());
        let b = LaborCostReport::new(week, Decimal::from(25), AllocationResult::default());
        assert_ne!(a.calculation_id, b.calculation_id);
    }
}
