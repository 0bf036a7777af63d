//! Weekly labor cost allocation.
//!
//! Costs every employee's week independently, then aggregates the shift
//! costs into daily totals and a weekly summary. Allocation is pure: the
//! same inputs always produce the same [`AllocationResult`].

use std::collections::HashMap;
use std::time::Instant;

use rust_decimal::Decimal;
use tracing::{debug, info, warn};

use super::daily_aggregation::{aggregate_daily_totals, summarize_week};
use super::overtime_strategy::{
    FrontLoadedOvertime, OvertimeStrategy, WEEKLY_OVERTIME_THRESHOLD,
};
use super::shift_cost::{calculate_daily_salary, calculate_hourly_shift_cost};
use super::week_builder::build_week_assignments;
use crate::config::RestaurantSettings;
use crate::error::{EngineError, EngineResult};
use crate::models::{
    AllocationResult, CalculationWarning, Employee, EmployeeWeekSummary, PayType, ScheduleWeek,
    ShiftCostEntry, ShiftTextEntry, WeekAssignments, WeeklyAssignment,
};

/// Costs schedule weeks using a pluggable overtime policy.
///
/// # Examples
///
/// ```
/// use labor_cost_engine::calculation::{parse_shift, LaborCostAllocator};
/// use labor_cost_engine::models::{Employee, WeekAssignments, WeeklyAssignment};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let mut assignment = WeeklyAssignment::new("emp_002");
/// assignment.insert(
///     NaiveDate::from_ymd_opt(2025, 3, 3).unwrap(),
///     parse_shift("9am-5pm", "CLOSED").shift,
/// );
/// let mut week = WeekAssignments::new();
/// week.insert("emp_002".to_string(), assignment);
///
/// let employees = vec![Employee::hourly("emp_002", Decimal::from(20))];
/// let result = LaborCostAllocator::new().allocate(&week, &employees, Decimal::from(25));
///
/// assert_eq!(result.weekly_summary.total_cost, Decimal::from(160));
/// assert_eq!(result.weekly_summary.required_sales, Decimal::from(640));
/// ```
#[derive(Debug, Clone, Default)]
pub struct LaborCostAllocator<S = FrontLoadedOvertime> {
    strategy: S,
}

impl LaborCostAllocator {
    /// Creates an allocator using [`FrontLoadedOvertime`].
    pub fn new() -> Self {
        Self::default()
    }
}

impl<S: OvertimeStrategy> LaborCostAllocator<S> {
    /// Creates an allocator using the given overtime policy.
    pub fn with_strategy(strategy: S) -> Self {
        Self { strategy }
    }

    /// The overtime policy in use.
    pub fn strategy(&self) -> &S {
        &self.strategy
    }

    /// Costs one week of parsed assignments.
    ///
    /// Assignments for employees missing from `employees` produce one
    /// `UNKNOWN_EMPLOYEE` warning per worked shift. Employees that fail
    /// validation are skipped with an `INVALID_EMPLOYEE` warning.
    pub fn allocate(
        &self,
        week_assignments: &WeekAssignments,
        employees: &[Employee],
        labor_goal_percentage: Decimal,
    ) -> AllocationResult {
        let start_time = Instant::now();
        let mut roster: HashMap<&str, &Employee> = HashMap::with_capacity(employees.len());
        for employee in employees {
            roster.entry(employee.id.as_str()).or_insert(employee);
        }

        let mut shift_costs: Vec<ShiftCostEntry> = Vec::new();
        let mut employee_summaries: Vec<EmployeeWeekSummary> = Vec::new();
        let mut warnings: Vec<CalculationWarning> = Vec::new();

        for (employee_id, assignment) in week_assignments {
            let Some(employee) = roster.get(employee_id.as_str()) else {
                for (date, _) in assignment.worked_shifts() {
                    let err = EngineError::UnknownEmployee {
                        employee_id: employee_id.clone(),
                        date,
                    };
                    warn!(error = %err, "Skipping shift for unknown employee");
                    warnings.push(CalculationWarning::from_error(&err));
                }
                continue;
            };

            if let Err(err) = employee.validate() {
                warn!(employee_id = %employee_id, error = %err, "Skipping invalid employee");
                warnings.push(CalculationWarning::from_error(&err));
                continue;
            }

            let costing = match employee.pay_type {
                PayType::Hourly => self.cost_hourly(employee, assignment),
                PayType::Salary => Ok(cost_salaried(employee, assignment)),
            };
            let costing = match costing {
                Ok(Some(costing)) => costing,
                Ok(None) => continue,
                Err(err) => {
                    warn!(
                        employee_id = %employee_id,
                        error = %err,
                        "Skipping employee whose costs are out of range"
                    );
                    warnings.push(CalculationWarning::from_error(&err));
                    continue;
                }
            };

            debug!(
                employee_id = %employee_id,
                pay_type = ?employee.pay_type,
                total_hours = %costing.summary.total_hours,
                overtime_hours = %costing.summary.overtime_hours,
                total_cost = %costing.summary.total_cost,
                "Employee week costed"
            );
            shift_costs.extend(costing.entries);
            employee_summaries.push(costing.summary);
        }

        let daily_totals =
            aggregate_daily_totals(&shift_costs, labor_goal_percentage, &mut warnings);
        let weekly_summary =
            summarize_week(&daily_totals, &shift_costs, &employee_summaries, &mut warnings);

        info!(
            employees = employee_summaries.len(),
            shifts = shift_costs.len(),
            total_cost = %weekly_summary.total_cost,
            required_sales = %weekly_summary.required_sales,
            warnings = warnings.len(),
            duration_us = start_time.elapsed().as_micros(),
            "Labor cost allocation completed"
        );

        AllocationResult {
            shift_costs,
            daily_totals,
            employee_summaries,
            weekly_summary,
            warnings,
        }
    }

    /// Parses the shift-text grid for `week` and costs it under `settings`.
    ///
    /// Settings warnings come first in the result, then parsing warnings,
    /// then allocation warnings. A negative labor goal is costed with zero
    /// required sales and an `INVALID_SETTINGS` warning.
    pub fn calculate_week(
        &self,
        week: &ScheduleWeek,
        employees: &[Employee],
        shift_text: &[ShiftTextEntry],
        settings: &RestaurantSettings,
    ) -> AllocationResult {
        let build = build_week_assignments(
            week,
            shift_text,
            employees,
            &settings.closed_days,
            &settings.closed_day_marker,
        );
        let mut result =
            self.allocate(&build.assignments, employees, settings.labor_goal_percentage);

        let mut warnings = Vec::new();
        if let Err(err) = settings.validate() {
            warn!(error = %err, "Costing week with invalid settings");
            warnings.push(CalculationWarning::from_error(&err));
        }
        warnings.extend(build.warnings);
        warnings.append(&mut result.warnings);
        result.warnings = warnings;
        result
    }

    fn cost_hourly(
        &self,
        employee: &Employee,
        assignment: &WeeklyAssignment,
    ) -> EngineResult<Option<EmployeeCosting>> {
        let worked: Vec<_> = assignment.worked_shifts().collect();
        if worked.is_empty() {
            return Ok(None);
        }

        let hours: Vec<Decimal> = worked.iter().map(|(_, shift)| shift.duration_hours).collect();
        let splits = self.strategy.allocate(&hours, WEEKLY_OVERTIME_THRESHOLD);

        let mut overtime_premium = Decimal::ZERO;
        let entries = worked
            .iter()
            .zip(splits)
            .map(|((date, shift), split)| {
                let cost = calculate_hourly_shift_cost(split, employee.pay_rate)?;
                overtime_premium += cost.overtime_premium;
                Ok(ShiftCostEntry {
                    employee_id: employee.id.clone(),
                    date: *date,
                    start_time: shift.start_time,
                    end_time: shift.end_time,
                    hours: shift.duration_hours,
                    regular_hours: split.regular_hours,
                    overtime_hours: split.overtime_hours,
                    cost: cost.total_cost,
                    is_overtime: split.has_overtime(),
                })
            })
            .collect::<EngineResult<Vec<_>>>()?;

        Ok(Some(EmployeeCosting::new(employee, entries, overtime_premium)))
    }
}

/// Costs `week_assignments` with the default front-loaded overtime policy.
pub fn allocate(
    week_assignments: &WeekAssignments,
    employees: &[Employee],
    labor_goal_percentage: Decimal,
) -> AllocationResult {
    LaborCostAllocator::new().allocate(week_assignments, employees, labor_goal_percentage)
}

struct EmployeeCosting {
    entries: Vec<ShiftCostEntry>,
    summary: EmployeeWeekSummary,
}

impl EmployeeCosting {
    fn new(employee: &Employee, entries: Vec<ShiftCostEntry>, overtime_premium: Decimal) -> Self {
        let summary = EmployeeWeekSummary {
            employee_id: employee.id.clone(),
            pay_type: employee.pay_type,
            working_days: entries.len() as u32,
            total_hours: entries.iter().map(|e| e.hours).sum(),
            regular_hours: entries.iter().map(|e| e.regular_hours).sum(),
            overtime_hours: entries.iter().map(|e| e.overtime_hours).sum(),
            total_cost: entries.iter().map(|e| e.cost).sum(),
            overtime_premium,
        };
        Self { entries, summary }
    }
}

/// Salaried staff are paid the same share of their weekly salary on every
/// day worked, however long the shift. Their hours are reported as regular.
fn cost_salaried(employee: &Employee, assignment: &WeeklyAssignment) -> Option<EmployeeCosting> {
    let working_days = u32::try_from(assignment.working_days()).ok()?;
    let daily_salary = calculate_daily_salary(employee.pay_rate, working_days)?;

    let entries = assignment
        .worked_shifts()
        .map(|(date, shift)| ShiftCostEntry {
            employee_id: employee.id.clone(),
            date,
            start_time: shift.start_time,
            end_time: shift.end_time,
            hours: shift.duration_hours,
            regular_hours: shift.duration_hours,
            overtime_hours: Decimal::ZERO,
            cost: daily_salary,
            is_overtime: false,
        })
        .collect();

    Some(EmployeeCosting::new(employee, entries, Decimal::ZERO))
}
