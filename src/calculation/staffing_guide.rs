//! Scheduled headcount by position for a costed week.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use chrono::Weekday;
use rust_decimal::Decimal;

use crate::models::{
    DailyStaffing, Employee, ScheduleWeek, ShiftCostEntry, StaffingGuide, UNASSIGNED_POSITION,
};

/// Counts the staff scheduled per position on every open date of `week`.
///
/// Only entries with worked hours count. Open dates with nobody scheduled
/// still get a row, with every position at zero. Entries for employees not
/// in `employees` are ignored.
///
/// # Examples
///
/// ```
/// use labor_cost_engine::calculation::{allocate, build_staffing_guide, parse_shift};
/// use labor_cost_engine::models::{Employee, ScheduleWeek, WeekAssignments, WeeklyAssignment};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let monday = NaiveDate::from_ymd_opt(2025, 3, 3).unwrap();
/// let mut chef = Employee::hourly("emp_002", Decimal::from(22));
/// chef.position = "Chef".to_string();
///
/// let mut assignment = WeeklyAssignment::new("emp_002");
/// assignment.insert(monday, parse_shift("9am-5pm", "CLOSED").shift);
/// let mut week = WeekAssignments::new();
/// week.insert("emp_002".to_string(), assignment);
///
/// let employees = vec![chef];
/// let result = allocate(&week, &employees, Decimal::from(25));
/// let guide = build_staffing_guide(
///     &ScheduleWeek::starting(monday),
///     &result.shift_costs,
///     &employees,
///     &[],
/// );
///
/// assert_eq!(guide.headcount(monday, "Chef"), 1);
/// assert_eq!(guide.days.len(), 7);
/// ```
pub fn build_staffing_guide(
    week: &ScheduleWeek,
    shift_costs: &[ShiftCostEntry],
    employees: &[Employee],
    closed_days: &[Weekday],
) -> StaffingGuide {
    let mut positions_by_id: HashMap<&str, &str> = HashMap::with_capacity(employees.len());
    for employee in employees {
        let position = match employee.position.trim() {
            "" => UNASSIGNED_POSITION,
            position => position,
        };
        positions_by_id.entry(employee.id.as_str()).or_insert(position);
    }

    let worked: Vec<(&ShiftCostEntry, &str)> = shift_costs
        .iter()
        .filter(|e| e.hours > Decimal::ZERO && week.contains_date(e.date))
        .filter_map(|e| {
            positions_by_id
                .get(e.employee_id.as_str())
                .map(|position| (e, *position))
        })
        .collect();

    let positions: BTreeSet<&str> = worked.iter().map(|(_, position)| *position).collect();

    let days = week
        .open_dates(closed_days)
        .into_iter()
        .map(|date| {
            let mut headcount: BTreeMap<String, u32> =
                positions.iter().map(|p| (p.to_string(), 0)).collect();
            for (_, position) in worked.iter().filter(|(e, _)| e.date == date) {
                *headcount.entry(position.to_string()).or_default() += 1;
            }
            DailyStaffing {
                date,
                total_staff: headcount.values().sum(),
                headcount,
            }
        })
        .collect();

    StaffingGuide {
        positions: positions.into_iter().map(str::to_string).collect(),
        days,
    }
}
