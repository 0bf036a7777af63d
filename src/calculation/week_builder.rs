//! Turns the raw shift-text grid into parsed weekly assignments.

use std::collections::{HashMap, HashSet};

use chrono::{NaiveDate, Weekday};
use tracing::{debug, warn};

use super::shift_parser::{parse_shift, try_parse_shift};
use crate::error::EngineError;
use crate::models::{
    CalculationWarning, Employee, ScheduleWeek, ShiftTextEntry, WeekAssignments, WeeklyAssignment,
};

/// Parsed assignments plus the warnings raised while parsing them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WeekBuild {
    /// Parsed shifts for every known employee with at least one entry.
    pub assignments: WeekAssignments,
    /// Malformed-shift and unknown-employee warnings, in input order.
    pub warnings: Vec<CalculationWarning>,
}

/// Parses every shift-text entry for `week` into [`WeekAssignments`].
///
/// - entries dated outside the week are ignored
/// - entries on a closed weekday are ignored
/// - entries for an employee not in `employees` are dropped with an
///   `UNKNOWN_EMPLOYEE` warning, unless the text is blank or the closed marker
/// - malformed text becomes a zero shift with a `MALFORMED_SHIFT` warning
///
/// A later entry for the same `(employee, date)` replaces an earlier one,
/// along with any warning the earlier entry raised.
pub fn build_week_assignments(
    week: &ScheduleWeek,
    entries: &[ShiftTextEntry],
    employees: &[Employee],
    closed_days: &[Weekday],
    closed_day_marker: &str,
) -> WeekBuild {
    let known: HashSet<&str> = employees.iter().map(|e| e.id.as_str()).collect();
    let mut build = WeekBuild::default();
    let mut warnings = CellWarnings::default();

    for entry in entries {
        if !week.contains_date(entry.date) {
            debug!(
                employee_id = %entry.employee_id,
                date = %entry.date,
                "Ignoring shift outside the schedule week"
            );
            continue;
        }
        if ScheduleWeek::is_closed(entry.date, closed_days) {
            debug!(date = %entry.date, "Ignoring shift on closed day");
            continue;
        }

        let cell = (entry.employee_id.as_str(), entry.date);
        warnings.clear(cell);

        if !known.contains(entry.employee_id.as_str()) {
            let is_blank = try_parse_shift(&entry.text, closed_day_marker)
                .is_ok_and(|shift| !shift.is_worked());
            if !is_blank {
                let err = EngineError::UnknownEmployee {
                    employee_id: entry.employee_id.clone(),
                    date: entry.date,
                };
                warn!(error = %err, "Skipping shift for unknown employee");
                warnings.push(cell, CalculationWarning::from_error(&err));
            }
            continue;
        }

        let parsed = parse_shift(&entry.text, closed_day_marker);
        if let Some(warning) = parsed.warning {
            warnings.push(cell, warning);
        }
        build
            .assignments
            .entry(entry.employee_id.clone())
            .or_insert_with(|| WeeklyAssignment::new(entry.employee_id.clone()))
            .insert(entry.date, parsed.shift);
    }

    build.warnings = warnings.into_vec();
    build
}

/// Warnings in input order, at most one live warning per grid cell.
#[derive(Default)]
struct CellWarnings<'a> {
    slots: Vec<Option<CalculationWarning>>,
    by_cell: HashMap<(&'a str, NaiveDate), usize>,
}

impl<'a> CellWarnings<'a> {
    fn clear(&mut self, cell: (&'a str, NaiveDate)) {
        if let Some(index) = self.by_cell.remove(&cell) {
            self.slots[index] = None;
        }
    }

    fn push(&mut self, cell: (&'a str, NaiveDate), warning: CalculationWarning) {
        self.by_cell.insert(cell, self.slots.len());
        self.slots.push(Some(warning));
    }

    fn into_vec(self) -> Vec<CalculationWarning> {
        self.slots.into_iter().flatten().collect()
    }
}
