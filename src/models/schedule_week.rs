//! Schedule week and weekly assignment models.
//!
//! This module contains the [`ScheduleWeek`] and [`WeeklyAssignment`] types
//! that define the calculation context for one week of one restaurant.

use std::collections::BTreeMap;

use chrono::{Datelike, Days, NaiveDate, Weekday};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::ParsedShift;

/// Number of calendar days in a scheduling week.
pub const DAYS_PER_WEEK: u64 = 7;

/// Seven consecutive calendar dates starting at `start_date`.
///
/// Any weekday may begin a week.
///
/// # Example
///
/// ```
/// use labor_cost_engine::models::ScheduleWeek;
/// use chrono::NaiveDate;
///
/// let week = ScheduleWeek::starting(NaiveDate::from_ymd_opt(2025, 3, 3).unwrap());
/// assert_eq!(week.end_date(), NaiveDate::from_ymd_opt(2025, 3, 9).unwrap());
/// assert_eq!(week.dates().count(), 7);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScheduleWeek {
    /// The first date of the week (inclusive).
    pub start_date: NaiveDate,
}

impl ScheduleWeek {
    /// Creates the week beginning on `start_date`.
    pub fn starting(start_date: NaiveDate) -> Self {
        Self { start_date }
    }

    /// The last date of the week (inclusive).
    pub fn end_date(&self) -> NaiveDate {
        self.start_date
            .checked_add_days(Days::new(DAYS_PER_WEEK - 1))
            .unwrap_or(NaiveDate::MAX)
    }

    /// Iterates the seven dates of the week in order.
    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + use<> {
        self.start_date.iter_days().take(DAYS_PER_WEEK as usize)
    }

    /// Checks if a given date falls within this week (inclusive).
    ///
    /// # Example
    ///
    /// ```
    /// use labor_cost_engine::models::ScheduleWeek;
    /// use chrono::NaiveDate;
    ///
    /// let week = ScheduleWeek::starting(NaiveDate::from_ymd_opt(2025, 3, 3).unwrap());
    /// assert!(week.contains_date(NaiveDate::from_ymd_opt(2025, 3, 3).unwrap()));
    /// assert!(week.contains_date(NaiveDate::from_ymd_opt(2025, 3, 9).unwrap()));
    /// assert!(!week.contains_date(NaiveDate::from_ymd_opt(2025, 3, 10).unwrap()));
    /// ```
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date()
    }

    /// Returns true if the restaurant does not operate on `date`'s weekday.
    pub fn is_closed(date: NaiveDate, closed_days: &[Weekday]) -> bool {
        closed_days.contains(&date.weekday())
    }

    /// The dates of the week on which the restaurant is open.
    pub fn open_dates(&self, closed_days: &[Weekday]) -> Vec<NaiveDate> {
        self.dates()
            .filter(|date| !Self::is_closed(*date, closed_days))
            .collect()
    }
}

/// One employee's parsed shifts for the open days of a week, ordered by date.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WeeklyAssignment {
    /// The employee these shifts belong to.
    pub employee_id: String,
    /// Parsed shift per date. Dates with [`ParsedShift::NONE`] may be present.
    pub shifts: BTreeMap<NaiveDate, ParsedShift>,
}

impl WeeklyAssignment {
    /// Creates an empty assignment for `employee_id`.
    pub fn new(employee_id: impl Into<String>) -> Self {
        Self {
            employee_id: employee_id.into(),
            shifts: BTreeMap::new(),
        }
    }

    /// Sets the shift for `date`, replacing any previous value.
    pub fn insert(&mut self, date: NaiveDate, shift: ParsedShift) {
        self.shifts.insert(date, shift);
    }

    /// Shifts with a nonzero duration, in date order.
    pub fn worked_shifts(&self) -> impl Iterator<Item = (NaiveDate, &ParsedShift)> {
        self.shifts
            .iter()
            .filter(|(_, shift)| shift.is_worked())
            .map(|(date, shift)| (*date, shift))
    }

    /// Number of days with a nonzero-duration shift.
    pub fn working_days(&self) -> usize {
        self.worked_shifts().count()
    }

    /// Sum of all shift durations.
    pub fn total_hours(&self) -> Decimal {
        self.worked_shifts().map(|(_, s)| s.duration_hours).sum()
    }
}

/// Weekly assignments for every scheduled employee, keyed by employee id.
pub type WeekAssignments = BTreeMap<String, WeeklyAssignment>;
