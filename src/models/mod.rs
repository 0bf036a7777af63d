//! Core data models for the Labor Cost Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod employee;
mod labor_result;
mod schedule_week;
mod shift;
mod staffing;

pub use employee::{Employee, MAX_PAY_RATE, PayType};
pub use labor_result::{
    AllocationResult, CalculationWarning, DailyLaborTotal, EmployeeWeekSummary, LaborCostReport,
    ShiftCostEntry, WarningSeverity, WeeklyLaborSummary,
};
pub use schedule_week::{DAYS_PER_WEEK, ScheduleWeek, WeekAssignments, WeeklyAssignment};
pub use shift::{ParsedShift, ShiftTextEntry};
pub use staffing::{DailyStaffing, StaffingGuide, UNASSIGNED_POSITION};
