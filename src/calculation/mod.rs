//! Calculation logic for the Labor Cost Engine.
//!
//! This module contains shift text parsing, the weekly overtime policies,
//! per-shift cost calculation for hourly and salaried staff, required sales
//! derivation, daily and weekly aggregation, the allocator that ties them
//! together for one schedule week, and the staffing guide.

mod allocator;
mod daily_aggregation;
mod overtime_strategy;
mod required_sales;
mod shift_cost;
mod shift_parser;
mod staffing_guide;
mod week_builder;

pub use allocator::{LaborCostAllocator, allocate};
pub use daily_aggregation::{aggregate_daily_totals, summarize_week};
pub use overtime_strategy::{
    FrontLoadedOvertime, HoursSplit, OVERTIME_MULTIPLIER, OvertimeStrategy, ProportionalOvertime,
    WEEKLY_OVERTIME_THRESHOLD,
};
pub use required_sales::{calculate_labor_percentage, calculate_required_sales};
pub use shift_cost::{HourlyShiftCost, calculate_daily_salary, calculate_hourly_shift_cost};
pub use shift_parser::{
    BARE_HOUR_PM_CUTOFF, DEFAULT_CLOSED_DAY_MARKER, ShiftParseResult, parse_shift, try_parse_shift,
};
pub use staffing_guide::build_staffing_guide;
pub use week_builder::{WeekBuild, build_week_assignments};
