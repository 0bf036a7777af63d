//! Weekly overtime allocation policies.
//!
//! An hourly employee's first 40 hours in a week are regular time; the rest
//! are overtime. Which shifts absorb the regular hours is a policy choice,
//! expressed by the [`OvertimeStrategy`] trait so the aggregation logic does
//! not depend on it.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Hours per week paid at the base rate before overtime applies.
pub const WEEKLY_OVERTIME_THRESHOLD: Decimal = Decimal::from_parts(40, 0, 0, false, 0);

/// Multiplier applied to the base rate for overtime hours (150%).
pub const OVERTIME_MULTIPLIER: Decimal = Decimal::from_parts(15, 0, 0, false, 1);

/// The regular/overtime split of one shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HoursSplit {
    /// Hours paid at the base rate.
    pub regular_hours: Decimal,
    /// Hours paid at the overtime rate.
    pub overtime_hours: Decimal,
}

impl HoursSplit {
    /// A split with every hour regular.
    pub fn all_regular(hours: Decimal) -> Self {
        Self {
            regular_hours: hours,
            overtime_hours: Decimal::ZERO,
        }
    }

    /// Regular plus overtime hours.
    pub fn total_hours(&self) -> Decimal {
        self.regular_hours + self.overtime_hours
    }

    /// True if any hour is overtime.
    pub fn has_overtime(&self) -> bool {
        self.overtime_hours > Decimal::ZERO
    }
}

/// Decides how a week's regular-hour budget is spread across shifts.
///
/// Implementations receive the shift durations in date order and must return
/// exactly one split per shift, in the same order, with
/// `split.total_hours() == hours` for each shift and the regular hours summing
/// to at most `regular_budget`.
pub trait OvertimeStrategy: Send + Sync {
    /// Splits each shift's hours into regular and overtime portions.
    fn allocate(&self, shift_hours: &[Decimal], regular_budget: Decimal) -> Vec<HoursSplit>;
}

/// Earlier shifts in the week absorb regular time first.
///
/// A shift that fits in the remaining budget (including exactly) is fully
/// regular; the shift that crosses the threshold is split; every later shift
/// is entirely overtime.
///
/// # Examples
///
/// ```
/// use labor_cost_engine::calculation::{
///     FrontLoadedOvertime, OvertimeStrategy, WEEKLY_OVERTIME_THRESHOLD,
/// };
/// use rust_decimal::Decimal;
///
/// let hours = vec![Decimal::from(10); 5];
/// let splits = FrontLoadedOvertime.allocate(&hours, WEEKLY_OVERTIME_THRESHOLD);
///
/// assert!(!splits[3].has_overtime());
/// assert_eq!(splits[4].overtime_hours, Decimal::from(10));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct FrontLoadedOvertime;

impl OvertimeStrategy for FrontLoadedOvertime {
    fn allocate(&self, shift_hours: &[Decimal], regular_budget: Decimal) -> Vec<HoursSplit> {
        let mut remaining = regular_budget.max(Decimal::ZERO);
        shift_hours
            .iter()
            .map(|&hours| consume(hours, &mut remaining))
            .collect()
    }
}

/// Decimal places kept on each shift's proportional overtime share.
const PROPORTION_SCALE: u32 = 4;

/// Every shift carries overtime in proportion to its length.
///
/// Each shift is charged `hours * overtime / total` overtime hours, rounded
/// to four decimal places. The final shift takes the rounding remainder so
/// the week's regular hours match the budget.
///
/// # Examples
///
/// ```
/// use labor_cost_engine::calculation::{
///     OvertimeStrategy, ProportionalOvertime, WEEKLY_OVERTIME_THRESHOLD,
/// };
/// use rust_decimal::Decimal;
///
/// let hours = vec![Decimal::from(10); 5];
/// let splits = ProportionalOvertime.allocate(&hours, WEEKLY_OVERTIME_THRESHOLD);
///
/// assert!(splits.iter().all(|s| s.overtime_hours == Decimal::from(2)));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ProportionalOvertime;

impl OvertimeStrategy for ProportionalOvertime {
    fn allocate(&self, shift_hours: &[Decimal], regular_budget: Decimal) -> Vec<HoursSplit> {
        let total: Decimal = shift_hours.iter().copied().sum();
        let overtime_total = (total - regular_budget.max(Decimal::ZERO)).max(Decimal::ZERO);
        if overtime_total.is_zero() {
            return shift_hours.iter().map(|&h| HoursSplit::all_regular(h)).collect();
        }

        let last = shift_hours.len().saturating_sub(1);
        let mut remaining = overtime_total;
        shift_hours
            .iter()
            .enumerate()
            .map(|(index, &hours)| {
                let share = if index == last {
                    remaining
                } else {
                    (hours * overtime_total / total).round_dp(PROPORTION_SCALE)
                };
                let overtime = share.min(hours).min(remaining).max(Decimal::ZERO);
                remaining -= overtime;
                HoursSplit {
                    regular_hours: hours - overtime,
                    overtime_hours: overtime,
                }
            })
            .collect()
    }
}

fn consume(hours: Decimal, remaining: &mut Decimal) -> HoursSplit {
    if hours <= *remaining {
        *remaining -= hours;
        HoursSplit::all_regular(hours)
    } else {
        let regular = *remaining;
        *remaining = Decimal::ZERO;
        HoursSplit {
            regular_hours: regular,
            overtime_hours: hours - regular,
        }
    }
}
