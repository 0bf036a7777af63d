//! Per-shift cost calculation for hourly and salaried staff.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::overtime_strategy::{HoursSplit, OVERTIME_MULTIPLIER};
use crate::error::{EngineError, EngineResult};

/// The cost of one hourly shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourlyShiftCost {
    /// The regular/overtime split the cost was computed from.
    pub split: HoursSplit,
    /// The rate paid for overtime hours.
    pub overtime_rate: Decimal,
    /// `regular_hours * pay_rate`.
    pub regular_cost: Decimal,
    /// `overtime_hours * overtime_rate`.
    pub overtime_cost: Decimal,
    /// Regular plus overtime cost.
    pub total_cost: Decimal,
    /// The part of `overtime_cost` above the base rate.
    pub overtime_premium: Decimal,
}

/// Costs one hourly shift from its regular/overtime split.
///
/// Regular hours are paid at `pay_rate`; overtime hours at
/// `pay_rate * 1.5`.
///
/// # Errors
///
/// Returns [`EngineError::CalculationError`] if any figure overflows.
///
/// # Examples
///
/// ```
/// use labor_cost_engine::calculation::{calculate_hourly_shift_cost, HoursSplit};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let split = HoursSplit {
///     regular_hours: Decimal::from(4),
///     overtime_hours: Decimal::from(4),
/// };
/// let cost = calculate_hourly_shift_cost(split, Decimal::from_str("20.00").unwrap()).unwrap();
///
/// assert_eq!(cost.regular_cost, Decimal::from(80));
/// assert_eq!(cost.overtime_cost, Decimal::from(120));
/// assert_eq!(cost.total_cost, Decimal::from(200));
/// ```
pub fn calculate_hourly_shift_cost(
    split: HoursSplit,
    pay_rate: Decimal,
) -> EngineResult<HourlyShiftCost> {
    let overflow = || EngineError::CalculationError {
        message: format!(
            "cost of {} hours at rate {} is out of range",
            split.total_hours(),
            pay_rate
        ),
    };

    let overtime_rate = pay_rate.checked_mul(OVERTIME_MULTIPLIER).ok_or_else(overflow)?;
    let regular_cost = split.regular_hours.checked_mul(pay_rate).ok_or_else(overflow)?;
    let overtime_cost = split
        .overtime_hours
        .checked_mul(overtime_rate)
        .ok_or_else(overflow)?;
    let total_cost = regular_cost.checked_add(overtime_cost).ok_or_else(overflow)?;
    let overtime_premium = overtime_cost - split.overtime_hours * pay_rate;

    Ok(HourlyShiftCost {
        split,
        overtime_rate,
        regular_cost,
        overtime_cost,
        total_cost,
        overtime_premium,
    })
}

/// Spreads a weekly salary evenly across the days actually worked.
///
/// Returns `None` when `working_days` is zero, in which case the employee
/// contributes nothing to the week.
///
/// # Examples
///
/// ```
/// use labor_cost_engine::calculation::calculate_daily_salary;
/// use rust_decimal::Decimal;
///
/// assert_eq!(calculate_daily_salary(Decimal::from(700), 5), Some(Decimal::from(140)));
/// assert_eq!(calculate_daily_salary(Decimal::from(700), 0), None);
/// ```
pub fn calculate_daily_salary(weekly_salary: Decimal, working_days: u32) -> Option<Decimal> {
    if working_days == 0 {
        return None;
    }
    Some(weekly_salary / Decimal::from(working_days))
}
