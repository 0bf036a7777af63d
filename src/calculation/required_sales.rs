//! Required sales derived from a labor-goal percentage.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};

const ONE_HUNDRED: Decimal = Decimal::from_parts(100, 0, 0, false, 0);

/// Sales needed for `labor_cost` to be `labor_goal_percentage` of revenue.
///
/// A goal of zero or below yields zero rather than dividing by zero.
///
/// # Errors
///
/// Returns [`EngineError::CalculationError`] when the figure does not fit in
/// a `Decimal`, e.g. for a vanishingly small positive goal.
///
/// # Examples
///
/// ```
/// use labor_cost_engine::calculation::calculate_required_sales;
/// use rust_decimal::Decimal;
///
/// let cost = Decimal::from(1000);
/// assert_eq!(calculate_required_sales(cost, Decimal::from(25)), Ok(Decimal::from(4000)));
/// assert_eq!(calculate_required_sales(cost, Decimal::ZERO), Ok(Decimal::ZERO));
/// ```
pub fn calculate_required_sales(
    labor_cost: Decimal,
    labor_goal_percentage: Decimal,
) -> EngineResult<Decimal> {
    if labor_goal_percentage <= Decimal::ZERO {
        return Ok(Decimal::ZERO);
    }
    labor_cost
        .checked_mul(ONE_HUNDRED)
        .and_then(|scaled| scaled.checked_div(labor_goal_percentage))
        .ok_or_else(|| EngineError::CalculationError {
            message: format!(
                "required sales for cost {} at {}% is out of range",
                labor_cost, labor_goal_percentage
            ),
        })
}

/// Labor cost as a percentage of `sales`, or zero when `sales` is zero.
///
/// # Errors
///
/// Returns [`EngineError::CalculationError`] when the percentage does not
/// fit in a `Decimal`.
pub fn calculate_labor_percentage(labor_cost: Decimal, sales: Decimal) -> EngineResult<Decimal> {
    if sales <= Decimal::ZERO {
        return Ok(Decimal::ZERO);
    }
    labor_cost
        .checked_div(sales)
        .and_then(|ratio| ratio.checked_mul(ONE_HUNDRED))
        .ok_or_else(|| EngineError::CalculationError {
            message: format!(
                "labor percentage for cost {} over sales {} is out of range",
                labor_cost, sales
            ),
        })
}
