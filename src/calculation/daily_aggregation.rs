//! Daily and weekly aggregation of shift costs.
//!
//! Aggregation runs after every employee has been allocated and owns the
//! per-date accumulators exclusively.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::warn;

use super::required_sales::{calculate_labor_percentage, calculate_required_sales};
use crate::error::{EngineError, EngineResult};
use crate::models::{
    CalculationWarning, DailyLaborTotal, EmployeeWeekSummary, ShiftCostEntry, WeeklyLaborSummary,
};

#[derive(Debug, Default)]
struct DayAccumulator {
    total_hours: Decimal,
    regular_hours: Decimal,
    overtime_hours: Decimal,
    total_cost: Decimal,
}

/// Sums shift cost entries per date and derives required sales.
///
/// Dates whose total cost is zero are omitted. The result is in date order.
/// A required-sales figure that does not fit in a `Decimal` is reported as
/// zero with a `CALCULATION_ERROR` warning pushed onto `warnings`.
///
/// # Examples
///
/// ```
/// use labor_cost_engine::calculation::aggregate_daily_totals;
/// use labor_cost_engine::models::ShiftCostEntry;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let date = NaiveDate::from_ymd_opt(2025, 3, 3).unwrap();
/// let entry = ShiftCostEntry {
///     employee_id: "emp_001".to_string(),
///     date,
///     start_time: None,
///     end_time: None,
///     hours: Decimal::from(8),
///     regular_hours: Decimal::from(8),
///     overtime_hours: Decimal::ZERO,
///     cost: Decimal::from(1000),
///     is_overtime: false,
/// };
///
/// let mut warnings = Vec::new();
/// let totals = aggregate_daily_totals(&[entry], Decimal::from(25), &mut warnings);
/// assert_eq!(totals[0].required_sales, Decimal::from(4000));
/// assert!(warnings.is_empty());
/// ```
pub fn aggregate_daily_totals(
    entries: &[ShiftCostEntry],
    labor_goal_percentage: Decimal,
    warnings: &mut Vec<CalculationWarning>,
) -> Vec<DailyLaborTotal> {
    let mut days: BTreeMap<NaiveDate, DayAccumulator> = BTreeMap::new();

    for entry in entries {
        let day = days.entry(entry.date).or_default();
        day.total_hours += entry.hours;
        day.regular_hours += entry.regular_hours;
        day.overtime_hours += entry.overtime_hours;
        day.total_cost += entry.cost;
    }

    days.into_iter()
        .filter(|(_, day)| !day.total_cost.is_zero())
        .map(|(date, day)| DailyLaborTotal {
            date,
            total_hours: day.total_hours,
            regular_hours: day.regular_hours,
            overtime_hours: day.overtime_hours,
            total_cost: day.total_cost,
            labor_goal_percentage,
            required_sales: or_zero(
                calculate_required_sales(day.total_cost, labor_goal_percentage),
                warnings,
            ),
        })
        .collect()
}

/// Rolls daily totals and employee summaries up into the weekly summary.
///
/// Weekly required sales is the sum of the daily figures. Figures that
/// overflow are reported as zero with a warning, as in
/// [`aggregate_daily_totals`].
pub fn summarize_week(
    daily_totals: &[DailyLaborTotal],
    shift_costs: &[ShiftCostEntry],
    employee_summaries: &[EmployeeWeekSummary],
    warnings: &mut Vec<CalculationWarning>,
) -> WeeklyLaborSummary {
    let total_cost: Decimal = daily_totals.iter().map(|d| d.total_cost).sum();
    let required_sales = or_zero(sum_required_sales(daily_totals), warnings);
    let projected_labor_percentage =
        or_zero(calculate_labor_percentage(total_cost, required_sales), warnings);

    WeeklyLaborSummary {
        total_hours: daily_totals.iter().map(|d| d.total_hours).sum(),
        regular_hours: daily_totals.iter().map(|d| d.regular_hours).sum(),
        overtime_hours: daily_totals.iter().map(|d| d.overtime_hours).sum(),
        total_cost,
        required_sales,
        projected_labor_percentage,
        overtime_shift_count: shift_costs.iter().filter(|e| e.is_overtime).count() as u32,
        overtime_premium: employee_summaries.iter().map(|s| s.overtime_premium).sum(),
    }
}

fn sum_required_sales(daily_totals: &[DailyLaborTotal]) -> EngineResult<Decimal> {
    daily_totals
        .iter()
        .try_fold(Decimal::ZERO, |sum, d| sum.checked_add(d.required_sales))
        .ok_or_else(|| EngineError::CalculationError {
            message: "weekly required sales is out of range".to_string(),
        })
}

fn or_zero(figure: EngineResult<Decimal>, warnings: &mut Vec<CalculationWarning>) -> Decimal {
    figure.unwrap_or_else(|err| {
        warn!(error = %err, "Reporting out-of-range figure as zero");
        warnings.push(CalculationWarning::from_error(&err));
        Decimal::ZERO
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PayType;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, d).unwrap()
    }

    fn entry(employee: &str, d: u32, regular: &str, overtime: &str, cost: &str) -> ShiftCostEntry {
        let regular_hours = dec(regular);
        let overtime_hours = dec(overtime);
        ShiftCostEntry {
            employee_id: employee.to_string(),
            date: date(d),
            start_time: None,
            end_time: None,
            hours: regular_hours + overtime_hours,
            regular_hours,
            overtime_hours,
            cost: dec(cost),
            is_overtime: overtime_hours > Decimal::ZERO,
        }
    }

    #[test]
    fn test_sums_across_employees_per_date() {
        let entries = vec![
            entry("a", 3, "8", "0", "160"),
            entry("b", 3, "6", "0", "90"),
            entry("a", 4, "2", "6", "220"),
        ];
        let totals = aggregate_daily_totals(&entries, dec("25"), &mut Vec::new());

        assert_eq!(totals.len(), 2);
        assert_eq!(totals[0].date, date(3));
        assert_eq!(totals[0].total_hours, dec("14"));
        assert_eq!(totals[0].total_cost, dec("250"));
        assert_eq!(totals[0].required_sales, dec("1000"));
        assert_eq!(totals[1].regular_hours, dec("2"));
        assert_eq!(totals[1].overtime_hours, dec("6"));
    }

    #[test]
    fn test_zero_cost_days_are_omitted() {
        let entries = vec![entry("a", 3, "8", "0", "0"), entry("b", 4, "8", "0", "80")];
        let totals = aggregate_daily_totals(&entries, dec("25"), &mut Vec::new());
        assert_eq!(totals.len(), 1);
        assert_eq!(totals[0].date, date(4));
    }

    #[test]
    fn test_results_are_date_ordered() {
        let entries = vec![entry("a", 7, "8", "0", "80"), entry("a", 3, "8", "0", "80")];
        let totals = aggregate_daily_totals(&entries, dec("25"), &mut Vec::new());
        assert_eq!(totals[0].date, date(3));
        assert_eq!(totals[1].date, date(7));
    }

    #[test]
    fn test_zero_goal_reports_zero_required_sales() {
        let totals = aggregate_daily_totals(
            &[entry("a", 3, "8", "0", "80")],
            Decimal::ZERO,
            &mut Vec::new(),
        );
        assert_eq!(totals[0].required_sales, Decimal::ZERO);
        assert_eq!(totals[0].labor_goal_percentage, Decimal::ZERO);
    }

    #[test]
    fn test_empty_input() {
        assert!(aggregate_daily_totals(&[], dec("25"), &mut Vec::new()).is_empty());
        let summary = summarize_week(&[], &[], &[], &mut Vec::new());
        assert_eq!(summary, WeeklyLaborSummary::default());
    }

    #[test]
    fn test_weekly_summary_sums_daily_figures() {
        let entries = vec![
            entry("a", 3, "8", "0", "160"),
            entry("a", 4, "2", "6", "220"),
        ];
        let mut warnings = Vec::new();
        let daily = aggregate_daily_totals(&entries, dec("20"), &mut warnings);
        let summaries = vec![EmployeeWeekSummary {
            employee_id: "a".to_string(),
            pay_type: PayType::Hourly,
            working_days: 2,
            total_hours: dec("16"),
            regular_hours: dec("10"),
            overtime_hours: dec("6"),
            total_cost: dec("380"),
            overtime_premium: dec("60"),
        }];

        let summary = summarize_week(&daily, &entries, &summaries, &mut warnings);
        assert_eq!(summary.total_hours, dec("16"));
        assert_eq!(summary.total_cost, dec("380"));
        assert_eq!(summary.required_sales, dec("1900"));
        assert_eq!(summary.projected_labor_percentage, dec("20"));
        assert_eq!(summary.overtime_shift_count, 1);
        assert_eq!(summary.overtime_premium, dec("60"));
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_out_of_range_required_sales_is_zero_with_warning() {
        let entries = vec![entry("a", 3, "8", "0", "80"), entry("a", 4, "8", "0", "80")];
        let mut warnings = Vec::new();

        let daily = aggregate_daily_totals(
            &entries,
            dec("0.0000000000000000000000000001"),
            &mut warnings,
        );
        let summary = summarize_week(&daily, &entries, &[], &mut warnings);

        assert_eq!(daily.len(), 2);
        assert!(daily.iter().all(|d| d.required_sales.is_zero()));
        assert_eq!(summary.total_cost, dec("160"));
        assert_eq!(summary.required_sales, Decimal::ZERO);
        assert_eq!(summary.projected_labor_percentage, Decimal::ZERO);
        assert_eq!(warnings.len(), 2);
        assert!(warnings.iter().all(|w| w.code == "CALCULATION_ERROR"));
    }

    #[test]
    fn test_weekly_required_sales_overflow_is_zero_with_warning() {
        let daily: Vec<DailyLaborTotal> = (3..5)
            .map(|d| DailyLaborTotal {
                date: date(d),
                total_hours: dec("8"),
                regular_hours: dec("8"),
                overtime_hours: Decimal::ZERO,
                total_cost: dec("80"),
                labor_goal_percentage: dec("25"),
                required_sales: Decimal::MAX,
            })
            .collect();
        let mut warnings = Vec::new();

        let summary = summarize_week(&daily, &[], &[], &mut warnings);

        assert_eq!(summary.total_cost, dec("160"));
        assert_eq!(summary.required_sales, Decimal::ZERO);
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].code, "CALCULATION_ERROR");
    }
}
