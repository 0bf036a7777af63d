//! Property tests for the Labor Cost Engine.
//!
//! These check the invariants that must hold for any schedule: hourly weeks
//! split exactly into regular and overtime hours, the parser never panics
//! and never produces a negative shift, and allocation is deterministic.

use chrono::{Days, NaiveDate};
use proptest::prelude::*;
use rust_decimal::Decimal;

use labor_cost_engine::calculation::{
    FrontLoadedOvertime, LaborCostAllocator, OvertimeStrategy, ProportionalOvertime,
    WEEKLY_OVERTIME_THRESHOLD, allocate, parse_shift,
};
use labor_cost_engine::models::{Employee, WeekAssignments, WeeklyAssignment};

fn week_start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 3).unwrap()
}

/// Shift lengths in quarter hours, up to 16 hours.
fn shift_hours() -> impl Strategy<Value = Decimal> {
    (1u32..=64).prop_map(|quarters| Decimal::new(i64::from(quarters) * 25, 2))
}

/// Shift text in the editor's notation, e.g. "9am-5pm" or "10-6".
fn shift_text() -> impl Strategy<Value = String> {
    let token = (0u32..=12, prop_oneof![Just(""), Just("am"), Just("pm")])
        .prop_map(|(hour, suffix)| format!("{hour}{suffix}"));
    (token.clone(), token).prop_map(|(start, end)| format!("{start}-{end}"))
}

/// One employee's week: up to seven shifts keyed by consecutive dates.
fn assignment_for(employee_id: &str, texts: &[String]) -> WeeklyAssignment {
    let mut assignment = WeeklyAssignment::new(employee_id);
    for (offset, text) in texts.iter().enumerate() {
        let date = week_start() + Days::new(offset as u64);
        assignment.insert(date, parse_shift(text, "CLOSED").shift);
    }
    assignment
}

proptest! {
    #[test]
    fn strategies_split_hours_exactly(hours in prop::collection::vec(shift_hours(), 0..=7)) {
        let total: Decimal = hours.iter().copied().sum();
        let strategies: [&dyn OvertimeStrategy; 2] = [&FrontLoadedOvertime, &ProportionalOvertime];

        for strategy in strategies {
            let splits = strategy.allocate(&hours, WEEKLY_OVERTIME_THRESHOLD);
            prop_assert_eq!(splits.len(), hours.len());

            let regular: Decimal = splits.iter().map(|s| s.regular_hours).sum();
            let overtime: Decimal = splits.iter().map(|s| s.overtime_hours).sum();
            prop_assert_eq!(regular + overtime, total);
            prop_assert!(regular <= WEEKLY_OVERTIME_THRESHOLD);
            prop_assert_eq!(overtime, (total - WEEKLY_OVERTIME_THRESHOLD).max(Decimal::ZERO));

            for (split, h) in splits.iter().zip(&hours) {
                prop_assert!(split.regular_hours >= Decimal::ZERO);
                prop_assert!(split.overtime_hours >= Decimal::ZERO);
                prop_assert_eq!(split.total_hours(), *h);
            }
        }
    }

    #[test]
    fn parser_is_total(text in ".{0,24}") {
        let result = parse_shift(&text, "CLOSED");
        prop_assert!(result.shift.duration_hours >= Decimal::ZERO);
        prop_assert!(result.shift.duration_hours <= Decimal::from(24));
        if result.warning.is_some() {
            prop_assert!(!result.shift.is_worked());
        }
    }

    #[test]
    fn well_formed_text_parses_without_warning(text in shift_text()) {
        let result = parse_shift(&text, "CLOSED");
        prop_assert!(result.warning.is_none(), "unexpected warning for {}", text);
        prop_assert!(result.shift.duration_hours > Decimal::ZERO);
        prop_assert!(result.shift.duration_hours <= Decimal::from(24));
    }

    #[test]
    fn hourly_week_matches_weekly_threshold(
        texts in prop::collection::vec(shift_text(), 0..=7),
        rate in 1u32..=50,
    ) {
        let assignment = assignment_for("emp_prop", &texts);
        let weekly_hours = assignment.total_hours();
        let mut week = WeekAssignments::new();
        week.insert("emp_prop".to_string(), assignment);
        let employees = vec![Employee::hourly("emp_prop", Decimal::from(rate))];

        let result = allocate(&week, &employees, Decimal::from(25));

        let regular: Decimal = result.shift_costs.iter().map(|e| e.regular_hours).sum();
        let overtime: Decimal = result.shift_costs.iter().map(|e| e.overtime_hours).sum();
        prop_assert_eq!(regular + overtime, weekly_hours);
        prop_assert!(regular <= WEEKLY_OVERTIME_THRESHOLD);
        prop_assert_eq!(overtime, (weekly_hours - WEEKLY_OVERTIME_THRESHOLD).max(Decimal::ZERO));
        for entry in &result.shift_costs {
            prop_assert_eq!(entry.is_overtime, entry.overtime_hours > Decimal::ZERO);
        }
    }

    #[test]
    fn allocation_is_deterministic(
        hourly in prop::collection::vec(shift_text(), 0..=7),
        salaried in prop::collection::vec(shift_text(), 0..=7),
    ) {
        let mut week = WeekAssignments::new();
        week.insert("emp_h".to_string(), assignment_for("emp_h", &hourly));
        week.insert("emp_s".to_string(), assignment_for("emp_s", &salaried));
        let employees = vec![
            Employee::hourly("emp_h", Decimal::new(1850, 2)),
            Employee::salaried("emp_s", Decimal::from(900)),
        ];
        let allocator = LaborCostAllocator::new();

        let first = allocator.allocate(&week, &employees, Decimal::from(28));
        let second = allocator.allocate(&week, &employees, Decimal::from(28));
        prop_assert_eq!(first, second);
    }

    #[test]
    fn salary_is_fully_distributed(days in 1usize..=7, salary in 100u32..=5000) {
        let texts = vec!["9am-5pm".to_string(); days];
        let mut week = WeekAssignments::new();
        week.insert("emp_s".to_string(), assignment_for("emp_s", &texts));
        let employees = vec![Employee::salaried("emp_s", Decimal::from(salary))];

        let result = allocate(&week, &employees, Decimal::from(25));

        let paid: Decimal = result.shift_costs.iter().map(|e| e.cost).sum();
        prop_assert_eq!(result.shift_costs.len(), days);
        prop_assert_eq!(paid.round_dp(2), Decimal::from(salary));
    }
}
