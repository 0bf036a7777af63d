//! The weekly costing workflow against a [`LaborStore`].
//!
//! Reads everything the calculation needs, runs it entirely in memory, and
//! only then writes the shift costs and daily totals back. A failed read
//! leaves the store untouched.

use std::time::Instant;

use tracing::info;

use crate::calculation::{
    FrontLoadedOvertime, LaborCostAllocator, OvertimeStrategy, build_staffing_guide,
};
use crate::error::EngineResult;
use crate::models::{Employee, LaborCostReport, ScheduleWeek};
use crate::storage::LaborStore;

/// Costs schedule weeks held in a [`LaborStore`].
///
/// # Example
///
/// ```
/// use labor_cost_engine::config::RestaurantSettings;
/// use labor_cost_engine::models::{Employee, ScheduleWeek};
/// use labor_cost_engine::service::LaborCostService;
/// use labor_cost_engine::storage::InMemoryLaborStore;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let monday = NaiveDate::from_ymd_opt(2025, 3, 3).unwrap();
/// let mut store = InMemoryLaborStore::new(
///     vec![Employee::hourly("emp_002", Decimal::from(20))],
///     RestaurantSettings::default(),
/// );
/// store.set_shift_text("emp_002", monday, "9am-5pm");
///
/// let report = LaborCostService::new()
///     .calculate_week(&mut store, &ScheduleWeek::starting(monday))
///     .unwrap();
/// assert_eq!(report.result.weekly_summary.total_cost, Decimal::from(160));
/// assert_eq!(store.daily_total(monday).unwrap().required_sales, Decimal::from(640));
/// ```
#[derive(Debug, Clone, Default)]
pub struct LaborCostService<S = FrontLoadedOvertime> {
    allocator: LaborCostAllocator<S>,
}

impl LaborCostService {
    /// Creates a service using the default overtime policy.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<S: OvertimeStrategy> LaborCostService<S> {
    /// Creates a service around a configured allocator.
    pub fn with_allocator(allocator: LaborCostAllocator<S>) -> Self {
        Self { allocator }
    }

    /// Costs `week` from the store's roster, settings and shift text, then
    /// upserts the resulting shift costs and daily totals.
    ///
    /// Inactive employees are not costed; their shift text is reported as
    /// belonging to an unknown employee. Invalid settings are reported as
    /// warnings in the report.
    ///
    /// # Errors
    ///
    /// Returns the store's error if a read or write fails.
    pub fn calculate_week<L>(
        &self,
        store: &mut L,
        week: &ScheduleWeek,
    ) -> EngineResult<LaborCostReport>
    where
        L: LaborStore + ?Sized,
    {
        let start_time = Instant::now();

        let settings = store.restaurant_settings()?;
        let employees: Vec<Employee> = store
            .list_employees()?
            .into_iter()
            .filter(|e| e.active)
            .collect();
        let shift_text = store.list_shift_text(week.start_date, week.end_date())?;

        let result = self
            .allocator
            .calculate_week(week, &employees, &shift_text, &settings);

        store.upsert_shift_costs(&result.shift_costs)?;
        store.upsert_daily_totals(&result.daily_totals)?;

        info!(
            week_start = %week.start_date,
            shift_costs = result.shift_costs.len(),
            daily_totals = result.daily_totals.len(),
            total_cost = %result.weekly_summary.total_cost,
            duration_us = start_time.elapsed().as_micros(),
            "Week costed and persisted"
        );

        let staffing =
            build_staffing_guide(week, &result.shift_costs, &employees, &settings.closed_days);
        Ok(LaborCostReport::new(*week, settings.labor_goal_percentage, result)
            .with_staffing(staffing))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::ProportionalOvertime;
    use crate::config::RestaurantSettings;
    use crate::error::EngineError;
    use crate::models::{DailyLaborTotal, ShiftCostEntry, ShiftTextEntry, UNASSIGNED_POSITION};
    use crate::storage::InMemoryLaborStore;
    use chrono::{NaiveDate, Weekday};
    use rust_decimal::Decimal;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, d).unwrap()
    }

    fn create_test_store() -> InMemoryLaborStore {
        let mut inactive = Employee::hourly("emp_006", Decimal::from(14));
        inactive.active = false;
        let mut store = InMemoryLaborStore::new(
            vec![
                Employee::salaried("emp_001", Decimal::from(1000)),
                Employee::hourly("emp_005", Decimal::from(20)),
                inactive,
            ],
            RestaurantSettings {
                closed_days: vec![Weekday::Mon],
                ..RestaurantSettings::default()
            },
        );
        for d in 4..=8 {
            store.set_shift_text("emp_005", date(d), "8am-6pm");
            store.set_shift_text("emp_001", date(d), "9am-5pm");
        }
        store
    }

    /// A store whose writes always fail.
    struct ReadOnlyStore(InMemoryLaborStore);

    impl LaborStore for ReadOnlyStore {
        fn list_employees(&self) -> EngineResult<Vec<Employee>> {
            self.0.list_employees()
        }

        fn list_shift_text(
            &self,
            start: NaiveDate,
            end: NaiveDate,
        ) -> EngineResult<Vec<ShiftTextEntry>> {
            self.0.list_shift_text(start, end)
        }

        fn restaurant_settings(&self) -> EngineResult<RestaurantSettings> {
            self.0.restaurant_settings()
        }

        fn upsert_shift_costs(&mut self, _: &[ShiftCostEntry]) -> EngineResult<()> {
            Err(EngineError::StorageError {
                message: "read-only".to_string(),
            })
        }

        fn upsert_daily_totals(&mut self, _: &[DailyLaborTotal]) -> EngineResult<()> {
            Err(EngineError::StorageError {
                message: "read-only".to_string(),
            })
        }
    }

    #[test]
    fn test_calculate_week_persists_results() {
        let mut store = create_test_store();
        let report = LaborCostService::new()
            .calculate_week(&mut store, &ScheduleWeek::starting(date(3)))
            .unwrap();

        assert_eq!(report.result.shift_costs.len(), 10);
        assert_eq!(store.shift_costs().count(), 10);
        assert_eq!(store.daily_totals().count(), 5);

        // Saturday is the fifth ten-hour shift for emp_005
        let saturday = store.shift_cost("emp_005", date(8)).unwrap();
        assert!(saturday.is_overtime);
        assert_eq!(saturday.cost, Decimal::from(300));

        // emp_001: 1000 over 5 days
        assert_eq!(store.shift_cost("emp_001", date(4)).unwrap().cost, Decimal::from(200));
        assert_eq!(report.result.weekly_summary.total_cost, Decimal::from(2100));

        // closed Mondays leave six open days; the test roster has no positions
        assert_eq!(report.staffing.days.len(), 6);
        assert_eq!(report.staffing.position_totals()[UNASSIGNED_POSITION], 10);
    }

    #[test]
    fn test_rerun_replaces_rather_than_appends() {
        let mut store = create_test_store();
        let service = LaborCostService::new();
        let week = ScheduleWeek::starting(date(3));

        let first = service.calculate_week(&mut store, &week).unwrap();
        let second = service.calculate_week(&mut store, &week).unwrap();

        assert_eq!(first.result, second.result);
        assert_eq!(store.shift_costs().count(), 10);
        assert_eq!(store.daily_totals().count(), 5);
    }

    #[test]
    fn test_inactive_employee_shift_is_unknown() {
        let mut store = create_test_store();
        store.set_shift_text("emp_006", date(4), "5pm-11pm");

        let report = LaborCostService::new()
            .calculate_week(&mut store, &ScheduleWeek::starting(date(3)))
            .unwrap();

        assert!(store.shift_cost("emp_006", date(4)).is_none());
        assert_eq!(report.result.warnings.len(), 1);
        assert_eq!(report.result.warnings[0].code, "UNKNOWN_EMPLOYEE");
    }

    #[test]
    fn test_closed_day_text_is_ignored() {
        let mut store = create_test_store();
        store.set_shift_text("emp_005", date(3), "8am-6pm");

        let report = LaborCostService::new()
            .calculate_week(&mut store, &ScheduleWeek::starting(date(3)))
            .unwrap();

        assert!(report.result.daily_total(date(3)).is_none());
        assert!(store.shift_cost("emp_005", date(3)).is_none());
    }

    #[test]
    fn test_negative_goal_is_costed_with_zero_required_sales() {
        let monday = date(3);
        let mut store = InMemoryLaborStore::new(
            vec![Employee::hourly("emp_002", Decimal::from(20))],
            RestaurantSettings {
                labor_goal_percentage: Decimal::from(-5),
                ..RestaurantSettings::default()
            },
        );
        store.set_shift_text("emp_002", monday, "9am-5pm");

        let report = LaborCostService::new()
            .calculate_week(&mut store, &ScheduleWeek::starting(monday))
            .unwrap();

        assert_eq!(report.result.weekly_summary.total_cost, Decimal::from(160));
        assert_eq!(report.result.weekly_summary.required_sales, Decimal::ZERO);
        assert_eq!(report.result.warnings[0].code, "INVALID_SETTINGS");

        let stored = store.daily_total(monday).unwrap();
        assert_eq!(stored.total_cost, Decimal::from(160));
        assert_eq!(stored.required_sales, Decimal::ZERO);
        assert!(store.shift_cost("emp_002", monday).is_some());
    }

    #[test]
    fn test_storage_write_failure_is_returned() {
        let mut store = ReadOnlyStore(create_test_store());
        let result =
            LaborCostService::new().calculate_week(&mut store, &ScheduleWeek::starting(date(3)));

        match result {
            Err(EngineError::StorageError { message }) => assert_eq!(message, "read-only"),
            other => panic!("Expected StorageError, got {:?}", other),
        }
    }

    #[test]
    fn test_service_uses_configured_strategy() {
        let mut store = create_test_store();
        let allocator = LaborCostAllocator::with_strategy(ProportionalOvertime);
        let service = LaborCostService::with_allocator(allocator);

        service
            .calculate_week(&mut store, &ScheduleWeek::starting(date(3)))
            .unwrap();

        let tuesday = store.shift_cost("emp_005", date(4)).unwrap();
        assert!(tuesday.is_overtime);
        assert_eq!(tuesday.overtime_hours, Decimal::from(2));
    }
}
