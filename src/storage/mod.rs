//! Persistence boundary for the Labor Cost Engine.
//!
//! The calculation itself never touches storage. [`LaborStore`] describes the
//! reads the storage workflow needs before a run and the keyed upserts it
//! performs afterwards, so re-running a week replaces its rows rather than
//! appending to them.

mod memory;

use chrono::NaiveDate;

use crate::config::RestaurantSettings;
use crate::error::EngineResult;
use crate::models::{DailyLaborTotal, Employee, ShiftCostEntry, ShiftTextEntry};

pub use memory::InMemoryLaborStore;

/// Storage contract used by the weekly costing workflow.
pub trait LaborStore: Send + Sync {
    /// Returns every employee known to the store, active or not.
    fn list_employees(&self) -> EngineResult<Vec<Employee>>;

    /// Returns the shift text entered for dates in `[week_start, week_end]`.
    fn list_shift_text(
        &self,
        week_start: NaiveDate,
        week_end: NaiveDate,
    ) -> EngineResult<Vec<ShiftTextEntry>>;

    /// Returns the restaurant's current settings.
    fn restaurant_settings(&self) -> EngineResult<RestaurantSettings>;

    /// Creates or replaces shift costs keyed by `(employee_id, date)`.
    fn upsert_shift_costs(&mut self, entries: &[ShiftCostEntry]) -> EngineResult<()>;

    /// Creates or replaces daily totals keyed by `date`.
    fn upsert_daily_totals(&mut self, totals: &[DailyLaborTotal]) -> EngineResult<()>;
}
