//! An in-memory [`LaborStore`] backed by ordered maps.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use super::LaborStore;
use crate::config::{ConfigLoader, RestaurantSettings};
use crate::error::EngineResult;
use crate::models::{DailyLaborTotal, Employee, ShiftCostEntry, ShiftTextEntry};

type ShiftKey = (String, NaiveDate);

/// Keeps employees, settings, the shift-text grid and calculated rows in
/// memory.
///
/// # Example
///
/// ```
/// use labor_cost_engine::config::RestaurantSettings;
/// use labor_cost_engine::models::Employee;
/// use labor_cost_engine::storage::{InMemoryLaborStore, LaborStore};
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
/// let entries = store.list_shift_text(monday, monday).unwrap();
/// assert_eq!(entries[0].text, "9am-5pm");
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryLaborStore {
    employees: Vec<Employee>,
    settings: RestaurantSettings,
    shift_text: BTreeMap<ShiftKey, String>,
    shift_costs: BTreeMap<ShiftKey, ShiftCostEntry>,
    daily_totals: BTreeMap<NaiveDate, DailyLaborTotal>,
}

impl InMemoryLaborStore {
    /// Creates a store with the given roster and settings and no shifts.
    pub fn new(employees: Vec<Employee>, settings: RestaurantSettings) -> Self {
        Self {
            employees,
            settings,
            ..Self::default()
        }
    }

    /// Seeds a store from loaded configuration (active employees only).
    pub fn from_config(config: &ConfigLoader) -> Self {
        Self::new(config.employees(), config.settings().clone())
    }

    /// Records the raw text typed into the schedule grid for one cell.
    ///
    /// Blank text clears the cell.
    pub fn set_shift_text(
        &mut self,
        employee_id: impl Into<String>,
        date: NaiveDate,
        text: impl Into<String>,
    ) {
        let key = (employee_id.into(), date);
        let text = text.into();
        if text.trim().is_empty() {
            self.shift_text.remove(&key);
        } else {
            self.shift_text.insert(key, text);
        }
    }

    /// Replaces the restaurant settings.
    pub fn set_settings(&mut self, settings: RestaurantSettings) {
        self.settings = settings;
    }

    /// Stored shift costs, ordered by employee id then date.
    pub fn shift_costs(&self) -> impl Iterator<Item = &ShiftCostEntry> {
        self.shift_costs.values()
    }

    /// The stored shift cost for one employee on one date.
    pub fn shift_cost(&self, employee_id: &str, date: NaiveDate) -> Option<&ShiftCostEntry> {
        self.shift_costs.get(&(employee_id.to_string(), date))
    }

    /// Stored daily totals, in date order.
    pub fn daily_totals(&self) -> impl Iterator<Item = &DailyLaborTotal> {
        self.daily_totals.values()
    }

    /// The stored daily total for `date`.
    pub fn daily_total(&self, date: NaiveDate) -> Option<&DailyLaborTotal> {
        self.daily_totals.get(&date)
    }
}

impl LaborStore for InMemoryLaborStore {
    fn list_employees(&self) -> EngineResult<Vec<Employee>> {
        Ok(self.employees.clone())
    }

    fn list_shift_text(
        &self,
        week_start: NaiveDate,
        week_end: NaiveDate,
    ) -> EngineResult<Vec<ShiftTextEntry>> {
        Ok(self
            .shift_text
            .iter()
            .filter(|((_, date), _)| *date >= week_start && *date <= week_end)
            .map(|((employee_id, date), text)| {
                ShiftTextEntry::new(employee_id.clone(), *date, text.clone())
            })
            .collect())
    }

    fn restaurant_settings(&self) -> EngineResult<RestaurantSettings> {
        Ok(self.settings.clone())
    }

    fn upsert_shift_costs(&mut self, entries: &[ShiftCostEntry]) -> EngineResult<()> {
        for entry in entries {
            let (employee_id, date) = entry.key();
            self.shift_costs
                .insert((employee_id.to_string(), date), entry.clone());
        }
        Ok(())
    }

    fn upsert_daily_totals(&mut self, totals: &[DailyLaborTotal]) -> EngineResult<()> {
        for total in totals {
            self.daily_totals.insert(total.date, total.clone());
        }
        Ok(())
    }
}
