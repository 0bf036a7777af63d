//! Staffing guide models: scheduled headcount per position per open day.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Position label used for employees without a position.
pub const UNASSIGNED_POSITION: &str = "Unassigned";

/// Headcount for one open date.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DailyStaffing {
    /// The date counted.
    pub date: NaiveDate,
    /// Staff scheduled per position. Every position in the guide is present.
    pub headcount: BTreeMap<String, u32>,
    /// Staff scheduled across all positions.
    pub total_staff: u32,
}

/// How many employees are scheduled for each position on each open day.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StaffingGuide {
    /// Every position with at least one worked shift, sorted.
    pub positions: Vec<String>,
    /// One row per open date of the week, in date order.
    pub days: Vec<DailyStaffing>,
}

impl StaffingGuide {
    /// Staff scheduled for `position` on `date`, zero if none.
    pub fn headcount(&self, date: NaiveDate, position: &str) -> u32 {
        self.days
            .iter()
            .find(|d| d.date == date)
            .and_then(|d| d.headcount.get(position).copied())
            .unwrap_or(0)
    }

    /// Total staff scheduled on each position over the week.
    pub fn position_totals(&self) -> BTreeMap<&str, u32> {
        let mut totals: BTreeMap<&str, u32> = BTreeMap::new();
        for day in &self.days {
            for (position, count) in &day.headcount {
                *totals.entry(position.as_str()).or_default() += count;
            }
        }
        totals
    }
}
