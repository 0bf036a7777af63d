//! Parsed shift model.
//!
//! This module defines [`ParsedShift`], the normalized form of a shift entered
//! as free text (e.g. "9am-5pm"), and [`ShiftTextEntry`], the raw text keyed by
//! employee and date as supplied by the schedule grid.

use chrono::{NaiveDate, NaiveTime, Timelike};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Raw shift text for one employee on one calendar date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftTextEntry {
    /// The employee the shift belongs to.
    pub employee_id: String,
    /// The calendar date of the shift.
    pub date: NaiveDate,
    /// The text as typed into the schedule (e.g. "10-6", "CLOSED", "").
    #[serde(default)]
    pub text: String,
}

impl ShiftTextEntry {
    /// Creates a new entry.
    pub fn new(employee_id: impl Into<String>, date: NaiveDate, text: impl Into<String>) -> Self {
        Self {
            employee_id: employee_id.into(),
            date,
            text: text.into(),
        }
    }
}

/// A shift normalized to clock times and a duration.
///
/// `duration_hours` is zero exactly when both times are `None`, which is how
/// "no shift worked" is represented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedShift {
    /// Start of the shift, or `None` when no shift is worked.
    pub start_time: Option<NaiveTime>,
    /// End of the shift (already reduced modulo 24h for overnight shifts).
    pub end_time: Option<NaiveTime>,
    /// Length of the shift in hours.
    pub duration_hours: Decimal,
}

impl ParsedShift {
    /// The "no shift" value.
    pub const NONE: ParsedShift = ParsedShift {
        start_time: None,
        end_time: None,
        duration_hours: Decimal::ZERO,
    };

    /// Returns true if the shift has a nonzero duration.
    ///
    /// # Examples
    ///
    /// ```
    /// use labor_cost_engine::models::ParsedShift;
    ///
    /// assert!(!ParsedShift::NONE.is_worked());
    /// ```
    pub fn is_worked(&self) -> bool {
        self.duration_hours > Decimal::ZERO
    }

    /// Returns true if the shift crosses midnight.
    pub fn is_overnight(&self) -> bool {
        match (self.start_time, self.end_time) {
            (Some(start), Some(end)) => end <= start,
            _ => false,
        }
    }

    /// Renders the shift back into the schedule grid's 12-hour notation.
    ///
    /// Returns an empty string for [`ParsedShift::NONE`]. The output parses
    /// back to the same shift.
    ///
    /// # Examples
    ///
    /// ```
    /// use labor_cost_engine::calculation::parse_shift;
    ///
    /// let parsed = parse_shift("10-6", "CLOSED").shift;
    /// assert_eq!(parsed.to_shift_text(), "10am-6pm");
    /// ```
    pub fn to_shift_text(&self) -> String {
        match (self.start_time, self.end_time) {
            (Some(start), Some(end)) => {
                format!("{}-{}", twelve_hour_label(start), twelve_hour_label(end))
            }
            _ => String::new(),
        }
    }
}

impl Default for ParsedShift {
    fn default() -> Self {
        Self::NONE
    }
}

fn twelve_hour_label(time: NaiveTime) -> String {
    let hour = time.hour();
    let suffix = if hour < 12 { "am" } else { "pm" };
    let display_hour = match hour % 12 {
        0 => 12,
        h => h,
    };

    let seconds_past_hour = time.minute() * 60 + time.second();
    if seconds_past_hour == 0 {
        return format!("{}{}", display_hour, suffix);
    }

    let fraction = Decimal::from(seconds_past_hour) / Decimal::from(3600);
    let value = (Decimal::from(display_hour) + fraction).normalize();
    format!("{}{}", value, suffix)
}
