//! Shift text parsing.
//!
//! Converts a shift typed into the schedule grid ("9am-5pm", "10-6",
//! "11pm-7am") into a [`ParsedShift`]. Parsing never fails the batch:
//! unparseable text becomes [`ParsedShift::NONE`] plus a warning.
//!
//! ## Hour interpretation
//!
//! - `am` suffix: `V mod 12`
//! - `pm` suffix: `(V mod 12) + 12`
//! - no suffix: values below 5 are afternoon (`V + 12`), everything else is
//!   taken as written, so "10-6" is 10:00-18:00 and "2-10" is 14:00-22:00.
//!
//! An end hour at or before the start hour is an overnight shift.

use std::str::FromStr;

use chrono::NaiveTime;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use tracing::warn;

use crate::error::{EngineError, EngineResult};
use crate::models::{CalculationWarning, ParsedShift};

/// Text that marks a day the restaurant is closed.
pub const DEFAULT_CLOSED_DAY_MARKER: &str = "CLOSED";

/// Bare hours below this value are read as PM.
pub const BARE_HOUR_PM_CUTOFF: Decimal = Decimal::from_parts(5, 0, 0, false, 0);

const HALF_DAY_HOURS: Decimal = Decimal::from_parts(12, 0, 0, false, 0);
const FULL_DAY_HOURS: Decimal = Decimal::from_parts(24, 0, 0, false, 0);
const SECONDS_PER_HOUR: Decimal = Decimal::from_parts(3600, 0, 0, false, 0);

/// The outcome of parsing one shift string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShiftParseResult {
    /// The parsed shift, or [`ParsedShift::NONE`] if the text was unusable.
    pub shift: ParsedShift,
    /// Set when the text was malformed and degraded to "no shift".
    pub warning: Option<CalculationWarning>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Meridiem {
    Am,
    Pm,
    Unspecified,
}

/// Parses shift text, degrading malformed input to "no shift" with a warning.
///
/// Empty text and the closed-day marker are "no shift" without a warning.
///
/// # Examples
///
/// ```
/// use labor_cost_engine::calculation::parse_shift;
/// use chrono::NaiveTime;
/// use rust_decimal::Decimal;
///
/// let result = parse_shift("9am-5pm", "CLOSED");
/// assert_eq!(result.shift.start_time, NaiveTime::from_hms_opt(9, 0, 0));
/// assert_eq!(result.shift.end_time, NaiveTime::from_hms_opt(17, 0, 0));
/// assert_eq!(result.shift.duration_hours, Decimal::from(8));
/// assert!(result.warning.is_none());
///
/// let result = parse_shift("9am to 5pm", "CLOSED");
/// assert!(!result.shift.is_worked());
/// assert!(result.warning.is_some());
/// ```
pub fn parse_shift(text: &str, closed_day_marker: &str) -> ShiftParseResult {
    match try_parse_shift(text, closed_day_marker) {
        Ok(shift) => ShiftParseResult {
            shift,
            warning: None,
        },
        Err(err) => {
            warn!(shift_text = %text, error = %err, "Treating unparseable shift as no shift");
            ShiftParseResult {
                shift: ParsedShift::NONE,
                warning: Some(CalculationWarning::from_error(&err)),
            }
        }
    }
}

/// Parses shift text, returning the reason when it cannot be interpreted.
///
/// # Errors
///
/// Returns [`EngineError::MalformedShift`] when the text does not contain
/// exactly one `-`, a side is not a number, or an hour falls outside the day.
///
/// # Examples
///
/// ```
/// use labor_cost_engine::calculation::try_parse_shift;
/// use labor_cost_engine::models::ParsedShift;
///
/// assert_eq!(try_parse_shift("CLOSED", "CLOSED").unwrap(), ParsedShift::NONE);
/// assert!(try_parse_shift("nine-five", "CLOSED").is_err());
/// ```
pub fn try_parse_shift(text: &str, closed_day_marker: &str) -> EngineResult<ParsedShift> {
    let trimmed = text.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case(closed_day_marker.trim()) {
        return Ok(ParsedShift::NONE);
    }

    let mut sides = trimmed.split('-');
    let (start_token, end_token) = match (sides.next(), sides.next(), sides.next()) {
        (Some(start), Some(end), None) => (start, end),
        (_, None, _) => return Err(malformed(text, "missing '-' between start and end")),
        _ => return Err(malformed(text, "expected exactly one '-' separator")),
    };

    let start_hour = parse_hour(start_token).map_err(|message| malformed(text, message))?;
    let mut end_hour = parse_hour(end_token).map_err(|message| malformed(text, message))?;

    if end_hour <= start_hour {
        end_hour += FULL_DAY_HOURS;
    }
    let duration_hours = (end_hour - start_hour).normalize();

    let start_time = clock_time(start_hour).map_err(|message| malformed(text, message))?;
    let end_time =
        clock_time(end_hour % FULL_DAY_HOURS).map_err(|message| malformed(text, message))?;

    Ok(ParsedShift {
        start_time: Some(start_time),
        end_time: Some(end_time),
        duration_hours,
    })
}

/// Maps one side of a shift ("9am", "5", "11 PM") to an hour in `[0, 24)`.
fn parse_hour(token: &str) -> Result<Decimal, String> {
    let lowered = token.trim().to_ascii_lowercase();
    let (number, meridiem) = if lowered.contains("am") {
        (lowered.replace("am", ""), Meridiem::Am)
    } else if lowered.contains("pm") {
        (lowered.replace("pm", ""), Meridiem::Pm)
    } else {
        (lowered.clone(), Meridiem::Unspecified)
    };

    let number = number.trim();
    if number.is_empty() {
        return Err(format!("'{}' has no hour", token.trim()));
    }
    let value =
        Decimal::from_str(number).map_err(|_| format!("'{}' is not an hour", token.trim()))?;
    if value.is_sign_negative() && !value.is_zero() {
        return Err(format!("'{}' is not an hour", token.trim()));
    }

    let hour = match meridiem {
        Meridiem::Am => value % HALF_DAY_HOURS,
        Meridiem::Pm => value % HALF_DAY_HOURS + HALF_DAY_HOURS,
        Meridiem::Unspecified if value < BARE_HOUR_PM_CUTOFF => value + HALF_DAY_HOURS,
        Meridiem::Unspecified => value,
    };

    if hour >= FULL_DAY_HOURS {
        return Err(format!("'{}' is past the end of the day", token.trim()));
    }
    Ok(hour)
}

fn clock_time(hour: Decimal) -> Result<NaiveTime, String> {
    (hour * SECONDS_PER_HOUR)
        .round()
        .to_u32()
        .and_then(|seconds| NaiveTime::from_num_seconds_from_midnight_opt(seconds, 0))
        .ok_or_else(|| format!("hour {} is not a clock time", hour.normalize()))
}

fn malformed(text: &str, message: impl Into<String>) -> EngineError {
    EngineError::MalformedShift {
        text: text.to_string(),
        message: message.into(),
    }
}
