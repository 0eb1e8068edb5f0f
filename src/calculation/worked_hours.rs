//! Worked hours between a check-in and a check-out.
//!
//! Times of day are compared as minutes since midnight. A check-out earlier
//! than the check-in is clamped to zero hours rather than treated as a shift
//! that runs past midnight.

use chrono::{NaiveTime, Timelike};
use rust_decimal::Decimal;

use crate::error::{PayrollError, PayrollResult};

const MINUTES_PER_HOUR: Decimal = Decimal::from_parts(60, 0, 0, false, 0);

/// Parses a user-entered time of day.
///
/// Accepts `HH:MM` and `HH:MM:SS`. Seconds are dropped, so the result is
/// always on a whole minute.
///
/// # Examples
///
/// ```
/// use poultry_payroll::calculation::parse_time_of_day;
/// use chrono::NaiveTime;
///
/// assert_eq!(parse_time_of_day("08:30").unwrap(), NaiveTime::from_hms_opt(8, 30, 0).unwrap());
/// assert_eq!(parse_time_of_day("17:05:42").unwrap(), NaiveTime::from_hms_opt(17, 5, 0).unwrap());
/// assert!(parse_time_of_day("8 o'clock").is_err());
/// ```
pub fn parse_time_of_day(text: &str) -> PayrollResult<NaiveTime> {
    let trimmed = text.trim();
    NaiveTime::parse_from_str(trimmed, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(trimmed, "%H:%M:%S"))
        .map(truncate_to_minute)
        .map_err(|_| PayrollError::InvalidTime {
            value: text.to_string(),
        })
}

/// Drops the seconds and sub-second part of a time.
pub fn truncate_to_minute(time: NaiveTime) -> NaiveTime {
    NaiveTime::from_hms_opt(time.hour(), time.minute(), 0).unwrap_or(time)
}

fn minutes_since_midnight(time: NaiveTime) -> i64 {
    i64::from(time.hour()) * 60 + i64::from(time.minute())
}

/// Computes the hours worked between a check-in and a check-out.
///
/// Returns zero while either time is missing, and zero when the check-out is
/// earlier than the check-in.
///
/// # Examples
///
/// ```
/// use poultry_payroll::calculation::compute_worked_hours;
/// use chrono::NaiveTime;
/// use rust_decimal::Decimal;
///
/// let eight = NaiveTime::from_hms_opt(8, 0, 0);
/// let seven_pm = NaiveTime::from_hms_opt(19, 0, 0);
///
/// assert_eq!(compute_worked_hours(eight, seven_pm), Decimal::new(11, 0));
/// assert_eq!(compute_worked_hours(eight, None), Decimal::ZERO);
/// assert_eq!(compute_worked_hours(seven_pm, eight), Decimal::ZERO);
/// ```
pub fn compute_worked_hours(check_in: Option<NaiveTime>, check_out: Option<NaiveTime>) -> Decimal {
    let (Some(check_in), Some(check_out)) = (check_in, check_out) else {
        return Decimal::ZERO;
    };

    let minutes = minutes_since_midnight(check_out) - minutes_since_midnight(check_in);
    if minutes <= 0 {
        return Decimal::ZERO;
    }

    Decimal::new(minutes, 0) / MINUTES_PER_HOUR
}
