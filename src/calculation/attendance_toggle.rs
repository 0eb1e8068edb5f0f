//! Check-in / check-out toggling.
//!
//! A single clock action either opens today's attendance, closes it, or does
//! nothing when today is already closed. The employee is never modified; the
//! caller receives a new log to write back to the store.

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::models::{AttendanceDay, AttendanceLog, AttendanceTransition, Employee};

use super::worked_hours::truncate_to_minute;

/// The result of a clock action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttendanceToggle {
    /// The employee's attendance log after the action.
    pub log: AttendanceLog,
    /// What the action did.
    pub transition: AttendanceTransition,
}

/// Applies a clock action for `employee` at `now`.
///
/// The day is `now`'s date and the time is truncated to the minute.
///
/// # Examples
///
/// ```
/// use poultry_payroll::calculation::toggle_attendance;
/// use poultry_payroll::models::{AttendanceTransition, Employee};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let mut employee = Employee::new("emp_001", "Amina Yusuf");
/// let day = NaiveDate::from_ymd_opt(2026, 10, 5).unwrap();
///
/// let first = toggle_attendance(&employee, day.and_hms_opt(8, 0, 0).unwrap());
/// assert!(matches!(first.transition, AttendanceTransition::CheckedIn { .. }));
/// employee.attendance_log = first.log;
///
/// let second = toggle_attendance(&employee, day.and_hms_opt(16, 0, 0).unwrap());
/// assert_eq!(second.log.len(), 1);
/// assert_eq!(second.log.get(day).unwrap().worked_hours(), Decimal::new(8, 0));
/// ```
pub fn toggle_attendance(employee: &Employee, now: NaiveDateTime) -> AttendanceToggle {
    let today = now.date();
    let at = truncate_to_minute(now.time());
    let mut log = employee.attendance_log.clone();

    let (day, transition) = match log.get(today).copied() {
        None => (AttendanceDay::open(at), AttendanceTransition::CheckedIn { at }),
        Some(existing) => existing.clock(at),
    };
    log.insert(today, day);

    AttendanceToggle { log, transition }
}
