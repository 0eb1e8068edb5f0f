//! Attendance model and related types.
//!
//! A day of attendance moves through two states: it is opened by a check-in
//! and closed by the matching check-out. Closed days never change again.
//! [`AttendanceLog`] keys days by date, so an employee can never hold two
//! records for the same day.

use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::warn;

use super::lenient;
use crate::calculation::{ReferenceMonth, compute_worked_hours};

/// Attendance status stored with each record.
///
/// Only presence is ever recorded. Absence is the lack of a record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttendanceStatus {
    /// The employee checked in on this date.
    ///
    /// Any other stored status string reads as present.
    #[default]
    #[serde(other)]
    Present,
}

/// A single day of attendance in the flat shape the employee store keeps.
///
/// # Example
///
/// ```
/// use poultry_payroll::models::AttendanceRecord;
/// use rust_decimal::Decimal;
///
/// let json = r#"{
///     "date": "2026-10-05",
///     "checkInTime": "08:00",
///     "checkOutTime": "19:00",
///     "workedHours": 11,
///     "attendanceStatus": "present"
/// }"#;
/// let record: AttendanceRecord = serde_json::from_str(json).unwrap();
/// assert_eq!(record.worked_hours, Decimal::new(11, 0));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRecord {
    /// The calendar date of the record.
    pub date: NaiveDate,
    /// When the employee checked in.
    #[serde(default, with = "lenient::time_of_day")]
    pub check_in_time: Option<NaiveTime>,
    /// When the employee checked out. Absent while still clocked in.
    #[serde(default, with = "lenient::time_of_day")]
    pub check_out_time: Option<NaiveTime>,
    /// Hours worked, zero until the employee checks out.
    #[serde(default, deserialize_with = "lenient::decimal_or_zero")]
    pub worked_hours: Decimal,
    /// The recorded status.
    #[serde(default)]
    pub attendance_status: AttendanceStatus,
}

/// The outcome of a clock action against a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AttendanceTransition {
    /// A new day was opened.
    CheckedIn {
        /// The check-in time.
        at: NaiveTime,
    },
    /// An open day was closed.
    CheckedOut {
        /// The check-out time.
        at: NaiveTime,
        /// The hours derived from check-in and check-out.
        worked_hours: Decimal,
    },
    /// The day was already closed and nothing changed.
    AlreadyClosed,
}

/// One day of attendance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttendanceDay {
    /// Checked in, not yet checked out.
    Open {
        /// When the employee checked in.
        check_in: Option<NaiveTime>,
    },
    /// Checked out. Worked hours are fixed.
    Closed {
        /// When the employee checked in.
        check_in: Option<NaiveTime>,
        /// When the employee checked out.
        check_out: NaiveTime,
        /// Hours derived from the two times.
        worked_hours: Decimal,
    },
}

impl AttendanceDay {
    /// Opens a day with the given check-in time.
    pub fn open(check_in: NaiveTime) -> Self {
        AttendanceDay::Open {
            check_in: Some(check_in),
        }
    }

    /// Applies a clock action at `at`.
    ///
    /// An open day closes and its worked hours are derived from the two
    /// times. A closed day is returned unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use poultry_payroll::models::{AttendanceDay, AttendanceTransition};
    /// use chrono::NaiveTime;
    /// use rust_decimal::Decimal;
    ///
    /// let day = AttendanceDay::open(NaiveTime::from_hms_opt(8, 0, 0).unwrap());
    /// let (day, transition) = day.clock(NaiveTime::from_hms_opt(16, 30, 0).unwrap());
    ///
    /// assert_eq!(day.worked_hours(), Decimal::new(85, 1));
    /// assert!(matches!(transition, AttendanceTransition::CheckedOut { .. }));
    /// ```
    pub fn clock(self, at: NaiveTime) -> (Self, AttendanceTransition) {
        match self {
            AttendanceDay::Open { check_in } => {
                let worked_hours = compute_worked_hours(check_in, Some(at));
                let closed = AttendanceDay::Closed {
                    check_in,
                    check_out: at,
                    worked_hours,
                };
                (closed, AttendanceTransition::CheckedOut { at, worked_hours })
            }
            closed @ AttendanceDay::Closed { .. } => (closed, AttendanceTransition::AlreadyClosed),
        }
    }

    /// Returns the check-in time, if one was recorded.
    pub fn check_in(&self) -> Option<NaiveTime> {
        match self {
            AttendanceDay::Open { check_in } | AttendanceDay::Closed { check_in, .. } => *check_in,
        }
    }

    /// Returns the check-out time of a closed day.
    pub fn check_out(&self) -> Option<NaiveTime> {
        match self {
            AttendanceDay::Open { .. } => None,
            AttendanceDay::Closed { check_out, .. } => Some(*check_out),
        }
    }

    /// Returns the worked hours, zero while the day is open.
    pub fn worked_hours(&self) -> Decimal {
        match self {
            AttendanceDay::Open { .. } => Decimal::ZERO,
            AttendanceDay::Closed { worked_hours, .. } => *worked_hours,
        }
    }

    /// Returns true while the employee is still checked in.
    pub fn is_open(&self) -> bool {
        matches!(self, AttendanceDay::Open { .. })
    }

    /// Converts the day into the flat record shape for `date`.
    pub fn to_record(&self, date: NaiveDate) -> AttendanceRecord {
        AttendanceRecord {
            date,
            check_in_time: self.check_in(),
            check_out_time: self.check_out(),
            worked_hours: self.worked_hours(),
            attendance_status: AttendanceStatus::Present,
        }
    }
}

impl From<&AttendanceRecord> for AttendanceDay {
    fn from(record: &AttendanceRecord) -> Self {
        // Worked hours are always re-derived from the times.
        match record.check_out_time {
            Some(check_out) => AttendanceDay::Closed {
                check_in: record.check_in_time,
                check_out,
                worked_hours: compute_worked_hours(record.check_in_time, Some(check_out)),
            },
            None => AttendanceDay::Open {
                check_in: record.check_in_time,
            },
        }
    }
}

/// An employee's attendance history, one entry per date, ordered by date.
///
/// Serializes as the list of [`AttendanceRecord`]s the employee store keeps.
/// When a stored list repeats a date, the last entry wins. Entries that do
/// not read as a record (a missing or malformed date, for instance) are
/// skipped so the rest of the history still loads.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(into = "Vec<AttendanceRecord>")]
pub struct AttendanceLog {
    days: BTreeMap<NaiveDate, AttendanceDay>,
}

impl AttendanceLog {
    /// Creates an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the entry for `date`.
    pub fn get(&self, date: NaiveDate) -> Option<&AttendanceDay> {
        self.days.get(&date)
    }

    /// Sets the entry for `date`, returning the entry it replaced.
    pub fn insert(&mut self, date: NaiveDate, day: AttendanceDay) -> Option<AttendanceDay> {
        self.days.insert(date, day)
    }

    /// Returns the number of dates with attendance.
    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// Returns true if no attendance has been recorded.
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Iterates over all entries in date order.
    pub fn iter(&self) -> impl Iterator<Item = (NaiveDate, &AttendanceDay)> {
        self.days.iter().map(|(date, day)| (*date, day))
    }

    /// Iterates over the entries that fall in the given calendar month.
    pub fn in_month(&self, month: ReferenceMonth) -> impl Iterator<Item = (NaiveDate, &AttendanceDay)> {
        self.iter().filter(move |(date, _)| month.contains(*date))
    }

    /// Returns true if the employee is checked in and not yet out on `date`.
    pub fn is_checked_in(&self, date: NaiveDate) -> bool {
        self.get(date).is_some_and(AttendanceDay::is_open)
    }

    /// Returns the flat records in date order.
    pub fn records(&self) -> Vec<AttendanceRecord> {
        self.iter().map(|(date, day)| day.to_record(date)).collect()
    }

    /// Returns the flat records newest first, the order they are listed in.
    pub fn history(&self) -> Vec<AttendanceRecord> {
        self.days
            .iter()
            .rev()
            .map(|(date, day)| day.to_record(*date))
            .collect()
    }
}

impl FromIterator<AttendanceRecord> for AttendanceLog {
    fn from_iter<I: IntoIterator<Item = AttendanceRecord>>(iter: I) -> Self {
        let days = iter
            .into_iter()
            .map(|record| (record.date, AttendanceDay::from(&record)))
            .collect();
        Self { days }
    }
}

impl From<Vec<AttendanceRecord>> for AttendanceLog {
    fn from(records: Vec<AttendanceRecord>) -> Self {
        records.into_iter().collect()
    }
}

impl<'de> Deserialize<'de> for AttendanceLog {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let entries = Vec::<Value>::deserialize(deserializer)?;
        Ok(entries
            .into_iter()
            .filter_map(|entry| match serde_json::from_value::<AttendanceRecord>(entry) {
                Ok(record) => Some(record),
                Err(err) => {
                    warn!(error = %err, "Skipping unreadable attendance record");
                    None
                }
            })
            .collect())
    }
}

impl From<AttendanceLog> for Vec<AttendanceRecord> {
    fn from(log: AttendanceLog) -> Self {
        log.records()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn time(s: &str) -> NaiveTime {
        NaiveTime::parse_from_str(s, "%H:%M").unwrap()
    }

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn record(d: &str, check_in: Option<&str>, check_out: Option<&str>) -> AttendanceRecord {
        AttendanceRecord {
            date: date(d),
            check_in_time: check_in.map(time),
            check_out_time: check_out.map(time),
            worked_hours: Decimal::ZERO,
            attendance_status: AttendanceStatus::Present,
        }
    }

    #[test]
    fn test_open_day_has_no_hours() {
        let day = AttendanceDay::open(time("08:00"));
        assert!(day.is_open());
        assert_eq!(day.check_in(), Some(time("08:00")));
        assert_eq!(day.check_out(), None);
        assert_eq!(day.worked_hours(), Decimal::ZERO);
    }

    #[test]
    fn test_clock_closes_open_day() {
        let (day, transition) = AttendanceDay::open(time("08:00")).clock(time("19:00"));

        assert!(!day.is_open());
        assert_eq!(day.check_out(), Some(time("19:00")));
        assert_eq!(day.worked_hours(), Decimal::new(11, 0));
        assert_eq!(
            transition,
            AttendanceTransition::CheckedOut {
                at: time("19:00"),
                worked_hours: Decimal::new(11, 0),
            }
        );
    }

    #[test]
    fn test_clock_leaves_closed_day_unchanged() {
        let (closed, _) = AttendanceDay::open(time("08:00")).clock(time("16:00"));
        let (again, transition) = closed.clock(time("18:00"));

        assert_eq!(again, closed);
        assert_eq!(transition, AttendanceTransition::AlreadyClosed);
        assert_eq!(again.worked_hours(), Decimal::new(8, 0));
    }

    #[test]
    fn test_clock_before_check_in_clamps_to_zero() {
        let (day, _) = AttendanceDay::open(time("09:00")).clock(time("08:00"));
        assert_eq!(day.worked_hours(), Decimal::ZERO);
        assert!(!day.is_open());
    }

    #[test]
    fn test_record_without_checkout_is_open() {
        let day = AttendanceDay::from(&record("2026-10-01", Some("07:30"), None));
        assert!(day.is_open());
    }

    #[test]
    fn test_record_hours_are_recomputed_from_times() {
        let mut stored = record("2026-10-01", Some("08:00"), Some("12:00"));
        stored.worked_hours = Decimal::new(99, 0);

        let day = AttendanceDay::from(&stored);
        assert_eq!(day.worked_hours(), Decimal::new(4, 0));
    }

    #[test]
    fn test_record_without_check_in_has_zero_hours() {
        let day = AttendanceDay::from(&record("2026-10-01", None, Some("12:00")));
        assert_eq!(day.worked_hours(), Decimal::ZERO);
        assert!(!day.is_open());
    }

    #[test]
    fn test_log_keeps_one_entry_per_date() {
        let log: AttendanceLog = vec![
            record("2026-10-01", Some("08:00"), None),
            record("2026-10-01", Some("08:00"), Some("10:00")),
        ]
        .into();

        assert_eq!(log.len(), 1);
        assert_eq!(log.get(date("2026-10-01")).unwrap().worked_hours(), Decimal::new(2, 0));
    }

    #[test]
    fn test_log_orders_records_by_date() {
        let log: AttendanceLog = vec![
            record("2026-10-03", Some("08:00"), Some("16:00")),
            record("2026-09-30", Some("08:00"), Some("16:00")),
            record("2026-10-01", Some("08:00"), None),
        ]
        .into();

        let dates: Vec<NaiveDate> = log.records().iter().map(|r| r.date).collect();
        assert_eq!(dates, vec![date("2026-09-30"), date("2026-10-01"), date("2026-10-03")]);

        let newest_first: Vec<NaiveDate> = log.history().iter().map(|r| r.date).collect();
        assert_eq!(
            newest_first,
            vec![date("2026-10-03"), date("2026-10-01"), date("2026-09-30")]
        );
    }

    #[test]
    fn test_in_month_filters_by_year_and_month() {
        let log: AttendanceLog = vec![
            record("2025-10-15", Some("08:00"), Some("16:00")),
            record("2026-09-30", Some("08:00"), Some("16:00")),
            record("2026-10-01", Some("08:00"), Some("16:00")),
            record("2026-10-31", Some("08:00"), None),
            record("2026-11-01", Some("08:00"), Some("16:00")),
        ]
        .into();

        let october: Vec<NaiveDate> = log.in_month(ReferenceMonth::new(2026, 10)).map(|(d, _)| d).collect();
        assert_eq!(october, vec![date("2026-10-01"), date("2026-10-31")]);
    }

    #[test]
    fn test_is_checked_in() {
        let log: AttendanceLog = vec![
            record("2026-10-01", Some("08:00"), Some("16:00")),
            record("2026-10-02", Some("08:00"), None),
        ]
        .into();

        assert!(!log.is_checked_in(date("2026-10-01")));
        assert!(log.is_checked_in(date("2026-10-02")));
        assert!(!log.is_checked_in(date("2026-10-03")));
    }

    #[test]
    fn test_log_serializes_as_flat_records() {
        let mut log = AttendanceLog::new();
        log.insert(date("2026-10-05"), AttendanceDay::open(time("08:00")));

        let json = serde_json::to_value(&log).unwrap();
        assert_eq!(
            json,
            serde_json::json!([{
                "date": "2026-10-05",
                "checkInTime": "08:00",
                "checkOutTime": null,
                "workedHours": "0",
                "attendanceStatus": "present"
            }])
        );
    }

    #[test]
    fn test_log_deserializes_from_store_shape() {
        let json = r#"[
            {"date": "2026-10-05", "checkInTime": "08:00", "checkOutTime": "19:00", "workedHours": 11, "attendanceStatus": "present"},
            {"date": "2026-10-06", "checkInTime": "08:15"}
        ]"#;

        let log: AttendanceLog = serde_json::from_str(json).unwrap();
        assert_eq!(log.len(), 2);
        assert_eq!(log.get(date("2026-10-05")).unwrap().worked_hours(), Decimal::new(11, 0));
        assert!(log.is_checked_in(date("2026-10-06")));
    }

    #[test]
    fn test_log_skips_unreadable_records() {
        let json = r#"[
            {"date": "", "checkInTime": "08:00", "checkOutTime": "16:00"},
            {"date": "not a date", "checkInTime": "08:00"},
            {"checkInTime": "08:00"},
            "garbage",
            {"date": "2026-10-07", "checkInTime": "08:00", "checkOutTime": "17:30"}
        ]"#;

        let log: AttendanceLog = serde_json::from_str(json).unwrap();
        assert_eq!(log.len(), 1);
        assert_eq!(log.get(date("2026-10-07")).unwrap().worked_hours(), Decimal::new(95, 1));
    }

    #[test]
    fn test_unknown_status_reads_as_present() {
        let json = r#"[
            {"date": "2026-10-05", "checkInTime": "08:00", "attendanceStatus": "Present"},
            {"date": "2026-10-06", "checkInTime": "08:00", "attendanceStatus": "late"}
        ]"#;

        let log: AttendanceLog = serde_json::from_str(json).unwrap();
        assert_eq!(log.len(), 2);
        assert!(
            log.records()
                .iter()
                .all(|record| record.attendance_status == AttendanceStatus::Present)
        );
    }
}
