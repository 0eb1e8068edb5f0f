//! Employee model.
//!
//! This module defines the [`Employee`] record as it is kept in the farm's
//! employee store, together with the pay defaults applied when a field is
//! missing.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::attendance::AttendanceLog;
use super::lenient;

/// Contractual working hours per day when none are recorded.
pub const DEFAULT_WORKING_HOURS_PER_DAY: Decimal = Decimal::from_parts(8, 0, 0, false, 0);

/// Overtime multiplier when none is recorded (150%).
pub const DEFAULT_OVERTIME_RATE_MULTIPLIER: Decimal = Decimal::from_parts(15, 0, 0, false, 1);

/// A member of the farm staff.
///
/// Pay fields are optional because the store may hold incomplete records.
/// Use [`Employee::salary`], [`Employee::regular_hours`] and
/// [`Employee::overtime_multiplier`] to read them with defaults applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: String,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Job on the farm (e.g., "Hatchery technician").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    /// Contact phone number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// The date the employee was hired.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hire_date: Option<NaiveDate>,
    /// Monthly salary.
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub base_salary: Option<Decimal>,
    /// Contractual hours per day.
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub working_hours_per_day: Option<Decimal>,
    /// Multiplier applied to the hourly rate for overtime.
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub overtime_rate_multiplier: Option<Decimal>,
    /// Attendance history.
    #[serde(default)]
    pub attendance_log: AttendanceLog,
}

impl Employee {
    /// Creates an employee with no pay details and no attendance.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            position: None,
            phone: None,
            hire_date: None,
            base_salary: None,
            working_hours_per_day: None,
            overtime_rate_multiplier: None,
            attendance_log: AttendanceLog::new(),
        }
    }

    /// Returns the monthly salary, zero when absent.
    pub fn salary(&self) -> Decimal {
        self.base_salary.unwrap_or(Decimal::ZERO)
    }

    /// Returns the contractual hours per day.
    ///
    /// Absent or zero hours fall back to [`DEFAULT_WORKING_HOURS_PER_DAY`].
    ///
    /// # Examples
    ///
    /// ```
    /// use poultry_payroll::models::Employee;
    /// use rust_decimal::Decimal;
    ///
    /// let mut employee = Employee::new("emp_001", "Amina Yusuf");
    /// assert_eq!(employee.regular_hours(), Decimal::new(8, 0));
    ///
    /// employee.working_hours_per_day = Some(Decimal::new(6, 0));
    /// assert_eq!(employee.regular_hours(), Decimal::new(6, 0));
    /// ```
    pub fn regular_hours(&self) -> Decimal {
        self.working_hours_per_day
            .filter(|hours| !hours.is_zero())
            .unwrap_or(DEFAULT_WORKING_HOURS_PER_DAY)
    }

    /// Returns the overtime multiplier.
    ///
    /// Absent or zero multipliers fall back to [`DEFAULT_OVERTIME_RATE_MULTIPLIER`].
    pub fn overtime_multiplier(&self) -> Decimal {
        self.overtime_rate_multiplier
            .filter(|multiplier| !multiplier.is_zero())
            .unwrap_or(DEFAULT_OVERTIME_RATE_MULTIPLIER)
    }
}
