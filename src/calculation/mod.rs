//! Calculation logic for the payroll core.
//!
//! This module contains the worked hours derivation between a check-in and a
//! check-out, daily overtime detection, the monthly payroll pipeline and the
//! check-in/check-out toggle.

mod attendance_toggle;
mod daily_overtime;
mod monthly_payroll;
mod reference_month;
mod worked_hours;

pub use attendance_toggle::{AttendanceToggle, toggle_attendance};
pub use daily_overtime::{DailyOvertimeDetection, detect_daily_overtime};
pub use monthly_payroll::{
    DAILY_RATE_DIVISOR, HOURLY_RATE_BASIS_HOURS, calculate_monthly_payroll,
    compute_monthly_payroll, round_to_cents,
};
pub use reference_month::ReferenceMonth;
pub use worked_hours::{compute_worked_hours, parse_time_of_day, truncate_to_minute};
