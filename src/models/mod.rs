//! Core data models for the payroll core.
//!
//! This module contains the employee roster records, the per-day attendance
//! model and the payroll outputs used throughout the crate.

mod attendance;
mod employee;
pub(crate) mod lenient;
mod notification;
mod payroll_summary;

pub use attendance::{
    AttendanceDay, AttendanceLog, AttendanceRecord, AttendanceStatus, AttendanceTransition,
};
pub use employee::{DEFAULT_OVERTIME_RATE_MULTIPLIER, DEFAULT_WORKING_HOURS_PER_DAY, Employee};
pub use notification::{Notification, NotificationKind};
pub use payroll_summary::{AuditStep, PayrollCalculation, PayrollSummary};
