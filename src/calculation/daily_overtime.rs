//! Daily overtime detection functionality.
//!
//! This module splits one day's worked hours into regular hours (up to the
//! employee's contractual day) and overtime hours (anything beyond it).

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::AuditStep;

/// The result of detecting overtime for one day of attendance.
///
/// # Example
///
/// ```
/// use poultry_payroll::calculation::DailyOvertimeDetection;
/// use poultry_payroll::models::AuditStep;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let detection = DailyOvertimeDetection {
///     regular_hours: Decimal::from_str("8.0").unwrap(),
///     overtime_hours: Decimal::from_str("3.0").unwrap(),
///     audit_step: AuditStep {
///         step_number: 3,
///         rule_id: "daily_overtime_detection".to_string(),
///         rule_name: "Daily Overtime Detection".to_string(),
///         input: serde_json::json!({"worked_hours": "11", "regular_hours": "8"}),
///         output: serde_json::json!({"regular_hours": "8", "overtime_hours": "3"}),
///         reasoning: "11 hours worked exceeds 8 hour day by 3 hours".to_string(),
///     },
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyOvertimeDetection {
    /// The hours up to the contractual day.
    pub regular_hours: Decimal,
    /// The hours beyond the contractual day (can be zero, never negative).
    pub overtime_hours: Decimal,
    /// The audit step recording this detection.
    pub audit_step: AuditStep,
}

/// Splits a day's worked hours at the employee's contractual day.
///
/// A day at or under the contractual hours yields no overtime. Shortfalls
/// are not tracked.
///
/// # Arguments
///
/// * `worked_hours` - The hours worked that day
/// * `regular_hours` - The employee's contractual hours per day
/// * `step_number` - The step number for audit trail sequencing
///
/// # Examples
///
/// ```
/// use poultry_payroll::calculation::detect_daily_overtime;
/// use rust_decimal::Decimal;
///
/// let result = detect_daily_overtime(Decimal::new(11, 0), Decimal::new(8, 0), 1);
/// assert_eq!(result.regular_hours, Decimal::new(8, 0));
/// assert_eq!(result.overtime_hours, Decimal::new(3, 0));
///
/// let result = detect_daily_overtime(Decimal::new(8, 0), Decimal::new(8, 0), 1);
/// assert_eq!(result.overtime_hours, Decimal::ZERO);
/// ```
pub fn detect_daily_overtime(
    worked_hours: Decimal,
    regular_hours: Decimal,
    step_number: u32,
) -> DailyOvertimeDetection {
    let (regular, overtime_hours) = if worked_hours > regular_hours {
        (regular_hours, worked_hours.saturating_sub(regular_hours))
    } else {
        (worked_hours, Decimal::ZERO)
    };

    let reasoning = if overtime_hours > Decimal::ZERO {
        format!(
            "{} hours worked exceeds {} hour day by {} hours",
            worked_hours.normalize(),
            regular_hours.normalize(),
            overtime_hours.normalize()
        )
    } else if worked_hours == regular_hours {
        format!(
            "{} hours worked equals {} hour day, no overtime",
            worked_hours.normalize(),
            regular_hours.normalize()
        )
    } else {
        format!(
            "{} hours worked is under {} hour day, no overtime",
            worked_hours.normalize(),
            regular_hours.normalize()
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "daily_overtime_detection".to_string(),
        rule_name: "Daily Overtime Detection".to_string(),
        input: serde_json::json!({
            "worked_hours": worked_hours.normalize().to_string(),
            "regular_hours": regular_hours.normalize().to_string()
        }),
        output: serde_json::json!({
            "regular_hours": regular.normalize().to_string(),
            "overtime_hours": overtime_hours.normalize().to_string()
        }),
        reasoning,
    };

    DailyOvertimeDetection {
        regular_hours: regular,
        overtime_hours,
        audit_step,
    }
}
