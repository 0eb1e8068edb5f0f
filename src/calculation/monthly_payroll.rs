//! Monthly payroll calculation.
//!
//! Pay for a month is the number of days with attendance times a daily rate
//! of salary / 30, plus overtime. Overtime hours are counted against the
//! employee's own contractual day, but priced off a fixed 8-hour day:
//! `salary / 30 / 8 * multiplier` per overtime hour.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::{AuditStep, Employee, PayrollCalculation, PayrollSummary};

use super::daily_overtime::detect_daily_overtime;
use super::reference_month::ReferenceMonth;

/// Days in the payroll month used to derive the daily rate, whatever the
/// calendar says.
pub const DAILY_RATE_DIVISOR: Decimal = Decimal::from_parts(30, 0, 0, false, 0);

/// Hours in the day used to turn the daily rate into an hourly rate for
/// overtime, whatever the employee's contract says.
pub const HOURLY_RATE_BASIS_HOURS: Decimal = Decimal::from_parts(8, 0, 0, false, 0);

/// Rounds a reported figure to two decimal places, half away from zero.
///
/// # Examples
///
/// ```
/// use poultry_payroll::calculation::round_to_cents;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(round_to_cents(Decimal::from_str("0.125").unwrap()).to_string(), "0.13");
/// assert_eq!(round_to_cents(Decimal::from_str("3").unwrap()).to_string(), "3.00");
/// ```
pub fn round_to_cents(value: Decimal) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    rounded
}

/// Computes the payroll summary for `employee` for the given month.
///
/// The employee is only read. Missing pay fields fall back to their
/// defaults, so an employee with no salary and no attendance yields all
/// zeroes.
///
/// # Examples
///
/// ```
/// use poultry_payroll::calculation::compute_monthly_payroll;
/// use poultry_payroll::models::{AttendanceLog, AttendanceRecord, AttendanceStatus, Employee};
/// use chrono::{NaiveDate, NaiveTime};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let mut employee = Employee::new("emp_001", "Amina Yusuf");
/// employee.base_salary = Some(Decimal::new(3000, 0));
/// employee.attendance_log = AttendanceLog::from(vec![AttendanceRecord {
///     date: NaiveDate::from_ymd_opt(2026, 10, 5).unwrap(),
///     check_in_time: NaiveTime::from_hms_opt(8, 0, 0),
///     check_out_time: NaiveTime::from_hms_opt(19, 0, 0),
///     worked_hours: Decimal::ZERO,
///     attendance_status: AttendanceStatus::Present,
/// }]);
///
/// let summary = compute_monthly_payroll(&employee, 2026, 10);
/// assert_eq!(summary.worked_days, 1);
/// assert_eq!(summary.overtime_hours, Decimal::from_str("3.00").unwrap());
/// assert_eq!(summary.overtime_pay, Decimal::from_str("56.25").unwrap());
/// assert_eq!(summary.total_salary, Decimal::from_str("156.25").unwrap());
/// ```
pub fn compute_monthly_payroll(employee: &Employee, year: i32, month: u32) -> PayrollSummary {
    calculate_monthly_payroll(employee, year, month).summary
}

/// Computes the payroll summary together with its audit trail.
///
/// Steps, in order:
/// 1. Filter the attendance log to the reference month; each date is one worked day
/// 2. Derive the daily rate as salary / 30
/// 3. One overtime detection per worked day against the contractual hours
/// 4. Price overtime at daily rate / 8 times the overtime multiplier
/// 5. Total worked days at the daily rate plus overtime pay
pub fn calculate_monthly_payroll(employee: &Employee, year: i32, month: u32) -> PayrollCalculation {
    let reference = ReferenceMonth::new(year, month);
    let mut audit_steps = Vec::new();
    let mut step_number = 1;

    // Step 1: attendance in the reference month
    let days: Vec<_> = employee.attendance_log.in_month(reference).collect();
    let worked_days = u32::try_from(days.len()).unwrap_or(u32::MAX);
    audit_steps.push(AuditStep {
        step_number,
        rule_id: "attendance_filter".to_string(),
        rule_name: "Attendance In Reference Month".to_string(),
        input: serde_json::json!({
            "reference_month": reference.to_string(),
            "log_entries": employee.attendance_log.len()
        }),
        output: serde_json::json!({
            "worked_days": worked_days
        }),
        reasoning: format!(
            "{} of {} attendance records fall in {}",
            worked_days,
            employee.attendance_log.len(),
            reference
        ),
    });
    step_number += 1;

    // Step 2: daily rate
    let base_salary = employee.salary();
    let daily_rate = base_salary / DAILY_RATE_DIVISOR;
    audit_steps.push(AuditStep {
        step_number,
        rule_id: "daily_rate".to_string(),
        rule_name: "Daily Rate".to_string(),
        input: serde_json::json!({
            "base_salary": base_salary.normalize().to_string(),
            "divisor": DAILY_RATE_DIVISOR.to_string()
        }),
        output: serde_json::json!({
            "daily_rate": daily_rate.normalize().to_string()
        }),
        reasoning: format!(
            "${} / {} days = ${} per day",
            base_salary.normalize(),
            DAILY_RATE_DIVISOR,
            daily_rate.normalize()
        ),
    });
    step_number += 1;

    // Step 3: overtime per worked day
    let regular_hours = employee.regular_hours();
    let mut overtime_hours = Decimal::ZERO;
    for (_, day) in &days {
        let detection = detect_daily_overtime(day.worked_hours(), regular_hours, step_number);
        overtime_hours = overtime_hours.saturating_add(detection.overtime_hours);
        audit_steps.push(detection.audit_step);
        step_number += 1;
    }

    // Step 4: overtime pay
    let hourly_rate_basis = daily_rate / HOURLY_RATE_BASIS_HOURS;
    let multiplier = employee.overtime_multiplier();
    // Stored pay fields are unbounded, so the products saturate rather than overflow.
    let overtime_pay = overtime_hours
        .saturating_mul(hourly_rate_basis)
        .saturating_mul(multiplier);
    audit_steps.push(AuditStep {
        step_number,
        rule_id: "overtime_pay".to_string(),
        rule_name: "Overtime Pay".to_string(),
        input: serde_json::json!({
            "overtime_hours": overtime_hours.normalize().to_string(),
            "hourly_rate_basis": hourly_rate_basis.normalize().to_string(),
            "multiplier": multiplier.normalize().to_string()
        }),
        output: serde_json::json!({
            "overtime_pay": overtime_pay.normalize().to_string()
        }),
        reasoning: format!(
            "{} overtime hours x ${} x {} = ${}",
            overtime_hours.normalize(),
            hourly_rate_basis.normalize(),
            multiplier.normalize(),
            overtime_pay.normalize()
        ),
    });
    step_number += 1;

    // Step 5: total
    let total_salary = Decimal::from(worked_days)
        .saturating_mul(daily_rate)
        .saturating_add(overtime_pay);
    audit_steps.push(AuditStep {
        step_number,
        rule_id: "total_salary".to_string(),
        rule_name: "Total Salary".to_string(),
        input: serde_json::json!({
            "worked_days": worked_days,
            "daily_rate": daily_rate.normalize().to_string(),
            "overtime_pay": overtime_pay.normalize().to_string()
        }),
        output: serde_json::json!({
            "total_salary": round_to_cents(total_salary).to_string()
        }),
        reasoning: format!(
            "{} days x ${} + ${} overtime = ${}",
            worked_days,
            daily_rate.normalize(),
            round_to_cents(overtime_pay),
            round_to_cents(total_salary)
        ),
    });

    let summary = PayrollSummary {
        year,
        month,
        base_salary,
        worked_days,
        daily_rate,
        hourly_rate_basis,
        overtime_hours: round_to_cents(overtime_hours),
        overtime_pay: round_to_cents(overtime_pay),
        total_salary: round_to_cents(total_salary),
    };

    PayrollCalculation {
        summary,
        audit_steps,
    }
}
