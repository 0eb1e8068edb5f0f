//! Payroll result models.
//!
//! This module contains the [`PayrollSummary`] reported for one employee and
//! one month, and the [`AuditStep`]s that explain how it was reached.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Monthly payroll figures for one employee.
///
/// `overtime_hours`, `overtime_pay` and `total_salary` are rounded to two
/// decimal places. `daily_rate` and `hourly_rate_basis` are reported at full
/// precision.
///
/// # Example
///
/// ```
/// use poultry_payroll::models::PayrollSummary;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let summary = PayrollSummary {
///     year: 2026,
///     month: 10,
///     base_salary: Decimal::from_str("3000").unwrap(),
///     worked_days: 1,
///     daily_rate: Decimal::from_str("100").unwrap(),
///     hourly_rate_basis: Decimal::from_str("12.5").unwrap(),
///     overtime_hours: Decimal::from_str("3.00").unwrap(),
///     overtime_pay: Decimal::from_str("56.25").unwrap(),
///     total_salary: Decimal::from_str("156.25").unwrap(),
/// };
/// assert_eq!(summary.total_salary.to_string(), "156.25");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayrollSummary {
    /// Reference year.
    pub year: i32,
    /// Reference month (1-12).
    pub month: u32,
    /// The employee's monthly salary.
    pub base_salary: Decimal,
    /// Number of dates with attendance in the month.
    pub worked_days: u32,
    /// Salary divided by 30.
    pub daily_rate: Decimal,
    /// Daily rate divided by 8, the basis for overtime pay.
    pub hourly_rate_basis: Decimal,
    /// Hours worked beyond the contractual day, summed over the month.
    pub overtime_hours: Decimal,
    /// Pay for the overtime hours.
    pub overtime_pay: Decimal,
    /// Pay for worked days plus overtime pay.
    pub total_salary: Decimal,
}

/// A single step in the payroll audit trail.
///
/// Each step captures the input, output, and reasoning for one stage of the
/// monthly calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A payroll summary together with the steps that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayrollCalculation {
    /// The resulting figures.
    pub summary: PayrollSummary,
    /// The audit trail, in calculation order.
    pub audit_steps: Vec<AuditStep>,
}
