//! The employee directory service.
//!
//! [`EmployeeDirectory`] is what an admin screen talks to. It reads the
//! roster from an [`EmployeeRepository`], applies one change, writes the
//! whole roster back and reports the change to a [`NotificationSink`].
//! "Now" always comes from the injected [`Clock`].

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::calculation::{ReferenceMonth, compute_monthly_payroll, toggle_attendance};
use crate::clock::Clock;
use crate::error::{PayrollError, PayrollResult};
use crate::models::{
    AttendanceLog, AttendanceRecord, AttendanceTransition, Employee, Notification,
    NotificationKind, PayrollSummary, lenient,
};
use crate::store::{EmployeeRepository, NotificationSink};

/// Profile and pay details for a new employee.
///
/// Pay fields are read as forgivingly as stored employee records: numeric
/// strings are accepted and blank or unreadable values are left unset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEmployee {
    /// Display name. Must not be blank.
    pub name: String,
    /// Job on the farm.
    #[serde(default)]
    pub position: Option<String>,
    /// Contact phone number.
    #[serde(default)]
    pub phone: Option<String>,
    /// Hire date.
    #[serde(default)]
    pub hire_date: Option<NaiveDate>,
    /// Monthly salary.
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub base_salary: Option<Decimal>,
    /// Contractual hours per day.
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub working_hours_per_day: Option<Decimal>,
    /// Overtime multiplier.
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub overtime_rate_multiplier: Option<Decimal>,
}

/// Replacement profile and pay details for an existing employee.
///
/// The attendance log is not part of an update and is always preserved.
pub type EmployeeUpdate = NewEmployee;

impl NewEmployee {
    fn validate(&self) -> PayrollResult<()> {
        if self.name.trim().is_empty() {
            return Err(PayrollError::InvalidEmployee {
                field: "name".to_string(),
                message: "must not be blank".to_string(),
            });
        }
        Ok(())
    }

    fn into_employee(self, id: String, attendance_log: AttendanceLog) -> Employee {
        Employee {
            id,
            name: self.name.trim().to_string(),
            position: self.position,
            phone: self.phone,
            hire_date: self.hire_date,
            base_salary: self.base_salary,
            working_hours_per_day: self.working_hours_per_day,
            overtime_rate_multiplier: self.overtime_rate_multiplier,
            attendance_log,
        }
    }
}

/// One row of the monthly payroll report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayrollReportLine {
    /// The employee's id.
    pub employee_id: String,
    /// The employee's name.
    pub name: String,
    /// The employee's payroll for the month.
    pub summary: PayrollSummary,
}

/// Administrative operations over the employee roster.
pub struct EmployeeDirectory<R, N, C> {
    repository: R,
    notifier: N,
    clock: C,
}

impl<R, N, C> EmployeeDirectory<R, N, C>
where
    R: EmployeeRepository,
    N: NotificationSink,
    C: Clock,
{
    /// Creates a directory over the given store, sink and clock.
    pub fn new(repository: R, notifier: N, clock: C) -> Self {
        Self {
            repository,
            notifier,
            clock,
        }
    }

    /// Returns the employee store.
    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Returns the notification sink.
    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Returns the clock.
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Returns the full roster.
    pub fn employees(&self) -> PayrollResult<Vec<Employee>> {
        self.repository.load_all()
    }

    /// Returns the employee with `id`.
    pub fn find(&self, id: &str) -> PayrollResult<Employee> {
        self.repository
            .load_all()?
            .into_iter()
            .find(|employee| employee.id == id)
            .ok_or_else(|| not_found(id))
    }

    /// Returns employees whose name or position contains `query`, ignoring case.
    ///
    /// A blank query returns the whole roster.
    pub fn search(&self, query: &str) -> PayrollResult<Vec<Employee>> {
        let needle = query.trim().to_lowercase();
        let employees = self.repository.load_all()?;
        if needle.is_empty() {
            return Ok(employees);
        }

        Ok(employees
            .into_iter()
            .filter(|employee| {
                employee.name.to_lowercase().contains(&needle)
                    || employee
                        .position
                        .as_deref()
                        .is_some_and(|position| position.to_lowercase().contains(&needle))
            })
            .collect())
    }

    /// Adds an employee with a fresh id and no attendance.
    pub fn add_employee(&self, details: NewEmployee) -> PayrollResult<Employee> {
        details.validate()?;

        let mut employees = self.repository.load_all()?;
        let employee = details.into_employee(Uuid::new_v4().to_string(), AttendanceLog::new());
        employees.push(employee.clone());
        self.repository.replace_all(employees)?;

        info!(employee_id = %employee.id, name = %employee.name, "Employee added");
        self.notify(
            NotificationKind::Success,
            "Employee added",
            format!("{} was added to the roster", employee.name),
        );
        Ok(employee)
    }

    /// Replaces the profile and pay details of the employee with `id`.
    pub fn update_employee(&self, id: &str, details: EmployeeUpdate) -> PayrollResult<Employee> {
        details.validate()?;

        let mut employees = self.repository.load_all()?;
        let slot = employees
            .iter_mut()
            .find(|employee| employee.id == id)
            .ok_or_else(|| not_found(id))?;
        let attendance_log = std::mem::take(&mut slot.attendance_log);
        *slot = details.into_employee(id.to_string(), attendance_log);
        let updated = slot.clone();
        self.repository.replace_all(employees)?;

        info!(employee_id = %id, "Employee updated");
        self.notify(
            NotificationKind::Success,
            "Employee updated",
            format!("{}'s details were saved", updated.name),
        );
        Ok(updated)
    }

    /// Removes the employee with `id` and returns the removed record.
    pub fn remove_employee(&self, id: &str) -> PayrollResult<Employee> {
        let mut employees = self.repository.load_all()?;
        let index = employees
            .iter()
            .position(|employee| employee.id == id)
            .ok_or_else(|| not_found(id))?;
        let removed = employees.remove(index);
        self.repository.replace_all(employees)?;

        info!(employee_id = %id, "Employee removed");
        self.notify(
            NotificationKind::Success,
            "Employee removed",
            format!("{} was removed from the roster", removed.name),
        );
        Ok(removed)
    }

    /// Checks the employee with `id` in or out at the clock's current time.
    ///
    /// Nothing is written when today's attendance is already closed.
    pub fn toggle_attendance(&self, id: &str) -> PayrollResult<AttendanceTransition> {
        let now = self.clock.now();
        let mut employees = self.repository.load_all()?;
        let employee = employees
            .iter_mut()
            .find(|employee| employee.id == id)
            .ok_or_else(|| not_found(id))?;

        let toggle = toggle_attendance(employee, now);
        let (title, message) = match toggle.transition {
            AttendanceTransition::CheckedIn { at } => (
                "Checked in",
                format!("{} checked in at {}", employee.name, at.format("%H:%M")),
            ),
            AttendanceTransition::CheckedOut { at, worked_hours } => (
                "Checked out",
                format!(
                    "{} checked out at {} after {} hours",
                    employee.name,
                    at.format("%H:%M"),
                    worked_hours.round_dp(2).normalize()
                ),
            ),
            AttendanceTransition::AlreadyClosed => {
                debug!(employee_id = %id, date = %now.date(), "Attendance already closed for today");
                return Ok(toggle.transition);
            }
        };

        employee.attendance_log = toggle.log;
        self.repository.replace_all(employees)?;

        info!(employee_id = %id, transition = ?toggle.transition, "Attendance recorded");
        self.notify(NotificationKind::Success, title, message);
        Ok(toggle.transition)
    }

    /// Returns the attendance of the employee with `id`, newest first.
    pub fn attendance_history(&self, id: &str) -> PayrollResult<Vec<AttendanceRecord>> {
        Ok(self.find(id)?.attendance_log.history())
    }

    /// Returns true if the employee with `id` is checked in and not yet out today.
    pub fn is_checked_in(&self, id: &str) -> PayrollResult<bool> {
        let today = self.clock.today();
        Ok(self.find(id)?.attendance_log.is_checked_in(today))
    }

    /// Returns the current month's payroll for the employee with `id`.
    pub fn monthly_payroll(&self, id: &str) -> PayrollResult<PayrollSummary> {
        let month = self.current_month();
        let employee = self.find(id)?;
        Ok(compute_monthly_payroll(&employee, month.year, month.month))
    }

    /// Returns the current month's payroll for every employee, ordered by name.
    pub fn payroll_report(&self) -> PayrollResult<Vec<PayrollReportLine>> {
        let month = self.current_month();
        let mut lines: Vec<PayrollReportLine> = self
            .repository
            .load_all()?
            .iter()
            .map(|employee| PayrollReportLine {
                employee_id: employee.id.clone(),
                name: employee.name.clone(),
                summary: compute_monthly_payroll(employee, month.year, month.month),
            })
            .collect();
        lines.sort_by(|a, b| {
            a.name
                .to_lowercase()
                .cmp(&b.name.to_lowercase())
                .then_with(|| a.employee_id.cmp(&b.employee_id))
        });

        debug!(month = %month, employees = lines.len(), "Payroll report computed");
        Ok(lines)
    }

    fn current_month(&self) -> ReferenceMonth {
        ReferenceMonth::containing(self.clock.today())
    }

    fn notify(&self, kind: NotificationKind, title: &str, message: String) {
        self.notifier
            .notify(Notification::new(kind, title, message, self.clock.now()));
    }
}

fn not_found(id: &str) -> PayrollError {
    warn!(employee_id = %id, "Employee not found");
    PayrollError::EmployeeNotFound { id: id.to_string() }
}
