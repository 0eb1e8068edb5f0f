//! Performance benchmarks for the payroll core.
//!
//! Covers the monthly payroll pipeline for one employee with a full month of
//! attendance, a whole-roster payroll report, and the check-in/check-out
//! toggle against a year-long attendance log.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use chrono::{Days, NaiveDate, NaiveTime};
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rust_decimal::Decimal;

use poultry_payroll::calculation::{calculate_monthly_payroll, compute_monthly_payroll, toggle_attendance};
use poultry_payroll::clock::FixedClock;
use poultry_payroll::directory::EmployeeDirectory;
use poultry_payroll::models::{AttendanceLog, AttendanceRecord, AttendanceStatus, Employee};
use poultry_payroll::store::{InMemoryEmployeeStore, NotificationLog};

/// Creates an employee with `days` consecutive days of attendance from 1 January 2026.
fn create_employee(id: usize, days: u64) -> Employee {
    let start = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
    let records: Vec<AttendanceRecord> = (0..days)
        .map(|offset| AttendanceRecord {
            date: start.checked_add_days(Days::new(offset)).unwrap(),
            check_in_time: NaiveTime::from_hms_opt(7, 30, 0),
            // Alternate regular and long days so overtime detection does work.
            check_out_time: NaiveTime::from_hms_opt(if offset % 2 == 0 { 15 } else { 18 }, 45, 0),
            worked_hours: Decimal::ZERO,
            attendance_status: AttendanceStatus::Present,
        })
        .collect();

    let mut employee = Employee::new(format!("emp_{id:04}"), format!("Farmhand {id}"));
    employee.base_salary = Some(Decimal::new(3000, 0));
    employee.working_hours_per_day = Some(Decimal::new(8, 0));
    employee.overtime_rate_multiplier = Some(Decimal::new(15, 1));
    employee.attendance_log = AttendanceLog::from(records);
    employee
}

fn bench_monthly_payroll(c: &mut Criterion) {
    let employee = create_employee(1, 31);

    c.bench_function("monthly_payroll_31_days", |b| {
        b.iter(|| compute_monthly_payroll(black_box(&employee), 2026, 1))
    });

    c.bench_function("monthly_payroll_with_audit_31_days", |b| {
        b.iter(|| calculate_monthly_payroll(black_box(&employee), 2026, 1))
    });

    let long_history = create_employee(1, 365);
    c.bench_function("monthly_payroll_from_year_of_history", |b| {
        b.iter(|| compute_monthly_payroll(black_box(&long_history), 2026, 6))
    });
}

fn bench_payroll_report(c: &mut Criterion) {
    let mut group = c.benchmark_group("payroll_report");

    for roster_size in [10usize, 100, 1000] {
        let employees: Vec<Employee> = (0..roster_size).map(|i| create_employee(i, 31)).collect();
        let directory = EmployeeDirectory::new(
            InMemoryEmployeeStore::new(employees),
            NotificationLog::default(),
            FixedClock::new(
                NaiveDate::from_ymd_opt(2026, 1, 31)
                    .unwrap()
                    .and_hms_opt(18, 0, 0)
                    .unwrap(),
            ),
        );

        group.throughput(Throughput::Elements(roster_size as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(roster_size),
            &directory,
            |b, directory| b.iter(|| directory.payroll_report().unwrap()),
        );
    }

    group.finish();
}

fn bench_toggle_attendance(c: &mut Criterion) {
    let employee = create_employee(1, 365);
    let check_in = NaiveDate::from_ymd_opt(2027, 1, 1)
        .unwrap()
        .and_hms_opt(8, 0, 0)
        .unwrap();

    c.bench_function("toggle_attendance_year_of_history", |b| {
        b.iter(|| toggle_attendance(black_box(&employee), black_box(check_in)))
    });
}

criterion_group!(
    benches,
    bench_monthly_payroll,
    bench_payroll_report,
    bench_toggle_attendance
);
criterion_main!(benches);
