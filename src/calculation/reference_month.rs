//! The calendar month a payroll run covers.

use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// A calendar month, used to pick the attendance a payroll run counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ReferenceMonth {
    /// The year.
    pub year: i32,
    /// The month (1-12).
    pub month: u32,
}

impl ReferenceMonth {
    /// Creates a reference month.
    pub fn new(year: i32, month: u32) -> Self {
        Self { year, month }
    }

    /// Returns the month containing `date`.
    ///
    /// # Examples
    ///
    /// ```
    /// use poultry_payroll::calculation::ReferenceMonth;
    /// use chrono::NaiveDate;
    ///
    /// let date = NaiveDate::from_ymd_opt(2026, 2, 14).unwrap();
    /// assert_eq!(ReferenceMonth::containing(date), ReferenceMonth::new(2026, 2));
    /// ```
    pub fn containing(date: NaiveDate) -> Self {
        Self::new(date.year(), date.month())
    }

    /// Returns true if `date` falls in this month.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }
}

impl fmt::Display for ReferenceMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}
