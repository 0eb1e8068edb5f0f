//! Sources of the current date and time.
//!
//! Everything that depends on "now" (which day a clock action lands on,
//! which month payroll covers, notification timestamps) asks a [`Clock`]
//! rather than reading the system time directly.

use std::sync::{Mutex, PoisonError};

use chrono::{Local, NaiveDate, NaiveDateTime, TimeDelta};

/// Supplies the current local date and time.
pub trait Clock {
    /// Returns the current local date and time.
    fn now(&self) -> NaiveDateTime;

    /// Returns the current local date.
    fn today(&self) -> NaiveDate {
        self.now().date()
    }
}

/// Reads the system clock in the local time zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// A clock that only moves when told to.
///
/// # Example
///
/// ```
/// use poultry_payroll::clock::{Clock, FixedClock};
/// use chrono::{NaiveDate, TimeDelta};
///
/// let start = NaiveDate::from_ymd_opt(2026, 10, 5).unwrap().and_hms_opt(8, 0, 0).unwrap();
/// let clock = FixedClock::new(start);
/// clock.advance(TimeDelta::hours(11));
/// assert_eq!(clock.now(), start + TimeDelta::hours(11));
/// ```
#[derive(Debug)]
pub struct FixedClock {
    now: Mutex<NaiveDateTime>,
}

impl FixedClock {
    /// Creates a clock stopped at `now`.
    pub fn new(now: NaiveDateTime) -> Self {
        Self {
            now: Mutex::new(now),
        }
    }

    /// Moves the clock to `now`.
    pub fn set(&self, now: NaiveDateTime) {
        *self.now.lock().unwrap_or_else(PoisonError::into_inner) = now;
    }

    /// Moves the clock forward by `delta`.
    pub fn advance(&self, delta: TimeDelta) {
        let mut now = self.now.lock().unwrap_or_else(PoisonError::into_inner);
        *now += delta;
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        *self.now.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn start() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, 5)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_fixed_clock_reports_its_time() {
        let clock = FixedClock::new(start());
        assert_eq!(clock.now(), start());
        assert_eq!(clock.today(), NaiveDate::from_ymd_opt(2026, 10, 5).unwrap());
    }

    #[test]
    fn test_fixed_clock_set() {
        let clock = FixedClock::new(start());
        let later = start() + TimeDelta::days(3);
        clock.set(later);
        assert_eq!(clock.now(), later);
    }

    #[test]
    fn test_fixed_clock_advance_crosses_midnight() {
        let clock = FixedClock::new(start());
        clock.advance(TimeDelta::hours(17));
        assert_eq!(clock.today(), NaiveDate::from_ymd_opt(2026, 10, 6).unwrap());
    }

    #[test]
    fn test_system_clock_reads_local_time() {
        let before = Local::now().naive_local();
        let now = SystemClock.now();
        let after = Local::now().naive_local();

        assert!(before <= now && now <= after);
        assert!(SystemClock.today() >= before.date());
        assert!(SystemClock.today() <= Local::now().date_naive());
    }
}
