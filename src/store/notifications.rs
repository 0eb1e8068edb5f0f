//! Notification sinks.

use std::collections::VecDeque;
use std::sync::{Mutex, PoisonError};

use tracing::info;

use crate::models::Notification;

/// Receives notifications about completed changes.
pub trait NotificationSink {
    /// Delivers one notification. Nothing is returned to the caller.
    fn notify(&self, notification: Notification);
}

/// Keeps the most recent notifications in memory, newest first.
///
/// # Example
///
/// ```
/// use poultry_payroll::models::{Notification, NotificationKind};
/// use poultry_payroll::store::{NotificationLog, NotificationSink};
/// use chrono::NaiveDate;
///
/// let log = NotificationLog::with_capacity(2);
/// let at = NaiveDate::from_ymd_opt(2026, 10, 5).unwrap().and_hms_opt(8, 0, 0).unwrap();
/// for title in ["one", "two", "three"] {
///     log.notify(Notification::new(NotificationKind::Info, title, "", at));
/// }
///
/// let titles: Vec<String> = log.recent().into_iter().map(|n| n.title).collect();
/// assert_eq!(titles, vec!["three", "two"]);
/// ```
#[derive(Debug)]
pub struct NotificationLog {
    capacity: usize,
    entries: Mutex<VecDeque<Notification>>,
}

impl NotificationLog {
    /// Default number of notifications kept.
    pub const DEFAULT_CAPACITY: usize = 50;

    /// Creates a log keeping at most `capacity` notifications.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            entries: Mutex::new(VecDeque::with_capacity(capacity)),
        }
    }

    /// Returns the kept notifications, newest first.
    pub fn recent(&self) -> Vec<Notification> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .cloned()
            .collect()
    }

    /// Returns the number of kept notifications.
    pub fn len(&self) -> usize {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    /// Returns true if nothing has been kept.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drops every kept notification.
    pub fn clear(&self) {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner).clear();
    }
}

impl Default for NotificationLog {
    fn default() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }
}

impl NotificationSink for NotificationLog {
    fn notify(&self, notification: Notification) {
        if self.capacity == 0 {
            return;
        }
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries.push_front(notification);
        entries.truncate(self.capacity);
    }
}

/// Forwards notifications to `tracing` as info events.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotificationSink;

impl NotificationSink for TracingNotificationSink {
    fn notify(&self, notification: Notification) {
        info!(
            notification_id = %notification.id,
            kind = ?notification.kind,
            timestamp = %notification.timestamp,
            title = %notification.title,
            "{}",
            notification.message
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NotificationKind;
    use chrono::{NaiveDate, NaiveDateTime};

    fn at() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, 5)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap()
    }

    fn note(title: &str) -> Notification {
        Notification::new(NotificationKind::Success, title, "done", at())
    }

    #[test]
    fn test_log_keeps_newest_first() {
        let log = NotificationLog::default();
        log.notify(note("first"));
        log.notify(note("second"));

        let titles: Vec<String> = log.recent().into_iter().map(|n| n.title).collect();
        assert_eq!(titles, vec!["second", "first"]);
    }

    #[test]
    fn test_log_drops_oldest_beyond_capacity() {
        let log = NotificationLog::with_capacity(3);
        for i in 0..5 {
            log.notify(note(&format!("n{i}")));
        }

        assert_eq!(log.len(), 3);
        let titles: Vec<String> = log.recent().into_iter().map(|n| n.title).collect();
        assert_eq!(titles, vec!["n4", "n3", "n2"]);
    }

    #[test]
    fn test_zero_capacity_keeps_nothing() {
        let log = NotificationLog::with_capacity(0);
        log.notify(note("ignored"));
        assert!(log.is_empty());
    }

    #[test]
    fn test_clear() {
        let log = NotificationLog::default();
        log.notify(note("first"));
        log.clear();
        assert!(log.is_empty());
    }

    #[test]
    fn test_default_capacity() {
        assert_eq!(NotificationLog::DEFAULT_CAPACITY, 50);
    }

    #[derive(Clone, Default)]
    struct CapturedOutput(std::sync::Arc<Mutex<Vec<u8>>>);

    impl std::io::Write for CapturedOutput {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl<'a> tracing_subscriber::fmt::MakeWriter<'a> for CapturedOutput {
        type Writer = CapturedOutput;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    #[test]
    fn test_tracing_sink_emits_info_event() {
        let output = CapturedOutput::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(output.clone())
            .with_ansi(false)
            .finish();

        let notification = Notification::new(
            NotificationKind::Success,
            "Checked in",
            "Amina Yusuf checked in at 08:00",
            at(),
        );
        let id = notification.id;
        tracing::subscriber::with_default(subscriber, || {
            TracingNotificationSink.notify(notification);
        });

        let logged = String::from_utf8(output.0.lock().unwrap().clone()).unwrap();
        assert!(logged.contains("INFO"));
        assert!(logged.contains("Amina Yusuf checked in at 08:00"));
        assert!(logged.contains("title=Checked in"));
        assert!(logged.contains(&id.to_string()));
        assert!(logged.contains("kind=Success"));
    }
}
