//! Boundaries to the outside world: the employee store and the notification sink.
//!
//! The roster is always read and written as a whole collection. Notifications
//! are fire-and-forget.

mod notifications;
mod repository;

pub use notifications::{NotificationLog, NotificationSink, TracingNotificationSink};
pub use repository::{EmployeeRepository, InMemoryEmployeeStore};
