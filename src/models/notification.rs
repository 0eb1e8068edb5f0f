//! Notification model.
//!
//! Notifications are human-readable descriptions of successful changes to
//! the roster, handed to a [`NotificationSink`](crate::store::NotificationSink).

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The kind of event a notification describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    /// A change completed.
    Success,
    /// Something worth knowing, no action needed.
    Info,
    /// Something that may need attention.
    Warning,
    /// Something failed.
    Error,
}

/// A single notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    /// Unique identifier for the notification.
    pub id: Uuid,
    /// The kind of event.
    pub kind: NotificationKind,
    /// Short headline.
    pub title: String,
    /// Longer description.
    pub message: String,
    /// When the event happened.
    pub timestamp: NaiveDateTime,
}

impl Notification {
    /// Creates a notification with a fresh id.
    pub fn new(
        kind: NotificationKind,
        title: impl Into<String>,
        message: impl Into<String>,
        timestamp: NaiveDateTime,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            title: title.into(),
            message: message.into(),
            timestamp,
        }
    }
}
