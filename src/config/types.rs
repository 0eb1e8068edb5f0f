//! Configuration types for a farm installation.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use serde::Deserialize;

use crate::models::Employee;
use crate::store::NotificationLog;

/// Identifying information about the farm.
#[derive(Debug, Clone, Deserialize)]
pub struct FarmMetadata {
    /// The farm's name.
    pub name: String,
    /// Where the farm is.
    #[serde(default)]
    pub location: Option<String>,
    /// ISO currency code salaries are paid in.
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_currency() -> String {
    "USD".to_string()
}

/// Notification settings.
#[derive(Debug, Clone, Deserialize)]
pub struct NotificationSettings {
    /// How many recent notifications to keep.
    #[serde(default = "default_capacity")]
    pub capacity: usize,
}

fn default_capacity() -> usize {
    NotificationLog::DEFAULT_CAPACITY
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            capacity: default_capacity(),
        }
    }
}

/// The contents of `farm.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct FarmConfig {
    /// Farm metadata.
    pub farm: FarmMetadata,
    /// Notification settings.
    #[serde(default)]
    pub notifications: NotificationSettings,
}

/// The contents of `roster.yaml`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RosterConfig {
    /// The employees the store starts with.
    #[serde(default)]
    pub employees: Vec<Employee>,
}
