//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading farm
//! configuration from YAML files.

use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::error::{PayrollError, PayrollResult};
use crate::models::Employee;
use crate::store::{InMemoryEmployeeStore, NotificationLog};

use super::types::{FarmConfig, FarmMetadata, NotificationSettings, RosterConfig};

/// Loads and provides access to farm configuration.
///
/// # Directory Structure
///
/// ```text
/// config/sunrise-farm/
/// ├── farm.yaml    # Farm metadata and notification settings
/// └── roster.yaml  # Employees the store starts with
/// ```
///
/// # Example
///
/// ```no_run
/// use poultry_payroll::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/sunrise-farm").unwrap();
/// let store = loader.seed_store();
/// println!("{} staff on {}", loader.roster().len(), loader.farm().name);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    farm: FarmConfig,
    roster: RosterConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/sunrise-farm")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Either file is missing
    /// - Either file contains invalid YAML
    /// - A required field is missing from the configuration
    pub fn load<P: AsRef<Path>>(path: P) -> PayrollResult<Self> {
        let path = path.as_ref();

        let farm = Self::load_yaml::<FarmConfig>(&path.join("farm.yaml"))?;
        let roster = Self::load_yaml::<RosterConfig>(&path.join("roster.yaml"))?;

        info!(
            farm = %farm.farm.name,
            employees = roster.employees.len(),
            "Loaded farm configuration"
        );

        Ok(Self { farm, roster })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> PayrollResult<T> {
        let path_str = path.display().to_string();
        debug!(path = %path_str, "Reading configuration file");

        let content = fs::read_to_string(path).map_err(|_| PayrollError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| PayrollError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the farm metadata.
    pub fn farm(&self) -> &FarmMetadata {
        &self.farm.farm
    }

    /// Returns the notification settings.
    pub fn notifications(&self) -> &NotificationSettings {
        &self.farm.notifications
    }

    /// Returns the seed roster.
    pub fn roster(&self) -> &[Employee] {
        &self.roster.employees
    }

    /// Builds an in-memory employee store holding the seed roster.
    pub fn seed_store(&self) -> InMemoryEmployeeStore {
        InMemoryEmployeeStore::new(self.roster.employees.clone())
    }

    /// Builds a notification log sized from the settings.
    pub fn notification_log(&self) -> NotificationLog {
        NotificationLog::with_capacity(self.farm.notifications.capacity)
    }
}
