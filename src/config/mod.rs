//! Configuration loading for a farm installation.
//!
//! This module loads the farm's metadata, notification settings and seed
//! roster from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use poultry_payroll::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/sunrise-farm").unwrap();
//! println!("Loaded farm: {}", config.farm().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{FarmConfig, FarmMetadata, NotificationSettings, RosterConfig};
