//! Attendance and payroll core for a poultry farm administration app.
//!
//! This crate tracks daily check-in/check-out attendance for farm staff and
//! estimates monthly pay from a base salary, a contractual working day and an
//! overtime multiplier. Storage, notifications and the clock are supplied by
//! the embedding application through small traits.

#![warn(missing_docs)]

pub mod calculation;
pub mod clock;
pub mod config;
pub mod directory;
pub mod error;
pub mod models;
pub mod store;
