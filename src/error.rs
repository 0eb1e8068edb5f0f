//! Error types for the payroll core.
//!
//! Payroll and attendance calculations are total and never fail. Errors only
//! arise at the edges: loading configuration, looking up employees in the
//! roster, parsing user-supplied times and talking to the employee store.

use thiserror::Error;

/// The main error type for the payroll core.
///
/// # Example
///
/// ```
/// use poultry_payroll::error::PayrollError;
///
/// let error = PayrollError::EmployeeNotFound {
///     id: "emp_404".to_string(),
/// };
/// assert_eq!(error.to_string(), "Employee not found: emp_404");
/// ```
#[derive(Debug, Error)]
pub enum PayrollError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// No employee with the given id exists in the roster.
    #[error("Employee not found: {id}")]
    EmployeeNotFound {
        /// The id that was looked up.
        id: String,
    },

    /// An employee record was rejected before being written to the store.
    #[error("Invalid employee field '{field}': {message}")]
    InvalidEmployee {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// A time of day could not be parsed.
    #[error("Invalid time of day '{value}': expected HH:MM")]
    InvalidTime {
        /// The text that failed to parse.
        value: String,
    },

    /// The employee store could not be read or written.
    #[error("Employee store unavailable: {message}")]
    StoreUnavailable {
        /// A description of the store failure.
        message: String,
    },
}

/// A type alias for Results that return PayrollError.
pub type PayrollResult<T> = Result<T, PayrollError>;
