//! Error types for the Labor Cost Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while costing a schedule week.
//! Shift-level problems are recoverable and are downgraded to warnings by
//! the calculation layer; configuration and storage problems are returned
//! to the caller.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the Labor Cost Engine.
///
/// # Example
///
/// ```
/// use labor_cost_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/restaurant.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/restaurant.yaml");
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
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

    /// Shift text could not be interpreted as a `<start>-<end>` range.
    #[error("Malformed shift '{text}': {message}")]
    MalformedShift {
        /// The raw shift text as entered.
        text: String,
        /// A description of what made the text unparseable.
        message: String,
    },

    /// Shift text referenced an employee that is not in the roster.
    #[error("Unknown employee '{employee_id}' referenced on {date}")]
    UnknownEmployee {
        /// The employee id found in the shift text grid.
        employee_id: String,
        /// The date of the orphaned shift.
        date: NaiveDate,
    },

    /// An employee record was invalid or contained inconsistent data.
    #[error("Invalid employee field '{field}': {message}")]
    InvalidEmployee {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// Restaurant settings were invalid.
    #[error("Invalid restaurant setting '{field}': {message}")]
    InvalidSettings {
        /// The setting that was invalid.
        field: String,
        /// A description of what made the setting invalid.
        message: String,
    },

    /// The storage collaborator failed to read or write.
    #[error("Storage error: {message}")]
    StorageError {
        /// A description of the storage failure.
        message: String,
    },

    /// A general calculation error occurred.
    #[error("Calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
        message: String,
    },
}

impl EngineError {
    /// Returns the stable warning/error code for this error.
    pub fn code(&self) -> &'static str {
        match self {
            EngineError::ConfigNotFound { .. } => "CONFIG_NOT_FOUND",
            EngineError::ConfigParseError { .. } => "CONFIG_PARSE_ERROR",
            EngineError::MalformedShift { .. } => "MALFORMED_SHIFT",
            EngineError::UnknownEmployee { .. } => "UNKNOWN_EMPLOYEE",
            EngineError::InvalidEmployee { .. } => "INVALID_EMPLOYEE",
            EngineError::InvalidSettings { .. } => "INVALID_SETTINGS",
            EngineError::StorageError { .. } => "STORAGE_ERROR",
            EngineError::CalculationError { .. } => "CALCULATION_ERROR",
        }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
