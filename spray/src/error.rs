//! Error types for the spray library.
//!
//! Indexing itself never fails: absent or unrooted nodes are reported through
//! return values. This module covers everything around the indexer, such as
//! configuration loading, scenario documents and report serialization, using
//! `thiserror` for ergonomic error handling.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a spray error.
///
/// # Examples
///
/// ```
/// use spray::{Error, Result};
///
/// fn example_operation() -> Result<String> {
///     Ok("body/div".to_string())
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the spray library.
#[derive(Debug, Error)]
pub enum Error {
    /// A configuration or scenario file could not be read.
    #[error("invalid path {}: {reason}", path.display())]
    InvalidPath {
        /// The offending path.
        path: PathBuf,
        /// The reason the path could not be used.
        reason: String,
    },

    /// A YAML document could not be parsed or produced.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// A JSON document could not be produced.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// A scenario document is structurally invalid.
    #[error("invalid scenario: {details}")]
    Scenario {
        /// Details about the problem.
        details: String,
    },
}

impl Error {
    /// Check if error was raised by configuration validation.
    ///
    /// # Examples
    ///
    /// ```
    /// use spray::Error;
    ///
    /// let err = Error::Validation {
    ///     field: "separator".to_string(),
    ///     message: "Cannot be empty".to_string(),
    /// };
    /// assert!(err.is_validation());
    /// ```
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }
}
