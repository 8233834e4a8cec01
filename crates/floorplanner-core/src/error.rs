//! Error handling for Floorplanner
//!
//! Provides the error types shared by every crate in the workspace:
//! - Measurement errors (parsing feet/inches input)
//! - Document errors (malformed floor plan data)
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Measurement error type
///
/// Represents failures to interpret a user-entered length.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MeasurementError {
    /// Input was empty after trimming
    #[error("Empty measurement")]
    Empty,

    /// A numeric component could not be parsed
    #[error("Invalid number '{part}' in measurement '{input}'")]
    InvalidNumber {
        /// The full input string.
        input: String,
        /// The component that failed to parse.
        part: String,
    },

    /// A negative length was given
    #[error("Negative measurement: {input}")]
    Negative {
        /// The full input string.
        input: String,
    },
}

/// Document error type
///
/// Represents structurally invalid floor plan data.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DocumentError {
    /// A dimension is zero, negative, or not finite
    #[error("Invalid dimension for '{field}': {value}")]
    InvalidDimension {
        /// Name of the offending field.
        field: String,
        /// The rejected value.
        value: f64,
    },

    /// Floor plan names must not be blank
    #[error("Floor plan name must not be empty")]
    EmptyName,
}

/// Main error type for Floorplanner
#[derive(Error, Debug)]
pub enum Error {
    /// Measurement error
    #[error(transparent)]
    Measurement(#[from] MeasurementError),

    /// Document error
    #[error(transparent)]
    Document(#[from] DocumentError),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this is a measurement error
    pub fn is_measurement_error(&self) -> bool {
        matches!(self, Error::Measurement(_))
    }

    /// Check if this is a document error
    pub fn is_document_error(&self) -> bool {
        matches!(self, Error::Document(_))
    }
}

/// Result type for Floorplanner operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measurement_error_display() {
        let err = MeasurementError::InvalidNumber {
            input: "1x' 2\"".to_string(),
            part: "1x".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid number '1x' in measurement '1x' 2\"'"
        );
        assert_eq!(MeasurementError::Empty.to_string(), "Empty measurement");
    }

    #[test]
    fn test_document_error_display() {
        let err = DocumentError::InvalidDimension {
            field: "width".to_string(),
            value: -3.0,
        };
        assert_eq!(err.to_string(), "Invalid dimension for 'width': -3");
    }

    #[test]
    fn test_error_conversion() {
        let err: Error = MeasurementError::Empty.into();
        assert!(err.is_measurement_error());
        assert!(!err.is_document_error());

        let err: Error = DocumentError::EmptyName.into();
        assert!(err.is_document_error());

        let err = Error::other("boom");
        assert_eq!(err.to_string(), "boom");
    }
}
