//! Error types for the settings crate.
//!
//! This module provides structured error types for display settings,
//! key/value storage backends, and the persistence layer.

use std::io;
use thiserror::Error;

/// Errors that can occur while loading, saving or validating settings.
#[derive(Error, Debug)]
pub enum SettingsError {
    /// A settings value is invalid.
    #[error("Invalid setting '{key}': {reason}")]
    InvalidSetting { key: String, reason: String },

    /// The file extension is neither `.json` nor `.toml`.
    #[error("Unsupported settings format: {0}")]
    UnsupportedFormat(String),

    /// The storage directory could not be found or created.
    #[error("Storage directory error: {0}")]
    StorageDirectory(String),

    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// TOML deserialization error.
    #[error("TOML error: {0}")]
    TomlError(#[from] toml::de::Error),

    /// TOML serialization error.
    #[error("TOML error: {0}")]
    TomlSerializeError(#[from] toml::ser::Error),

    /// A storage backend failed.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Errors raised by a key/value storage backend.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Writing the value would exceed the store's capacity.
    #[error("Storage capacity exceeded writing '{key}': {needed} bytes needed, {available} available")]
    CapacityExceeded {
        key: String,
        needed: usize,
        available: usize,
    },

    /// The key cannot be used by this backend.
    #[error("Invalid storage key: {0}")]
    InvalidKey(String),

    /// I/O error while touching the backing file for `key`.
    #[error("I/O error on '{key}': {source}")]
    Io {
        key: String,
        #[source]
        source: io::Error,
    },
}

impl StorageError {
    /// Whether this error means the store is full.
    pub fn is_capacity_exceeded(&self) -> bool {
        matches!(self, StorageError::CapacityExceeded { .. })
    }
}

/// Result type alias for settings operations.
pub type SettingsResult<T> = Result<T, SettingsError>;

/// Result type alias for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_error_display() {
        let err = SettingsError::InvalidSetting {
            key: "grid_size".to_string(),
            reason: "must be at least 1".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid setting 'grid_size': must be at least 1"
        );

        let err = SettingsError::UnsupportedFormat("yaml".to_string());
        assert_eq!(err.to_string(), "Unsupported settings format: yaml");
    }

    #[test]
    fn test_storage_error_display() {
        let err = StorageError::CapacityExceeded {
            key: "history".to_string(),
            needed: 2048,
            available: 100,
        };
        assert_eq!(
            err.to_string(),
            "Storage capacity exceeded writing 'history': 2048 bytes needed, 100 available"
        );
        assert!(err.is_capacity_exceeded());
        assert!(!StorageError::InvalidKey("../x".to_string()).is_capacity_exceeded());
    }

    #[test]
    fn test_error_conversion() {
        let storage_err = StorageError::InvalidKey("".to_string());
        let settings_err: SettingsError = storage_err.into();
        assert!(matches!(settings_err, SettingsError::Storage(_)));

        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let settings_err: SettingsError = io_err.into();
        assert!(matches!(settings_err, SettingsError::IoError(_)));
    }
}
