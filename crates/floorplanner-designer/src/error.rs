//! Error types for the designer crate.
//!
//! Resolution misses (an id that no longer names an item) are not errors;
//! item operations report them by returning `false` or `None`. The errors
//! here cover floor plan collection management and invalid input.

use floorplanner_core::error::DocumentError;
use floorplanner_settings::SettingsError;
use thiserror::Error;

/// Errors that can occur while editing a floor plan.
#[derive(Error, Debug)]
pub enum DesignerError {
    /// No floor plan with this name exists.
    #[error("Floor plan not found: {0}")]
    FloorPlanNotFound(String),

    /// Another floor plan already uses this name.
    #[error("Floor plan already exists: {0}")]
    FloorPlanExists(String),

    /// The furniture template id is not in the catalog.
    #[error("Unknown furniture template: {0}")]
    UnknownTemplate(String),

    /// The furniture id is not in the inventory.
    #[error("Unknown furniture: {0}")]
    UnknownFurniture(String),

    /// The document data is invalid.
    #[error(transparent)]
    Document(#[from] DocumentError),

    /// A display setting is invalid.
    #[error(transparent)]
    Settings(#[from] SettingsError),
}

/// Result type alias for designer operations.
pub type DesignerResult<T> = Result<T, DesignerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_designer_error_display() {
        let err = DesignerError::FloorPlanNotFound("Cabin".to_string());
        assert_eq!(err.to_string(), "Floor plan not found: Cabin");

        let err = DesignerError::UnknownTemplate("hammock".to_string());
        assert_eq!(err.to_string(), "Unknown furniture template: hammock");
    }

    #[test]
    fn test_error_conversion() {
        let err: DesignerError = DocumentError::EmptyName.into();
        assert!(matches!(err, DesignerError::Document(_)));
        assert_eq!(err.to_string(), "Floor plan name must not be empty");
    }
}
