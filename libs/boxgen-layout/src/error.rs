//! # Specification Errors
//!
//! Error types for box specification validation and layout.

use thiserror::Error;

/// Errors raised while validating or laying out a box specification.
///
/// All variants are detected eagerly, before any script text is produced.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SpecError {
    /// A required collection has no elements.
    #[error("Empty collection: {0}")]
    EmptyCollection(String),

    /// A pocket dimension is zero or negative.
    #[error("Invalid dimension: {0}")]
    InvalidDimension(String),

    /// A box-level setting is out of range.
    #[error("Invalid setting: {0}")]
    InvalidSetting(String),

    /// The settings echo for the script header could not be encoded.
    #[error("Settings encoding failed: {0}")]
    SettingsEncoding(String),
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SpecError::InvalidDimension("rows[0][1].width = -3".to_string());
        assert!(err.to_string().contains("Invalid dimension"));
        assert!(err.to_string().contains("rows[0][1].width"));
    }
}
