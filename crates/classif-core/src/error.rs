//! # Validation Errors
//!
//! Structured errors for constructing core domain values. All errors use
//! `thiserror` for derive-based `Display` and `Error` implementations.

use thiserror::Error;

/// Errors raised when constructing core domain values.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// Software name was empty or whitespace-only.
    #[error("software name must not be empty")]
    EmptySoftwareName,

    /// Certification level outside the closed 1..=3 set.
    #[error("invalid certification level: expected 1, 2, or 3, got {0}")]
    InvalidCertificationLevel(u8),

    /// Field keyword not in the recognized catalogue-field set.
    #[error("unknown catalogue field: {0}")]
    UnknownField(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_name_display() {
        let err = ValidationError::EmptySoftwareName;
        assert!(format!("{err}").contains("must not be empty"));
    }

    #[test]
    fn invalid_level_display_includes_value() {
        let err = ValidationError::InvalidCertificationLevel(7);
        let msg = format!("{err}");
        assert!(msg.contains("1, 2, or 3"));
        assert!(msg.contains('7'));
    }

    #[test]
    fn unknown_field_display_includes_keyword() {
        let err = ValidationError::UnknownField("hosting".to_string());
        assert!(format!("{err}").contains("hosting"));
    }
}
