//! # Error Types
//!
//! Domain-specific error types for wesplit-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  wesplit-core errors (this file)                                       │
//! │  ├── CoreError        - Calculation failures                           │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  Terminal app errors (in app)                                          │
//! │  └── AppError         - What the user sees (code + message)            │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → AppError → Display                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include the offending field and bounds in the message
//! 3. Errors are enum variants, never String

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Calculation errors.
///
/// Within the bounds the input types enforce, the calculator cannot fail.
/// These only surface through the checked entry points that accept raw
/// numbers from a general-purpose caller.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoreError {
    /// A derived amount came out as `inf` or `NaN`.
    #[error("{field} is not a finite number")]
    NonFiniteResult { field: String },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised at the boundary, before any arithmetic runs.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be strictly positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Value must be zero or greater.
    #[error("{field} cannot be negative")]
    MustBeNonNegative { field: String },

    /// Invalid format (e.g. an amount that does not parse).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Value is not in allowed set.
    #[error("{field} must be one of: {allowed:?}")]
    NotAllowed { field: String, allowed: Vec<String> },
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::MustBeNonNegative {
            field: "check amount".to_string(),
        };
        assert_eq!(err.to_string(), "check amount cannot be negative");

        let err = ValidationError::OutOfRange {
            field: "number of people".to_string(),
            min: 2,
            max: 99,
        };
        assert_eq!(err.to_string(), "number of people must be between 2 and 99");

        let err = ValidationError::NotAllowed {
            field: "tip percentage".to_string(),
            allowed: vec!["10".to_string(), "15".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "tip percentage must be one of: [\"10\", \"15\"]"
        );
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::MustBePositive {
            field: "party count".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
        assert_eq!(
            core_err.to_string(),
            "Validation error: party count must be positive"
        );
    }
}
