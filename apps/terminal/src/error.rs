//! # App Error Type
//!
//! Unified error type for the terminal front end.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in WeSplit                                │
//! │                                                                         │
//! │  input line: "tip 17"                                                   │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  commands::parse                                                 │  │
//! │  │  Result<Command, AppError>                                       │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Unknown verb? ───── ErrorCode::UnknownCommand ──┐              │  │
//! │  │         │                                         │              │  │
//! │  │         ▼                                         ▼              │  │
//! │  │  Bad value? ──── ValidationError ──────────── AppError ──► shown │  │
//! │  │         │                                     (session keeps     │  │
//! │  │         ▼                                      its old inputs)   │  │
//! │  │  Success ──► SplitSession::apply ──► display                     │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  Recoverable errors are shown and the loop carries on. I/O and config  │
//! │  errors end the program with a non-zero exit.                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use thiserror::Error;
use wesplit_core::{CoreError, ValidationError};

/// Convenience alias for app results.
pub type AppResult<T> = Result<T, AppError>;

/// Error surfaced to the user.
///
/// ## Serialization
/// In JSON output mode this is written as:
/// ```json
/// {
///   "code": "VALIDATION_ERROR",
///   "message": "tip percentage must be one of: [\"10\", ...]"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Error)]
#[serde(rename_all = "camelCase")]
#[error("[{code:?}] {message}")]
pub struct AppError {
    /// Machine-readable error code
    pub code: ErrorCode,

    /// Human-readable error message
    pub message: String,
}

/// Error codes for user-facing errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Input value rejected
    ValidationError,

    /// Command verb not recognized, or arguments missing
    UnknownCommand,

    /// Config file unreadable or invalid
    ConfigError,

    /// Reading input or writing output failed
    IoError,

    /// Calculation produced an unusable result
    Internal,
}

impl AppError {
    /// Creates a new app error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        AppError {
            code,
            message: message.into(),
        }
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        AppError::new(ErrorCode::ValidationError, message)
    }

    /// Creates an unknown-command error.
    pub fn unknown_command(message: impl Into<String>) -> Self {
        AppError::new(ErrorCode::UnknownCommand, message)
    }

    /// Creates a config error.
    pub fn config(message: impl Into<String>) -> Self {
        AppError::new(ErrorCode::ConfigError, message)
    }

    /// Whether the session can carry on after this error.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self.code,
            ErrorCode::ValidationError | ErrorCode::UnknownCommand | ErrorCode::Internal
        )
    }
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::validation(err.to_string())
    }
}

impl From<CoreError> for AppError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Validation(e) => e.into(),
            CoreError::NonFiniteResult { .. } => {
                tracing::error!("Calculation failed: {}", err);
                AppError::new(ErrorCode::Internal, err.to_string())
            }
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::new(ErrorCode::IoError, err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::new(ErrorCode::IoError, format!("JSON output failed: {}", err))
    }
}

impl From<toml::de::Error> for AppError {
    fn from(err: toml::de::Error) -> Self {
        AppError::config(format!("invalid config file: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_maps_to_code() {
        let err: AppError = ValidationError::MustBePositive {
            field: "party count".to_string(),
        }
        .into();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.message, "party count must be positive");
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_core_error_unwraps_validation() {
        let core = CoreError::Validation(ValidationError::MustBeNonNegative {
            field: "check amount".to_string(),
        });
        let err: AppError = core.into();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.message, "check amount cannot be negative");
    }

    #[test]
    fn test_calculation_failure_is_recoverable() {
        let err: AppError = CoreError::NonFiniteResult {
            field: "amount".to_string(),
        }
        .into();
        assert_eq!(err.code, ErrorCode::Internal);
        assert!(err.is_recoverable());
        assert!(!AppError::config("bad").is_recoverable());
    }

    #[test]
    fn test_io_error_is_fatal() {
        let err: AppError = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "gone").into();
        assert_eq!(err.code, ErrorCode::IoError);
        assert!(!err.is_recoverable());
    }

    #[test]
    fn test_serialized_shape() {
        let err = AppError::unknown_command("unknown command 'split'");
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], "UNKNOWN_COMMAND");
        assert_eq!(json["message"], "unknown command 'split'");
    }

    #[test]
    fn test_display() {
        let err = AppError::config("bad");
        assert_eq!(err.to_string(), "[ConfigError] bad");
    }
}
