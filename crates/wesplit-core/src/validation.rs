//! # Validation Module
//!
//! Input validation for the bill splitter.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Front end                                                    │
//! │  ├── Raw text → number (parse_check_amount)                            │
//! │  └── Pickers only offer valid party sizes and tips                     │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Domain types (types.rs)                                      │
//! │  └── CheckAmount / PartySize / TipPercentage refuse bad values         │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Checked calculator (split.rs)                                │
//! │  └── THIS MODULE: raw numbers from general-purpose callers             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::{ValidationError, ValidationResult};

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a check amount.
///
/// ## Rules
/// - Must be a finite number
/// - Must be non-negative (zero is the empty form)
///
/// ## Example
/// ```rust
/// use wesplit_core::validation::validate_check_amount;
///
/// assert!(validate_check_amount(0.0).is_ok());
/// assert!(validate_check_amount(57.5).is_ok());
/// assert!(validate_check_amount(-1.0).is_err());
/// ```
pub fn validate_check_amount(amount: f64) -> ValidationResult<()> {
    validate_non_negative_finite("check amount", amount)
}

/// Validates a tip percentage given as a raw number.
///
/// Any non-negative finite percentage is accepted here; the fixed set of
/// choices is enforced by `TipPercentage`.
pub fn validate_tip_percentage(percent: f64) -> ValidationResult<()> {
    validate_non_negative_finite("tip percentage", percent)
}

/// Validates a party count for the calculator.
///
/// ## Rules
/// - Must be at least 1 (dividing by zero people is meaningless)
pub fn validate_party_count(count: u32) -> ValidationResult<()> {
    if count == 0 {
        return Err(ValidationError::MustBePositive {
            field: "party count".to_string(),
        });
    }

    Ok(())
}

fn validate_non_negative_finite(field: &str, value: f64) -> ValidationResult<()> {
    if !value.is_finite() {
        return Err(ValidationError::InvalidFormat {
            field: field.to_string(),
            reason: "must be a finite number".to_string(),
        });
    }

    if value < 0.0 {
        return Err(ValidationError::MustBeNonNegative {
            field: field.to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Text Input
// =============================================================================

/// Parses what the user typed into the amount field.
///
/// ## Rules
/// - Surrounding whitespace is ignored
/// - One leading currency symbol (`$`, `€`, `£`, `¥`) is ignored
/// - `,` thousands separators are ignored
/// - Empty input is the empty check (0)
///
/// ## Example
/// ```rust
/// use wesplit_core::validation::parse_check_amount;
///
/// assert_eq!(parse_check_amount(" $1,234.50 ").unwrap(), 1234.5);
/// assert_eq!(parse_check_amount("").unwrap(), 0.0);
/// assert!(parse_check_amount("twelve").is_err());
/// assert!(parse_check_amount("-3").is_err());
/// ```
pub fn parse_check_amount(input: &str) -> ValidationResult<f64> {
    let trimmed = input.trim();
    let unsigned = trimmed
        .strip_prefix(&['$', '€', '£', '¥'][..])
        .unwrap_or(trimmed)
        .trim_start();

    if unsigned.is_empty() {
        return Ok(0.0);
    }

    let digits: String = unsigned.chars().filter(|c| *c != ',').collect();
    let amount: f64 = digits
        .parse()
        .map_err(|_| ValidationError::InvalidFormat {
            field: "check amount".to_string(),
            reason: format!("'{}' is not a number", trimmed),
        })?;

    validate_check_amount(amount)?;
    Ok(amount)
}

// =============================================================================
// Unit Tests
// =============================================================================
