//! # Money Module
//!
//! Provides the `Money` type for amounts that are ready to be shown.
//!
//! ## Where Rounding Happens
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  UNROUNDED (f64)                        ROUNDED (Money, minor units)    │
//! │                                                                         │
//! │  check amount ──► split math ──► totals ──► from_major_rounded ──► UI   │
//! │                                                                         │
//! │  The calculator never rounds. Rounding to the currency's smallest      │
//! │  unit happens exactly once, at the display boundary.                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use wesplit_core::money::Money;
//!
//! let share = Money::from_major_rounded(28.75, 2).unwrap();
//! assert_eq!(share.cents(), 2875);
//! ```
//!
//! Turning minor units into text (symbol, decimal places) is up to the
//! front end, which knows the configured currency.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};

/// Largest number of fractional digits a currency may use.
pub const MAX_CURRENCY_DECIMALS: u8 = 4;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (cents for USD).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from minor units.
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Rounds an unrounded major-unit amount to minor units.
    ///
    /// `decimals` is the number of fractional digits of the currency
    /// (2 for USD, 0 for JPY). Halves round away from zero.
    ///
    /// ## Example
    /// ```rust
    /// use wesplit_core::money::Money;
    ///
    /// assert_eq!(Money::from_major_rounded(57.5, 2).unwrap().cents(), 5750);
    /// assert_eq!(Money::from_major_rounded(33.333_333, 2).unwrap().cents(), 3333);
    /// assert_eq!(Money::from_major_rounded(1234.5, 0).unwrap().cents(), 1235);
    /// assert!(Money::from_major_rounded(f64::INFINITY, 2).is_err());
    /// ```
    pub fn from_major_rounded(amount: f64, decimals: u8) -> CoreResult<Self> {
        let scale = 10_f64.powi(i32::from(decimals.min(MAX_CURRENCY_DECIMALS)));
        let minor = (amount * scale).round();

        if !minor.is_finite() || minor.abs() >= i64::MAX as f64 {
            return Err(CoreError::NonFiniteResult {
                field: "amount".to_string(),
            });
        }

        Ok(Money(minor as i64))
    }

    /// Returns the value in minor units.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
