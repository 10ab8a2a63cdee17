//! # Domain Types
//!
//! The three user inputs of a split and what is derived from them.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  INPUTS (owned by the front end, replaced on every change)             │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │  CheckAmount    │   │   PartySize     │   │ TipPercentage   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  f64, >= 0      │   │  u32, 2..=99    │   │  one of         │       │
//! │  │  default 0.00   │   │  picker idx + 2 │   │  10 15 20 25 30 0│      │
//! │  │                 │   │  default 2      │   │  default 20     │       │
//! │  └────────┬────────┘   └────────┬────────┘   └────────┬────────┘       │
//! │           └─────────────────────┼─────────────────────┘                 │
//! │                                 ▼                                       │
//! │                     ┌──────────────────────┐                            │
//! │  OUTPUT             │    DerivedTotals     │  computed, never stored    │
//! │  (never mutated)    │  tip / total / share │                            │
//! │                     └──────────────────────┘                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::error::{ValidationError, ValidationResult};
use crate::validation::validate_check_amount;

// =============================================================================
// Check Amount
// =============================================================================

/// The amount on the check, in major currency units, before tip.
///
/// Always finite, non-negative and at most [`CheckAmount::MAX`]. Serialized
/// as a bare number.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize, TS)]
#[serde(try_from = "f64", into = "f64")]
#[ts(export)]
pub struct CheckAmount(f64);

impl CheckAmount {
    /// Largest accepted check: one trillion.
    ///
    /// With a 30% tip and four currency decimals every derived total still
    /// fits in [`Money`](crate::money::Money).
    pub const MAX: f64 = 1_000_000_000_000.0;

    /// Creates a check amount, rejecting negative, non-finite and
    /// oversized values.
    ///
    /// ## Example
    /// ```rust
    /// use wesplit_core::types::CheckAmount;
    ///
    /// assert_eq!(CheckAmount::new(50.0).unwrap().value(), 50.0);
    /// assert!(CheckAmount::new(-0.01).is_err());
    /// assert!(CheckAmount::new(f64::NAN).is_err());
    /// assert!(CheckAmount::new(1e17).is_err());
    /// ```
    pub fn new(amount: f64) -> ValidationResult<Self> {
        validate_check_amount(amount)?;
        if amount > Self::MAX {
            return Err(ValidationError::OutOfRange {
                field: "check amount".to_string(),
                min: 0,
                max: Self::MAX as i64,
            });
        }
        // Normalize -0.0 so it never leaks into display
        Ok(CheckAmount(amount + 0.0))
    }

    /// The empty check (the default before anything is typed).
    #[inline]
    pub const fn zero() -> Self {
        CheckAmount(0.0)
    }

    /// Returns the amount in major units.
    #[inline]
    pub const fn value(&self) -> f64 {
        self.0
    }
}

impl Default for CheckAmount {
    fn default() -> Self {
        CheckAmount::zero()
    }
}

impl TryFrom<f64> for CheckAmount {
    type Error = ValidationError;

    fn try_from(amount: f64) -> Result<Self, Self::Error> {
        CheckAmount::new(amount)
    }
}

impl From<CheckAmount> for f64 {
    fn from(amount: CheckAmount) -> Self {
        amount.0
    }
}

// =============================================================================
// Party Size
// =============================================================================

/// Number of people splitting the check.
///
/// ## Picker Offset
/// The front end selects from an enumerated list whose first entry is
/// 2 people, so a raw picker index maps to `index + 2`. A party of zero
/// or one is not representable.
///
/// ```text
/// picker index:   0   1   2  ...  97
/// party size:     2   3   4  ...  99
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(try_from = "u32", into = "u32")]
#[ts(export)]
pub struct PartySize(u32);

impl PartySize {
    /// Smallest selectable party.
    pub const MIN: u32 = 2;

    /// Largest selectable party.
    pub const MAX: u32 = 99;

    /// Offset between a raw picker index and the party size it selects.
    pub const PICKER_OFFSET: u32 = Self::MIN;

    /// Creates a party size from a head count in `MIN..=MAX`.
    pub fn new(count: u32) -> ValidationResult<Self> {
        if !(Self::MIN..=Self::MAX).contains(&count) {
            return Err(ValidationError::OutOfRange {
                field: "number of people".to_string(),
                min: i64::from(Self::MIN),
                max: i64::from(Self::MAX),
            });
        }

        Ok(PartySize(count))
    }

    /// Creates a party size from a raw picker index.
    ///
    /// ## Example
    /// ```rust
    /// use wesplit_core::types::PartySize;
    ///
    /// assert_eq!(PartySize::from_picker_index(0).unwrap().count(), 2);
    /// assert_eq!(PartySize::from_picker_index(97).unwrap().count(), 99);
    /// assert!(PartySize::from_picker_index(98).is_err());
    /// ```
    pub fn from_picker_index(index: usize) -> ValidationResult<Self> {
        let max_index = (Self::MAX - Self::PICKER_OFFSET) as usize;
        if index > max_index {
            return Err(ValidationError::OutOfRange {
                field: "party picker index".to_string(),
                min: 0,
                max: max_index as i64,
            });
        }

        Ok(PartySize(index as u32 + Self::PICKER_OFFSET))
    }

    /// Returns the head count.
    #[inline]
    pub const fn count(&self) -> u32 {
        self.0
    }

    /// Returns the picker index that selects this party size.
    #[inline]
    pub const fn picker_index(&self) -> usize {
        (self.0 - Self::PICKER_OFFSET) as usize
    }
}

impl Default for PartySize {
    fn default() -> Self {
        PartySize(Self::MIN)
    }
}

impl TryFrom<u32> for PartySize {
    type Error = ValidationError;

    fn try_from(count: u32) -> Result<Self, Self::Error> {
        PartySize::new(count)
    }
}

impl From<PartySize> for u32 {
    fn from(party: PartySize) -> Self {
        party.0
    }
}

impl fmt::Display for PartySize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} people", self.0)
    }
}

// =============================================================================
// Tip Percentage
// =============================================================================

/// Tip as a whole percentage, restricted to a fixed set of choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(try_from = "u32", into = "u32")]
#[ts(export)]
pub struct TipPercentage(u32);

impl TipPercentage {
    /// Every selectable tip, in the order the picker lists them.
    pub const ALL: [TipPercentage; 6] = [
        TipPercentage(10),
        TipPercentage(15),
        TipPercentage(20),
        TipPercentage(25),
        TipPercentage(30),
        TipPercentage(0),
    ];

    /// Pre-selected tip.
    pub const DEFAULT: TipPercentage = TipPercentage(20);

    /// Creates a tip percentage if `percent` is one of [`TipPercentage::ALL`].
    ///
    /// ## Example
    /// ```rust
    /// use wesplit_core::types::TipPercentage;
    ///
    /// assert_eq!(TipPercentage::new(15).unwrap().percent(), 15);
    /// assert!(TipPercentage::new(18).is_err());
    /// ```
    pub fn new(percent: u32) -> ValidationResult<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|tip| tip.0 == percent)
            .ok_or_else(|| ValidationError::NotAllowed {
                field: "tip percentage".to_string(),
                allowed: Self::ALL.iter().map(|tip| tip.0.to_string()).collect(),
            })
    }

    /// Returns the whole percentage (20 = 20%).
    #[inline]
    pub const fn percent(&self) -> u32 {
        self.0
    }
}

impl Default for TipPercentage {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<u32> for TipPercentage {
    type Error = ValidationError;

    fn try_from(percent: u32) -> Result<Self, Self::Error> {
        TipPercentage::new(percent)
    }
}

impl From<TipPercentage> for u32 {
    fn from(tip: TipPercentage) -> Self {
        tip.0
    }
}

impl fmt::Display for TipPercentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

// =============================================================================
// Split Inputs
// =============================================================================

/// The three values a split is computed from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct SplitInputs {
    pub check_amount: CheckAmount,
    pub party_size: PartySize,
    pub tip_percentage: TipPercentage,
}

// =============================================================================
// Derived Totals
// =============================================================================

/// Everything derived from [`SplitInputs`], unrounded.
///
/// There is no constructor outside the calculator; a value of this type
/// always matches the inputs it was computed from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct DerivedTotals {
    /// Check amount × tip / 100.
    pub tip_amount: f64,

    /// Check amount plus tip.
    pub grand_total: f64,

    /// Grand total divided evenly by the party size.
    pub amount_per_person: f64,
}

// =============================================================================
// Unit Tests
// =============================================================================
