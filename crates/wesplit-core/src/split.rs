//! # Split Module
//!
//! The bill-splitting calculator.
//!
//! ## Formula
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   tip          = check_amount × tip_percentage / 100                    │
//! │   grand_total  = check_amount + tip                                     │
//! │   per_person   = grand_total / party_count                              │
//! │                                                                         │
//! │   Example: $50.00, 15% tip, 2 people                                   │
//! │     tip = $7.50   grand_total = $57.50   per_person = $28.75           │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Nothing here rounds. Amounts stay `f64` until the display turns them
//! into [`Money`](crate::money::Money).
//!
//! ## Two Entry Points
//! - The plain functions (`compute_*`) are total over their documented
//!   domain and never fail. Callers guarantee `party_count >= 1`;
//!   a zero party yields `inf` (or `NaN` for an empty check).
//! - [`try_compute_per_person_amount`] validates raw numbers first and
//!   reports bad input as a [`CoreError`].

use crate::error::{CoreError, CoreResult};
use crate::types::{DerivedTotals, SplitInputs};
use crate::validation::{validate_check_amount, validate_party_count, validate_tip_percentage};

// =============================================================================
// Plain Calculator
// =============================================================================

/// Tip owed on the check.
#[inline]
pub fn compute_tip_amount(check_amount: f64, tip_percentage: f64) -> f64 {
    check_amount * tip_percentage / 100.0
}

/// Check amount plus tip.
///
/// ## Example
/// ```rust
/// use wesplit_core::split::compute_grand_total;
///
/// assert_eq!(compute_grand_total(100.0, 20.0), 120.0);
/// assert_eq!(compute_grand_total(42.0, 0.0), 42.0);
/// ```
#[inline]
pub fn compute_grand_total(check_amount: f64, tip_percentage: f64) -> f64 {
    check_amount + compute_tip_amount(check_amount, tip_percentage)
}

/// Grand total divided evenly between `party_count` people.
///
/// ## Example
/// ```rust
/// use wesplit_core::split::compute_per_person_amount;
///
/// assert_eq!(compute_per_person_amount(120.0, 0.0, 4), 30.0);
/// assert_eq!(compute_per_person_amount(50.0, 15.0, 2), 28.75);
/// ```
#[inline]
pub fn compute_per_person_amount(check_amount: f64, tip_percentage: f64, party_count: u32) -> f64 {
    compute_grand_total(check_amount, tip_percentage) / f64::from(party_count)
}

// =============================================================================
// Checked Calculator
// =============================================================================

/// Per-person amount for raw, unvalidated numbers.
///
/// ## Rejects
/// - Negative or non-finite check amounts and tips
/// - A party count of zero
/// - Inputs so large the result overflows to infinity
///
/// ## Example
/// ```rust
/// use wesplit_core::split::try_compute_per_person_amount;
///
/// assert_eq!(try_compute_per_person_amount(120.0, 0.0, 4).unwrap(), 30.0);
/// assert!(try_compute_per_person_amount(120.0, 0.0, 0).is_err());
/// assert!(try_compute_per_person_amount(-1.0, 10.0, 2).is_err());
/// ```
pub fn try_compute_per_person_amount(
    check_amount: f64,
    tip_percentage: f64,
    party_count: u32,
) -> CoreResult<f64> {
    validate_check_amount(check_amount)?;
    validate_tip_percentage(tip_percentage)?;
    validate_party_count(party_count)?;

    let per_person = compute_per_person_amount(check_amount, tip_percentage, party_count);
    if !per_person.is_finite() {
        return Err(CoreError::NonFiniteResult {
            field: "amount per person".to_string(),
        });
    }

    Ok(per_person)
}

// =============================================================================
// Typed Calculator
// =============================================================================

/// Derives every total from validated inputs.
///
/// The input types already guarantee a non-negative finite amount, a tip
/// from the allowed set and at least two people, so this cannot fail.
///
/// ## Example
/// ```rust
/// use wesplit_core::split::split;
/// use wesplit_core::types::{CheckAmount, PartySize, SplitInputs, TipPercentage};
///
/// let inputs = SplitInputs {
///     check_amount: CheckAmount::new(50.0).unwrap(),
///     party_size: PartySize::from_picker_index(0).unwrap(),
///     tip_percentage: TipPercentage::new(15).unwrap(),
/// };
///
/// let totals = split(&inputs);
/// assert_eq!(totals.grand_total, 57.5);
/// assert_eq!(totals.amount_per_person, 28.75);
/// ```
pub fn split(inputs: &SplitInputs) -> DerivedTotals {
    let amount = inputs.check_amount.value();
    let tip = f64::from(inputs.tip_percentage.percent());
    let party = inputs.party_size.count();

    DerivedTotals {
        tip_amount: compute_tip_amount(amount, tip),
        grand_total: compute_grand_total(amount, tip),
        amount_per_person: compute_per_person_amount(amount, tip, party),
    }
}

impl SplitInputs {
    /// Recomputes the totals for these inputs.
    #[inline]
    pub fn totals(&self) -> DerivedTotals {
        split(self)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CheckAmount, PartySize, TipPercentage};

    fn inputs(amount: f64, party: u32, tip: u32) -> SplitInputs {
        SplitInputs {
            check_amount: CheckAmount::new(amount).unwrap(),
            party_size: PartySize::new(party).unwrap(),
            tip_percentage: TipPercentage::new(tip).unwrap(),
        }
    }

    #[test]
    fn test_tip_amount() {
        assert_eq!(compute_tip_amount(100.0, 20.0), 20.0);
        assert_eq!(compute_tip_amount(50.0, 15.0), 7.5);
        assert_eq!(compute_tip_amount(0.0, 30.0), 0.0);
    }

    #[test]
    fn test_grand_total() {
        assert_eq!(compute_grand_total(100.0, 20.0), 120.0);
        assert_eq!(compute_grand_total(80.0, 25.0), 100.0);
        assert_eq!(compute_grand_total(0.0, 20.0), 0.0);
    }

    #[test]
    fn test_per_person_amount() {
        assert_eq!(compute_per_person_amount(120.0, 0.0, 4), 30.0);
        assert_eq!(compute_per_person_amount(100.0, 10.0, 1), 110.0);
    }

    #[test]
    fn test_zero_party_is_not_finite() {
        assert!(compute_per_person_amount(10.0, 10.0, 0).is_infinite());
        assert!(compute_per_person_amount(0.0, 10.0, 0).is_nan());
    }

    #[test]
    fn test_checked_rejects_bad_input() {
        assert!(matches!(
            try_compute_per_person_amount(10.0, 10.0, 0),
            Err(CoreError::Validation(_))
        ));
        assert!(try_compute_per_person_amount(10.0, -10.0, 2).is_err());
        assert!(try_compute_per_person_amount(f64::NAN, 10.0, 2).is_err());
    }

    #[test]
    fn test_checked_rejects_overflow() {
        assert!(matches!(
            try_compute_per_person_amount(f64::MAX, 30.0, 2),
            Err(CoreError::NonFiniteResult { .. })
        ));
    }

    #[test]
    fn test_split_scenario() {
        let totals = split(&inputs(50.0, 2, 15));
        assert_eq!(totals.tip_amount, 7.5);
        assert_eq!(totals.grand_total, 57.5);
        assert_eq!(totals.amount_per_person, 28.75);
    }

    #[test]
    fn test_split_defaults() {
        let totals = SplitInputs::default().totals();
        assert_eq!(totals.tip_amount, 0.0);
        assert_eq!(totals.grand_total, 0.0);
        assert_eq!(totals.amount_per_person, 0.0);
    }

    #[test]
    fn test_tip_plus_amount_is_grand_total() {
        let i = inputs(63.2, 3, 25);
        let totals = i.totals();
        assert_eq!(i.check_amount.value() + totals.tip_amount, totals.grand_total);
    }
}
