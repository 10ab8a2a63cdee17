//! # wesplit-core: Pure Bill-Splitting Logic
//!
//! This crate holds the only real logic of WeSplit: given a check amount,
//! a tip percentage and a party size, work out the grand total and what
//! each person owes. Everything is a pure function with zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        WeSplit Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                Front end (terminal, or any UI)                  │   │
//! │  │    amount field ──► tip picker ──► party picker ──► totals      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ input-change events                    │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ wesplit-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   split   │  │   money   │  │ validation│  │   │
//! │  │   │  inputs   │  │  totals   │  │  display  │  │   rules   │  │   │
//! │  │   │  totals   │  │  math     │  │  rounding │  │   parse   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO STATE • NO CONCURRENCY • PURE FUNCTIONS          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Check amount, party size, tip percentage, derived totals
//! - [`split`] - The calculator
//! - [`money`] - Integer minor units for display rounding
//! - [`validation`] - Input rules and amount parsing
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use wesplit_core::{CheckAmount, PartySize, SplitInputs, TipPercentage};
//!
//! let inputs = SplitInputs {
//!     check_amount: CheckAmount::new(50.0).unwrap(),
//!     party_size: PartySize::from_picker_index(0).unwrap(), // 2 people
//!     tip_percentage: TipPercentage::new(15).unwrap(),
//! };
//!
//! let totals = inputs.totals();
//! assert_eq!(totals.grand_total, 57.5);
//! assert_eq!(totals.amount_per_person, 28.75);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod split;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError, ValidationResult};
pub use money::Money;
pub use split::{
    compute_grand_total, compute_per_person_amount, compute_tip_amount, split,
    try_compute_per_person_amount,
};
pub use types::*;
