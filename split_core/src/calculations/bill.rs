//! # Bill Split Calculation
//!
//! Computes the tip amount, total, and per-person share for one bill.
//!
//! ## Assumptions
//!
//! - Single currency; amounts are in the currency's major unit
//! - Tip rate is already resolved (see [`crate::tip`] for preset/custom precedence)
//! - Rounding, when requested, snaps to whole major units (dollars, not cents)
//!
//! ## Example
//!
//! ```rust
//! use split_core::calculations::bill::{calculate, BillInput, RoundingMode};
//! use split_core::units::{Currency, Rate};
//!
//! let input = BillInput {
//!     bill_amount: Currency(100.0),
//!     tip_rate: Rate(0.20),
//!     people_count: 3,
//!     rounding: RoundingMode::RoundTotal,
//! };
//!
//! let result = calculate(&input).unwrap();
//! assert_eq!(result.tip_amount, Currency(20.0));
//! assert_eq!(result.total, Currency(120.0));
//! assert_eq!(result.per_person, Currency(40.0));
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{SplitError, SplitResult};
use crate::units::{Currency, Rate};

/// Policy for snapping results to whole currency units.
///
/// The two rounding modes are mutually exclusive and deliberately coarse:
/// they round to the nearest *major* unit (nearest dollar), halves away from
/// zero. The tip amount is never re-derived after rounding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RoundingMode {
    /// Keep full precision on all three results
    #[default]
    None,

    /// Round the total to a whole unit, then recompute the per-person share
    RoundTotal,

    /// Round the per-person share to a whole unit, then recompute the total
    RoundPerPerson,
}

/// Input parameters for one bill split.
///
/// Immutable once built; every calculation is a fresh, stateless call.
///
/// ## JSON Example
///
/// ```json
/// {
///   "bill_amount": 42.50,
///   "tip_rate": 0.15,
///   "people_count": 2,
///   "rounding": "None"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BillInput {
    /// Bill amount in the currency's major unit, strictly positive
    pub bill_amount: Currency,

    /// Resolved tip rate as a decimal fraction (0.15 = 15%), non-negative
    pub tip_rate: Rate,

    /// Party size, at least 1
    pub people_count: u32,

    /// Rounding policy applied after the base computation
    pub rounding: RoundingMode,
}

impl BillInput {
    /// Validate input parameters, in order; the first failure wins.
    pub fn validate(&self) -> SplitResult<()> {
        if !self.bill_amount.is_finite() || self.bill_amount.value() <= 0.0 {
            return Err(SplitError::invalid_bill_amount(
                self.bill_amount.value().to_string(),
            ));
        }
        if !self.tip_rate.is_finite() || self.tip_rate.value() < 0.0 {
            return Err(SplitError::missing_or_invalid_tip(format!(
                "resolved rate {} is negative or not a number",
                self.tip_rate.value()
            )));
        }
        // Hosts are expected to keep the count at 1 or more; check anyway
        if self.people_count < 1 {
            return Err(SplitError::invalid_people_count(self.people_count as i64));
        }
        Ok(())
    }
}

/// Results from a bill split calculation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "tip_amount": 6.375,
///   "total": 48.875,
///   "per_person": 24.4375
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BillResult {
    /// Tip in currency units: bill × rate, never adjusted by rounding
    pub tip_amount: Currency,

    /// Bill plus tip, possibly snapped to a whole unit
    pub total: Currency,

    /// Each person's share of the total
    pub per_person: Currency,
}

/// Calculate tip, total, and per-person share for a bill.
///
/// Pure function: no side effects, no retained state, identical inputs give
/// identical outputs. Validation failures come back as [`SplitError`] values.
///
/// # Arguments
///
/// * `input` - Bill parameters (amount, resolved tip rate, party size, rounding)
///
/// # Returns
///
/// * `Ok(BillResult)` - The three computed amounts
/// * `Err(SplitError)` - Structured error if inputs are invalid
///
/// # Example
///
/// ```rust
/// use split_core::calculations::bill::{calculate, BillInput, RoundingMode};
/// use split_core::units::{Currency, Rate};
///
/// // $50 bill, 18% tip, four people, round each share to a whole dollar
/// let input = BillInput {
///     bill_amount: Currency(50.0),
///     tip_rate: Rate(0.18),
///     people_count: 4,
///     rounding: RoundingMode::RoundPerPerson,
/// };
///
/// let result = calculate(&input).unwrap();
/// assert_eq!(result.per_person, Currency(15.0));
/// assert_eq!(result.total, Currency(60.0));
/// ```
pub fn calculate(input: &BillInput) -> SplitResult<BillResult> {
    input.validate()?;

    let tip_amount = input.bill_amount * input.tip_rate;
    let mut total = input.bill_amount + tip_amount;
    let mut per_person = total / input.people_count;

    match input.rounding {
        RoundingMode::None => {}
        RoundingMode::RoundTotal => {
            total = total.round_major();
            per_person = total / input.people_count;
        }
        RoundingMode::RoundPerPerson => {
            per_person = per_person.round_major();
            total = per_person * input.people_count;
        }
    }

    Ok(BillResult {
        tip_amount,
        total,
        per_person,
    })
}
