//! # Unit Types
//!
//! Type-safe wrappers for money and tip rates. These provide compile-time
//! safety against mixing up a rate and an amount while remaining lightweight
//! (just f64 wrappers).
//!
//! ## Design Philosophy
//!
//! We use simple newtype wrappers rather than a decimal library because:
//! - The calculator works in a single currency's major unit
//! - We want JSON serialization to be clean (just numbers)
//! - Minimal runtime overhead
//!
//! Rounding happens on the currency's **major unit** (whole dollars/euros),
//! never on cents. That granularity is part of the calculator's contract.
//!
//! ## Example
//!
//! ```rust
//! use split_core::units::{Currency, Percent, Rate};
//!
//! let bill = Currency(100.0);
//! let rate: Rate = Percent(20.0).into();
//! assert_eq!(bill * rate, Currency(20.0));
//!
//! let total = Currency(48.875);
//! assert_eq!(total.round_major(), Currency(49.0));
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

// ============================================================================
// Money
// ============================================================================

/// An amount of money in the currency's major unit (e.g., dollars)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Currency(pub f64);

impl Currency {
    /// Round to the nearest whole major unit, halves away from zero.
    ///
    /// This is the coarse rounding the calculator applies when a rounding
    /// mode is active: nearest dollar, not nearest cent.
    pub fn round_major(self) -> Self {
        Currency(self.0.round())
    }

    /// True if the underlying value is a finite number
    pub fn is_finite(self) -> bool {
        self.0.is_finite()
    }
}

// ============================================================================
// Tip Rates
// ============================================================================

/// A tip rate as a decimal fraction (0.15 = 15%)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rate(pub f64);

/// A tip rate as a percentage (15.0 = 15%)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Percent(pub f64);

impl Rate {
    /// True if the underlying value is a finite number
    pub fn is_finite(self) -> bool {
        self.0.is_finite()
    }
}

impl From<Percent> for Rate {
    fn from(pct: Percent) -> Self {
        Rate(pct.0 / 100.0)
    }
}

impl From<Rate> for Percent {
    fn from(rate: Rate) -> Self {
        Percent(rate.0 * 100.0)
    }
}

// ============================================================================
// Mixed-Type Arithmetic
// ============================================================================

/// Tip amount = bill amount scaled by a rate
impl Mul<Rate> for Currency {
    type Output = Currency;
    fn mul(self, rate: Rate) -> Currency {
        Currency(self.0 * rate.0)
    }
}

/// Per-person share = amount divided across a party
impl Div<u32> for Currency {
    type Output = Currency;
    fn div(self, people: u32) -> Currency {
        Currency(self.0 / people as f64)
    }
}

/// Reconstructed total = per-person share times the party size
impl Mul<u32> for Currency {
    type Output = Currency;
    fn mul(self, people: u32) -> Currency {
        Currency(self.0 * people as f64)
    }
}

// ============================================================================
// Arithmetic Implementations (macro to reduce boilerplate)
// ============================================================================

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }

            /// Create from raw f64 value
            pub fn new(value: f64) -> Self {
                Self(value)
            }
        }
    };
}

impl_arithmetic!(Currency);
impl_arithmetic!(Rate);
impl_arithmetic!(Percent);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_to_rate() {
        let rate: Rate = Percent(15.0).into();
        assert!((rate.0 - 0.15).abs() < 1e-12);

        let pct: Percent = Rate(0.25).into();
        assert!((pct.0 - 25.0).abs() < 1e-12);
    }

    #[test]
    fn test_bill_times_rate() {
        let tip = Currency(100.0) * Rate(0.2);
        assert_eq!(tip, Currency(20.0));
    }

    #[test]
    fn test_split_across_party() {
        let share = Currency(120.0) / 3;
        assert_eq!(share, Currency(40.0));
        assert_eq!(share * 3, Currency(120.0));
    }

    #[test]
    fn test_round_major_half_away_from_zero() {
        assert_eq!(Currency(48.875).round_major(), Currency(49.0));
        assert_eq!(Currency(14.75).round_major(), Currency(15.0));
        assert_eq!(Currency(14.5).round_major(), Currency(15.0));
        assert_eq!(Currency(14.25).round_major(), Currency(14.0));
        assert_eq!(Currency(120.0).round_major(), Currency(120.0));
    }

    #[test]
    fn test_arithmetic() {
        let a = Currency(10.0);
        let b = Currency(5.0);
        assert_eq!((a + b).0, 15.0);
        assert_eq!((a - b).0, 5.0);
        assert_eq!((a * 2.0).0, 20.0);
        assert_eq!((a / 2.0).0, 5.0);
    }

    #[test]
    fn test_serialization() {
        let amount = Currency(42.5);
        let json = serde_json::to_string(&amount).unwrap();
        assert_eq!(json, "42.5");

        let roundtrip: Currency = serde_json::from_str(&json).unwrap();
        assert_eq!(amount, roundtrip);
    }
}
