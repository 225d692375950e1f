//! # split_core - Bill Splitting Calculation Engine
//!
//! `split_core` is the computational heart of TipSplit: given a bill amount,
//! a tip rate, a party size, and a rounding policy, it computes the tip
//! amount, the total, and the per-person share. All inputs and outputs are
//! JSON-serializable, so any host (CLI, GUI, service) can drive it.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **Host-Agnostic**: Input collection and currency formatting stay outside
//!
//! ## Quick Start
//!
//! ```rust
//! use split_core::{calculate, BillInput, RoundingMode};
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
//! assert_eq!(result.total, Currency(120.0));
//! assert_eq!(result.per_person, Currency(40.0));
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - The bill split engine (input, result, rounding policy)
//! - [`tip`] - Preset table and preset/custom tip resolution
//! - [`validation`] - Raw-text parsers for host input fields
//! - [`summary`] - Fixed-layout text summary of a calculation
//! - [`units`] - Type-safe currency and rate wrappers
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod errors;
pub mod summary;
pub mod tip;
pub mod units;
pub mod validation;

// Re-export commonly used types at crate root for convenience
pub use calculations::{calculate, BillInput, BillResult, RoundingMode};
pub use errors::{SplitError, SplitResult};
pub use tip::TipSelection;
