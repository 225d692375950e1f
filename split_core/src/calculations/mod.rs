//! # Calculations
//!
//! This module contains the calculation types. Each calculation follows the
//! pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Result` - Calculation results (JSON-serializable)
//! - `calculate(input) -> Result<*Result, SplitError>` - Pure calculation function
//!
//! ## Available Calculations
//!
//! - [`bill`] - Bill splitting with tip and rounding policy

pub mod bill;

// Re-export commonly used types
pub use bill::{calculate, BillInput, BillResult, RoundingMode};
