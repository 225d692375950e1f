//! # Input Validation
//!
//! Parsers for the raw text a host collects before a calculation. Hosts own
//! the widgets; these functions own the text-to-number step so every host
//! reports the same typed errors.
//!
//! A parse failure is reported as [`NumericParseError`]; a value that parsed
//! but fails a range check gets the field-specific variant. Range checks on
//! the bill amount itself live in the engine, which re-validates every input.
//!
//! [`NumericParseError`]: crate::errors::SplitError::NumericParseError
//!
//! ## Example
//!
//! ```rust
//! use split_core::validation::{parse_bill_amount, parse_people};
//!
//! assert!(parse_bill_amount("42.50").is_ok());
//! assert!(parse_bill_amount("forty-two").is_err());
//! assert!(parse_people("2").is_ok());
//! assert!(parse_people("0").is_err());
//! ```

use crate::errors::{SplitError, SplitResult};
use crate::units::Currency;

/// Parse the bill field's raw text into a currency amount.
///
/// Empty text is a missing bill, not a parse failure. The amount's own range
/// check (finite, strictly positive) happens in the engine.
pub fn parse_bill_amount(text: &str) -> SplitResult<Currency> {
    let text = text.trim();

    if text.is_empty() {
        return Err(SplitError::invalid_bill_amount(text));
    }

    text.parse::<f64>()
        .map(Currency)
        .map_err(|_| SplitError::numeric_parse("bill", text))
}

/// Parse the people field's raw text into a party size.
///
/// Rejects anything that is not an integer of at least 1.
pub fn parse_people(text: &str) -> SplitResult<u32> {
    let text = text.trim();

    let value = text
        .parse::<i64>()
        .map_err(|_| SplitError::numeric_parse("people", text))?;

    if value < 1 || value > u32::MAX as i64 {
        return Err(SplitError::invalid_people_count(value));
    }

    Ok(value as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bill_amount() {
        assert_eq!(parse_bill_amount("42.50").unwrap(), Currency(42.5));
        assert_eq!(parse_bill_amount("  30 ").unwrap(), Currency(30.0));
    }

    #[test]
    fn test_empty_bill_is_missing_not_unparseable() {
        let err = parse_bill_amount("   ").unwrap_err();
        assert_eq!(err.error_code(), "INVALID_BILL_AMOUNT");
    }

    #[test]
    fn test_non_numeric_bill() {
        let err = parse_bill_amount("forty-two").unwrap_err();
        assert_eq!(err.error_code(), "NUMERIC_PARSE_ERROR");
    }

    #[test]
    fn test_negative_bill_parses_here() {
        // Range checking is the engine's job; the text itself is numeric
        assert_eq!(parse_bill_amount("-5").unwrap(), Currency(-5.0));
    }

    #[test]
    fn test_parse_people() {
        assert_eq!(parse_people("2").unwrap(), 2);
        assert_eq!(parse_people(" 10 ").unwrap(), 10);
    }

    #[test]
    fn test_people_below_one() {
        assert_eq!(
            parse_people("0").unwrap_err().error_code(),
            "INVALID_PEOPLE_COUNT"
        );
        assert_eq!(
            parse_people("-2").unwrap_err().error_code(),
            "INVALID_PEOPLE_COUNT"
        );
    }

    #[test]
    fn test_people_not_an_integer() {
        assert_eq!(
            parse_people("two").unwrap_err().error_code(),
            "NUMERIC_PARSE_ERROR"
        );
        assert_eq!(
            parse_people("2.5").unwrap_err().error_code(),
            "NUMERIC_PARSE_ERROR"
        );
    }
}
