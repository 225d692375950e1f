//! # Summary Formatter
//!
//! Renders one calculation as a fixed-layout text block the host can hand to
//! a clipboard or a terminal. Currency formatting is a display concern, so
//! every amount arrives pre-formatted; the formatter only owns the layout.
//! It never fails: a missing tip percentage becomes a placeholder.

/// Placeholder shown when no tip percentage could be resolved
pub const TIP_PLACEHOLDER: &str = "—";

/// Display strings for one calculation, pre-formatted by the host.
///
/// `tip_percent` is the percentage text without the trailing `%` sign
/// ("15.0" or "17"); `None` renders as [`TIP_PLACEHOLDER`].
#[derive(Debug, Clone)]
pub struct SummaryInput<'a> {
    pub bill: &'a str,
    pub tip_percent: Option<&'a str>,
    pub people: u32,
    pub tip_amount: &'a str,
    pub total: &'a str,
    pub per_person: &'a str,
}

/// Render the multi-line summary block.
///
/// # Example
///
/// ```rust
/// use split_core::summary::{format_summary, SummaryInput};
///
/// let block = format_summary(&SummaryInput {
///     bill: "$42.50",
///     tip_percent: Some("15.0"),
///     people: 2,
///     tip_amount: "$6.38",
///     total: "$48.88",
///     per_person: "$24.44",
/// });
///
/// assert!(block.starts_with("Bill: $42.50\nTip: 15.0%"));
/// assert!(block.ends_with("Per Person: $24.44"));
/// ```
pub fn format_summary(input: &SummaryInput<'_>) -> String {
    format!(
        "Bill: {}\n\
         Tip: {}%\n\
         People: {}\n\
         —\n\
         Tip Amount: {}\n\
         Total: {}\n\
         Per Person: {}",
        input.bill,
        input.tip_percent.unwrap_or(TIP_PLACEHOLDER),
        input.people,
        input.tip_amount,
        input.total,
        input.per_person,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_layout() {
        let block = format_summary(&SummaryInput {
            bill: "$42.50",
            tip_percent: Some("15.0"),
            people: 2,
            tip_amount: "$6.38",
            total: "$48.88",
            per_person: "$24.44",
        });

        assert_eq!(
            block,
            "Bill: $42.50\n\
             Tip: 15.0%\n\
             People: 2\n\
             —\n\
             Tip Amount: $6.38\n\
             Total: $48.88\n\
             Per Person: $24.44"
        );
    }

    #[test]
    fn test_missing_tip_uses_placeholder() {
        let block = format_summary(&SummaryInput {
            bill: "$30.00",
            tip_percent: None,
            people: 1,
            tip_amount: "$0.00",
            total: "$0.00",
            per_person: "$0.00",
        });

        assert!(block.contains("Tip: —%"));
    }

    #[test]
    fn test_line_count_is_fixed() {
        let block = format_summary(&SummaryInput {
            bill: "$1.00",
            tip_percent: Some("10"),
            people: 1,
            tip_amount: "$0.10",
            total: "$1.10",
            per_person: "$1.10",
        });
        assert_eq!(block.lines().count(), 7);
    }
}
