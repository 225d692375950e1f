//! # Tip Selection
//!
//! Resolves which tip rate applies to a calculation. A host offers two
//! sources: a quick-select preset and a free-text custom percentage. Both are
//! captured in an immutable [`TipSelection`] value and resolved with an
//! explicit precedence rule: a non-empty custom entry always wins over a
//! preset.
//!
//! ## Example
//!
//! ```rust
//! use split_core::tip::{TipSelection, PRESET_RATES};
//! use split_core::units::Rate;
//!
//! // Preset only
//! let selection = TipSelection::preset(PRESET_RATES[2]);
//! assert_eq!(selection.resolve().unwrap(), Rate(0.15));
//!
//! // Custom text overrides the preset
//! let selection = TipSelection {
//!     preset: Some(PRESET_RATES[2]),
//!     custom_percent: Some("17".to_string()),
//! };
//! assert_eq!(selection.resolve().unwrap(), Rate(0.17));
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{SplitError, SplitResult};
use crate::units::{Percent, Rate};

/// Quick-select tip rates offered by hosts, lowest to highest
pub const PRESET_RATES: [Rate; 6] = [
    Rate(0.10),
    Rate(0.12),
    Rate(0.15),
    Rate(0.18),
    Rate(0.20),
    Rate(0.25),
];

/// Button-style label for a preset rate, e.g. "15%"
pub fn preset_label(rate: Rate) -> String {
    format!("{}%", (rate.0 * 100.0).round() as i64)
}

/// The tip sources a host captured for one calculation.
///
/// `custom_percent` holds the raw text of the custom field so that a
/// non-numeric entry can be reported instead of silently ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TipSelection {
    /// Quick-select preset, if one is active
    pub preset: Option<Rate>,

    /// Raw text of the custom percentage field, if the host has one
    pub custom_percent: Option<String>,
}

impl TipSelection {
    /// Selection with no tip source at all
    pub fn none() -> Self {
        TipSelection::default()
    }

    /// Selection from a preset rate only
    pub fn preset(rate: Rate) -> Self {
        TipSelection {
            preset: Some(rate),
            custom_percent: None,
        }
    }

    /// Selection from custom percentage text only
    pub fn custom(text: impl Into<String>) -> Self {
        TipSelection {
            preset: None,
            custom_percent: Some(text.into()),
        }
    }

    /// Resolve the effective tip rate.
    ///
    /// A non-empty custom entry takes precedence over a preset; it does not
    /// fall back to the preset when unparseable. Whitespace-only custom text
    /// counts as absent. The resolved rate must be finite and non-negative.
    pub fn resolve(&self) -> SplitResult<Rate> {
        if let Some(text) = self.custom_percent.as_deref() {
            let text = text.trim();
            if !text.is_empty() {
                let pct: f64 = text.parse().map_err(|_| {
                    SplitError::missing_or_invalid_tip(format!(
                        "custom percentage '{text}' is not a number"
                    ))
                })?;
                return check_rate(Rate::from(Percent(pct)));
            }
        }

        match self.preset {
            Some(rate) => check_rate(rate),
            None => Err(SplitError::missing_or_invalid_tip(
                "no preset selected and no custom percentage entered",
            )),
        }
    }

    /// Percentage text for display, if any source is present.
    ///
    /// Custom text is shown verbatim; a preset is rendered with one decimal
    /// place ("15.0"). Returns `None` when no source is set, letting the
    /// summary formatter substitute its placeholder.
    pub fn display_percent(&self) -> Option<String> {
        if let Some(text) = self.custom_percent.as_deref() {
            let text = text.trim();
            if !text.is_empty() {
                return Some(text.to_string());
            }
        }
        self.preset
            .map(|rate| format!("{:.1}", Percent::from(rate).0))
    }
}

fn check_rate(rate: Rate) -> SplitResult<Rate> {
    if !rate.is_finite() || rate.0 < 0.0 {
        return Err(SplitError::missing_or_invalid_tip(format!(
            "resolved rate {} is negative or not a number",
            rate.0
        )));
    }
    Ok(rate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_table() {
        assert_eq!(PRESET_RATES.len(), 6);
        assert_eq!(PRESET_RATES[0], Rate(0.10));
        assert_eq!(PRESET_RATES[5], Rate(0.25));
    }

    #[test]
    fn test_preset_labels() {
        assert_eq!(preset_label(Rate(0.10)), "10%");
        assert_eq!(preset_label(Rate(0.12)), "12%");
        assert_eq!(preset_label(Rate(0.25)), "25%");
    }

    #[test]
    fn test_preset_resolves() {
        let rate = TipSelection::preset(Rate(0.18)).resolve().unwrap();
        assert_eq!(rate, Rate(0.18));
    }

    #[test]
    fn test_custom_resolves_as_percent() {
        let rate = TipSelection::custom("17").resolve().unwrap();
        assert!((rate.0 - 0.17).abs() < 1e-12);
    }

    #[test]
    fn test_custom_overrides_preset() {
        let selection = TipSelection {
            preset: Some(Rate(0.15)),
            custom_percent: Some("22.5".to_string()),
        };
        let rate = selection.resolve().unwrap();
        assert!((rate.0 - 0.225).abs() < 1e-12);
    }

    #[test]
    fn test_blank_custom_falls_back_to_preset() {
        let selection = TipSelection {
            preset: Some(Rate(0.20)),
            custom_percent: Some("   ".to_string()),
        };
        assert_eq!(selection.resolve().unwrap(), Rate(0.20));
    }

    #[test]
    fn test_unparseable_custom_does_not_fall_back() {
        let selection = TipSelection {
            preset: Some(Rate(0.15)),
            custom_percent: Some("abc".to_string()),
        };
        let err = selection.resolve().unwrap_err();
        assert_eq!(err.error_code(), "MISSING_OR_INVALID_TIP");
    }

    #[test]
    fn test_negative_custom_rejected() {
        let err = TipSelection::custom("-5").resolve().unwrap_err();
        assert_eq!(err.error_code(), "MISSING_OR_INVALID_TIP");
    }

    #[test]
    fn test_zero_tip_allowed() {
        assert_eq!(TipSelection::custom("0").resolve().unwrap(), Rate(0.0));
    }

    #[test]
    fn test_nothing_selected() {
        let err = TipSelection::none().resolve().unwrap_err();
        assert_eq!(err.error_code(), "MISSING_OR_INVALID_TIP");
    }

    #[test]
    fn test_display_percent_sources() {
        assert_eq!(
            TipSelection::custom("17").display_percent(),
            Some("17".to_string())
        );
        assert_eq!(
            TipSelection::preset(Rate(0.15)).display_percent(),
            Some("15.0".to_string())
        );
        assert_eq!(TipSelection::none().display_percent(), None);
    }

    #[test]
    fn test_selection_serialization() {
        let selection = TipSelection {
            preset: Some(Rate(0.15)),
            custom_percent: Some("17".to_string()),
        };
        let json = serde_json::to_string(&selection).unwrap();
        let roundtrip: TipSelection = serde_json::from_str(&json).unwrap();
        assert_eq!(selection, roundtrip);
    }
}
