//! Conversion of free-form numeric text into non-negative amounts.
//!
//! Input parsing is locale-independent: `.` is always the decimal point and
//! `,` is accepted (and dropped) as a thousands separator, whatever locale
//! the result is later formatted in.

use rust_decimal::Decimal;
use thiserror::Error;
use tracing::debug;

/// Error returned when text cannot be read as a number.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseAmountError {
    #[error("no number entered")]
    Empty,

    #[error("invalid number '{input}': {reason}")]
    Invalid { input: String, reason: String },
}

/// Trims whitespace and removes commas used as thousands separators.
fn normalize_amount_input(s: &str) -> String {
    s.trim().replace(',', "")
}

/// Parses text into a [`Decimal`], reporting why it failed.
///
/// Accepts plain decimals (`"12"`, `"12.5"`, `".5"`, `"+3"`), comma
/// thousands separators (`"1,234.56"`) and scientific notation (`"1e2"`).
/// Underscore digit separators (`"1_000"`) are rejected.
/// Negative numbers are returned as-is; clamping happens in [`parse_amount`].
pub fn try_parse_amount(s: &str) -> Result<Decimal, ParseAmountError> {
    let normalized = normalize_amount_input(s);
    if normalized.is_empty() {
        return Err(ParseAmountError::Empty);
    }
    if normalized.contains('_') {
        return Err(ParseAmountError::Invalid {
            input: s.to_string(),
            reason: "underscore is not a digit separator".to_string(),
        });
    }

    let parsed = if normalized.contains(['e', 'E']) {
        Decimal::from_scientific(&normalized)
    } else {
        normalized.parse::<Decimal>()
    };

    parsed.map_err(|e| ParseAmountError::Invalid {
        input: s.to_string(),
        reason: e.to_string(),
    })
}

/// Parses text into a non-negative [`Decimal`], never failing.
///
/// Empty, unparseable and negative input all yield zero.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use tip_core::parse_amount;
///
/// assert_eq!(parse_amount("33.33"), dec!(33.33));
/// assert_eq!(parse_amount("1,250"), dec!(1250));
/// assert_eq!(parse_amount("twenty"), dec!(0));
/// assert_eq!(parse_amount(""), dec!(0));
/// ```
pub fn parse_amount(s: &str) -> Decimal {
    match try_parse_amount(s) {
        Ok(value) if value.is_sign_negative() => {
            debug!(input = %s, "negative amount treated as zero");
            Decimal::ZERO
        }
        Ok(value) => value,
        Err(ParseAmountError::Empty) => Decimal::ZERO,
        Err(e) => {
            debug!(input = %s, "{e}; using zero");
            Decimal::ZERO
        }
    }
}
