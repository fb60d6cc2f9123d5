//! The tip formula.

use rust_decimal::Decimal;
use tracing::{trace, warn};

use crate::{calculations::common::round_up_to_whole, currency::CurrencyFormat};

/// Computes the tip owed on `amount` at `tip_percent` percent.
///
/// The raw tip is `tip_percent / 100 * amount`. When `round_up` is set the
/// raw tip is raised to the next whole currency unit; no other rounding is
/// done here, so `33.33` at `15` yields exactly `4.9995`.
///
/// Results too large to represent yield zero.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use tip_core::calculate_tip_amount;
///
/// assert_eq!(calculate_tip_amount(dec!(100), dec!(20), false), dec!(20));
/// assert_eq!(calculate_tip_amount(dec!(33.33), dec!(15), false), dec!(4.9995));
/// assert_eq!(calculate_tip_amount(dec!(33.33), dec!(15), true), dec!(5));
/// ```
pub fn calculate_tip_amount(
    amount: Decimal,
    tip_percent: Decimal,
    round_up: bool,
) -> Decimal {
    let Some(raw) = (tip_percent / Decimal::ONE_HUNDRED).checked_mul(amount) else {
        warn!(%amount, %tip_percent, "tip overflowed; showing zero");
        return Decimal::ZERO;
    };

    let tip = if round_up { round_up_to_whole(raw) } else { raw };
    trace!(%amount, %tip_percent, round_up, %tip, "calculated tip");
    tip
}

/// Computes the tip and formats it as currency.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use tip_core::{CurrencyFormat, calculate_tip};
///
/// let usd = CurrencyFormat::default();
/// assert_eq!(calculate_tip(dec!(100), dec!(20), false, &usd), "$20.00");
/// assert_eq!(calculate_tip(dec!(33.33), dec!(15), false, &usd), "$5.00");
/// ```
pub fn calculate_tip(
    amount: Decimal,
    tip_percent: Decimal,
    round_up: bool,
    currency: &CurrencyFormat,
) -> String {
    currency.format(calculate_tip_amount(amount, tip_percent, round_up))
}
