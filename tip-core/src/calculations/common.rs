//! Rounding helpers shared by the calculation and formatting code.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a value up to the next whole currency unit.
///
/// Values that are already whole are returned unchanged.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use tip_core::calculations::common::round_up_to_whole;
///
/// assert_eq!(round_up_to_whole(dec!(4.9995)), dec!(5));
/// assert_eq!(round_up_to_whole(dec!(20.00)), dec!(20));
/// assert_eq!(round_up_to_whole(dec!(0.01)), dec!(1));
/// ```
pub fn round_up_to_whole(value: Decimal) -> Decimal {
    value.ceil()
}

/// Rounds a value to `places` decimal places, ties going to the even digit.
///
/// This is the rounding a currency formatter applies when it drops the
/// digits beyond the currency's minor unit.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use tip_core::calculations::common::round_to_places;
///
/// assert_eq!(round_to_places(dec!(4.9995), 2), dec!(5.00));
/// assert_eq!(round_to_places(dec!(0.125), 2), dec!(0.12));
/// assert_eq!(round_to_places(dec!(0.135), 2), dec!(0.14));
/// ```
pub fn round_to_places(
    value: Decimal,
    places: u32,
) -> Decimal {
    value.round_dp_with_strategy(places, RoundingStrategy::MidpointNearestEven)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    // =========================================================================
    // round_up_to_whole tests
    // =========================================================================

    #[test]
    fn round_up_to_whole_raises_fractions() {
        let result = round_up_to_whole(dec!(4.9995));

        assert_eq!(result, dec!(5));
    }

    #[test]
    fn round_up_to_whole_keeps_whole_values() {
        let result = round_up_to_whole(dec!(20.00));

        assert_eq!(result, dec!(20));
    }

    #[test]
    fn round_up_to_whole_raises_tiny_fractions() {
        let result = round_up_to_whole(dec!(3.0001));

        assert_eq!(result, dec!(4));
    }

    #[test]
    fn round_up_to_whole_handles_zero() {
        let result = round_up_to_whole(Decimal::ZERO);

        assert_eq!(result, Decimal::ZERO);
    }

    // =========================================================================
    // round_to_places tests
    // =========================================================================

    #[test]
    fn round_to_places_rounds_down_below_midpoint() {
        let result = round_to_places(dec!(5.004), 2);

        assert_eq!(result, dec!(5.00));
    }

    #[test]
    fn round_to_places_rounds_up_above_midpoint() {
        let result = round_to_places(dec!(4.9995), 2);

        assert_eq!(result, dec!(5.00));
    }

    #[test]
    fn round_to_places_sends_ties_to_even() {
        assert_eq!(round_to_places(dec!(2.345), 2), dec!(2.34));
        assert_eq!(round_to_places(dec!(2.355), 2), dec!(2.36));
    }

    #[test]
    fn round_to_places_supports_zero_places() {
        assert_eq!(round_to_places(dec!(1234.5), 0), dec!(1234));
        assert_eq!(round_to_places(dec!(1235.5), 0), dec!(1236));
    }
}
