use std::fmt;

use rust_decimal::Decimal;

use crate::{
    calculations::tip::{calculate_tip, calculate_tip_amount},
    currency::CurrencyFormat,
    parse::parse_amount,
};

/// Screen state for the tip calculator.
///
/// Holds exactly what the user typed; the numbers and the tip are derived on
/// every read so the displayed tip can never go stale.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TipCalculator {
    amount_text: String,
    percent_text: String,
    round_up: bool,
    currency: CurrencyFormat,
}

impl TipCalculator {
    pub fn new(currency: CurrencyFormat) -> Self {
        Self {
            currency,
            ..Default::default()
        }
    }

    /// Pre-fills the tip percent and round-up switch.
    pub fn with_defaults(
        mut self,
        percent_text: impl Into<String>,
        round_up: bool,
    ) -> Self {
        self.percent_text = percent_text.into();
        self.round_up = round_up;
        self
    }

    pub fn amount_text(&self) -> &str {
        &self.amount_text
    }

    pub fn percent_text(&self) -> &str {
        &self.percent_text
    }

    pub fn round_up(&self) -> bool {
        self.round_up
    }

    pub fn currency(&self) -> &CurrencyFormat {
        &self.currency
    }

    pub fn set_amount_text(
        &mut self,
        text: impl Into<String>,
    ) {
        self.amount_text = text.into();
    }

    pub fn set_percent_text(
        &mut self,
        text: impl Into<String>,
    ) {
        self.percent_text = text.into();
    }

    /// Adopts the amount text the input field actually shows.
    /// Returns true when it differs from what was held.
    pub fn sync_amount_text(
        &mut self,
        shown: &str,
    ) -> bool {
        if self.amount_text == shown {
            return false;
        }
        self.amount_text = shown.to_string();
        true
    }

    /// Adopts the percent text the input field actually shows.
    /// Returns true when it differs from what was held.
    pub fn sync_percent_text(
        &mut self,
        shown: &str,
    ) -> bool {
        if self.percent_text == shown {
            return false;
        }
        self.percent_text = shown.to_string();
        true
    }

    pub fn set_round_up(
        &mut self,
        round_up: bool,
    ) {
        self.round_up = round_up;
    }

    pub fn toggle_round_up(&mut self) {
        self.round_up = !self.round_up;
    }

    pub fn set_currency(
        &mut self,
        currency: CurrencyFormat,
    ) {
        self.currency = currency;
    }

    /// Clears everything the user entered. The currency is kept.
    pub fn reset(&mut self) {
        *self = Self::new(self.currency);
    }

    /// The bill amount, zero when the text isn't a number.
    pub fn amount(&self) -> Decimal {
        parse_amount(&self.amount_text)
    }

    /// The tip percentage, zero when the text isn't a number.
    pub fn tip_percent(&self) -> Decimal {
        parse_amount(&self.percent_text)
    }

    /// The unformatted tip.
    pub fn tip_amount(&self) -> Decimal {
        calculate_tip_amount(self.amount(), self.tip_percent(), self.round_up)
    }

    /// The tip formatted in the active currency.
    pub fn tip(&self) -> String {
        calculate_tip(
            self.amount(),
            self.tip_percent(),
            self.round_up,
            &self.currency,
        )
    }
}

impl fmt::Display for TipCalculator {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(
            f,
            "amount={:?} percent={:?} round_up={} locale={} tip={}",
            self.amount_text,
            self.percent_text,
            self.round_up,
            self.currency.locale,
            self.tip()
        )
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::currency::CurrencyLocale;

    fn filled(
        amount: &str,
        percent: &str,
        round_up: bool,
    ) -> TipCalculator {
        let mut calc = TipCalculator::default();
        calc.set_amount_text(amount);
        calc.set_percent_text(percent);
        calc.set_round_up(round_up);
        calc
    }

    #[test]
    fn new_calculator_is_empty_and_tips_zero() {
        let calc = TipCalculator::default();

        assert_eq!(calc.amount_text(), "");
        assert_eq!(calc.percent_text(), "");
        assert!(!calc.round_up());
        assert_eq!(calc.tip(), "$0.00");
    }

    #[test]
    fn tip_follows_every_input_change() {
        let mut calc = filled("100", "20", false);
        assert_eq!(calc.tip(), "$20.00");

        calc.set_amount_text("33.33");
        calc.set_percent_text("15");
        assert_eq!(calc.tip(), "$5.00");
        assert_eq!(calc.tip_amount(), dec!(4.9995));

        calc.set_amount_text("41.20");
        assert_eq!(calc.tip(), "$6.18");

        calc.toggle_round_up();
        assert_eq!(calc.tip(), "$7.00");
    }

    #[test]
    fn non_numeric_text_counts_as_zero() {
        let calc = filled("lots", "20", false);

        assert_eq!(calc.amount(), Decimal::ZERO);
        assert_eq!(calc.tip(), "$0.00");
    }

    #[test]
    fn non_numeric_percent_counts_as_zero() {
        let calc = filled("50", "%%", true);

        assert_eq!(calc.tip_percent(), Decimal::ZERO);
        assert_eq!(calc.tip(), "$0.00");
    }

    #[test]
    fn with_defaults_prefills_percent_and_switch() {
        let calc = TipCalculator::default().with_defaults("18", true);

        assert_eq!(calc.percent_text(), "18");
        assert!(calc.round_up());
    }

    #[test]
    fn sync_adopts_text_shown_in_field() {
        let mut calc = TipCalculator::default().with_defaults("1e2", false);
        calc.set_amount_text("50");

        // The field kept only the digits it accepts.
        assert!(calc.sync_percent_text("12"));
        assert_eq!(calc.percent_text(), "12");
        assert_eq!(calc.tip(), "$6.00");

        assert!(!calc.sync_percent_text("12"));
        assert!(!calc.sync_amount_text("50"));
        assert!(calc.sync_amount_text("60"));
        assert_eq!(calc.tip(), "$7.20");
    }

    #[test]
    fn reset_keeps_currency() {
        let mut calc = TipCalculator::new(CurrencyLocale::DeDe.into());
        calc.set_amount_text("10");
        calc.set_percent_text("10");
        calc.set_round_up(true);

        calc.reset();

        assert_eq!(calc, TipCalculator::new(CurrencyLocale::DeDe.into()));
    }

    #[test]
    fn tip_uses_active_currency() {
        let mut calc = filled("1000", "15", false);
        calc.set_currency(CurrencyLocale::DeDe.into());

        assert_eq!(calc.tip(), "150,00\u{a0}€");
    }

    #[test]
    fn display_summarizes_state() {
        let calc = filled("100", "20", true);

        assert_eq!(
            calc.to_string(),
            r#"amount="100" percent="20" round_up=true locale=en-US tip=$20.00"#
        );
    }
}
