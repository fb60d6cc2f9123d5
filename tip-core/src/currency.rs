//! Locale-aware currency formatting.
//!
//! Only the handful of locales listed in [`CurrencyLocale`] are supported.
//! Each maps to a fixed [`CurrencyFormat`] describing the symbol, where it
//! goes, and which separators the locale uses.

use std::{env, fmt};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::calculations::common::round_to_places;

const NBSP: char = '\u{a0}';
const NARROW_NBSP: char = '\u{202f}';

/// Environment variables consulted for the user's locale, highest priority first.
const LOCALE_ENV_VARS: [&str; 3] = ["LC_ALL", "LC_MONETARY", "LANG"];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CurrencyError {
    #[error("unsupported locale '{0}' (supported: en-US, en-GB, de-DE, fr-FR, ja-JP)")]
    UnsupportedLocale(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum CurrencyLocale {
    #[default]
    EnUs,
    EnGb,
    DeDe,
    FrFr,
    JaJp,
}

impl CurrencyLocale {
    pub fn all() -> &'static [CurrencyLocale] {
        &[
            CurrencyLocale::EnUs,
            CurrencyLocale::EnGb,
            CurrencyLocale::DeDe,
            CurrencyLocale::FrFr,
            CurrencyLocale::JaJp,
        ]
    }

    /// BCP 47 style tag, e.g. `en-US`.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::EnUs => "en-US",
            Self::EnGb => "en-GB",
            Self::DeDe => "de-DE",
            Self::FrFr => "fr-FR",
            Self::JaJp => "ja-JP",
        }
    }

    /// Parses a locale tag.
    ///
    /// Accepts `en-US`, `en_US` and POSIX forms with an encoding or modifier
    /// such as `en_US.UTF-8` or `de_DE@euro`. Matching is case-insensitive.
    pub fn from_tag(tag: &str) -> Result<Self, CurrencyError> {
        let base = tag
            .trim()
            .split(['.', '@'])
            .next()
            .unwrap_or_default()
            .replace('_', "-");

        Self::all()
            .iter()
            .copied()
            .find(|locale| locale.tag().eq_ignore_ascii_case(&base))
            .ok_or_else(|| CurrencyError::UnsupportedLocale(tag.to_string()))
    }

    /// Picks the locale from `LC_ALL`, `LC_MONETARY` or `LANG`.
    ///
    /// The first variable that is set and non-empty decides. An unsupported
    /// value (including `C` and `POSIX`) falls back to `en-US`.
    pub fn from_env() -> Self {
        Self::from_env_with(|key| env::var(key).ok())
    }

    /// Like [`CurrencyLocale::from_env`], reading variables through `lookup`.
    pub fn from_env_with(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let Some((key, value)) = LOCALE_ENV_VARS
            .iter()
            .find_map(|key| lookup(key).filter(|v| !v.is_empty()).map(|v| (*key, v)))
        else {
            warn!("no locale in environment; using {}", Self::default());
            return Self::default();
        };

        Self::from_tag(&value).unwrap_or_else(|e| {
            warn!(variable = key, "{e}; using {}", Self::default());
            Self::default()
        })
    }
}

impl fmt::Display for CurrencyLocale {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl TryFrom<String> for CurrencyLocale {
    type Error = CurrencyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_tag(&value)
    }
}

impl From<CurrencyLocale> for String {
    fn from(value: CurrencyLocale) -> Self {
        value.tag().to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolPlacement {
    /// `$5.00`
    Before,
    /// `5,00 €`
    After,
}

/// How a locale writes an amount of money.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrencyFormat {
    pub locale: CurrencyLocale,
    pub symbol: &'static str,
    pub placement: SymbolPlacement,
    /// Written between the symbol and the digits, if any.
    pub symbol_spacing: Option<char>,
    pub grouping_separator: char,
    pub decimal_separator: char,
    /// Digits in the minor unit (2 for cents, 0 for yen).
    pub fraction_digits: u32,
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self::for_locale(CurrencyLocale::EnUs)
    }
}

impl From<CurrencyLocale> for CurrencyFormat {
    fn from(locale: CurrencyLocale) -> Self {
        Self::for_locale(locale)
    }
}

impl CurrencyFormat {
    pub fn for_locale(locale: CurrencyLocale) -> Self {
        match locale {
            CurrencyLocale::EnUs => Self {
                locale,
                symbol: "$",
                placement: SymbolPlacement::Before,
                symbol_spacing: None,
                grouping_separator: ',',
                decimal_separator: '.',
                fraction_digits: 2,
            },
            CurrencyLocale::EnGb => Self {
                locale,
                symbol: "£",
                placement: SymbolPlacement::Before,
                symbol_spacing: None,
                grouping_separator: ',',
                decimal_separator: '.',
                fraction_digits: 2,
            },
            CurrencyLocale::DeDe => Self {
                locale,
                symbol: "€",
                placement: SymbolPlacement::After,
                symbol_spacing: Some(NBSP),
                grouping_separator: '.',
                decimal_separator: ',',
                fraction_digits: 2,
            },
            CurrencyLocale::FrFr => Self {
                locale,
                symbol: "€",
                placement: SymbolPlacement::After,
                symbol_spacing: Some(NBSP),
                grouping_separator: NARROW_NBSP,
                decimal_separator: ',',
                fraction_digits: 2,
            },
            CurrencyLocale::JaJp => Self {
                locale,
                symbol: "￥",
                placement: SymbolPlacement::Before,
                symbol_spacing: None,
                grouping_separator: ',',
                decimal_separator: '.',
                fraction_digits: 0,
            },
        }
    }

    /// Formats `value` as money in this locale.
    ///
    /// The value is rounded to the minor unit (ties to even) and the
    /// integer part is grouped in threes.
    ///
    /// # Examples
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use tip_core::{CurrencyFormat, CurrencyLocale};
    ///
    /// let usd = CurrencyFormat::for_locale(CurrencyLocale::EnUs);
    /// assert_eq!(usd.format(dec!(1234.5)), "$1,234.50");
    ///
    /// let eur = CurrencyFormat::for_locale(CurrencyLocale::DeDe);
    /// assert_eq!(eur.format(dec!(1234.5)), "1.234,50\u{a0}€");
    /// ```
    pub fn format(
        &self,
        value: Decimal,
    ) -> String {
        let rounded = round_to_places(value, self.fraction_digits);
        let negative = rounded.is_sign_negative() && !rounded.is_zero();

        let digits = format!("{:.*}", self.fraction_digits as usize, rounded.abs());
        let (whole, fraction) = match digits.split_once('.') {
            Some((whole, fraction)) => (whole, Some(fraction)),
            None => (digits.as_str(), None),
        };

        let mut number = group_digits(whole, self.grouping_separator);
        if let Some(fraction) = fraction {
            number.push(self.decimal_separator);
            number.push_str(fraction);
        }

        let spacing = self.symbol_spacing.map(String::from).unwrap_or_default();
        let sign = if negative { "-" } else { "" };
        match self.placement {
            SymbolPlacement::Before => format!("{sign}{}{spacing}{number}", self.symbol),
            SymbolPlacement::After => format!("{sign}{number}{spacing}{}", self.symbol),
        }
    }
}

/// Inserts `separator` between every group of three digits, from the right.
fn group_digits(
    whole: &str,
    separator: char,
) -> String {
    let len = whole.len();
    let mut grouped = String::with_capacity(len + len / 3 * separator.len_utf8());
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(digit);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn fmt(locale: CurrencyLocale) -> CurrencyFormat {
        CurrencyFormat::for_locale(locale)
    }

    // =========================================================================
    // format tests
    // =========================================================================

    #[test]
    fn format_us_pads_to_cents() {
        assert_eq!(fmt(CurrencyLocale::EnUs).format(dec!(20)), "$20.00");
        assert_eq!(fmt(CurrencyLocale::EnUs).format(dec!(0)), "$0.00");
        assert_eq!(fmt(CurrencyLocale::EnUs).format(dec!(0.5)), "$0.50");
    }

    #[test]
    fn format_us_rounds_to_cents() {
        assert_eq!(fmt(CurrencyLocale::EnUs).format(dec!(4.9995)), "$5.00");
        assert_eq!(fmt(CurrencyLocale::EnUs).format(dec!(6.184)), "$6.18");
    }

    #[test]
    fn format_groups_thousands() {
        assert_eq!(fmt(CurrencyLocale::EnUs).format(dec!(1234567.891)), "$1,234,567.89");
        assert_eq!(fmt(CurrencyLocale::EnUs).format(dec!(999.99)), "$999.99");
        assert_eq!(fmt(CurrencyLocale::EnUs).format(dec!(1000)), "$1,000.00");
    }

    #[test]
    fn format_negative_puts_sign_first() {
        assert_eq!(fmt(CurrencyLocale::EnUs).format(dec!(-3.5)), "-$3.50");
        assert_eq!(fmt(CurrencyLocale::DeDe).format(dec!(-3.5)), "-3,50\u{a0}€");
    }

    #[test]
    fn format_negative_that_rounds_to_zero_has_no_sign() {
        assert_eq!(fmt(CurrencyLocale::EnUs).format(dec!(-0.001)), "$0.00");
    }

    #[test]
    fn format_gb_uses_pound() {
        assert_eq!(fmt(CurrencyLocale::EnGb).format(dec!(12.3)), "£12.30");
    }

    #[test]
    fn format_de_swaps_separators_and_trails_symbol() {
        assert_eq!(fmt(CurrencyLocale::DeDe).format(dec!(1234.5)), "1.234,50\u{a0}€");
    }

    #[test]
    fn format_fr_groups_with_narrow_space() {
        assert_eq!(
            fmt(CurrencyLocale::FrFr).format(dec!(1234.5)),
            "1\u{202f}234,50\u{a0}€"
        );
    }

    #[test]
    fn format_ja_has_no_minor_unit() {
        assert_eq!(fmt(CurrencyLocale::JaJp).format(dec!(1234.6)), "￥1,235");
        assert_eq!(fmt(CurrencyLocale::JaJp).format(dec!(4.9995)), "￥5");
    }

    #[test]
    fn group_digits_handles_short_numbers() {
        assert_eq!(group_digits("0", ','), "0");
        assert_eq!(group_digits("12", ','), "12");
        assert_eq!(group_digits("123", ','), "123");
        assert_eq!(group_digits("1234", ','), "1,234");
        assert_eq!(group_digits("123456", ','), "123,456");
    }

    // =========================================================================
    // locale tests
    // =========================================================================

    #[test]
    fn from_tag_accepts_common_spellings() {
        assert_eq!(CurrencyLocale::from_tag("en-US"), Ok(CurrencyLocale::EnUs));
        assert_eq!(CurrencyLocale::from_tag("en_GB"), Ok(CurrencyLocale::EnGb));
        assert_eq!(CurrencyLocale::from_tag("de_DE.UTF-8"), Ok(CurrencyLocale::DeDe));
        assert_eq!(CurrencyLocale::from_tag("fr_FR@euro"), Ok(CurrencyLocale::FrFr));
        assert_eq!(CurrencyLocale::from_tag("JA-jp"), Ok(CurrencyLocale::JaJp));
    }

    #[test]
    fn from_tag_rejects_unknown_locale() {
        assert_eq!(
            CurrencyLocale::from_tag("pt-BR"),
            Err(CurrencyError::UnsupportedLocale("pt-BR".to_string()))
        );
    }

    #[test]
    fn from_env_prefers_lc_all() {
        let locale = CurrencyLocale::from_env_with(|key| match key {
            "LC_ALL" => Some("de_DE.UTF-8".to_string()),
            "LANG" => Some("en_GB.UTF-8".to_string()),
            _ => None,
        });

        assert_eq!(locale, CurrencyLocale::DeDe);
    }

    #[test]
    fn from_env_skips_empty_values() {
        let locale = CurrencyLocale::from_env_with(|key| match key {
            "LC_ALL" => Some(String::new()),
            "LC_MONETARY" => Some("ja_JP.UTF-8".to_string()),
            _ => None,
        });

        assert_eq!(locale, CurrencyLocale::JaJp);
    }

    #[test]
    fn from_env_falls_back_to_us() {
        assert_eq!(CurrencyLocale::from_env_with(|_| None), CurrencyLocale::EnUs);
        assert_eq!(
            CurrencyLocale::from_env_with(|_| Some("C".to_string())),
            CurrencyLocale::EnUs
        );
    }

    #[test]
    fn locale_round_trips_through_string() {
        for locale in CurrencyLocale::all() {
            assert_eq!(CurrencyLocale::try_from(String::from(*locale)), Ok(*locale));
        }
    }
}
