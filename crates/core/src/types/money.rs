//! Money formatting with per-locale conventions.
//!
//! Prices are carried as [`rust_decimal::Decimal`] in the currency's major
//! unit (dollars, not cents). [`format_money`] renders an amount using the
//! store's [`MoneyFormat`] - currency symbol, decimal digits, and the
//! locale's separator and symbol-placement conventions. This is deliberately
//! not a `format!("${amount:.2}")` template: `de-DE` and `fr-FR` place the
//! symbol after the amount and swap the separators, and `JPY` has no minor
//! unit at all.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors for money/locale handling.
#[derive(Debug, Error)]
pub enum MoneyError {
    /// The locale tag is not one the formatter knows how to render.
    #[error("unsupported locale tag: {0}")]
    UnsupportedLocale(String),
}

/// ISO 4217 currency codes supported by store datasets.
///
/// Unknown codes are rejected when a dataset is deserialized, so the
/// formatter itself never sees an invalid currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CurrencyCode {
    #[default]
    USD,
    EUR,
    GBP,
    CAD,
    AUD,
    JPY,
}

impl CurrencyCode {
    /// ISO 4217 code string.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::USD => "USD",
            Self::EUR => "EUR",
            Self::GBP => "GBP",
            Self::CAD => "CAD",
            Self::AUD => "AUD",
            Self::JPY => "JPY",
        }
    }

    /// Display symbol.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::USD | Self::CAD | Self::AUD => "$",
            Self::EUR => "€",
            Self::GBP => "£",
            Self::JPY => "¥",
        }
    }

    /// Number of minor-unit digits rendered for this currency.
    #[must_use]
    pub const fn decimal_digits(self) -> u32 {
        match self {
            Self::JPY => 0,
            _ => 2,
        }
    }
}

impl std::fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Where the currency symbol sits relative to the amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SymbolPlacement {
    /// `$1,234.50`
    Prefix,
    /// `1.234,50 €` (separated by a no-break space)
    SuffixSpaced,
}

/// Locales the formatter can render.
///
/// Parsed from a BCP-47-style tag (`en-US`, `de-DE`, ...). Tags outside this
/// set are rejected at dataset load time with
/// [`MoneyError::UnsupportedLocale`]; there is no silent fallback, since a
/// wrong separator convention on a price is a data defect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(try_from = "String", into = "String")]
pub enum Locale {
    #[default]
    EnUs,
    EnGb,
    EnCa,
    EnAu,
    DeDe,
    FrFr,
    JaJp,
}

impl Locale {
    /// The canonical tag for this locale.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::EnUs => "en-US",
            Self::EnGb => "en-GB",
            Self::EnCa => "en-CA",
            Self::EnAu => "en-AU",
            Self::DeDe => "de-DE",
            Self::FrFr => "fr-FR",
            Self::JaJp => "ja-JP",
        }
    }

    /// Parse a locale tag.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::UnsupportedLocale`] for tags outside the
    /// supported set.
    pub fn from_tag(tag: &str) -> Result<Self, MoneyError> {
        match tag {
            "en-US" => Ok(Self::EnUs),
            "en-GB" => Ok(Self::EnGb),
            "en-CA" => Ok(Self::EnCa),
            "en-AU" => Ok(Self::EnAu),
            "de-DE" => Ok(Self::DeDe),
            "fr-FR" => Ok(Self::FrFr),
            "ja-JP" => Ok(Self::JaJp),
            other => Err(MoneyError::UnsupportedLocale(other.to_owned())),
        }
    }

    const fn decimal_separator(self) -> char {
        match self {
            Self::DeDe | Self::FrFr => ',',
            _ => '.',
        }
    }

    const fn group_separator(self) -> char {
        match self {
            Self::DeDe => '.',
            // French groups with a no-break space.
            Self::FrFr => '\u{a0}',
            _ => ',',
        }
    }

    const fn symbol_placement(self) -> SymbolPlacement {
        match self {
            Self::DeDe | Self::FrFr => SymbolPlacement::SuffixSpaced,
            _ => SymbolPlacement::Prefix,
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

impl TryFrom<String> for Locale {
    type Error = MoneyError;

    fn try_from(tag: String) -> Result<Self, Self::Error> {
        Self::from_tag(&tag)
    }
}

impl From<Locale> for String {
    fn from(locale: Locale) -> Self {
        locale.tag().to_owned()
    }
}

impl std::str::FromStr for Locale {
    type Err = MoneyError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        Self::from_tag(tag)
    }
}

/// A store's money rendering configuration: currency plus display locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct MoneyFormat {
    /// ISO 4217 currency code.
    pub currency: CurrencyCode,
    /// Display locale tag.
    pub locale: Locale,
}

/// Format an amount for display.
///
/// The amount is rounded half-away-from-zero to the currency's minor-unit
/// digits, grouped and separated per the locale, and carries the currency
/// symbol in the locale's position. Negative amounts render with a leading
/// minus sign: `-$1,234.50`, `-1.234,50 €`.
#[must_use]
pub fn format_money(amount: Decimal, format: &MoneyFormat) -> String {
    let digits = format.currency.decimal_digits();
    let rounded = amount.round_dp_with_strategy(digits, RoundingStrategy::MidpointAwayFromZero);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();

    let mut magnitude = rounded.abs();
    magnitude.rescale(digits);
    let rendered = magnitude.to_string();
    let (int_part, frac_part) = rendered
        .split_once('.')
        .unwrap_or((rendered.as_str(), ""));

    let grouped = group_digits(int_part, format.locale.group_separator());
    let body = if frac_part.is_empty() {
        grouped
    } else {
        format!("{grouped}{}{frac_part}", format.locale.decimal_separator())
    };

    let sign = if negative { "-" } else { "" };
    let symbol = format.currency.symbol();
    match format.locale.symbol_placement() {
        SymbolPlacement::Prefix => format!("{sign}{symbol}{body}"),
        SymbolPlacement::SuffixSpaced => format!("{sign}{body}\u{a0}{symbol}"),
    }
}

/// Insert a group separator every three digits, right to left.
fn group_digits(int_part: &str, separator: char) -> String {
    let count = int_part.chars().count();
    let mut out = String::with_capacity(count + count / 3);
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (count - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(c);
    }
    out
}
