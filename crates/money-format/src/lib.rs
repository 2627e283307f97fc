//! Locale-aware parsing, validation and formatting of monetary amounts.
//!
//! The crate is split into three layers:
//! - [`locale`]: built-in decimal/grouping separators per locale and plain number rendering.
//! - [`numeric`]: reading locale-neutral number text (`.` decimal point, no grouping).
//! - [`LocaleFormatter`]: converting between locale text, neutral numbers and cents while an
//!   amount is being typed.

pub mod locale;
pub mod numeric;

mod formatter;

use serde::{Deserialize, Serialize};

pub use crate::formatter::LocaleFormatter;
pub use locale::{
    format_locale_number, get_locale, BuiltinLocales, NumberLocale, SeparatorError,
    SeparatorResolver, Separators, DE_DE, EN_US,
};

/// An amount handed to [`LocaleFormatter::cents_to_display`]: a number of cents, or text that
/// may or may not hold one.
///
/// Deserializes from either a JSON number or a JSON string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AmountValue {
    Cents(f64),
    Text(String),
}

impl AmountValue {
    /// `true` for amounts a field shows as an empty string: zero, `NaN` and empty text.
    pub fn is_blank(&self) -> bool {
        match self {
            AmountValue::Cents(cents) => *cents == 0.0 || cents.is_nan(),
            AmountValue::Text(text) => text.is_empty(),
        }
    }
}

impl From<f64> for AmountValue {
    fn from(cents: f64) -> Self {
        AmountValue::Cents(cents)
    }
}

impl From<i64> for AmountValue {
    fn from(cents: i64) -> Self {
        AmountValue::Cents(cents as f64)
    }
}

impl From<&str> for AmountValue {
    fn from(text: &str) -> Self {
        AmountValue::Text(text.to_string())
    }
}

impl From<String> for AmountValue {
    fn from(text: String) -> Self {
        AmountValue::Text(text)
    }
}
