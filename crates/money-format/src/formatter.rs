use crate::locale::{BuiltinLocales, SeparatorResolver, Separators};
use crate::numeric::{is_numeric, major_to_cents, parse_float_prefix};
use crate::{format_locale_number, AmountValue};

/// Converts amounts between a locale's textual form and plain numbers.
///
/// A formatter is bound to one locale for its whole life; switching locales means building a new
/// formatter. Every operation is total: malformed text yields `NaN` or `false`, never a panic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleFormatter {
    locale: String,
    separators: Separators,
}

impl LocaleFormatter {
    /// Build a formatter from the built-in locale table.
    pub fn new(locale: &str) -> Self {
        Self::with_resolver(locale, &BuiltinLocales)
    }

    /// Build a formatter whose separators come from `resolver`.
    ///
    /// Unresolvable locales fall back to [`Separators::default`] (`.` decimal, no grouping).
    pub fn with_resolver<R: SeparatorResolver + ?Sized>(locale: &str, resolver: &R) -> Self {
        let separators = resolver.resolve(locale).unwrap_or_else(|| {
            log::warn!(
                "no number separators known for locale {locale:?}; using '.' without grouping"
            );
            Separators::default()
        });
        Self::with_separators(locale, separators)
    }

    pub fn with_separators(locale: &str, separators: Separators) -> Self {
        Self {
            locale: locale.to_string(),
            separators,
        }
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub fn separators(&self) -> Separators {
        self.separators
    }

    pub fn decimal_separator(&self) -> char {
        self.separators.decimal()
    }

    pub fn grouping_separator(&self) -> Option<char> {
        self.separators.grouping()
    }

    /// Rewrite locale text into neutral form: `.` decimal point, grouping separators removed.
    ///
    /// Only the text before the first decimal separator loses its grouping separators. Anything
    /// after a second decimal separator is carried over verbatim (`"1,2,3,4.5.6"` ->
    /// `"1234.5.6"` in `en-US`), so malformed input survives for validation to reject.
    pub fn to_neutral_form(&self, text: &str) -> String {
        let decimal_sep = self.separators.decimal();
        let mut parts = text.split(decimal_sep);
        let whole = parts.next().unwrap_or("");
        let decimal = parts.next();
        let others: Vec<&str> = parts.collect();

        let mut out = String::with_capacity(text.len());
        match self.separators.grouping() {
            Some(grouping) => out.extend(whole.chars().filter(|&ch| ch != grouping)),
            None => out.push_str(whole),
        }
        if let Some(decimal) = decimal {
            out.push('.');
            out.push_str(decimal);
        }
        if !others.is_empty() {
            let sep = decimal_sep.to_string();
            out.push_str(&sep);
            out.push_str(&others.join(&sep));
        }
        out
    }

    /// Parse locale text as a float, reading only its leading numeric prefix.
    ///
    /// Missing or empty text reads as `0`; text without a numeric prefix reads as `NaN`.
    pub fn parse_neutral_float(&self, text: Option<&str>) -> f64 {
        match text {
            None | Some("") => 0.0,
            Some(text) => parse_float_prefix(&self.to_neutral_form(text)),
        }
    }

    /// Check whether `text` is a well-formed number in this locale.
    ///
    /// Missing or empty text is valid. Otherwise there may be at most one decimal separator,
    /// the fraction (if any) must be ASCII digits, and the whole part must be present and
    /// grouped in threes with a leading group of one to three digits. Locales without grouping
    /// accept any run of digits for the whole part.
    pub fn is_valid_format(&self, text: Option<&str>) -> bool {
        let text = match text {
            None | Some("") => return true,
            Some(text) => text,
        };

        let mut parts = text.split(self.separators.decimal());
        let whole = parts.next().unwrap_or("");
        let decimal = parts.next();
        if parts.next().is_some() {
            return false;
        }

        if let Some(decimal) = decimal {
            if !decimal.is_empty() && !is_ascii_digits(decimal) {
                return false;
            }
        }

        if whole.is_empty() {
            return false;
        }

        match self.separators.grouping() {
            Some(grouping) => {
                let mut groups = whole.split(grouping);
                let first = groups.next().unwrap_or("");
                if !(1..=3).contains(&first.len()) || !is_ascii_digits(first) {
                    return false;
                }
                groups.all(|group| group.len() == 3 && is_ascii_digits(group))
            }
            None => is_ascii_digits(whole),
        }
    }

    /// Render an amount given in cents as locale text with at least two fraction digits.
    ///
    /// `420` renders as `"4.20"` in `en-US`, `100` as `"1.00"`. Values that are not numbers are
    /// passed through: a `NaN` amount renders as `"NaN"` and non-numeric text is returned as is.
    pub fn cents_to_display(&self, value: &AmountValue) -> String {
        let cents = match value {
            AmountValue::Cents(cents) if cents.is_nan() => return "NaN".to_string(),
            AmountValue::Cents(cents) => *cents,
            AmountValue::Text(text) if !is_numeric(text) => return text.clone(),
            AmountValue::Text(text) => parse_float_prefix(text),
        };

        let major = cents / 100.0;
        let rendered = format_locale_number(major, &self.separators);
        if !major.is_finite() {
            return rendered;
        }

        let decimal_sep = self.separators.decimal();
        match rendered.split_once(decimal_sep) {
            Some((int_part, frac_part)) => format!("{int_part}{decimal_sep}{frac_part:0<2}"),
            None => format!("{rendered}{decimal_sep}00"),
        }
    }

    /// Re-render typed text in locale form.
    ///
    /// Text that is already valid is returned untouched, so an acceptable (if not fully
    /// normalized) value is never rewritten under the user. Text whose neutral form is not a
    /// number is also returned untouched. Everything else is parsed and rendered with grouping.
    pub fn reformat_to_locale(&self, text: &str) -> String {
        if text.is_empty() {
            return String::new();
        }
        if self.is_valid_format(Some(text)) {
            return text.to_string();
        }

        let neutral = self.to_neutral_form(text);
        if !is_numeric(&neutral) {
            log::debug!("leaving non-numeric amount {text:?} as typed");
            return text.to_string();
        }

        // Prefix parsing drops anything after the number, unlike `to_neutral_form`.
        let rendered = format_locale_number(parse_float_prefix(&neutral), &self.separators);
        log::debug!("reformatted amount {text:?} as {rendered:?} for {}", self.locale);
        rendered
    }

    /// Amount in cents for locale text, or `NaN` when the text is not a number.
    pub fn cents(&self, text: &str) -> f64 {
        if !is_numeric(&self.to_neutral_form(text)) {
            return f64::NAN;
        }
        major_to_cents(self.parse_neutral_float(Some(text)))
    }
}

impl Default for LocaleFormatter {
    /// `en-US` formatter.
    fn default() -> Self {
        Self::with_separators(crate::EN_US.id, crate::EN_US.separators)
    }
}

fn is_ascii_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}
