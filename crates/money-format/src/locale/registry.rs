use thiserror::Error;

/// Maximum number of fraction digits rendered by [`format_locale_number`].
///
/// Mirrors the default of platform number formatters (`Intl.NumberFormat`, ICU), which round
/// plain numbers to three fraction digits unless told otherwise.
pub const MAX_FRACTION_DIGITS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SeparatorError {
    #[error("decimal and grouping separators must differ (both are {0:?})")]
    Ambiguous(char),
    #[error("separator {0:?} is an ASCII digit")]
    Digit(char),
}

/// The decimal/grouping separator pair a locale uses for plain numbers.
///
/// A missing grouping separator means the locale does not group digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Separators {
    decimal: char,
    grouping: Option<char>,
}

impl Separators {
    pub fn new(decimal: char, grouping: Option<char>) -> Result<Self, SeparatorError> {
        if decimal.is_ascii_digit() {
            return Err(SeparatorError::Digit(decimal));
        }
        if let Some(grouping) = grouping {
            if grouping.is_ascii_digit() {
                return Err(SeparatorError::Digit(grouping));
            }
            if grouping == decimal {
                return Err(SeparatorError::Ambiguous(decimal));
            }
        }
        Ok(Self { decimal, grouping })
    }

    const fn grouped(decimal: char, grouping: char) -> Self {
        Self {
            decimal,
            grouping: Some(grouping),
        }
    }

    pub const fn decimal(&self) -> char {
        self.decimal
    }

    pub const fn grouping(&self) -> Option<char> {
        self.grouping
    }
}

impl Default for Separators {
    /// `.` decimal separator without digit grouping.
    fn default() -> Self {
        Self {
            decimal: '.',
            grouping: None,
        }
    }
}

/// Built-in locale entry: a canonical BCP-47 tag plus its separators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberLocale {
    pub id: &'static str,
    pub separators: Separators,
}

pub static EN_US: NumberLocale = NumberLocale {
    id: "en-US",
    separators: Separators::grouped('.', ','),
};

/// British English uses the same separators as `en-US`.
pub static EN_GB: NumberLocale = NumberLocale {
    id: "en-GB",
    separators: Separators::grouped('.', ','),
};

pub static DE_DE: NumberLocale = NumberLocale {
    id: "de-DE",
    separators: Separators::grouped(',', '.'),
};

/// Swiss German (`'` grouping, `.` decimal).
pub static DE_CH: NumberLocale = NumberLocale {
    id: "de-CH",
    separators: Separators::grouped('.', '\''),
};

/// French (France) groups with U+00A0 NO-BREAK SPACE.
pub static FR_FR: NumberLocale = NumberLocale {
    id: "fr-FR",
    separators: Separators::grouped(',', '\u{00A0}'),
};

pub static FR_CH: NumberLocale = NumberLocale {
    id: "fr-CH",
    separators: Separators::grouped('.', '\''),
};

pub static ES_ES: NumberLocale = NumberLocale {
    id: "es-ES",
    separators: Separators::grouped(',', '.'),
};

/// Spanish (Mexico) uses `.` for decimals and `,` for grouping.
pub static ES_MX: NumberLocale = NumberLocale {
    id: "es-MX",
    separators: Separators::grouped('.', ','),
};

pub static IT_IT: NumberLocale = NumberLocale {
    id: "it-IT",
    separators: Separators::grouped(',', '.'),
};

pub static IT_CH: NumberLocale = NumberLocale {
    id: "it-CH",
    separators: Separators::grouped('.', '\''),
};

/// Canonicalize a locale tag to one of the built-in ids.
///
/// `-` and `_` are equivalent and matching is case-insensitive. POSIX suffixes (`en_US.UTF-8`,
/// `de_DE@euro`) and BCP-47 extensions (`fr-FR-u-nu-latn`) are dropped. Regions that are not
/// listed fall back to the language's primary locale (`de-AT` -> `de-DE`).
pub fn normalize_locale_id(id: &str) -> Option<&'static str> {
    let trimmed = id.trim();
    if trimmed.is_empty() {
        return None;
    }

    let mut key: String = trimmed
        .chars()
        .map(|ch| match ch {
            '_' => '-',
            other => other.to_ascii_lowercase(),
        })
        .collect();

    for marker in [".", "@", "-u-", "-x-"] {
        if let Some(idx) = key.find(marker) {
            key.truncate(idx);
        }
    }

    match key.as_str() {
        "en-us" | "en" => Some("en-US"),
        "en-gb" | "en-uk" => Some("en-GB"),
        "de-de" | "de" => Some("de-DE"),
        "de-ch" => Some("de-CH"),
        "fr-fr" | "fr" => Some("fr-FR"),
        "fr-ch" => Some("fr-CH"),
        "es-es" | "es" => Some("es-ES"),
        "es-mx" => Some("es-MX"),
        "it-it" | "it" => Some("it-IT"),
        "it-ch" => Some("it-CH"),
        _ => match key.split('-').next().unwrap_or("") {
            "en" => Some("en-US"),
            "de" => Some("de-DE"),
            "fr" => Some("fr-FR"),
            "es" => Some("es-ES"),
            "it" => Some("it-IT"),
            _ => None,
        },
    }
}

pub fn get_locale(id: &str) -> Option<&'static NumberLocale> {
    match normalize_locale_id(id)? {
        "en-US" => Some(&EN_US),
        "en-GB" => Some(&EN_GB),
        "de-DE" => Some(&DE_DE),
        "de-CH" => Some(&DE_CH),
        "fr-FR" => Some(&FR_FR),
        "fr-CH" => Some(&FR_CH),
        "es-ES" => Some(&ES_ES),
        "es-MX" => Some(&ES_MX),
        "it-IT" => Some(&IT_IT),
        "it-CH" => Some(&IT_CH),
        _ => None,
    }
}

/// Source of locale separators.
///
/// Hosts with a richer number-formatting facility (ICU, the browser's `Intl`) can implement this
/// to support locales outside the built-in table.
pub trait SeparatorResolver {
    fn resolve(&self, locale: &str) -> Option<Separators>;
}

/// Resolver backed by the built-in locale table.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinLocales;

impl SeparatorResolver for BuiltinLocales {
    fn resolve(&self, locale: &str) -> Option<Separators> {
        get_locale(locale).map(|entry| entry.separators)
    }
}

impl<F> SeparatorResolver for F
where
    F: Fn(&str) -> Option<Separators>,
{
    fn resolve(&self, locale: &str) -> Option<Separators> {
        self(locale)
    }
}

/// Render a number with locale separators, the way a platform number formatter does with its
/// default options.
///
/// The integer part is grouped in threes, the fraction is rounded (half away from zero, on the
/// shortest decimal representation) to [`MAX_FRACTION_DIGITS`] with trailing zeros dropped.
/// `NaN` renders as `"NaN"` and infinities as `"∞"`/`"-∞"`.
pub fn format_locale_number(value: f64, separators: &Separators) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value < 0.0 { "-∞" } else { "∞" }.to_string();
    }

    // `f64`'s `Display` never uses exponent notation, so this is always a plain digit string.
    let plain = value.abs().to_string();
    let (int_part, frac_part) = plain.split_once('.').unwrap_or((plain.as_str(), ""));
    let (int_part, frac_part) = round_fraction(int_part, frac_part, MAX_FRACTION_DIGITS);
    let frac_part = frac_part.trim_end_matches('0');

    // Negative zero keeps its sign (`-0.0001` renders as `-0`).
    let sign = if value.is_sign_negative() { "-" } else { "" };

    let grouped_int = match separators.grouping {
        Some(sep) => group_thousands(&int_part, sep),
        None => int_part,
    };

    if frac_part.is_empty() {
        format!("{sign}{grouped_int}")
    } else {
        format!("{sign}{grouped_int}{}{frac_part}", separators.decimal)
    }
}

fn round_fraction(int_part: &str, frac_part: &str, max_digits: usize) -> (String, String) {
    if frac_part.len() <= max_digits {
        return (int_part.to_string(), frac_part.to_string());
    }

    let round_up = frac_part.as_bytes()[max_digits] >= b'5';
    let mut digits: Vec<u8> = int_part
        .bytes()
        .chain(frac_part[..max_digits].bytes())
        .collect();

    if round_up {
        let mut idx = digits.len();
        loop {
            if idx == 0 {
                digits.insert(0, b'1');
                break;
            }
            idx -= 1;
            if digits[idx] == b'9' {
                digits[idx] = b'0';
            } else {
                digits[idx] += 1;
                break;
            }
        }
    }

    let split = digits.len() - max_digits;
    let frac = digits.split_off(split);
    // Both halves are ASCII digits taken from `f64::to_string`.
    let int = String::from_utf8_lossy(&digits).into_owned();
    let frac = String::from_utf8_lossy(&frac).into_owned();
    (int, frac)
}

fn group_thousands(int_part: &str, sep: char) -> String {
    let len = int_part.len();
    if len <= 3 {
        return int_part.to_string();
    }

    let mut out = String::with_capacity(len + (len / 3) * sep.len_utf8());
    let mut first_group = len % 3;
    if first_group == 0 {
        first_group = 3;
    }

    out.push_str(&int_part[..first_group]);
    let mut idx = first_group;
    while idx < len {
        out.push(sep);
        out.push_str(&int_part[idx..idx + 3]);
        idx += 3;
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_locale_ids() {
        assert_eq!(normalize_locale_id("en-us"), Some("en-US"));
        assert_eq!(normalize_locale_id("en_US"), Some("en-US"));
        assert_eq!(normalize_locale_id("en_US.UTF-8"), Some("en-US"));
        assert_eq!(normalize_locale_id("en_US@posix"), Some("en-US"));
        assert_eq!(normalize_locale_id("en"), Some("en-US"));
        assert_eq!(normalize_locale_id("en_uk"), Some("en-GB"));
        assert_eq!(normalize_locale_id("en-AU"), Some("en-US"));
        assert_eq!(normalize_locale_id("de-AT"), Some("de-DE"));
        assert_eq!(normalize_locale_id("de_ch"), Some("de-CH"));
        assert_eq!(normalize_locale_id("fr-CA"), Some("fr-FR"));
        assert_eq!(normalize_locale_id("es-AR"), Some("es-ES"));
        assert_eq!(normalize_locale_id("it-CH"), Some("it-CH"));
        assert_eq!(normalize_locale_id("fr-FR-u-nu-latn"), Some("fr-FR"));
        assert_eq!(normalize_locale_id("ja-JP"), None);
        assert_eq!(normalize_locale_id(""), None);
        assert_eq!(normalize_locale_id("   "), None);
    }

    #[test]
    fn rejects_ambiguous_separators() {
        assert_eq!(Separators::new(',', Some(',')), Err(SeparatorError::Ambiguous(',')));
        assert_eq!(Separators::new('1', None), Err(SeparatorError::Digit('1')));
        assert_eq!(Separators::new('.', Some('0')), Err(SeparatorError::Digit('0')));

        let swiss = Separators::new('.', Some('\'')).unwrap();
        assert_eq!(swiss, DE_CH.separators);
        assert_eq!(Separators::new(',', None).unwrap().grouping(), None);
    }

    #[test]
    fn builtin_resolver_uses_the_table() {
        assert_eq!(BuiltinLocales.resolve("de_DE"), Some(DE_DE.separators));
        assert_eq!(BuiltinLocales.resolve("xx-YY"), None);

        let custom = |id: &str| (id == "x-test").then(|| Separators::new('.', Some('_')).unwrap());
        assert_eq!(custom.resolve("x-test").and_then(|s| s.grouping()), Some('_'));
    }

    #[test]
    fn groups_thousands() {
        assert_eq!(group_thousands("1", ','), "1");
        assert_eq!(group_thousands("123", ','), "123");
        assert_eq!(group_thousands("1234", ','), "1,234");
        assert_eq!(group_thousands("123456", '.'), "123.456");
        assert_eq!(group_thousands("1234567", '\u{00A0}'), "1\u{00A0}234\u{00A0}567");
    }

    #[test]
    fn rounds_fraction_to_three_digits() {
        let en = EN_US.separators;
        assert_eq!(format_locale_number(1234.5678, &en), "1,234.568");
        assert_eq!(format_locale_number(1.0005, &en), "1.001");
        assert_eq!(format_locale_number(0.9996, &en), "1");
        assert_eq!(format_locale_number(999.9999, &en), "1,000");
        assert_eq!(format_locale_number(1.5, &en), "1.5");
        assert_eq!(format_locale_number(0.0001, &en), "0");
    }

    #[test]
    fn formats_signs_and_specials() {
        let de = DE_DE.separators;
        assert_eq!(format_locale_number(-1234.5, &de), "-1.234,5");
        assert_eq!(format_locale_number(-0.0, &de), "-0");
        assert_eq!(format_locale_number(-0.0001, &de), "-0");
        assert_eq!(format_locale_number(-0.5, &de), "-0,5");
        assert_eq!(format_locale_number(f64::NAN, &de), "NaN");
        assert_eq!(format_locale_number(f64::INFINITY, &de), "∞");
        assert_eq!(format_locale_number(f64::NEG_INFINITY, &de), "-∞");
        assert_eq!(format_locale_number(1e21, &de), "1.000.000.000.000.000.000.000");
    }

    #[test]
    fn ungrouped_locale_keeps_digits_together() {
        let plain = Separators::default();
        assert_eq!(format_locale_number(1234567.25, &plain), "1234567.25");
    }
}
