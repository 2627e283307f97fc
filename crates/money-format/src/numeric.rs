//! Neutral number syntax.
//!
//! A locale-neutral number uses `.` as the decimal point and has no grouping separators. Two
//! readings of such text are needed when an amount is being typed:
//!
//! - [`to_number`] / [`is_numeric`]: the whole string must be a number (surrounding whitespace is
//!   ignored and a blank string reads as zero).
//! - [`parse_float_prefix`]: only a leading numeric prefix is read and the rest is ignored
//!   (`"123err"` -> `123`).

/// Whole-string numeric conversion. Returns `NaN` when `text` is not a number.
///
/// Accepts an optional sign, decimal digits with an optional fraction and exponent, `Infinity`,
/// and unsigned `0x`/`0o`/`0b` integer literals.
pub fn to_number(text: &str) -> f64 {
    let trimmed = text.trim_matches(is_number_whitespace);
    if trimmed.is_empty() {
        return 0.0;
    }
    if let Some(value) = parse_radix_literal(trimmed) {
        return value;
    }
    match decimal_literal_len(trimmed) {
        Some(len) if len == trimmed.len() => parse_decimal_literal(trimmed),
        _ => f64::NAN,
    }
}

/// `true` unless [`to_number`] would produce `NaN`.
pub fn is_numeric(text: &str) -> bool {
    !to_number(text).is_nan()
}

/// Read the longest leading decimal number of `text`, ignoring whatever follows it.
///
/// Leading whitespace is skipped. Returns `NaN` when `text` does not start with a number.
pub fn parse_float_prefix(text: &str) -> f64 {
    let trimmed = text.trim_start_matches(is_number_whitespace);
    match decimal_literal_len(trimmed) {
        Some(len) => parse_decimal_literal(&trimmed[..len]),
        None => f64::NAN,
    }
}

/// Convert a major-unit amount to minor units (cents).
///
/// Halves round toward positive infinity (`0.125` -> `13`, `-0.125` -> `-12`); `NaN` stays `NaN`.
pub fn major_to_cents(value: f64) -> f64 {
    let scaled = value * 100.0;
    let floor = scaled.floor();
    if scaled - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

fn is_number_whitespace(ch: char) -> bool {
    ch.is_whitespace() || ch == '\u{FEFF}'
}

/// Byte length of the decimal literal at the start of `s`, if any.
fn decimal_literal_len(s: &str) -> Option<usize> {
    let bytes = s.as_bytes();
    let mut idx = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        idx = 1;
    }
    if s[idx..].starts_with("Infinity") {
        return Some(idx + "Infinity".len());
    }

    let int_start = idx;
    while idx < bytes.len() && bytes[idx].is_ascii_digit() {
        idx += 1;
    }
    let mut digits = idx - int_start;

    if idx < bytes.len() && bytes[idx] == b'.' {
        let frac_start = idx + 1;
        let mut end = frac_start;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }
        // A lone `.` is not a number, but `5.` and `.5` are.
        if digits + (end - frac_start) > 0 {
            digits += end - frac_start;
            idx = end;
        }
    }

    if digits == 0 {
        return None;
    }

    if idx < bytes.len() && matches!(bytes[idx], b'e' | b'E') {
        let mut end = idx + 1;
        if end < bytes.len() && matches!(bytes[end], b'+' | b'-') {
            end += 1;
        }
        let exp_start = end;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }
        if end > exp_start {
            idx = end;
        }
    }

    Some(idx)
}

fn parse_decimal_literal(literal: &str) -> f64 {
    match literal {
        "Infinity" | "+Infinity" => f64::INFINITY,
        "-Infinity" => f64::NEG_INFINITY,
        // Overflowing exponents parse to an infinity rather than failing.
        _ => literal.parse::<f64>().unwrap_or(f64::NAN),
    }
}

fn parse_radix_literal(s: &str) -> Option<f64> {
    let bytes = s.as_bytes();
    if bytes.len() < 3 || bytes[0] != b'0' {
        return None;
    }
    let radix = match bytes[1] {
        b'x' | b'X' => 16,
        b'o' | b'O' => 8,
        b'b' | b'B' => 2,
        _ => return None,
    };

    let mut value = 0.0_f64;
    for ch in s[2..].chars() {
        let digit = ch.to_digit(radix)?;
        value = value * f64::from(radix) + f64::from(digit);
    }
    Some(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_string_conversion() {
        assert_eq!(to_number("1234.56"), 1234.56);
        assert_eq!(to_number("  42\n"), 42.0);
        assert_eq!(to_number(""), 0.0);
        assert_eq!(to_number("   "), 0.0);
        assert_eq!(to_number("-.5"), -0.5);
        assert_eq!(to_number("5."), 5.0);
        assert_eq!(to_number("1e3"), 1000.0);
        assert_eq!(to_number("0x1F"), 31.0);
        assert_eq!(to_number("0b101"), 5.0);
        assert_eq!(to_number("-Infinity"), f64::NEG_INFINITY);
        assert_eq!(to_number("1e400"), f64::INFINITY);

        let rejected = [
            "12err", "1,000", ".", "-", "inf", "nan", "NaN", "1e", "-0x10", "0x", "1.2.3",
        ];
        for text in rejected {
            assert!(to_number(text).is_nan(), "{text:?} should not be numeric");
            assert!(!is_numeric(text));
        }
    }

    #[test]
    fn prefix_parsing_ignores_trailing_text() {
        assert_eq!(parse_float_prefix("123err"), 123.0);
        assert_eq!(parse_float_prefix("  12.5kg"), 12.5);
        assert_eq!(parse_float_prefix("1234.5.6"), 1234.5);
        assert_eq!(parse_float_prefix("12e"), 12.0);
        assert_eq!(parse_float_prefix("12e-1x"), 1.2);
        assert_eq!(parse_float_prefix("0x10"), 0.0);
        assert_eq!(parse_float_prefix("Infinityx"), f64::INFINITY);
        assert!(parse_float_prefix("").is_nan());
        assert!(parse_float_prefix("err").is_nan());
        assert!(parse_float_prefix("-").is_nan());
    }

    #[test]
    fn cents_round_half_up() {
        assert_eq!(major_to_cents(1234.567), 123457.0);
        assert_eq!(major_to_cents(1234.564), 123456.0);
        assert_eq!(major_to_cents(1234.56), 123456.0);
        assert_eq!(major_to_cents(0.125), 13.0);
        assert_eq!(major_to_cents(-0.125), -12.0);
        assert!(major_to_cents(f64::NAN).is_nan());
        assert_eq!(major_to_cents(f64::INFINITY), f64::INFINITY);
    }
}
