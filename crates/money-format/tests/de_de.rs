use money_format::{AmountValue, LocaleFormatter};
use pretty_assertions::assert_eq;

fn de() -> LocaleFormatter {
    LocaleFormatter::new("de-DE")
}

#[test]
fn discovers_separators() {
    let lf = de();
    assert_eq!(lf.locale(), "de-DE");
    assert_eq!(lf.decimal_separator(), ',');
    assert_eq!(lf.grouping_separator(), Some('.'));
}

#[test]
fn neutral_form_uses_a_dot_decimal_point() {
    let lf = de();
    assert_eq!(lf.to_neutral_form("1.234,56"), "1234.56");
    assert_eq!(lf.to_neutral_form("1.2.3.4,5,6"), "1234.5,6");
}

#[test]
fn parses_leading_number() {
    assert_eq!(de().parse_neutral_float(Some("123.456,789")), 123456.789);
}

#[test]
fn validates_grouping_and_decimals() {
    let lf = de();
    assert!(lf.is_valid_format(Some("123.456,789")));
    assert!(lf.is_valid_format(Some("0,5")));
    assert!(!lf.is_valid_format(Some("123,45,67")));
    assert!(!lf.is_valid_format(Some("123.45")));
    assert!(!lf.is_valid_format(Some("1234,5")));
}

#[test]
fn renders_cents() {
    let lf = de();
    assert_eq!(lf.cents_to_display(&AmountValue::Cents(420.0)), "4,20");
    assert_eq!(lf.cents_to_display(&AmountValue::Cents(123450.0)), "1.234,50");
    assert_eq!(lf.cents_to_display(&AmountValue::Cents(100.0)), "1,00");
}

#[test]
fn reformats_and_computes_cents() {
    let lf = de();
    assert_eq!(lf.reformat_to_locale("1234,567"), "1.234,567");
    assert_eq!(lf.reformat_to_locale("1.2345"), "12.345");
    assert_eq!(lf.cents("1.234,56"), 123456.0);
    assert!(lf.cents("12err").is_nan());
}

#[test]
fn other_builtin_locales() {
    let ch = LocaleFormatter::new("de_CH");
    assert_eq!(ch.cents_to_display(&AmountValue::Cents(123450.0)), "1'234.50");

    let fr = LocaleFormatter::new("fr-FR");
    assert_eq!(fr.cents_to_display(&AmountValue::Cents(123450.0)), "1\u{00A0}234,50");
    assert!(fr.is_valid_format(Some("1\u{00A0}234,50")));
}
