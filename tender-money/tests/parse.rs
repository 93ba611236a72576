use std::str::FromStr;

use iso_currency::Currency as IsoCurrency;
use num_bigint::BigInt;
use tender_money::{Currency, Money, MoneyError, Scale, parse, parse_with_currency};

fn usd() -> Currency {
    Currency::Iso(IsoCurrency::USD)
}

fn eur() -> Currency {
    Currency::Iso(IsoCurrency::EUR)
}

#[test]
fn parse_plain_code_form() {
    let m = parse("USD 50.37").unwrap();
    assert_eq!(m.amount(), &BigInt::from(5037));
    assert_eq!(m.currency(), &usd());
    assert_eq!(m.scale(), Scale::Centi);

    let negative = parse("USD -42.10").unwrap();
    assert_eq!(negative.amount(), &BigInt::from(-4210));

    let whole = parse("JPY 500").unwrap();
    assert_eq!(whole.amount(), &BigInt::from(500));
    assert_eq!(whole.scale(), Scale::Whole);
}

#[test]
fn parse_pads_short_fractions_to_the_currency_default() {
    let m = parse("USD 7").unwrap();
    assert_eq!(m.amount(), &BigInt::from(700));
    assert_eq!(m.scale(), Scale::Centi);

    let one_digit = parse("USD 7.5").unwrap();
    assert_eq!(one_digit.amount(), &BigInt::from(750));

    let dinar = parse("BHD 1.5").unwrap();
    assert_eq!(dinar.amount(), &BigInt::from(1500));
    assert_eq!(dinar.scale(), Scale::Milli);
}

#[test]
fn parse_promotes_fine_fractions_to_a_wider_scale() {
    let milli = parse("USD 5.555").unwrap();
    assert_eq!(milli.scale(), Scale::Milli);
    assert_eq!(milli.amount(), &BigInt::from(5555));

    // Four digits land on micro, padded.
    let micro = parse("USD 0.1234").unwrap();
    assert_eq!(micro.scale(), Scale::Micro);
    assert_eq!(micro.amount(), &BigInt::from(123_400));

    let nano = parse("USD 0.000_000_250").unwrap();
    assert_eq!(nano.scale(), Scale::Nano);
    assert_eq!(nano.amount(), &BigInt::from(250));
}

#[test]
fn parse_accepts_underscore_and_comma_grouping() {
    let underscored = parse("USD 1_000_000.00").unwrap();
    assert_eq!(underscored.amount(), &BigInt::from(100_000_000));

    let commas = parse("USD 1,000,000.00").unwrap();
    assert_eq!(commas, underscored);
}

#[test]
fn parse_rejects_fractions_finer_than_pico() {
    assert!(matches!(
        parse("USD 0.0000000000001"),
        Err(MoneyError::InvalidFormat { .. })
    ));
}

#[test]
fn parse_accepts_unknown_codes_at_centi() {
    let m = parse("DOG 1.00").unwrap();
    assert_eq!(m.currency().code(), "DOG");
    assert_eq!(m.scale(), Scale::Centi);
    assert_eq!(m.amount(), &BigInt::from(100));
}

#[test]
fn parse_symbol_prefix_and_suffix() {
    let dollars = parse("$1,000,000.00").unwrap();
    assert_eq!(dollars.currency(), &usd());
    assert_eq!(dollars.amount(), &BigInt::from(100_000_000));
    assert_eq!(dollars.scale(), Scale::Centi);

    let yen = parse("\u{a5}500").unwrap();
    assert_eq!(yen.currency(), &Currency::Iso(IsoCurrency::JPY));
    assert_eq!(yen.amount(), &BigInt::from(500));
    assert_eq!(yen.scale(), Scale::Whole);

    let euros = parse("50.37 \u{20ac}").unwrap();
    assert_eq!(euros.currency(), &eur());
    assert_eq!(euros.amount(), &BigInt::from(5037));
}

#[test]
fn parse_negative_symbol_form() {
    let m = parse("-$50.37").unwrap();
    assert_eq!(m.amount(), &BigInt::from(-5037));
    assert_eq!(m.currency(), &usd());
}

#[test]
fn explicit_currency_redirects_a_shared_symbol() {
    let cad = Currency::Iso(IsoCurrency::CAD);
    let m = parse_with_currency("$10.00", Some(cad.clone())).unwrap();
    assert_eq!(m.currency(), &cad);
}

#[test]
fn unique_symbol_rejects_a_conflicting_override() {
    let err = parse_with_currency("\u{20ac}10.00", Some(usd())).unwrap_err();
    assert_eq!(
        err,
        MoneyError::CurrencyMismatch {
            expected: eur(),
            found: usd(),
        }
    );
}

#[test]
fn currency_owning_a_unique_symbol_rejects_other_symbols() {
    let err = parse_with_currency("$10.00", Some(eur())).unwrap_err();
    assert_eq!(
        err,
        MoneyError::CurrencyMismatch {
            expected: eur(),
            found: usd(),
        }
    );
}

#[test]
fn explicit_currency_must_match_a_code_form_input() {
    let err = parse_with_currency("USD 1.00", Some(eur())).unwrap_err();
    assert_eq!(
        err,
        MoneyError::CurrencyMismatch {
            expected: eur(),
            found: usd(),
        }
    );
    // A matching override is a no-op.
    let ok = parse_with_currency("USD 1.00", Some(usd())).unwrap();
    assert_eq!(ok.amount(), &BigInt::from(100));
}

#[test]
fn parse_rejects_unclassifiable_input() {
    for input in [
        "",
        "5.00",
        "usd 5.00",
        "USD",
        "USD 5.",
        "USD 5.0.0",
        "USDX 5.00",
        "hello",
        "$",
    ] {
        assert!(
            matches!(parse(input), Err(MoneyError::InvalidFormat { .. })),
            "expected InvalidFormat for {input:?}"
        );
    }
}

#[test]
fn negative_zero_collapses_to_zero() {
    let m = parse("USD -0.00").unwrap();
    assert_eq!(m.amount(), &BigInt::from(0));
    assert_eq!(m.to_string(), "USD 0.00");
}

#[test]
fn from_str_wires_into_the_parser() {
    let m = Money::from_str("USD 1_000.00").unwrap();
    assert_eq!(m.amount(), &BigInt::from(100_000));
}
