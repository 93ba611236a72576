use std::str::FromStr;

use iso_currency::Currency as IsoCurrency;
use num_bigint::BigInt;
use tender_money::{Currency, Decimal, Money, MoneyError, RoundingMode, Scale};

fn usd() -> Currency {
    Currency::Iso(IsoCurrency::USD)
}

fn eur() -> Currency {
    Currency::Iso(IsoCurrency::EUR)
}

fn usd_cents(cents: i64) -> Money {
    Money::new(cents, usd(), Scale::Centi)
}

#[test]
fn construction_and_accessors() {
    let price = Money::new(5037, usd(), Scale::Centi);
    assert_eq!(price.amount(), &BigInt::from(5037));
    assert_eq!(price.currency(), &usd());
    assert_eq!(price.scale(), Scale::Centi);

    let zero = Money::zero(Currency::Iso(IsoCurrency::JPY));
    assert_eq!(zero.amount(), &BigInt::from(0));
    assert_eq!(zero.scale(), Scale::Whole);

    let minor = Money::from_minor_units(125, usd());
    assert_eq!(minor.to_string(), "USD 1.25");

    let (amount, currency, scale) = minor.into_parts();
    assert_eq!(amount, BigInt::from(125));
    assert_eq!(currency, usd());
    assert_eq!(scale, Scale::Centi);
}

#[test]
fn addition_normalizes_mixed_scales() {
    let coarse = usd_cents(5000);
    let fine = Money::new(5, usd(), Scale::Micro);

    let total = coarse.try_add(&fine).unwrap();
    assert_eq!(total.scale(), Scale::Micro);
    assert_eq!(total.amount(), &BigInt::from(50_000_005));
    assert_eq!(total.to_string(), "USD 50.000_005");
}

#[test]
fn addition_rejects_mixed_currencies() {
    let err = usd_cents(100)
        .try_add(&Money::new(100, eur(), Scale::Centi))
        .unwrap_err();
    assert_eq!(
        err,
        MoneyError::CurrencyMismatch {
            expected: usd(),
            found: eur(),
        }
    );
}

#[test]
fn subtraction_is_sum_with_the_negation() {
    let a = usd_cents(1000);
    let b = Money::new(999, usd(), Scale::Milli);

    let diff = a.try_sub(&b).unwrap();
    assert_eq!(diff.scale(), Scale::Milli);
    assert_eq!(diff.to_string(), "USD 9.001");

    let self_diff = a.try_sub(&a).unwrap();
    assert_eq!(self_diff.amount(), &BigInt::from(0));
    assert_eq!(self_diff.scale(), a.scale());
}

#[test]
fn negation_flips_the_sign_only() {
    let price = usd_cents(250);
    let negated = -&price;
    assert_eq!(negated.amount(), &BigInt::from(-250));
    assert_eq!(negated.currency(), &usd());
    assert_eq!(negated.scale(), Scale::Centi);
}

#[test]
fn sum_folds_many_values() {
    let prices = vec![usd_cents(10), usd_cents(20), usd_cents(30)];
    let total = Money::sum(&prices).unwrap();
    assert_eq!(total.to_string(), "USD 0.60");
}

#[test]
fn sum_rejects_empty_input() {
    let empty: Vec<Money> = Vec::new();
    let err = Money::sum(&empty).unwrap_err();
    assert_eq!(err, MoneyError::EmptyInput { operation: "sum" });
}

#[test]
fn multiply_applies_the_factor_at_twelve_digits() {
    let price = usd_cents(10_000);
    let taxed = price.mul(Decimal::from_str("1.08").unwrap());
    assert_eq!(taxed.to_string(), "USD 108.00");
    assert_eq!(taxed.scale(), Scale::Centi);

    let zeroed = price.mul(Decimal::ZERO);
    assert_eq!(zeroed.amount(), &BigInt::from(0));
    assert_eq!(zeroed.scale(), Scale::Centi);

    let negated = price.mul(Decimal::from_str("-1.5").unwrap());
    assert_eq!(negated.to_string(), "USD -150.00");
}

#[test]
fn multiply_rounding_mode_decides_the_final_unit() {
    // 0.05 × 0.5 = 0.025: a tie at centi scale.
    let price = usd_cents(5);
    let half = Decimal::from_str("0.5").unwrap();
    assert_eq!(price.mul_with(half, RoundingMode::HalfUp).to_string(), "USD 0.03");
    assert_eq!(
        price.mul_with(half, RoundingMode::HalfDown).to_string(),
        "USD 0.02"
    );
    assert_eq!(
        price.mul_with(half, RoundingMode::HalfEven).to_string(),
        "USD 0.02"
    );
    assert_eq!(price.mul_with(half, RoundingMode::Floor).to_string(), "USD 0.02");
    assert_eq!(price.mul_with(half, RoundingMode::Ceil).to_string(), "USD 0.03");
}

#[test]
fn factors_finer_than_twelve_digits_are_captured_with_a_rounded_mantissa() {
    // 0.0000000000005 has thirteen fractional digits; the capture rounds
    // its mantissa half-up to one unit of 10^-12.
    let tiny = Decimal::from_str("0.0000000000005").unwrap();
    let price = Money::new(1_000_000_000_000_i64, usd(), Scale::Centi);
    let scaled = price.mul(tiny);
    assert_eq!(scaled.amount(), &BigInt::from(1));
}

#[test]
fn divide_widens_the_scale_with_the_divisor_magnitude() {
    let price = usd_cents(25);

    let kept = price.div(4).unwrap();
    assert_eq!(kept.scale(), Scale::Centi);
    assert_eq!(kept.to_string(), "USD 0.06");

    let milli = price.div(100).unwrap();
    assert_eq!(milli.scale(), Scale::Milli);
    assert_eq!(milli.to_string(), "USD 0.003");

    let nano = price.div(1_000_000).unwrap();
    assert_eq!(nano.scale(), Scale::Nano);
    assert_eq!(nano.to_string(), "USD 0.000_000_250");

    let pico = price.div(1_000_000_000).unwrap();
    assert_eq!(pico.scale(), Scale::Pico);
    assert_eq!(pico.to_string(), "USD 0.000_000_000_250");
}

#[test]
fn divide_never_coarsens_a_fine_input() {
    // Micro input divided by 500: the magnitude table says milli, but the
    // result must stay at least as fine as the operand.
    let price = Money::new(1_000_000, usd(), Scale::Micro);
    let quotient = price.div(500).unwrap();
    assert_eq!(quotient.scale(), Scale::Micro);
    assert_eq!(quotient.amount(), &BigInt::from(2000));
}

#[test]
fn divide_reapplies_the_divisor_sign() {
    let price = usd_cents(900);
    assert_eq!(price.div(-3).unwrap().to_string(), "USD -3.00");
    assert_eq!((-&price).div(-3).unwrap().to_string(), "USD 3.00");
}

#[test]
fn divide_by_zero_is_an_error() {
    assert_eq!(usd_cents(100).div(0).unwrap_err(), MoneyError::DivideByZero);
}

#[test]
fn with_scale_is_lossless_upward_and_rounds_downward() {
    let price = usd_cents(5037);

    let finer = price.with_scale(Scale::Micro);
    assert_eq!(finer.amount(), &BigInt::from(50_370_000));
    assert_eq!(finer.scale(), Scale::Micro);

    // Back down without loss.
    let back = finer.with_scale(Scale::Centi);
    assert_eq!(back, price);

    let rounded = price.with_scale(Scale::Whole);
    assert_eq!(rounded.to_string(), "USD 50");

    let floored = price.with_scale_rounded(Scale::Whole, RoundingMode::Floor);
    assert_eq!(floored.to_string(), "USD 50");
    let ceiled = price.with_scale_rounded(Scale::Whole, RoundingMode::Ceil);
    assert_eq!(ceiled.to_string(), "USD 51");
}

#[test]
fn normalize_rescales_to_the_finest_scale() {
    let prices = vec![
        usd_cents(5000),
        Money::new(5, usd(), Scale::Micro),
        Money::new(1, usd(), Scale::Whole),
    ];
    let normalized = Money::normalize(&prices).unwrap();
    assert!(normalized.iter().all(|p| p.scale() == Scale::Micro));
    assert_eq!(normalized[0].amount(), &BigInt::from(50_000_000));
    assert_eq!(normalized[1].amount(), &BigInt::from(5));
    assert_eq!(normalized[2].amount(), &BigInt::from(1_000_000));
}

#[test]
fn normalize_is_idempotent_on_uniform_scales() {
    let prices = vec![usd_cents(1), usd_cents(2)];
    let once = Money::normalize(&prices).unwrap();
    let twice = Money::normalize(&once).unwrap();
    assert_eq!(once, twice);
    assert_eq!(once, prices);
}

#[test]
fn normalize_rejects_mixed_currencies_before_rescaling() {
    let prices = vec![usd_cents(1), Money::new(1, eur(), Scale::Centi)];
    assert!(matches!(
        Money::normalize(&prices),
        Err(MoneyError::CurrencyMismatch { .. })
    ));
}
