use num_bigint::BigInt;
use tender_money::{RoundingMode, div_rounded};

fn round(dividend: i64, divisor: u64, mode: RoundingMode) -> i64 {
    let quotient = div_rounded(&BigInt::from(dividend), &BigInt::from(divisor), mode);
    i64::try_from(quotient).expect("quotient fits i64")
}

fn expect_round(dividend: i64, divisor: u64, mode: RoundingMode, expected: i64) {
    assert_eq!(
        round(dividend, divisor, mode),
        expected,
        "mode {mode:?} failed for {dividend}/{divisor}"
    );
}

#[test]
fn exact_quotients_are_untouched_by_every_mode() {
    for mode in [
        RoundingMode::Floor,
        RoundingMode::Ceil,
        RoundingMode::HalfUp,
        RoundingMode::HalfDown,
        RoundingMode::HalfEven,
    ] {
        expect_round(10, 2, mode, 5);
        expect_round(-10, 2, mode, -5);
        expect_round(0, 7, mode, 0);
    }
}

#[test]
fn floor_rounds_toward_negative_infinity() {
    expect_round(7, 2, RoundingMode::Floor, 3);
    expect_round(-7, 2, RoundingMode::Floor, -4);
    expect_round(1, 10, RoundingMode::Floor, 0);
    expect_round(-1, 10, RoundingMode::Floor, -1);
}

#[test]
fn ceil_rounds_toward_positive_infinity() {
    expect_round(7, 2, RoundingMode::Ceil, 4);
    expect_round(-7, 2, RoundingMode::Ceil, -3);
    expect_round(1, 10, RoundingMode::Ceil, 1);
    expect_round(-1, 10, RoundingMode::Ceil, 0);
}

#[test]
fn half_up_rounds_ties_away_from_zero() {
    expect_round(5, 2, RoundingMode::HalfUp, 3);
    expect_round(-5, 2, RoundingMode::HalfUp, -3);
    expect_round(3, 4, RoundingMode::HalfUp, 1);
    expect_round(1, 4, RoundingMode::HalfUp, 0);
    expect_round(-3, 4, RoundingMode::HalfUp, -1);
    expect_round(-1, 4, RoundingMode::HalfUp, 0);
}

#[test]
fn half_down_truncates_ties() {
    expect_round(5, 2, RoundingMode::HalfDown, 2);
    expect_round(-5, 2, RoundingMode::HalfDown, -2);
    expect_round(7, 3, RoundingMode::HalfDown, 2);
    expect_round(8, 3, RoundingMode::HalfDown, 3);
    expect_round(-8, 3, RoundingMode::HalfDown, -3);
}

#[test]
fn half_even_sends_ties_to_the_even_quotient() {
    expect_round(5, 2, RoundingMode::HalfEven, 2);
    expect_round(7, 2, RoundingMode::HalfEven, 4);
    expect_round(-5, 2, RoundingMode::HalfEven, -2);
    expect_round(-7, 2, RoundingMode::HalfEven, -4);
    expect_round(3, 2, RoundingMode::HalfEven, 2);
    expect_round(1, 2, RoundingMode::HalfEven, 0);

    // Non-ties behave like half-up.
    expect_round(7, 3, RoundingMode::HalfEven, 2);
    expect_round(8, 3, RoundingMode::HalfEven, 3);
}

#[test]
fn midpoint_detection_survives_odd_divisors() {
    // 2·|r| vs divisor never truncates, so 3/7ths is below half while
    // 4/7ths is above, for both signs.
    expect_round(3, 7, RoundingMode::HalfUp, 0);
    expect_round(4, 7, RoundingMode::HalfUp, 1);
    expect_round(-3, 7, RoundingMode::HalfUp, 0);
    expect_round(-4, 7, RoundingMode::HalfUp, -1);
    expect_round(3, 7, RoundingMode::HalfDown, 0);
    expect_round(4, 7, RoundingMode::HalfDown, 1);
}

#[test]
fn mode_tokens_round_trip() {
    for mode in [
        RoundingMode::Floor,
        RoundingMode::Ceil,
        RoundingMode::HalfUp,
        RoundingMode::HalfDown,
        RoundingMode::HalfEven,
    ] {
        assert_eq!(mode.to_string().parse::<RoundingMode>().unwrap(), mode);
    }
    assert_eq!("HALF-EVEN".parse::<RoundingMode>().unwrap(), RoundingMode::HalfEven);
    assert!("nearest".parse::<RoundingMode>().is_err());
    assert_eq!(RoundingMode::default(), RoundingMode::HalfUp);
}

#[test]
fn huge_dividends_round_exactly() {
    let dividend = BigInt::parse_bytes(b"123456789012345678901234567895", 10).unwrap();
    let divisor = BigInt::from(10u8);
    let expected = BigInt::parse_bytes(b"12345678901234567890123456790", 10).unwrap();
    assert_eq!(
        div_rounded(&dividend, &divisor, RoundingMode::HalfUp),
        expected
    );
    assert_eq!(
        div_rounded(&dividend, &divisor, RoundingMode::HalfEven),
        expected
    );
}
