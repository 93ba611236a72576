//! The facade re-exports the full public surface of the money core.

use serde_json::json;
use tender::prelude::*;

#[test]
fn prelude_covers_the_common_surface() {
    let price: Money = "USD 10.00".into_money().unwrap();
    assert_eq!(price.currency(), &Currency::from(MajorCurrency::USD));
    assert_eq!(price.scale(), Scale::Centi);
    assert!(is_words("USD 10.00"));
    assert!(is_human("$10.00"));
    assert!(is_shape(&json!({ "amount": "1000", "currency": "USD" })));
    assert!(is_price(&json!("$10.00")));
    assert!(is_price(&json!({ "amount": "1000", "currency": "USD" })));
}

#[test]
fn ops_surface_is_reachable_through_the_facade() {
    let total = ops::sum(["USD 1.00", "USD 2.00", "$3.00"]).unwrap();
    assert_eq!(total.to_words(), "USD 6.00");

    let diff = ops::subtract("USD 5.00", "USD 1.25").unwrap();
    assert_eq!(diff.to_words(), "USD 3.75");

    let scaled = ops::multiply("USD 2.00", Decimal::new(25, 1)).unwrap();
    assert_eq!(scaled.to_words(), "USD 5.00");

    let split = ops::allocate("USD 1.00", &Partition::Equal(3), RemainderPolicy::Last).unwrap();
    let rendered: Vec<String> = split.iter().map(Money::to_words).collect();
    assert_eq!(rendered, ["USD 0.33", "USD 0.33", "USD 0.34"]);

    let mean = ops::average(["USD 1.00", "USD 3.00"]).unwrap();
    assert_eq!(mean.to_words(), "USD 2.00");

    let sd = ops::stddev(["USD 1.00", "USD 1.00"]).unwrap();
    assert_eq!(sd.to_words(), "USD 0.00");
}

#[test]
fn casts_and_defaults_are_exposed() {
    assert_eq!(ops::to_words("$9.99").unwrap(), "USD 9.99");
    assert_eq!(ops::to_human("USD 9.99").unwrap(), "$9.99");
    assert_eq!(
        ops::to_words_with("$5.00", Some(Currency::from(MajorCurrency::CAD))).unwrap(),
        "CAD 5.00"
    );
    assert_eq!(
        ops::default_scale_for(&Currency::from(MajorCurrency::JPY)),
        Scale::Whole
    );

    let shaped = ops::to_money("USD 0.50").unwrap();
    assert_eq!(
        ops::set_precision_with(&shaped, Scale::Whole, RoundingMode::HalfEven)
            .unwrap()
            .to_words(),
        "USD 0"
    );
}

#[test]
fn sort_affordances_have_a_default_direction() {
    let asc = ops::sorted(["USD 3.00", "USD 1.00"], SortOrder::default()).unwrap();
    assert_eq!(asc[0].to_words(), "USD 1.00");

    let desc = ops::sorted_desc(["USD 3.00", "USD 9.00"]).unwrap();
    assert_eq!(desc[0].to_words(), "USD 9.00");
}

#[test]
fn errors_carry_structured_diagnostics() {
    let err = ops::sum(["USD 1.00", "EUR 1.00"]).unwrap_err();
    match err {
        MoneyError::CurrencyMismatch { expected, found } => {
            assert_eq!(expected.code(), "USD");
            assert_eq!(found.code(), "EUR");
        }
        other => panic!("unexpected error: {other}"),
    }

    let empty: Vec<Money> = Vec::new();
    assert!(matches!(
        ops::sum(&empty),
        Err(MoneyError::EmptyInput { operation: "sum" })
    ));
}
