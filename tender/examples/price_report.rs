//! Example demonstrating the three interchangeable input shapes and the
//! statistics/sorting surface: parse mixed inputs, normalize them, and
//! report on the sequence.

use tender::prelude::*;

fn main() {
    println!("=== tender Price Report ===\n");

    // Inputs arrive in any accepted shape: code form, symbol form, or a
    // structured value built upstream.
    let quoted = Money::new(4_250, Currency::from(MajorCurrency::USD), Scale::Centi);
    let inputs = vec![
        "USD 100.00".to_string(),
        "$9.00".to_string(),
        "USD 50.00".to_string(),
        quoted.to_words(),
    ];

    for input in &inputs {
        let classified = if is_words(input) {
            "code form"
        } else if is_human(input) {
            "symbol form"
        } else {
            "unclassified"
        };
        println!("  {input:<12} -> {classified}");
    }
    println!();

    let sorted = ops::sorted(&inputs, SortOrder::Asc).expect("uniform currency");
    let rendered: Vec<String> = sorted.iter().map(Money::to_words).collect();
    println!("sorted ascending: {rendered:?}");

    let mean = ops::average(&inputs).expect("non-empty");
    let spread = ops::stddev(&inputs).expect("non-empty");
    println!("average: {}", mean.to_words());
    println!("stddev:  {}", spread.to_words());

    // Scalar operations keep exact integer arithmetic underneath.
    let taxed = ops::multiply(&mean, Decimal::new(108, 2)).expect("parsed");
    println!("average with 8% tax: {}", taxed.to_human());

    let per_day = ops::divide(&mean, 30).expect("non-zero divisor");
    println!("average per day over 30 days: {}", per_day.to_words());

    // Precision changes are explicit, with the rounding mode spelled out.
    let display = ops::round_with(&per_day, Scale::Centi, RoundingMode::HalfEven)
        .expect("parsed");
    println!("rounded for display: {}", display.to_words());
}
