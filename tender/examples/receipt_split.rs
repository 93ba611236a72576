//! Example demonstrating loss-free allocation: splitting a bill between
//! participants so the parts always sum back to the original amount, under
//! every remainder policy.

use tender::prelude::*;

fn main() {
    println!("=== tender Allocation Examples ===\n");

    split_evenly();
    split_by_ratio();
    compare_remainder_policies();
}

/// Splitting a dinner bill three ways leaves a leftover cent; the policy
/// decides who pays it.
fn split_evenly() {
    println!("1. Even split:");

    let bill: Money = "USD 10.00".into_money().expect("valid bill");
    let parts = ops::allocate(&bill, &Partition::Equal(3), RemainderPolicy::First)
        .expect("valid partition");

    for (index, part) in parts.iter().enumerate() {
        println!("  participant {} pays {}", index + 1, part.to_human());
    }

    let total = ops::sum(&parts).expect("same currency");
    println!("  parts sum back to {}\n", total.to_words());
    assert!(ops::equal(&bill, &total).expect("same currency"));
}

/// Ratios distribute proportionally; zero-ratio parts receive nothing.
fn split_by_ratio() {
    println!("2. Ratio split (50/30/20):");

    let invoice: Money = "USD 1_234.56".into_money().expect("valid invoice");
    let parts = ops::allocate(
        &invoice,
        &Partition::Ratios(vec![50, 30, 20]),
        RemainderPolicy::Largest,
    )
    .expect("valid partition");

    for part in &parts {
        println!("  {}", part.to_words());
    }

    let total = ops::sum(&parts).expect("same currency");
    println!("  conserved: {}\n", total.to_words());
}

/// Every policy conserves the whole; they only differ in who absorbs the
/// leftover minor units.
fn compare_remainder_policies() {
    println!("3. Remainder policies on USD 1.00 into 3:");

    for policy in [
        RemainderPolicy::First,
        RemainderPolicy::Last,
        RemainderPolicy::Largest,
        RemainderPolicy::Random,
    ] {
        let parts = ops::allocate("USD 1.00", &Partition::Equal(3), policy)
            .expect("valid partition");
        let rendered: Vec<String> = parts.iter().map(Money::to_words).collect();
        println!("  {policy:?}: {rendered:?}");
    }
}
