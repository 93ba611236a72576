//! Unified public API for the tender workspace.
#![warn(missing_docs)]

pub use tender_money::{
    ALL_SCALES, Currency, CustomCode, Decimal, IntoMoney, MajorCurrency, Money, MoneyError,
    Partition, RemainderPolicy, RoundingMode, Scale, SortOrder, div_rounded, parse,
    parse_with_currency,
};

// Re-export the operation and guard surfaces as modules.
pub use tender_money::guards;
pub use tender_money::ops;

/// Frequently used types for convenient imports.
pub mod prelude;
