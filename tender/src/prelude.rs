//! Commonly used types for convenient glob import.

pub use crate::{
    Currency, Decimal, IntoMoney, MajorCurrency, Money, MoneyError, Partition, RemainderPolicy,
    RoundingMode, Scale, SortOrder,
};

pub use crate::guards::{is_human, is_price, is_shape, is_words};
pub use crate::ops;
