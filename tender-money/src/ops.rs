//! Uniform entry points over the three accepted input shapes.
//!
//! Every operation here accepts its money operands as code-form strings,
//! symbol-form strings, structured [`Money`] values, or untyped shape
//! candidates ([`serde_json::Value`]), lifts them through the parser or
//! the shape reader, and delegates to the kernel method of the same
//! concept. The kernel defines one operation per concept; everything in
//! this module stays a thin lift-and-delegate.

use rust_decimal::Decimal;

use crate::allocate::{Partition, RemainderPolicy};
use crate::currency::Currency;
use crate::error::MoneyError;
use crate::money::{Money, SortOrder};
use crate::parser;
use crate::rounding::RoundingMode;
use crate::scale::Scale;

/// Lifts any accepted input shape into a structured money value.
pub trait IntoMoney {
    /// Converts the input into a [`Money`].
    ///
    /// # Errors
    /// Returns `MoneyError::InvalidFormat` when a string input matches no
    /// known format.
    fn into_money(self) -> Result<Money, MoneyError>;
}

impl IntoMoney for Money {
    fn into_money(self) -> Result<Money, MoneyError> {
        Ok(self)
    }
}

impl IntoMoney for &Money {
    fn into_money(self) -> Result<Money, MoneyError> {
        Ok(self.clone())
    }
}

impl IntoMoney for &str {
    fn into_money(self) -> Result<Money, MoneyError> {
        parser::parse(self)
    }
}

impl IntoMoney for String {
    fn into_money(self) -> Result<Money, MoneyError> {
        parser::parse(&self)
    }
}

impl IntoMoney for &String {
    fn into_money(self) -> Result<Money, MoneyError> {
        parser::parse(self)
    }
}

impl IntoMoney for &serde_json::Value {
    /// A string value parses as a code-form or symbol-form string; any
    /// other value is read as a structured shape.
    fn into_money(self) -> Result<Money, MoneyError> {
        match self.as_str() {
            Some(text) => parser::parse(text),
            None => Money::from_shape(self),
        }
    }
}

fn lift<I>(prices: I) -> Result<Vec<Money>, MoneyError>
where
    I: IntoIterator,
    I::Item: IntoMoney,
{
    prices.into_iter().map(IntoMoney::into_money).collect()
}

/// Sums one or more values.
///
/// ```
/// # use tender_money::ops;
/// let total = ops::sum(["USD 50.00", "USD 0.000_005"]).unwrap();
/// assert_eq!(total.to_words(), "USD 50.000_005");
/// ```
///
/// # Errors
/// `EmptyInput` for an empty sequence, `CurrencyMismatch` on mixed
/// currencies, `InvalidFormat` for unparseable string input.
pub fn sum<I>(prices: I) -> Result<Money, MoneyError>
where
    I: IntoIterator,
    I::Item: IntoMoney,
{
    Money::sum(&lift(prices)?)
}

/// Subtracts `b` from `a`.
///
/// # Errors
/// `CurrencyMismatch` on mixed currencies, `InvalidFormat` for unparseable
/// string input.
pub fn subtract(a: impl IntoMoney, b: impl IntoMoney) -> Result<Money, MoneyError> {
    a.into_money()?.try_sub(&b.into_money()?)
}

/// Multiplies by a scalar factor, rounding half-up.
///
/// # Errors
/// `InvalidFormat` for unparseable string input.
pub fn multiply(of: impl IntoMoney, by: Decimal) -> Result<Money, MoneyError> {
    Ok(of.into_money()?.mul(by))
}

/// Multiplies by a scalar factor with an explicit rounding mode.
///
/// # Errors
/// `InvalidFormat` for unparseable string input.
pub fn multiply_with(
    of: impl IntoMoney,
    by: Decimal,
    round: RoundingMode,
) -> Result<Money, MoneyError> {
    Ok(of.into_money()?.mul_with(by, round))
}

/// Divides by a non-zero integer scalar, rounding half-up.
///
/// # Errors
/// `DivideByZero` for a zero divisor, `InvalidFormat` for unparseable
/// string input.
pub fn divide(of: impl IntoMoney, by: i64) -> Result<Money, MoneyError> {
    of.into_money()?.div(by)
}

/// Divides by a non-zero integer scalar with an explicit rounding mode.
///
/// # Errors
/// `DivideByZero` for a zero divisor, `InvalidFormat` for unparseable
/// string input.
pub fn divide_with(
    of: impl IntoMoney,
    by: i64,
    round: RoundingMode,
) -> Result<Money, MoneyError> {
    of.into_money()?.div_with(by, round)
}

/// Splits a value into parts that sum exactly to it.
///
/// ```
/// # use tender_money::{Partition, RemainderPolicy, ops};
/// let parts = ops::allocate(
///     "USD 10.00",
///     &Partition::Equal(3),
///     RemainderPolicy::First,
/// )
/// .unwrap();
/// let rendered: Vec<String> = parts.iter().map(|p| p.to_words()).collect();
/// assert_eq!(rendered, ["USD 3.34", "USD 3.33", "USD 3.33"]);
/// ```
///
/// # Errors
/// `InvalidPartition` for a malformed partition, `InvalidFormat` for
/// unparseable string input.
pub fn allocate(
    of: impl IntoMoney,
    into: &Partition,
    remainder: RemainderPolicy,
) -> Result<Vec<Money>, MoneyError> {
    of.into_money()?.allocate(into, remainder)
}

/// Re-expresses a value at another scale, rounding half-up when precision
/// decreases.
///
/// # Errors
/// `InvalidFormat` for unparseable string input.
pub fn set_precision(of: impl IntoMoney, to: Scale) -> Result<Money, MoneyError> {
    Ok(of.into_money()?.with_scale(to))
}

/// Re-expresses a value at another scale with an explicit rounding mode.
///
/// # Errors
/// `InvalidFormat` for unparseable string input.
pub fn set_precision_with(
    of: impl IntoMoney,
    to: Scale,
    round: RoundingMode,
) -> Result<Money, MoneyError> {
    Ok(of.into_money()?.with_scale_rounded(to, round))
}

/// Rounds a value to a coarser scale; alias of the decrease-precision path.
///
/// # Errors
/// `InvalidFormat` for unparseable string input.
pub fn round(of: impl IntoMoney, to: Scale) -> Result<Money, MoneyError> {
    set_precision(of, to)
}

/// Rounds a value to a coarser scale with an explicit rounding mode.
///
/// # Errors
/// `InvalidFormat` for unparseable string input.
pub fn round_with(
    of: impl IntoMoney,
    to: Scale,
    round: RoundingMode,
) -> Result<Money, MoneyError> {
    set_precision_with(of, to, round)
}

/// The truncating mean of one or more values.
///
/// # Errors
/// `EmptyInput` for an empty sequence, `CurrencyMismatch` on mixed
/// currencies, `InvalidFormat` for unparseable string input.
pub fn average<I>(prices: I) -> Result<Money, MoneyError>
where
    I: IntoIterator,
    I::Item: IntoMoney,
{
    Money::average(&lift(prices)?)
}

/// The population standard deviation of one or more values.
///
/// # Errors
/// `EmptyInput` for an empty sequence, `CurrencyMismatch` on mixed
/// currencies, `InvalidFormat` for unparseable string input.
pub fn stddev<I>(prices: I) -> Result<Money, MoneyError>
where
    I: IntoIterator,
    I::Item: IntoMoney,
{
    Money::stddev(&lift(prices)?)
}

/// Numeric equality after normalization.
///
/// # Errors
/// `CurrencyMismatch` on mixed currencies, `InvalidFormat` for unparseable
/// string input.
pub fn equal(a: impl IntoMoney, b: impl IntoMoney) -> Result<bool, MoneyError> {
    a.into_money()?.try_eq_value(&b.into_money()?)
}

/// Whether `a` is numerically greater than `b`.
///
/// # Errors
/// `CurrencyMismatch` on mixed currencies, `InvalidFormat` for unparseable
/// string input.
pub fn greater(a: impl IntoMoney, b: impl IntoMoney) -> Result<bool, MoneyError> {
    a.into_money()?.try_gt(&b.into_money()?)
}

/// Whether `a` is numerically less than `b`.
///
/// # Errors
/// `CurrencyMismatch` on mixed currencies, `InvalidFormat` for unparseable
/// string input.
pub fn lesser(a: impl IntoMoney, b: impl IntoMoney) -> Result<bool, MoneyError> {
    a.into_money()?.try_lt(&b.into_money()?)
}

/// Stably sorts values by numeric magnitude.
///
/// # Errors
/// `CurrencyMismatch` on mixed currencies, `InvalidFormat` for unparseable
/// string input.
pub fn sorted<I>(prices: I, order: SortOrder) -> Result<Vec<Money>, MoneyError>
where
    I: IntoIterator,
    I::Item: IntoMoney,
{
    Money::sorted(&lift(prices)?, order)
}

/// Stably sorts values ascending.
///
/// # Errors
/// See [`sorted`].
pub fn sorted_asc<I>(prices: I) -> Result<Vec<Money>, MoneyError>
where
    I: IntoIterator,
    I::Item: IntoMoney,
{
    sorted(prices, SortOrder::Asc)
}

/// Stably sorts values descending.
///
/// # Errors
/// See [`sorted`].
pub fn sorted_desc<I>(prices: I) -> Result<Vec<Money>, MoneyError>
where
    I: IntoIterator,
    I::Item: IntoMoney,
{
    sorted(prices, SortOrder::Desc)
}

/// Casts any accepted input to the lossless code-form string.
///
/// # Errors
/// `InvalidFormat` for unparseable string input.
pub fn to_words(price: impl IntoMoney) -> Result<String, MoneyError> {
    Ok(price.into_money()?.to_words())
}

/// Normalizes a string input to the code-form string, with an explicit
/// currency used to disambiguate shared symbols (`$`, `¥`, ...).
///
/// # Errors
/// `CurrencyMismatch` when the explicit currency conflicts with the input,
/// `InvalidFormat` for unparseable input.
pub fn to_words_with(input: &str, currency: Option<Currency>) -> Result<String, MoneyError> {
    Ok(parser::parse_with_currency(input, currency)?.to_words())
}

/// Casts any accepted input to the display-oriented symbol-form string.
///
/// # Errors
/// `InvalidFormat` for unparseable string input.
pub fn to_human(price: impl IntoMoney) -> Result<String, MoneyError> {
    Ok(price.into_money()?.to_human())
}

/// Casts any accepted input to the structured form.
///
/// # Errors
/// `InvalidFormat` for unparseable string input.
pub fn to_money(price: impl IntoMoney) -> Result<Money, MoneyError> {
    price.into_money()
}

/// The canonical scale for a currency; centi for every unknown code.
#[must_use]
pub fn default_scale_for(currency: &Currency) -> Scale {
    currency.default_scale()
}
