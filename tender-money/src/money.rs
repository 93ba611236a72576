//! The structured money value and its arithmetic kernel.

use std::cmp::Ordering;
use std::ops::Neg;
use std::str::FromStr;

use num_bigint::BigInt;
use rust_decimal::Decimal;
use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::currency::Currency;
use crate::error::MoneyError;
use crate::rounding::{RoundingMode, div_rounded};
use crate::scale::{Scale, pow10};
use crate::{format, parser};

/// Fractional digits at which scalar multiplication factors are captured.
const FACTOR_DIGITS: u32 = 12;

/// Sort direction for [`Money::sorted`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    /// Smallest value first.
    #[default]
    Asc,
    /// Largest value first.
    Desc,
}

impl std::fmt::Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        })
    }
}

impl FromStr for SortOrder {
    type Err = MoneyError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.trim() {
            token if token.eq_ignore_ascii_case("asc") => Ok(Self::Asc),
            token if token.eq_ignore_ascii_case("desc") => Ok(Self::Desc),
            _ => Err(MoneyError::InvalidFormat {
                input: input.to_string(),
            }),
        }
    }
}

/// A monetary value: an exact integer count of minor units at a given
/// [`Scale`], annotated with a [`Currency`].
///
/// Values are immutable; every operation returns a fresh value. The
/// displayed value is `amount × 10^scale_magnitude`, and no floating-point
/// representation ever holds it.
///
/// ```
/// # use std::str::FromStr;
/// # use tender_money::Money;
/// let price = Money::from_str("USD 1_000.00").unwrap();
/// assert_eq!(price.to_string(), "USD 1_000.00");
/// assert_eq!(serde_json::to_string(&price).unwrap(),
///     "{\"amount\":\"100000\",\"currency\":\"USD\",\"scale\":\"centi x10^-2\"}");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Money {
    /// Minor units at `scale`.
    amount: BigInt,
    /// The currency.
    currency: Currency,
    /// The decimal scale of `amount`.
    scale: Scale,
}

impl Money {
    /// Creates a money value from an amount of minor units at an explicit
    /// scale.
    #[must_use]
    pub fn new(amount: impl Into<BigInt>, currency: Currency, scale: Scale) -> Self {
        Self {
            amount: amount.into(),
            currency,
            scale,
        }
    }

    /// Creates a zero value at the currency's default scale.
    #[must_use]
    pub fn zero(currency: Currency) -> Self {
        let scale = currency.default_scale();
        Self::new(0, currency, scale)
    }

    /// Creates a money value from minor units at the currency's default
    /// scale.
    #[must_use]
    pub fn from_minor_units(minor_units: i128, currency: Currency) -> Self {
        let scale = currency.default_scale();
        Self::new(minor_units, currency, scale)
    }

    /// Builds a value from an untyped shape candidate.
    ///
    /// A shape is an object with an exact big-integer `amount` rendered as
    /// a decimal string, a `currency` code string, and an optional `scale`
    /// token. A missing or null scale canonicalizes to the currency
    /// default.
    ///
    /// ```
    /// # use serde_json::json;
    /// # use tender_money::{Money, Scale};
    /// let price = Money::from_shape(&json!({
    ///     "amount": "500",
    ///     "currency": "JPY",
    /// }))
    /// .unwrap();
    /// assert_eq!(price.scale(), Scale::Whole);
    /// ```
    ///
    /// # Errors
    /// Returns `MoneyError::InvalidFormat` when a field is missing or the
    /// amount is not an exact integer, and `MoneyError::InvalidScale` for
    /// a scale token outside the closed set.
    pub fn from_shape(candidate: &serde_json::Value) -> Result<Self, MoneyError> {
        let invalid = || MoneyError::InvalidFormat {
            input: candidate.to_string(),
        };
        let object = candidate.as_object().ok_or_else(invalid)?;
        let amount_text = object
            .get("amount")
            .and_then(serde_json::Value::as_str)
            .ok_or_else(invalid)?;
        let amount = BigInt::from_str(amount_text.trim()).map_err(|_| invalid())?;
        let currency_text = object
            .get("currency")
            .and_then(serde_json::Value::as_str)
            .ok_or_else(invalid)?;
        let currency = Currency::from_str(currency_text)?;
        let scale = match object.get("scale") {
            None | Some(serde_json::Value::Null) => currency.default_scale(),
            Some(token) => {
                let token_text = token.as_str().ok_or_else(|| MoneyError::InvalidScale {
                    token: token.to_string(),
                })?;
                Scale::from_str(token_text)?
            }
        };
        Ok(Self::new(amount, currency, scale))
    }

    /// Returns the exact amount of minor units.
    #[must_use]
    pub const fn amount(&self) -> &BigInt {
        &self.amount
    }

    /// Returns the currency.
    #[must_use]
    pub const fn currency(&self) -> &Currency {
        &self.currency
    }

    /// Returns the scale the amount is expressed at.
    #[must_use]
    pub const fn scale(&self) -> Scale {
        self.scale
    }

    /// Consumes the value and returns its parts.
    #[must_use]
    pub fn into_parts(self) -> (BigInt, Currency, Scale) {
        (self.amount, self.currency, self.scale)
    }

    /// Renders the lossless code-form string (`"USD 1_000.00"`).
    #[must_use]
    pub fn to_words(&self) -> String {
        format::words(self)
    }

    /// Renders the display-oriented symbol-form string (`"$1,000.00"`).
    #[must_use]
    pub fn to_human(&self) -> String {
        format::human(self)
    }

    /// The amount rescaled to `target`, which must be at least as fine as
    /// the current scale. The exponent difference is non-negative, so the
    /// multiplication is exact.
    pub(crate) fn amount_at(&self, target: Scale) -> BigInt {
        debug_assert!(target.magnitude() <= self.scale.magnitude());
        let diff = (self.scale.magnitude() - target.magnitude()) as u32;
        if diff == 0 {
            self.amount.clone()
        } else {
            &self.amount * pow10(diff)
        }
    }

    pub(crate) fn ensure_same_currency(&self, other: &Self) -> Result<(), MoneyError> {
        if self.currency == other.currency {
            Ok(())
        } else {
            Err(MoneyError::CurrencyMismatch {
                expected: self.currency.clone(),
                found: other.currency.clone(),
            })
        }
    }

    /// Rescales a sequence of same-currency values to their finest common
    /// scale without loss. Idempotent on an already-normalized sequence.
    ///
    /// # Errors
    /// Returns `MoneyError::CurrencyMismatch` before any rescaling when the
    /// currencies differ.
    pub fn normalize(prices: &[Self]) -> Result<Vec<Self>, MoneyError> {
        let Some(first) = prices.first() else {
            return Ok(Vec::new());
        };
        let mut finest = first.scale;
        for price in &prices[1..] {
            first.ensure_same_currency(price)?;
            finest = finest.finer(price.scale);
        }
        Ok(prices
            .iter()
            .map(|price| Self::new(price.amount_at(finest), price.currency.clone(), finest))
            .collect())
    }

    /// Addition that returns an error for currency mismatch.
    ///
    /// The result is expressed at the finer of the two operand scales.
    ///
    /// # Errors
    /// Returns `MoneyError::CurrencyMismatch` when the operands use
    /// different currencies.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(level = "debug", skip(self, rhs), err)
    )]
    pub fn try_add(&self, rhs: &Self) -> Result<Self, MoneyError> {
        self.ensure_same_currency(rhs)?;
        let finest = self.scale.finer(rhs.scale);
        Ok(Self::new(
            self.amount_at(finest) + rhs.amount_at(finest),
            self.currency.clone(),
            finest,
        ))
    }

    /// Subtraction that returns an error for currency mismatch.
    ///
    /// # Errors
    /// Returns `MoneyError::CurrencyMismatch` when the operands use
    /// different currencies.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(level = "debug", skip(self, rhs), err)
    )]
    pub fn try_sub(&self, rhs: &Self) -> Result<Self, MoneyError> {
        self.try_add(&-rhs)
    }

    /// Sums one or more values, normalizing mixed scales to the finest one.
    ///
    /// # Errors
    /// Returns `MoneyError::EmptyInput` for an empty sequence and
    /// `MoneyError::CurrencyMismatch` when the currencies differ.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "debug", skip(prices), err))]
    pub fn sum<'a, I>(prices: I) -> Result<Self, MoneyError>
    where
        I: IntoIterator<Item = &'a Self>,
    {
        let mut iter = prices.into_iter();
        let Some(first) = iter.next() else {
            return Err(MoneyError::EmptyInput { operation: "sum" });
        };
        let mut acc = first.clone();
        for price in iter {
            acc = acc.try_add(price)?;
        }
        Ok(acc)
    }

    /// Multiplies by a scalar factor, rounding the product back to the
    /// input scale with [`RoundingMode::HalfUp`].
    #[must_use]
    pub fn mul(&self, factor: Decimal) -> Self {
        self.mul_with(factor, RoundingMode::default())
    }

    /// Multiplies by a scalar factor with an explicit rounding mode.
    ///
    /// The factor is captured exactly at twelve fractional digits before
    /// the product is formed, so the only rounding step is the final one.
    /// The output scale equals the input scale; a zero factor yields zero
    /// and a negative factor a correctly-signed result.
    #[must_use]
    pub fn mul_with(&self, factor: Decimal, mode: RoundingMode) -> Self {
        let product = &self.amount * factor_minor_units(factor);
        Self::new(
            div_rounded(&product, &pow10(FACTOR_DIGITS), mode),
            self.currency.clone(),
            self.scale,
        )
    }

    /// Divides by a non-zero integer scalar, rounding with
    /// [`RoundingMode::HalfUp`].
    ///
    /// # Errors
    /// Returns `MoneyError::DivideByZero` when the divisor is zero.
    pub fn div(&self, divisor: i64) -> Result<Self, MoneyError> {
        self.div_with(divisor, RoundingMode::default())
    }

    /// Divides by a non-zero integer scalar with an explicit rounding mode.
    ///
    /// The output scale widens with the divisor magnitude so the quotient
    /// keeps meaningful precision: divisors under 100 keep the input scale,
    /// under 10^6 use milli, under 10^9 nano, and anything larger pico —
    /// never coarser than the input scale, so the rescale stays lossless.
    ///
    /// # Errors
    /// Returns `MoneyError::DivideByZero` when the divisor is zero.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "debug", skip(self), err))]
    pub fn div_with(&self, divisor: i64, mode: RoundingMode) -> Result<Self, MoneyError> {
        if divisor == 0 {
            return Err(MoneyError::DivideByZero);
        }
        let magnitude = divisor.unsigned_abs();
        let widened = if magnitude < 100 {
            self.scale
        } else if magnitude < 1_000_000 {
            Scale::Milli
        } else if magnitude < 1_000_000_000 {
            Scale::Nano
        } else {
            Scale::Pico
        };
        let target = self.scale.finer(widened);
        let quotient = div_rounded(&self.amount_at(target), &BigInt::from(magnitude), mode);
        let amount = if divisor < 0 { -quotient } else { quotient };
        Ok(Self::new(amount, self.currency.clone(), target))
    }

    /// Re-expresses the value at another scale, rounding with
    /// [`RoundingMode::HalfUp`] when precision decreases.
    #[must_use]
    pub fn with_scale(&self, to: Scale) -> Self {
        self.with_scale_rounded(to, RoundingMode::default())
    }

    /// Re-expresses the value at another scale with an explicit rounding
    /// mode. Increasing precision is always lossless.
    #[must_use]
    pub fn with_scale_rounded(&self, to: Scale, mode: RoundingMode) -> Self {
        match to.magnitude().cmp(&self.scale.magnitude()) {
            Ordering::Equal => self.clone(),
            Ordering::Less => Self::new(self.amount_at(to), self.currency.clone(), to),
            Ordering::Greater => {
                let diff = (to.magnitude() - self.scale.magnitude()) as u32;
                Self::new(
                    div_rounded(&self.amount, &pow10(diff), mode),
                    self.currency.clone(),
                    to,
                )
            }
        }
    }

    /// Compares two values numerically after normalization.
    ///
    /// # Errors
    /// Returns `MoneyError::CurrencyMismatch` when the currencies differ.
    pub fn try_cmp(&self, other: &Self) -> Result<Ordering, MoneyError> {
        self.ensure_same_currency(other)?;
        let finest = self.scale.finer(other.scale);
        Ok(self.amount_at(finest).cmp(&other.amount_at(finest)))
    }

    /// Numeric equality: identical amounts after normalization to the finer
    /// scale, same currency.
    ///
    /// # Errors
    /// Returns `MoneyError::CurrencyMismatch` when the currencies differ.
    pub fn try_eq_value(&self, other: &Self) -> Result<bool, MoneyError> {
        Ok(self.try_cmp(other)? == Ordering::Equal)
    }

    /// Whether `self` is numerically greater than `other`.
    ///
    /// # Errors
    /// Returns `MoneyError::CurrencyMismatch` when the currencies differ.
    pub fn try_gt(&self, other: &Self) -> Result<bool, MoneyError> {
        Ok(self.try_cmp(other)? == Ordering::Greater)
    }

    /// Whether `self` is numerically less than `other`.
    ///
    /// # Errors
    /// Returns `MoneyError::CurrencyMismatch` when the currencies differ.
    pub fn try_lt(&self, other: &Self) -> Result<bool, MoneyError> {
        Ok(self.try_cmp(other)? == Ordering::Less)
    }

    /// Produces a stably-sorted copy of the sequence, ordered by numeric
    /// value. Equal elements keep their input order, each element keeps its
    /// own scale, and empty or singleton inputs come back as fresh
    /// sequences.
    ///
    /// # Errors
    /// Returns `MoneyError::CurrencyMismatch` when the currencies differ.
    pub fn sorted(prices: &[Self], order: SortOrder) -> Result<Vec<Self>, MoneyError> {
        if prices.len() <= 1 {
            return Ok(prices.to_vec());
        }
        let first = &prices[0];
        let mut finest = first.scale;
        for price in &prices[1..] {
            first.ensure_same_currency(price)?;
            finest = finest.finer(price.scale);
        }
        let mut keyed: Vec<(BigInt, &Self)> = prices
            .iter()
            .map(|price| (price.amount_at(finest), price))
            .collect();
        match order {
            SortOrder::Asc => keyed.sort_by(|a, b| a.0.cmp(&b.0)),
            SortOrder::Desc => keyed.sort_by(|a, b| b.0.cmp(&a.0)),
        }
        Ok(keyed.into_iter().map(|(_, price)| price.clone()).collect())
    }
}

/// Captures a decimal factor as an exact integer count of `10^-12` units.
///
/// The capture reads the decimal's integer mantissa directly; the value
/// never round-trips through a float.
fn factor_minor_units(factor: Decimal) -> BigInt {
    let mantissa = BigInt::from(factor.mantissa());
    let scale = factor.scale();
    if scale <= FACTOR_DIGITS {
        mantissa * pow10(FACTOR_DIGITS - scale)
    } else {
        div_rounded(
            &mantissa,
            &pow10(scale - FACTOR_DIGITS),
            RoundingMode::HalfUp,
        )
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_words())
    }
}

impl FromStr for Money {
    type Err = MoneyError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        parser::parse(input)
    }
}

impl Neg for &Money {
    type Output = Money;

    fn neg(self) -> Self::Output {
        Money::new(-&self.amount, self.currency.clone(), self.scale)
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::new(-self.amount, self.currency, self.scale)
    }
}

impl Serialize for Money {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("Money", 3)?;
        state.serialize_field("amount", &self.amount.to_string())?;
        state.serialize_field("currency", &self.currency)?;
        state.serialize_field("scale", &self.scale)?;
        state.end()
    }
}

/// The raw shape accepted on deserialization: an exact big-integer amount
/// rendered as a decimal string, a currency code, and an optional scale
/// token. A missing scale canonicalizes to the currency default.
#[derive(Deserialize)]
struct RawShape {
    amount: String,
    currency: Currency,
    #[serde(default)]
    scale: Option<Scale>,
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = RawShape::deserialize(deserializer)?;
        let amount = BigInt::from_str(raw.amount.trim()).map_err(|_| {
            serde::de::Error::custom(MoneyError::InvalidFormat {
                input: raw.amount.clone(),
            })
        })?;
        let scale = raw
            .scale
            .unwrap_or_else(|| raw.currency.default_scale());
        Ok(Self::new(amount, raw.currency, scale))
    }
}
