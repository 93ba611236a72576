//! Aggregate statistics over same-currency sequences.

use num_bigint::BigInt;

use crate::error::MoneyError;
use crate::money::Money;

impl Money {
    /// The truncating mean of one or more values, at their finest scale.
    ///
    /// # Errors
    /// Returns `MoneyError::EmptyInput` for an empty sequence and
    /// `MoneyError::CurrencyMismatch` when the currencies differ.
    pub fn average<'a, I>(prices: I) -> Result<Self, MoneyError>
    where
        I: IntoIterator<Item = &'a Self>,
    {
        let items: Vec<&Self> = prices.into_iter().collect();
        if items.is_empty() {
            return Err(MoneyError::EmptyInput {
                operation: "average",
            });
        }
        let total = Self::sum(items.iter().copied())?;
        let amount = total.amount() / BigInt::from(items.len());
        Ok(Self::new(amount, total.currency().clone(), total.scale()))
    }

    /// The population standard deviation, at the finest input scale.
    ///
    /// A single element yields zero at its own scale. The mean and the
    /// variance both use truncating division; the square root is the
    /// integer floor root.
    ///
    /// # Errors
    /// Returns `MoneyError::EmptyInput` for an empty sequence and
    /// `MoneyError::CurrencyMismatch` when the currencies differ.
    pub fn stddev<'a, I>(prices: I) -> Result<Self, MoneyError>
    where
        I: IntoIterator<Item = &'a Self>,
    {
        let items: Vec<&Self> = prices.into_iter().collect();
        let Some(first) = items.first() else {
            return Err(MoneyError::EmptyInput {
                operation: "stddev",
            });
        };
        if items.len() == 1 {
            return Ok(Self::new(0, first.currency().clone(), first.scale()));
        }

        let mut finest = first.scale();
        for price in &items[1..] {
            first.ensure_same_currency(price)?;
            finest = finest.finer(price.scale());
        }
        let amounts: Vec<BigInt> = items.iter().map(|price| price.amount_at(finest)).collect();

        let n = BigInt::from(amounts.len());
        let total: BigInt = amounts.iter().sum();
        let mean = &total / &n;
        let sum_sq: BigInt = amounts
            .iter()
            .map(|amount| {
                let deviation = amount - &mean;
                &deviation * &deviation
            })
            .sum();
        let variance = sum_sq / &n;
        Ok(Self::new(variance.sqrt(), first.currency().clone(), finest))
    }
}
