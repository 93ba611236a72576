//! Loss-free allocation of an amount into a partition.
//!
//! The contract is exact conservation: the returned parts always sum
//! bit-for-bit to the allocated value, whatever the remainder policy.

use num_bigint::BigInt;
use num_traits::{Signed, ToPrimitive, Zero};

use crate::error::MoneyError;
use crate::money::Money;

/// How an amount is split into parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Partition {
    /// Split into `n` equal parts.
    Equal(u32),
    /// Split proportionally to the given non-negative ratios.
    Ratios(Vec<i64>),
}

/// Where leftover minor units land after the base split.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemainderPolicy {
    /// Distribute from the first part onward.
    First,
    /// Distribute from the last part backward.
    Last,
    /// Distribute to the parts with the largest fractional share; ties
    /// fall back to first-part order.
    Largest,
    /// Distribute along a deterministic pseudo-shuffle seeded from the
    /// absolute amount. The same inputs always produce the same parts.
    Random,
}

impl Money {
    /// Splits the value into parts that sum exactly to it.
    ///
    /// # Errors
    /// Returns `MoneyError::InvalidPartition` for a part count below one,
    /// an empty ratio list, any negative ratio, or all-zero ratios.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "debug", skip(self), err))]
    pub fn allocate(
        &self,
        partition: &Partition,
        policy: RemainderPolicy,
    ) -> Result<Vec<Self>, MoneyError> {
        let (mut shares, fractions) = match partition {
            Partition::Equal(n) => {
                if *n < 1 {
                    return Err(MoneyError::InvalidPartition {
                        reason: "part count must be at least one",
                    });
                }
                let base = self.amount() / BigInt::from(*n);
                (vec![base; *n as usize], None)
            }
            Partition::Ratios(ratios) => {
                if ratios.is_empty() {
                    return Err(MoneyError::InvalidPartition {
                        reason: "ratio list is empty",
                    });
                }
                if ratios.iter().any(|ratio| *ratio < 0) {
                    return Err(MoneyError::InvalidPartition {
                        reason: "ratios must be non-negative",
                    });
                }
                let total: BigInt = ratios.iter().map(|ratio| BigInt::from(*ratio)).sum();
                if total.is_zero() {
                    return Err(MoneyError::InvalidPartition {
                        reason: "ratios must not all be zero",
                    });
                }
                let mut shares = Vec::with_capacity(ratios.len());
                let mut fractions = Vec::with_capacity(ratios.len());
                for ratio in ratios {
                    let scaled = self.amount() * BigInt::from(*ratio);
                    shares.push(&scaled / &total);
                    // |scaled mod total| / total is the exact fractional part.
                    fractions.push((&scaled % &total).abs());
                }
                (shares, Some(fractions))
            }
        };

        let allocated: BigInt = shares.iter().sum();
        let remainder = self.amount() - allocated;
        let count = remainder
            .abs()
            .to_usize()
            .unwrap_or(shares.len());
        let step = remainder.signum();

        for index in distribution_order(shares.len(), fractions, policy, self.amount())
            .into_iter()
            .take(count)
        {
            shares[index] += &step;
        }

        Ok(shares
            .into_iter()
            .map(|amount| Self::new(amount, self.currency().clone(), self.scale()))
            .collect())
    }
}

/// The order in which parts receive leftover units.
fn distribution_order(
    len: usize,
    fractions: Option<Vec<BigInt>>,
    policy: RemainderPolicy,
    amount: &BigInt,
) -> Vec<usize> {
    match policy {
        RemainderPolicy::First => (0..len).collect(),
        RemainderPolicy::Last => (0..len).rev().collect(),
        RemainderPolicy::Largest => {
            let mut order: Vec<usize> = (0..len).collect();
            // Equal partitions have identical fractional shares, so the
            // stable sort leaves first-part order in place.
            if let Some(keys) = fractions {
                order.sort_by(|&a, &b| keys[b].cmp(&keys[a]));
            }
            order
        }
        RemainderPolicy::Random => pseudo_shuffle(len, seed_from(amount)),
    }
}

/// Lowest 64 bits of the absolute amount, the deterministic shuffle seed.
fn seed_from(amount: &BigInt) -> u64 {
    amount.magnitude().iter_u64_digits().next().unwrap_or(0)
}

/// Fisher-Yates driven by an xorshift64* stream.
fn pseudo_shuffle(len: usize, seed: u64) -> Vec<usize> {
    let mut order: Vec<usize> = (0..len).collect();
    // The zero state is a fixed point of xorshift; displace it.
    let mut state = seed | 1;
    let mut next = || {
        state ^= state >> 12;
        state ^= state << 25;
        state ^= state >> 27;
        state.wrapping_mul(0x2545_F491_4F6C_DD1D)
    };
    for i in (1..len).rev() {
        let j = (next() % (i as u64 + 1)) as usize;
        order.swap(i, j);
    }
    order
}
