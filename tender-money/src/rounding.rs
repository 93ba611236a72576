//! Signed integer division with a selectable rounding mode.

use std::cmp::Ordering;
use std::str::FromStr;

use num_bigint::BigInt;
use num_traits::{Signed, Zero};

use crate::error::MoneyError;

/// Rounding mode applied when a quotient is not exact.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RoundingMode {
    /// Round toward negative infinity.
    Floor,
    /// Round toward positive infinity.
    Ceil,
    /// Round halves and anything above away from zero.
    #[default]
    HalfUp,
    /// Round only strictly-above-half away from zero; ties truncate.
    HalfDown,
    /// Round strictly-above-half away from zero; ties go to the nearest
    /// even quotient.
    HalfEven,
}

impl RoundingMode {
    /// Returns the canonical token for this mode.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::Floor => "floor",
            Self::Ceil => "ceil",
            Self::HalfUp => "half-up",
            Self::HalfDown => "half-down",
            Self::HalfEven => "half-even",
        }
    }
}

impl std::fmt::Display for RoundingMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for RoundingMode {
    type Err = MoneyError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim();
        [
            Self::Floor,
            Self::Ceil,
            Self::HalfUp,
            Self::HalfDown,
            Self::HalfEven,
        ]
        .into_iter()
        .find(|mode| trimmed.eq_ignore_ascii_case(mode.token()))
        .ok_or_else(|| MoneyError::InvalidFormat {
            input: input.to_string(),
        })
    }
}

/// Divides `dividend` by a strictly positive `divisor`, rounding the
/// quotient according to `mode`.
///
/// The half comparison is done on `2·|r|` against the divisor so midpoint
/// detection never loses precision to truncation.
///
/// ```
/// # use num_bigint::BigInt;
/// # use tender_money::{RoundingMode, div_rounded};
/// let half = div_rounded(&BigInt::from(-5), &BigInt::from(2), RoundingMode::HalfUp);
/// assert_eq!(half, BigInt::from(-3));
/// ```
#[must_use]
pub fn div_rounded(dividend: &BigInt, divisor: &BigInt, mode: RoundingMode) -> BigInt {
    debug_assert!(divisor.is_positive(), "divisor must be strictly positive");

    // Truncating division; the remainder takes the sign of the dividend.
    let quotient = dividend / divisor;
    let remainder = dividend % divisor;
    if remainder.is_zero() {
        return quotient;
    }

    let twice: BigInt = remainder.abs() * 2;
    match mode {
        RoundingMode::Floor => {
            if dividend.is_negative() {
                quotient - 1
            } else {
                quotient
            }
        }
        RoundingMode::Ceil => {
            if dividend.is_positive() {
                quotient + 1
            } else {
                quotient
            }
        }
        RoundingMode::HalfUp => {
            if twice >= *divisor {
                quotient + dividend.signum()
            } else {
                quotient
            }
        }
        RoundingMode::HalfDown => {
            if twice > *divisor {
                quotient + dividend.signum()
            } else {
                quotient
            }
        }
        RoundingMode::HalfEven => match twice.cmp(divisor) {
            Ordering::Greater => quotient + dividend.signum(),
            Ordering::Equal => {
                if (&quotient % BigInt::from(2)).is_zero() {
                    quotient
                } else {
                    quotient + dividend.signum()
                }
            }
            Ordering::Less => quotient,
        },
    }
}
