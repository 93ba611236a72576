//! The closed set of decimal scales a money value can carry.
//!
//! A scale names the power of ten that relates the stored integer amount to
//! the displayed value: an amount of `700` at `centi x10^-2` displays as
//! `7.00`. The magnitude is the canonical key; the SI prefix is naming
//! sugar on top of it.

use std::str::FromStr;

use num_bigint::BigInt;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::MoneyError;

/// `10^exp` as a big integer; the exact rescaling multiplier between scales.
///
/// Exponents here are bounded by the scale magnitudes and the factor-capture
/// precision, all well inside `u128` range.
pub(crate) fn pow10(exp: u32) -> BigInt {
    debug_assert!(exp <= 38);
    BigInt::from(10u128.pow(exp))
}

/// Supported decimal scales, keyed by their power-of-ten magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scale {
    /// Whole units, `x10^0`.
    Whole,
    /// Hundredths, `x10^-2`.
    Centi,
    /// Thousandths, `x10^-3`.
    Milli,
    /// Millionths, `x10^-6`.
    Micro,
    /// Billionths, `x10^-9`.
    Nano,
    /// Trillionths, `x10^-12`.
    Pico,
}

/// Every scale, ordered coarse to fine.
pub const ALL_SCALES: [Scale; 6] = [
    Scale::Whole,
    Scale::Centi,
    Scale::Milli,
    Scale::Micro,
    Scale::Nano,
    Scale::Pico,
];

impl Scale {
    /// Returns the signed power-of-ten magnitude (`0` for whole, `-12` for pico).
    #[must_use]
    pub const fn magnitude(self) -> i8 {
        match self {
            Self::Whole => 0,
            Self::Centi => -2,
            Self::Milli => -3,
            Self::Micro => -6,
            Self::Nano => -9,
            Self::Pico => -12,
        }
    }

    /// Returns the number of fractional digits carried at this scale.
    #[must_use]
    pub const fn digits(self) -> u32 {
        self.magnitude().unsigned_abs() as u32
    }

    /// Returns the finer of two scales (the more negative magnitude).
    ///
    /// Ties return `self`; the two operands are equal in that case.
    #[must_use]
    pub const fn finer(self, other: Self) -> Self {
        if other.magnitude() < self.magnitude() {
            other
        } else {
            self
        }
    }

    /// Looks up the scale with the given magnitude, if it is a member of the
    /// closed set.
    #[must_use]
    pub const fn from_magnitude(magnitude: i8) -> Option<Self> {
        match magnitude {
            0 => Some(Self::Whole),
            -2 => Some(Self::Centi),
            -3 => Some(Self::Milli),
            -6 => Some(Self::Micro),
            -9 => Some(Self::Nano),
            -12 => Some(Self::Pico),
            _ => None,
        }
    }

    /// Returns the smallest scale able to carry `fraction_digits` fractional
    /// digits, or `None` when the count exceeds pico precision.
    #[must_use]
    pub fn for_fraction_digits(fraction_digits: u32) -> Option<Self> {
        ALL_SCALES
            .into_iter()
            .find(|scale| scale.digits() >= fraction_digits)
    }

    /// Returns the SI prefix for this scale (`"centi"`, `"pico"`, ...).
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Whole => "whole",
            Self::Centi => "centi",
            Self::Milli => "milli",
            Self::Micro => "micro",
            Self::Nano => "nano",
            Self::Pico => "pico",
        }
    }

    /// Returns the canonical token, SI prefix plus magnitude (`"centi x10^-2"`).
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::Whole => "whole x10^0",
            Self::Centi => "centi x10^-2",
            Self::Milli => "milli x10^-3",
            Self::Micro => "micro x10^-6",
            Self::Nano => "nano x10^-9",
            Self::Pico => "pico x10^-12",
        }
    }
}

impl std::fmt::Display for Scale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for Scale {
    type Err = MoneyError;

    /// Accepts the canonical token or the bare SI prefix, case-insensitively.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim();
        for scale in ALL_SCALES {
            if trimmed.eq_ignore_ascii_case(scale.token())
                || trimmed.eq_ignore_ascii_case(scale.prefix())
            {
                return Ok(scale);
            }
        }
        Err(MoneyError::InvalidScale {
            token: input.to_string(),
        })
    }
}

impl Serialize for Scale {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.token())
    }
}

impl<'de> Deserialize<'de> for Scale {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::from_str(&raw).map_err(serde::de::Error::custom)
    }
}
