//! Currency identification with ISO 4217 support and extensible fallback.

use std::str::FromStr;

use iso_currency::Currency as IsoCurrency;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::MoneyError;
use crate::scale::Scale;

/// Canonical code wrapper for non-ISO currencies.
///
/// Invariants: trimmed, ASCII uppercased, alphanumeric, between one and
/// eight characters. Constructing through [`CustomCode::try_new`] guarantees
/// the code round-trips through serde and `Display` without ever emitting an
/// empty or lowercase token.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CustomCode(String);

impl CustomCode {
    /// Attempts to build a canonical custom code from arbitrary input.
    ///
    /// # Errors
    /// Returns `MoneyError::InvalidFormat` when the trimmed input is empty,
    /// longer than eight characters, or contains non-alphanumeric characters.
    pub fn try_new(input: &str) -> Result<Self, MoneyError> {
        let token = input.trim().to_ascii_uppercase();
        if token.is_empty()
            || token.len() > 8
            || !token.chars().all(|c| c.is_ascii_alphanumeric())
        {
            return Err(MoneyError::InvalidFormat {
                input: input.to_string(),
            });
        }
        Ok(Self(token))
    }

    /// Returns the inner canonical code.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CustomCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Currency identifier: any ISO 4217 code plus an extensible fallback for
/// custom and crypto codes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Currency {
    /// ISO 4217 currency code (backed by the `iso_currency` crate).
    Iso(IsoCurrency),
    /// Unknown or provider-specific currency.
    Other(CustomCode),
}

impl Default for Currency {
    fn default() -> Self {
        Self::Iso(IsoCurrency::USD)
    }
}

/// Currency codes whose canonical scale is whole units (no fractional digits).
const WHOLE_UNIT_CODES: &[&str] = &["JPY", "KRW", "VND", "IDR", "CLP", "PYG", "UGX"];

/// Currency codes whose canonical scale is thousandths.
const MILLI_UNIT_CODES: &[&str] = &["BHD", "KWD", "OMR", "TND"];

impl Currency {
    /// Attempts to parse a currency from the provided string.
    ///
    /// Unknown codes are accepted as [`Currency::Other`] so custom and crypto
    /// currencies flow through the same arithmetic.
    ///
    /// # Errors
    /// Returns `MoneyError::InvalidFormat` when the input cannot be
    /// canonicalized into a code at all.
    pub fn try_from_str(input: &str) -> Result<Self, MoneyError> {
        Self::from_str(input)
    }

    /// Returns the canonical string code for this currency.
    #[must_use]
    pub fn code(&self) -> &str {
        match self {
            Self::Iso(iso) => iso.code(),
            Self::Other(code) => code.as_str(),
        }
    }

    /// Returns the human-readable name for this currency.
    #[must_use]
    pub fn full_name(&self) -> &str {
        match self {
            Self::Iso(iso) => iso.name(),
            Self::Other(code) => code.as_str(),
        }
    }

    /// Returns the canonical scale for this currency.
    ///
    /// Whole-unit and milli-unit currencies come from a fixed registry;
    /// every other code, including every unknown one, defaults to centi.
    /// Lookups never fail.
    #[must_use]
    pub fn default_scale(&self) -> Scale {
        let code = self.code();
        if WHOLE_UNIT_CODES.contains(&code) {
            Scale::Whole
        } else if MILLI_UNIT_CODES.contains(&code) {
            Scale::Milli
        } else {
            Scale::Centi
        }
    }

    /// Whether this value is an ISO 4217 currency (not an `Other` payload).
    #[must_use]
    pub const fn is_iso(&self) -> bool {
        matches!(self, Self::Iso(_))
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Currency {
    type Err = MoneyError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(MoneyError::InvalidFormat {
                input: input.to_string(),
            });
        }
        let token = trimmed.to_ascii_uppercase();
        if let Some(iso) = IsoCurrency::from_code(&token) {
            return Ok(Self::Iso(iso));
        }
        Ok(Self::Other(CustomCode::try_new(trimmed)?))
    }
}

impl Serialize for Currency {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.code())
    }
}

impl<'de> Deserialize<'de> for Currency {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::from_str(&raw).map_err(serde::de::Error::custom)
    }
}

impl From<MajorCurrency> for Currency {
    fn from(major: MajorCurrency) -> Self {
        Self::Iso(major.iso())
    }
}

/// Closed enumeration of the 25 most-traded currencies.
///
/// Callers that want to rule out custom codes statically can take a
/// `MajorCurrency` and convert it into [`Currency`] losslessly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[allow(missing_docs)]
pub enum MajorCurrency {
    USD,
    EUR,
    JPY,
    GBP,
    CNY,
    AUD,
    CAD,
    CHF,
    HKD,
    SGD,
    SEK,
    KRW,
    NOK,
    NZD,
    INR,
    MXN,
    TWD,
    ZAR,
    BRL,
    DKK,
    PLN,
    THB,
    ILS,
    IDR,
    CZK,
}

impl MajorCurrency {
    /// Returns the backing ISO 4217 currency.
    #[must_use]
    pub const fn iso(self) -> IsoCurrency {
        match self {
            Self::USD => IsoCurrency::USD,
            Self::EUR => IsoCurrency::EUR,
            Self::JPY => IsoCurrency::JPY,
            Self::GBP => IsoCurrency::GBP,
            Self::CNY => IsoCurrency::CNY,
            Self::AUD => IsoCurrency::AUD,
            Self::CAD => IsoCurrency::CAD,
            Self::CHF => IsoCurrency::CHF,
            Self::HKD => IsoCurrency::HKD,
            Self::SGD => IsoCurrency::SGD,
            Self::SEK => IsoCurrency::SEK,
            Self::KRW => IsoCurrency::KRW,
            Self::NOK => IsoCurrency::NOK,
            Self::NZD => IsoCurrency::NZD,
            Self::INR => IsoCurrency::INR,
            Self::MXN => IsoCurrency::MXN,
            Self::TWD => IsoCurrency::TWD,
            Self::ZAR => IsoCurrency::ZAR,
            Self::BRL => IsoCurrency::BRL,
            Self::DKK => IsoCurrency::DKK,
            Self::PLN => IsoCurrency::PLN,
            Self::THB => IsoCurrency::THB,
            Self::ILS => IsoCurrency::ILS,
            Self::IDR => IsoCurrency::IDR,
            Self::CZK => IsoCurrency::CZK,
        }
    }

    /// Returns the three-letter code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::USD => "USD",
            Self::EUR => "EUR",
            Self::JPY => "JPY",
            Self::GBP => "GBP",
            Self::CNY => "CNY",
            Self::AUD => "AUD",
            Self::CAD => "CAD",
            Self::CHF => "CHF",
            Self::HKD => "HKD",
            Self::SGD => "SGD",
            Self::SEK => "SEK",
            Self::KRW => "KRW",
            Self::NOK => "NOK",
            Self::NZD => "NZD",
            Self::INR => "INR",
            Self::MXN => "MXN",
            Self::TWD => "TWD",
            Self::ZAR => "ZAR",
            Self::BRL => "BRL",
            Self::DKK => "DKK",
            Self::PLN => "PLN",
            Self::THB => "THB",
            Self::ILS => "ILS",
            Self::IDR => "IDR",
            Self::CZK => "CZK",
        }
    }
}

impl std::fmt::Display for MajorCurrency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
