use thiserror::Error;

use crate::currency::Currency;

/// Errors that can occur when parsing or operating on money values.
///
/// Every failure is immediate and structural; no operation retries or
/// produces a partial result. Each variant carries the offending input so
/// callers can surface a useful diagnostic.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MoneyError {
    /// The input matched none of the accepted money formats, or a shape
    /// field was missing or not an exact integer.
    #[error("input matches no known money format: '{input}'")]
    InvalidFormat {
        /// The offending input text.
        input: String,
    },
    /// A binary or n-ary operation received operands in different
    /// currencies, or a currency symbol conflicted with an explicit
    /// currency override.
    #[error("currency mismatch: expected {expected}, found {found}")]
    CurrencyMismatch {
        /// The expected currency.
        expected: Currency,
        /// The actual currency found.
        found: Currency,
    },
    /// An aggregate operation received an empty sequence where its contract
    /// forbids one.
    #[error("{operation} requires at least one value")]
    EmptyInput {
        /// The operation that rejected the empty sequence.
        operation: &'static str,
    },
    /// Division by a zero scalar.
    #[error("division by zero")]
    DivideByZero,
    /// An allocation partition was structurally invalid.
    #[error("invalid partition: {reason}")]
    InvalidPartition {
        /// Why the partition was rejected.
        reason: &'static str,
    },
    /// A scale token outside the closed set of supported scales.
    #[error("unknown scale token: '{token}'")]
    InvalidScale {
        /// The offending token.
        token: String,
    },
}
