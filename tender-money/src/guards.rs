//! Predicates that classify unknown input as one of the three accepted
//! money formats.
//!
//! `is_words` and `is_human` answer for the two string forms; `is_shape`
//! answers for untyped structured candidates (a [`serde_json::Value`]
//! object with an exact integer `amount`, a `currency` code, and an
//! optional known `scale` token). `is_price` is the union over all three:
//! a string value is checked against the string forms, anything else
//! against the shape contract.

use serde_json::Value;

use crate::error::MoneyError;
use crate::money::Money;
use crate::parser;

/// Whether the input is a strict code-form string (`"USD 1_000.00"`,
/// underscore grouping only).
///
/// ```
/// # use tender_money::guards::is_words;
/// assert!(is_words("USD 1_000.00"));
/// assert!(!is_words("USD 1,000.00"));
/// ```
#[must_use]
pub fn is_words(input: &str) -> bool {
    parser::is_words_strict(input.trim())
}

/// Whether the input is a symbol-form string (`"$1,000.00"`) and not
/// already code-form.
#[must_use]
pub fn is_human(input: &str) -> bool {
    parser::is_human(input)
}

/// Whether the candidate is a valid structured shape.
///
/// ```
/// # use serde_json::json;
/// # use tender_money::guards::is_shape;
/// assert!(is_shape(&json!({ "amount": "5037", "currency": "USD" })));
/// assert!(!is_shape(&json!({ "amount": "1.5", "currency": "USD" })));
/// ```
#[must_use]
pub fn is_shape(candidate: &Value) -> bool {
    Money::from_shape(candidate).is_ok()
}

/// Whether the candidate is any accepted money input: a code-form string,
/// a symbol-form string, or a structured shape.
#[must_use]
pub fn is_price(candidate: &Value) -> bool {
    match candidate.as_str() {
        Some(text) => is_words(text) || is_human(text),
        None => is_shape(candidate),
    }
}

/// Asserts the input is strict code-form.
///
/// # Errors
/// Returns `MoneyError::InvalidFormat` carrying the input otherwise.
pub fn assure_words(input: &str) -> Result<&str, MoneyError> {
    if is_words(input) {
        Ok(input)
    } else {
        Err(MoneyError::InvalidFormat {
            input: input.to_string(),
        })
    }
}

/// Asserts the input is symbol-form.
///
/// # Errors
/// Returns `MoneyError::InvalidFormat` carrying the input otherwise.
pub fn assure_human(input: &str) -> Result<&str, MoneyError> {
    if is_human(input) {
        Ok(input)
    } else {
        Err(MoneyError::InvalidFormat {
            input: input.to_string(),
        })
    }
}

/// Asserts the candidate is a valid structured shape.
///
/// # Errors
/// Returns `MoneyError::InvalidFormat` carrying the rendered candidate
/// otherwise.
pub fn assure_shape(candidate: &Value) -> Result<&Value, MoneyError> {
    if is_shape(candidate) {
        Ok(candidate)
    } else {
        Err(MoneyError::InvalidFormat {
            input: candidate.to_string(),
        })
    }
}

/// Asserts the candidate is one of the three accepted money inputs.
///
/// # Errors
/// Returns `MoneyError::InvalidFormat` carrying the rendered candidate
/// otherwise.
pub fn assure_price(candidate: &Value) -> Result<&Value, MoneyError> {
    if is_price(candidate) {
        Ok(candidate)
    } else {
        Err(MoneyError::InvalidFormat {
            input: candidate.to_string(),
        })
    }
}
