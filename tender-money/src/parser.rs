//! Total parser over the three accepted money input shapes.
//!
//! A string is code-form (`"USD 1_000.00"`) when it leads with a
//! three-letter code; symbol-form (`"$1,000.00"`) when it begins or ends
//! with a known currency glyph. Structured shapes enter through serde or
//! the shape reader on `Money` and never pass through here. Anything else
//! is rejected.

use std::str::FromStr;
use std::sync::LazyLock;

use num_bigint::BigInt;
use regex::Regex;

use crate::currency::Currency;
use crate::error::MoneyError;
use crate::money::Money;
use crate::scale::Scale;
use crate::symbol::{self, SymbolSpec};

/// Code-form classifier, strict grouping: underscores only.
static WORDS_STRICT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Z]{3} -?[0-9][0-9_]*(\.[0-9][0-9_]*)?$").expect("valid words pattern")
});

/// Code-form classifier, lenient grouping: underscores or commas.
static WORDS_LENIENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Z]{3} -?[0-9][0-9_,]*(\.[0-9][0-9_,]*)?$").expect("valid words pattern")
});

pub(crate) fn is_words_strict(input: &str) -> bool {
    WORDS_STRICT.is_match(input)
}

pub(crate) fn is_words_lenient(input: &str) -> bool {
    WORDS_LENIENT.is_match(input)
}

/// Whether the input looks like a well-formed symbol-form string that is
/// not already code-form.
pub(crate) fn is_human(input: &str) -> bool {
    if is_words_lenient(input) {
        return false;
    }
    let text = input.trim();
    let unsigned = text.strip_prefix('-').unwrap_or(text);
    symbol::split_symbol(unsigned)
        .is_some_and(|(_, amount)| amount_text_is_well_formed(amount))
}

fn amount_text_is_well_formed(amount: &str) -> bool {
    let unsigned = amount.strip_prefix('-').unwrap_or(amount);
    let mut dots = 0_usize;
    let mut digits = 0_usize;
    for ch in unsigned.chars() {
        match ch {
            '0'..='9' => digits += 1,
            '_' | ',' => {}
            '.' => dots += 1,
            _ => return false,
        }
    }
    digits > 0 && dots <= 1 && !unsigned.ends_with('.')
}

/// Parses any accepted string form into a structured value.
///
/// # Errors
/// Returns `MoneyError::InvalidFormat` when the input matches neither the
/// code-form nor the symbol-form grammar.
#[cfg_attr(feature = "tracing", tracing::instrument(level = "debug", err))]
pub fn parse(input: &str) -> Result<Money, MoneyError> {
    parse_with_currency(input, None)
}

/// Parses any accepted string form, with an optional explicit currency used
/// to disambiguate shared symbols (`$`, `¥`, ...).
///
/// # Errors
/// Returns `MoneyError::CurrencyMismatch` when the explicit currency
/// conflicts with the input's currency code or with a uniquely-owned glyph,
/// and `MoneyError::InvalidFormat` for unparseable input.
#[cfg_attr(feature = "tracing", tracing::instrument(level = "debug", err))]
pub fn parse_with_currency(
    input: &str,
    currency: Option<Currency>,
) -> Result<Money, MoneyError> {
    let text = input.trim();
    if is_words_lenient(text) {
        return parse_words(text, currency);
    }
    if let Some(parsed) = try_parse_human(text, currency)? {
        return Ok(parsed);
    }
    Err(MoneyError::InvalidFormat {
        input: input.to_string(),
    })
}

fn parse_words(text: &str, explicit: Option<Currency>) -> Result<Money, MoneyError> {
    // The lenient classifier guarantees the shape "CCC <amount>".
    let (code, amount_text) = text.split_once(' ').ok_or_else(|| MoneyError::InvalidFormat {
        input: text.to_string(),
    })?;
    let currency = Currency::from_str(code)?;
    if let Some(expected) = explicit
        && expected != currency
    {
        return Err(MoneyError::CurrencyMismatch {
            expected,
            found: currency,
        });
    }
    let (amount, scale) = assemble_amount(amount_text, &currency)?;
    Ok(Money::new(amount, currency, scale))
}

fn try_parse_human(
    text: &str,
    explicit: Option<Currency>,
) -> Result<Option<Money>, MoneyError> {
    let (negative, unsigned) = match text.strip_prefix('-') {
        Some(rest) => (true, rest.trim_start()),
        None => (false, text),
    };
    let Some((spec, amount_text)) = symbol::split_symbol(unsigned) else {
        return Ok(None);
    };
    if !amount_text_is_well_formed(amount_text) {
        return Ok(None);
    }

    let currency = resolve_symbol_currency(spec, explicit)?;
    let signed;
    let amount_text = if negative {
        signed = format!("-{amount_text}");
        signed.as_str()
    } else {
        amount_text
    };
    let (amount, scale) = assemble_amount(amount_text, &currency)?;
    Ok(Some(Money::new(amount, currency, scale)))
}

fn resolve_symbol_currency(
    spec: &'static SymbolSpec,
    explicit: Option<Currency>,
) -> Result<Currency, MoneyError> {
    let symbol_default = Currency::from_str(spec.code)?;
    let Some(explicit) = explicit else {
        return Ok(symbol_default);
    };

    // A uniquely-owned glyph overrules the explicit currency.
    if spec.unique && explicit.code() != spec.code {
        return Err(MoneyError::CurrencyMismatch {
            expected: symbol_default,
            found: explicit,
        });
    }
    // An explicit currency that owns a unique glyph rejects other symbols.
    if let Some(required) = symbol::unique_spec_for(explicit.code())
        && required.glyph != spec.glyph
    {
        return Err(MoneyError::CurrencyMismatch {
            expected: explicit,
            found: symbol_default,
        });
    }
    Ok(explicit)
}

/// Assembles a grouped decimal amount string into an exact integer amount
/// and the scale it lands on.
///
/// Fractional digit counts at or below the currency default pad up to the
/// default scale; finer counts promote to the smallest scale that holds
/// them losslessly.
pub(crate) fn assemble_amount(
    amount_text: &str,
    currency: &Currency,
) -> Result<(BigInt, Scale), MoneyError> {
    let invalid = || MoneyError::InvalidFormat {
        input: amount_text.to_string(),
    };

    let (negative, unsigned) = match amount_text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, amount_text),
    };
    if !amount_text_is_well_formed(unsigned) {
        return Err(invalid());
    }

    let (integer_raw, fraction_raw) = match unsigned.split_once('.') {
        Some((i, f)) => (i, f),
        None => (unsigned, ""),
    };
    let integer: String = integer_raw.chars().filter(char::is_ascii_digit).collect();
    let mut fraction: String = fraction_raw.chars().filter(char::is_ascii_digit).collect();

    let default_scale = currency.default_scale();
    let scale = if fraction.len() as u32 <= default_scale.digits() {
        default_scale
    } else {
        Scale::for_fraction_digits(fraction.len() as u32).ok_or_else(invalid)?
    };
    while (fraction.len() as u32) < scale.digits() {
        fraction.push('0');
    }

    let mut digits = String::with_capacity(1 + integer.len() + fraction.len());
    if negative {
        digits.push('-');
    }
    if integer.is_empty() {
        digits.push('0');
    } else {
        digits.push_str(&integer);
    }
    digits.push_str(&fraction);

    let amount = BigInt::from_str(&digits).map_err(|_| invalid())?;
    Ok((amount, scale))
}
