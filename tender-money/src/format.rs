//! Rendering of structured values into the code-form ("words") and
//! symbol-form ("human") strings.

use num_traits::Signed;

use crate::money::Money;
use crate::scale::Scale;
use crate::symbol;

/// Inserts `separator` every three digits from the decimal point leftward.
fn group_integer(digits: &str, separator: char) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    let len = digits.len();
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (len - idx) % 3 == 0 {
            out.push(separator);
        }
        out.push(ch);
    }
    out
}

/// Inserts `separator` every three digits from the decimal point rightward.
fn group_fraction(digits: &str, separator: char) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && idx % 3 == 0 {
            out.push(separator);
        }
        out.push(ch);
    }
    out
}

/// Splits the absolute amount into integer and fractional digit runs,
/// zero-padding so the integer part keeps at least one digit.
fn digit_parts(money: &Money) -> (String, String) {
    let digits = money.amount().abs().to_string();
    let fraction_len = money.scale().digits() as usize;
    let padded = if digits.len() < fraction_len + 1 {
        format!("{digits:0>width$}", width = fraction_len + 1)
    } else {
        digits
    };
    let split = padded.len() - fraction_len;
    let integer = padded[..split].to_string();
    let fraction = padded[split..].to_string();
    (integer, fraction)
}

/// Renders the lossless code-form string, e.g. `"USD 1_000_000.00"`.
pub(crate) fn words(money: &Money) -> String {
    let (integer, fraction) = digit_parts(money);
    let sign = if money.amount().is_negative() { "-" } else { "" };
    let grouped = group_integer(&integer, '_');
    let code = money.currency().code();

    match money.scale() {
        Scale::Whole => format!("{code} {sign}{grouped}"),
        // Centi always shows both decimals.
        Scale::Centi => format!("{code} {sign}{grouped}.{fraction}"),
        _ => format!(
            "{code} {sign}{grouped}.{}",
            group_fraction(&fraction, '_')
        ),
    }
}

/// Renders the display-oriented symbol-form string, e.g. `"$1,000,000.00"`.
///
/// Currencies without a table glyph fall back to the code as a prefix; a
/// multi-character symbol is separated from the amount by a space.
pub(crate) fn human(money: &Money) -> String {
    let (integer, fraction) = digit_parts(money);
    let sign = if money.amount().is_negative() { "-" } else { "" };
    let grouped = group_integer(&integer, ',');
    let code = money.currency().code();
    let glyph = symbol::glyph_for(code).unwrap_or(code);
    let spacing = if glyph.chars().count() > 1 { " " } else { "" };

    match money.scale() {
        Scale::Whole => format!("{sign}{glyph}{spacing}{grouped}"),
        _ => format!("{sign}{glyph}{spacing}{grouped}.{fraction}"),
    }
}
