//! The table of currency glyphs used by the symbol ("human") string form.

/// One glyph entry: the symbol text, the currency it resolves to by
/// default, and whether the glyph identifies that currency uniquely.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct SymbolSpec {
    pub glyph: &'static str,
    pub code: &'static str,
    pub unique: bool,
}

/// The common glyphs. A glyph shared by several currencies (`$`, `¥`, ...)
/// resolves to its most common currency; `unique` marks glyphs owned by a
/// single currency, which is data the parser's conflict rules read.
pub(crate) const SYMBOLS: &[SymbolSpec] = &[
    SymbolSpec {
        glyph: "$",
        code: "USD",
        unique: false,
    },
    SymbolSpec {
        glyph: "\u{20ac}", // €
        code: "EUR",
        unique: true,
    },
    SymbolSpec {
        glyph: "\u{a5}", // ¥
        code: "JPY",
        unique: false,
    },
    SymbolSpec {
        glyph: "\u{a3}", // £
        code: "GBP",
        unique: false,
    },
    SymbolSpec {
        glyph: "\u{20b9}", // ₹
        code: "INR",
        unique: false,
    },
    SymbolSpec {
        glyph: "\u{20a9}", // ₩
        code: "KRW",
        unique: false,
    },
];

/// Finds the glyph entry whose symbol begins or ends `text`, returning the
/// entry and the remaining amount text.
pub(crate) fn split_symbol(text: &str) -> Option<(&'static SymbolSpec, &str)> {
    for spec in SYMBOLS {
        if let Some(rest) = text.strip_prefix(spec.glyph) {
            return Some((spec, rest.trim_start()));
        }
        if let Some(rest) = text.strip_suffix(spec.glyph) {
            return Some((spec, rest.trim_end()));
        }
    }
    None
}

/// Returns the display glyph for a currency code, if the table carries one.
pub(crate) fn glyph_for(code: &str) -> Option<&'static str> {
    SYMBOLS
        .iter()
        .find(|spec| spec.code == code)
        .map(|spec| spec.glyph)
}

/// Returns the glyph entry a currency requires exclusively, if any.
pub(crate) fn unique_spec_for(code: &str) -> Option<&'static SymbolSpec> {
    SYMBOLS
        .iter()
        .find(|spec| spec.unique && spec.code == code)
}
