//! Price Input
//!
//! Turns raw keystroke text into the sanitized text shown in the price field,
//! and the sanitized text into a [`NormalizedPrice`].

use crate::prices::Price;

/// Decimal separator accepted by the parser after `,` has been substituted.
const DECIMAL_SEPARATOR: char = '.';

/// The parsed value of the price text, or an explicit invalid marker.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum NormalizedPrice {
    /// The text parsed to a non-negative finite price.
    Valid(Price),

    /// The text was empty, malformed or not parseable.
    #[default]
    Invalid,
}

impl NormalizedPrice {
    /// Returns true if the text parsed to a price.
    pub fn is_valid(&self) -> bool {
        matches!(self, NormalizedPrice::Valid(_))
    }

    /// Returns the parsed price, if any.
    pub fn price(&self) -> Option<Price> {
        match self {
            NormalizedPrice::Valid(price) => Some(*price),
            NormalizedPrice::Invalid => None,
        }
    }
}

impl From<Option<Price>> for NormalizedPrice {
    fn from(price: Option<Price>) -> Self {
        price.map_or(NormalizedPrice::Invalid, NormalizedPrice::Valid)
    }
}

/// Strips every character that is not an ASCII digit, `.` or `,`.
///
/// Order and repetition of the kept characters are preserved; multiple
/// separators are not collapsed.
pub fn sanitize(raw: &str) -> String {
    raw.chars().filter(|ch| is_price_char(*ch)).collect()
}

/// Parses sanitized price text.
///
/// Every `,` is read as `.`. The text must then be ASCII digits with at most
/// one decimal separator and at least one digit, so `"1.2.3"` is invalid while
/// `".5"` and `"5."` are not. Values above [`Price::MAX`] are invalid. Never
/// fails: anything unparseable is [`NormalizedPrice::Invalid`].
pub fn parse(clean: &str) -> NormalizedPrice {
    let normalized = clean.replace(',', ".");

    if !is_plain_decimal(&normalized) {
        return NormalizedPrice::Invalid;
    }

    normalized
        .parse::<f64>()
        .ok()
        .and_then(Price::new)
        .into()
}

/// Sanitizes then parses raw text in one step.
pub fn normalize(raw: &str) -> (String, NormalizedPrice) {
    let clean = sanitize(raw);
    let price = parse(&clean);

    (clean, price)
}

fn is_price_char(ch: char) -> bool {
    ch.is_ascii_digit() || ch == '.' || ch == ','
}

fn is_plain_decimal(text: &str) -> bool {
    let mut digits = 0usize;
    let mut separators = 0usize;

    for ch in text.chars() {
        if ch.is_ascii_digit() {
            digits += 1;
        } else if ch == DECIMAL_SEPARATOR {
            separators += 1;
        } else {
            return false;
        }
    }

    digits > 0 && separators <= 1
}
