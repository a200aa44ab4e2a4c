//! Currencies
//!
//! The fixed set of display symbols offered by the currency picker. A currency
//! is cosmetic: amounts are never converted between them.

use std::{fmt, str::FromStr};

use rusty_money::iso;
use serde::Deserialize;
use thiserror::Error;

/// Errors parsing a currency from user or configuration input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CurrencyError {
    /// The text is neither a supported symbol nor a supported ISO code.
    #[error("Unknown currency: {0}")]
    Unknown(String),
}

/// A currency symbol from the fixed picker set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum Currency {
    /// Euro, `€`.
    #[default]
    Eur,

    /// US dollar, `$`.
    Usd,

    /// Pound sterling, `£`.
    Gbp,

    /// Japanese yen, `¥`.
    Jpy,

    /// Indian rupee, `₹`.
    Inr,

    /// South Korean won, `₩`.
    Krw,

    /// Turkish lira, `₺`.
    Try,
}

impl Currency {
    /// Every supported currency, in picker order.
    pub const ALL: [Currency; 7] = [
        Currency::Eur,
        Currency::Usd,
        Currency::Gbp,
        Currency::Jpy,
        Currency::Inr,
        Currency::Krw,
        Currency::Try,
    ];

    /// Returns the display symbol.
    pub fn symbol(self) -> &'static str {
        match self {
            Currency::Eur => "€",
            Currency::Usd => "$",
            Currency::Gbp => "£",
            Currency::Jpy => "¥",
            Currency::Inr => "₹",
            Currency::Krw => "₩",
            Currency::Try => "₺",
        }
    }

    /// Returns the ISO 4217 definition the symbol stands for.
    pub fn iso(self) -> &'static iso::Currency {
        match self {
            Currency::Eur => iso::EUR,
            Currency::Usd => iso::USD,
            Currency::Gbp => iso::GBP,
            Currency::Jpy => iso::JPY,
            Currency::Inr => iso::INR,
            Currency::Krw => iso::KRW,
            Currency::Try => iso::TRY,
        }
    }

    /// Returns the ISO 4217 alphabetic code, e.g. `"EUR"`.
    pub fn code(self) -> &'static str {
        self.iso().iso_alpha_code
    }

    /// Looks up a currency by its exact display symbol.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|currency| currency.symbol() == symbol)
    }

    /// Looks up a currency by ISO code, ignoring ASCII case.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|currency| currency.code().eq_ignore_ascii_case(code))
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Currency {
    type Err = CurrencyError;

    /// Accepts either a display symbol (`"₹"`) or an ISO code (`"inr"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        Self::from_symbol(s)
            .or_else(|| Self::from_code(s))
            .ok_or_else(|| CurrencyError::Unknown(s.to_string()))
    }
}

impl TryFrom<String> for Currency {
    type Error = CurrencyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
