//! Display
//!
//! Amounts stay unrounded until they reach the presentation boundary, where
//! they are shown with two decimals after the currency symbol.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::currency::Currency;

/// Number of decimals every amount is displayed with.
pub const DISPLAY_DECIMALS: u32 = 2;

/// Rounds an amount to [`DISPLAY_DECIMALS`], half away from zero.
///
/// Rounding works on the exact binary value of `amount`, so `1.005` (stored as
/// `1.00499…`) becomes `1.00`. Returns `None` for values `Decimal` cannot hold.
pub fn round_for_display(amount: f64) -> Option<Decimal> {
    let rounded = Decimal::from_f64_retain(amount)?
        .round_dp_with_strategy(DISPLAY_DECIMALS, RoundingStrategy::MidpointAwayFromZero);

    if rounded.is_zero() {
        Some(Decimal::ZERO)
    } else {
        Some(rounded)
    }
}

/// Formats `amount` with two decimals and no symbol, e.g. `"80.00"`.
pub fn format_number(amount: f64) -> String {
    match round_for_display(amount) {
        Some(rounded) => format!("{rounded:.2}"),
        None => format!("{amount:.2}"),
    }
}

/// Formats `amount` prefixed with the currency symbol, e.g. `"€80.00"`.
pub fn format_amount(currency: Currency, amount: f64) -> String {
    format!("{}{}", currency.symbol(), format_number(amount))
}
