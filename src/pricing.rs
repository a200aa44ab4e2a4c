//! Pricing

use crate::{discounts::DiscountPercent, input::NormalizedPrice};

/// Savings and final price derived from a price and a discount.
///
/// Values are unrounded; rounding for display happens in [`crate::display`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DerivedAmounts {
    discount_amount: f64,
    final_price: f64,
}

impl DerivedAmounts {
    /// Both amounts zero, used whenever the price is invalid.
    pub const ZERO: DerivedAmounts = DerivedAmounts {
        discount_amount: 0.0,
        final_price: 0.0,
    };

    /// Amount taken off the original price.
    pub fn discount_amount(&self) -> f64 {
        self.discount_amount
    }

    /// Price left to pay after the discount.
    pub fn final_price(&self) -> f64 {
        self.final_price
    }
}

/// Calculates the discount amount and final price.
///
/// `discount_amount = price * discount / 100` and
/// `final_price = price - discount_amount`, floored at zero. An invalid price
/// yields [`DerivedAmounts::ZERO`].
pub fn compute(price: NormalizedPrice, discount: DiscountPercent) -> DerivedAmounts {
    let Some(price) = price.price() else {
        return DerivedAmounts::ZERO;
    };

    let discount_amount = *price * discount.as_f64() / 100.0;
    let final_price = (*price - discount_amount).max(0.0);

    DerivedAmounts {
        discount_amount,
        final_price,
    }
}
