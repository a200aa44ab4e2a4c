//! Prices

use std::ops::Deref;

/// A non-negative, finite price in major currency units.
///
/// Prices are bounded by [`Price::MAX`] so a percentage of any price stays
/// finite.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Price {
    value: f64,
}

impl Price {
    /// The zero price.
    pub const ZERO: Price = Price { value: 0.0 };

    /// The largest accepted price; `MAX * 100` is still finite.
    pub const MAX: Price = Price {
        value: f64::MAX / 100.0,
    };

    /// Creates a new price, or `None` if `value` is negative, `NaN` or above
    /// [`Price::MAX`].
    pub fn new(value: f64) -> Option<Self> {
        (0.0..=Self::MAX.value)
            .contains(&value)
            .then_some(Price { value })
    }

    /// Returns the price as a plain float.
    pub fn value(self) -> f64 {
        self.value
    }
}

impl Deref for Price {
    type Target = f64;

    fn deref(&self) -> &Self::Target {
        &self.value
    }
}
