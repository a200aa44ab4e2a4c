//! Discounts
//!
//! The discount percentage and the controller that owns it.

use std::fmt;

use tracing::debug;

use crate::feedback::Feedback;

/// A whole-number discount percentage in `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DiscountPercent(u8);

impl DiscountPercent {
    /// No discount.
    pub const MIN: DiscountPercent = DiscountPercent(0);

    /// Everything free.
    pub const MAX: DiscountPercent = DiscountPercent(100);

    /// Discount selected when the calculator starts.
    pub const DEFAULT: DiscountPercent = DiscountPercent(20);

    /// Creates a percentage, clamping `value` into `0..=100`.
    pub fn clamped(value: i32) -> Self {
        let clamped = value.clamp(i32::from(Self::MIN.0), i32::from(Self::MAX.0));

        // Clamping keeps the value inside `u8`.
        DiscountPercent(u8::try_from(clamped).unwrap_or(Self::MAX.0))
    }

    /// Returns the percentage as an integer.
    pub fn value(self) -> u8 {
        self.0
    }

    /// Returns the percentage as a float, for arithmetic.
    pub fn as_f64(self) -> f64 {
        f64::from(self.0)
    }
}

impl Default for DiscountPercent {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for DiscountPercent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// Owns the current discount percentage.
///
/// Every change goes through [`DiscountController::set_discount`], which
/// applies the clamped value and then fires one feedback signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DiscountController {
    percent: DiscountPercent,
}

impl DiscountController {
    /// Creates a controller starting at `percent`.
    pub fn new(percent: DiscountPercent) -> Self {
        Self { percent }
    }

    /// Returns the current discount percentage.
    pub fn percent(self) -> DiscountPercent {
        self.percent
    }

    /// Sets the discount to `value`, clamped into `0..=100`.
    ///
    /// Feedback is signalled once per call, including when the clamped value
    /// equals the current one. A failing signal is logged and otherwise
    /// ignored; the returned controller always carries the new value.
    #[must_use]
    pub fn set_discount<F>(self, value: i32, feedback: &F) -> Self
    where
        F: Feedback + ?Sized,
    {
        let updated = Self {
            percent: DiscountPercent::clamped(value),
        };

        if let Err(error) = feedback.selection_changed() {
            debug!(%error, "selection feedback failed");
        }

        updated
    }
}
