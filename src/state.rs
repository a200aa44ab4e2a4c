//! Application State
//!
//! The whole calculator is one immutable [`AppState`] value. A presentation
//! layer feeds it [`Event`]s through [`AppState::update`] and renders
//! [`AppState::view`]; nothing derived is ever stored.

use tracing::debug;

use crate::{
    config::Config,
    currency::Currency,
    discounts::{DiscountController, DiscountPercent},
    display::format_amount,
    feedback::Feedback,
    input::{self, NormalizedPrice},
    pricing::{self, DerivedAmounts},
    selector::{CurrencySelector, PickerState},
};

/// A raw user event from the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The price field's text changed.
    TextChanged(String),

    /// The discount control moved to a new value.
    DiscountChanged(i32),

    /// The currency glyph next to the price was tapped.
    CurrencyGlyphTapped,

    /// A currency in the open picker was tapped.
    CurrencyOptionTapped(Currency),

    /// The picker's cancel action was tapped, or the picker was dismissed.
    CancelTapped,
}

/// The calculator's complete state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    price_text: String,
    discount: DiscountController,
    selector: CurrencySelector,
}

impl AppState {
    /// Creates the start-up state: empty price, 20% discount, euro.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the start-up state from configured defaults.
    pub fn from_config(config: &Config) -> Self {
        Self {
            price_text: String::new(),
            discount: DiscountController::new(config.discount()),
            selector: CurrencySelector::new(config.currency()),
        }
    }

    /// The sanitized price text.
    pub fn price_text(&self) -> &str {
        &self.price_text
    }

    /// The discount controller.
    pub fn discount(&self) -> DiscountController {
        self.discount
    }

    /// The currency selector.
    pub fn selector(&self) -> CurrencySelector {
        self.selector
    }

    /// Applies one event and returns the next state.
    ///
    /// `feedback` is signalled once for every [`Event::DiscountChanged`], after
    /// the new discount is in place.
    #[must_use]
    pub fn update<F>(self, event: Event, feedback: &F) -> Self
    where
        F: Feedback + ?Sized,
    {
        debug!(?event, "applying event");

        match event {
            Event::TextChanged(raw) => self.with_price_text(&raw),
            Event::DiscountChanged(value) => Self {
                discount: self.discount.set_discount(value, feedback),
                ..self
            },
            Event::CurrencyGlyphTapped => Self {
                selector: self.selector.request_open(),
                ..self
            },
            Event::CurrencyOptionTapped(currency) => Self {
                selector: self.selector.select(currency),
                ..self
            },
            Event::CancelTapped => Self {
                selector: self.selector.cancel(),
                ..self
            },
        }
    }

    /// Replaces the price text with the sanitized form of `raw`.
    #[must_use]
    pub fn with_price_text(self, raw: &str) -> Self {
        Self {
            price_text: input::sanitize(raw),
            ..self
        }
    }

    /// Derives everything the presentation layer renders.
    pub fn view(&self) -> View<'_> {
        let price = input::parse(&self.price_text);
        let discount = self.discount.percent();

        View {
            clean_text: &self.price_text,
            price,
            discount,
            currency: self.selector.currency(),
            picker: self.selector.picker(),
            amounts: pricing::compute(price, discount),
        }
    }
}

/// Values derived from an [`AppState`] for rendering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct View<'a> {
    /// The sanitized price text to show in the input field.
    pub clean_text: &'a str,

    /// The parsed price.
    pub price: NormalizedPrice,

    /// The selected discount.
    pub discount: DiscountPercent,

    /// The selected currency.
    pub currency: Currency,

    /// Whether the currency picker is showing.
    pub picker: PickerState,

    /// Savings and final price.
    pub amounts: DerivedAmounts,
}

impl View<'_> {
    /// Returns true if the price text parsed.
    pub fn is_valid(&self) -> bool {
        self.price.is_valid()
    }

    /// The savings, e.g. `"€20.00"`.
    pub fn formatted_savings(&self) -> String {
        format_amount(self.currency, self.amounts.discount_amount())
    }

    /// The final price, e.g. `"€80.00"`.
    pub fn formatted_final_price(&self) -> String {
        format_amount(self.currency, self.amounts.final_price())
    }

    /// The original price, or an empty string when the text does not parse.
    pub fn formatted_price(&self) -> String {
        self.price
            .price()
            .map(|price| format_amount(self.currency, *price))
            .unwrap_or_default()
    }
}
