//! Currency Selector
//!
//! A two-state picker over [`Currency::ALL`]. Opening, selecting and cancelling
//! are distinct transitions so each can be observed and tested on its own.

use tracing::{trace, warn};

use crate::currency::Currency;

/// Whether the currency picker is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PickerState {
    /// The picker is hidden.
    #[default]
    Closed,

    /// The picker is listing currencies.
    Open,
}

impl PickerState {
    /// Returns true if the picker is showing.
    pub fn is_open(self) -> bool {
        self == PickerState::Open
    }
}

/// The selected currency and the picker used to change it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CurrencySelector {
    currency: Currency,
    picker: PickerState,
}

impl CurrencySelector {
    /// Creates a closed selector with `currency` selected.
    pub fn new(currency: Currency) -> Self {
        Self {
            currency,
            picker: PickerState::Closed,
        }
    }

    /// The selected currency.
    pub fn currency(self) -> Currency {
        self.currency
    }

    /// The picker state.
    pub fn picker(self) -> PickerState {
        self.picker
    }

    /// `Closed -> Open`; no-op when already open.
    #[must_use]
    pub fn request_open(self) -> Self {
        trace!(from = ?self.picker, "currency picker opened");

        Self {
            picker: PickerState::Open,
            ..self
        }
    }

    /// Selects `currency` and closes the picker, from either state.
    #[must_use]
    pub fn select(self, currency: Currency) -> Self {
        trace!(from = ?self.picker, currency = currency.code(), "currency selected");

        Self {
            currency,
            picker: PickerState::Closed,
        }
    }

    /// Selects the currency shown as `symbol`.
    ///
    /// For presentation layers whose picker hands back the tapped glyph rather
    /// than a [`Currency`]; [`AppState::update`](crate::state::AppState::update)
    /// and the line session take an already parsed [`Currency`].
    ///
    /// A symbol outside the fixed set is a contract violation by the caller;
    /// it is logged and the selector is returned unchanged.
    #[must_use]
    pub fn select_symbol(self, symbol: &str) -> Self {
        match Currency::from_symbol(symbol) {
            Some(currency) => self.select(currency),
            None => {
                warn!(symbol, "ignoring selection of unsupported currency symbol");
                self
            }
        }
    }

    /// `Open -> Closed` keeping the current currency; no-op when closed.
    #[must_use]
    pub fn cancel(self) -> Self {
        trace!(from = ?self.picker, "currency picker cancelled");

        Self {
            picker: PickerState::Closed,
            ..self
        }
    }
}
