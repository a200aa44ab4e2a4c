//! Rebate prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    config::{Config, ConfigError},
    currency::{Currency, CurrencyError},
    discounts::{DiscountController, DiscountPercent},
    display::{format_amount, format_number},
    feedback::{Feedback, FeedbackError, NoopFeedback},
    input::{NormalizedPrice, normalize, parse, sanitize},
    prices::Price,
    pricing::{DerivedAmounts, compute},
    selector::{CurrencySelector, PickerState},
    state::{AppState, Event, View},
    summary::{Summary, SummaryError},
};
