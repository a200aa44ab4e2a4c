//! Summary
//!
//! Terminal rendering of the calculator card and the currency picker.

use std::io;

use tabled::{
    builder::Builder,
    settings::{
        Alignment, Style,
        object::{Columns, Rows},
    },
};
use thiserror::Error;

use crate::{currency::Currency, state::View};

/// Label of the price input row.
pub const ORIGINAL_PRICE_LABEL: &str = "Original Price";

/// Label of the discount row.
pub const DISCOUNT_LABEL: &str = "Discount";

/// Label of the savings row.
pub const SAVINGS_LABEL: &str = "You Save";

/// Label of the final price row.
pub const FINAL_PRICE_LABEL: &str = "Final Price";

/// Title shown above the currency list.
pub const PICKER_TITLE: &str = "Choose Currency";

/// Placeholder shown in place of an empty price.
const PRICE_PLACEHOLDER: &str = "0";

/// Errors that can occur when writing a summary.
#[derive(Debug, Error)]
pub enum SummaryError {
    /// IO error
    #[error("Failed to write summary: {0}")]
    Io(#[from] io::Error),
}

/// The rendered text of one calculator card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    original_price: String,
    discount: String,
    savings: String,
    final_price: String,
}

impl Summary {
    /// The price as typed, behind the currency symbol.
    pub fn original_price(&self) -> &str {
        &self.original_price
    }

    /// The discount, e.g. `"20%"`.
    pub fn discount(&self) -> &str {
        &self.discount
    }

    /// The savings, e.g. `"€20.00"`.
    pub fn savings(&self) -> &str {
        &self.savings
    }

    /// The final price, e.g. `"€80.00"`.
    pub fn final_price(&self) -> &str {
        &self.final_price
    }

    /// Writes the card as a two-column table.
    ///
    /// # Errors
    ///
    /// Returns [`SummaryError::Io`] if writing to `out` fails.
    pub fn write_to(&self, mut out: impl io::Write) -> Result<(), SummaryError> {
        let mut builder = Builder::default();

        builder.push_record([ORIGINAL_PRICE_LABEL, self.original_price.as_str()]);
        builder.push_record([DISCOUNT_LABEL, self.discount.as_str()]);
        builder.push_record([SAVINGS_LABEL, self.savings.as_str()]);
        builder.push_record([FINAL_PRICE_LABEL, self.final_price.as_str()]);

        let mut table = builder.build();

        table.with(Style::modern_rounded());
        table.modify(Columns::new(1..2), Alignment::right());

        writeln!(out, "{table}")?;

        Ok(())
    }
}

impl From<&View<'_>> for Summary {
    fn from(view: &View<'_>) -> Self {
        let typed = if view.clean_text.is_empty() {
            PRICE_PLACEHOLDER
        } else {
            view.clean_text
        };

        Self {
            original_price: format!("{}{typed}", view.currency.symbol()),
            discount: view.discount.to_string(),
            savings: view.formatted_savings(),
            final_price: view.formatted_final_price(),
        }
    }
}

/// Writes the currency picker: every currency in picker order, numbered, with
/// the current selection marked.
///
/// # Errors
///
/// Returns [`SummaryError::Io`] if writing to `out` fails.
pub fn write_picker(mut out: impl io::Write, selected: Currency) -> Result<(), SummaryError> {
    let mut builder = Builder::default();

    builder.push_record(["#", "Symbol", "Code", ""]);

    for (idx, currency) in Currency::ALL.into_iter().enumerate() {
        let marker = if currency == selected { "✓" } else { "" };

        builder.push_record([
            (idx + 1).to_string(),
            currency.symbol().to_string(),
            currency.code().to_string(),
            marker.to_string(),
        ]);
    }

    let mut table = builder.build();

    table.with(Style::rounded());
    table.modify(Rows::first(), Alignment::center());

    writeln!(out, "{PICKER_TITLE}\n{table}")?;

    Ok(())
}
