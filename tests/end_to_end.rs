//! End-to-end scenarios driving the calculator through presentation events.

use std::cell::Cell;

use rebate::prelude::*;

#[derive(Debug, Default)]
struct CountingFeedback {
    calls: Cell<usize>,
}

impl Feedback for CountingFeedback {
    fn selection_changed(&self) -> Result<(), FeedbackError> {
        self.calls.set(self.calls.get() + 1);
        Ok(())
    }
}

/// Feedback on a device without haptics.
#[derive(Debug)]
struct Unsupported;

impl Feedback for Unsupported {
    fn selection_changed(&self) -> Result<(), FeedbackError> {
        Err(FeedbackError::Unsupported)
    }
}

fn calculate(price_text: &str, discount: i32) -> (String, String) {
    let state = AppState::new()
        .update(Event::TextChanged(price_text.to_string()), &NoopFeedback)
        .update(Event::DiscountChanged(discount), &NoopFeedback);
    let view = state.view();

    (
        format_number(view.amounts.discount_amount()),
        format_number(view.amounts.final_price()),
    )
}

#[test]
fn one_hundred_at_twenty_percent() {
    assert_eq!(calculate("100", 20), ("20.00".to_string(), "80.00".to_string()));
}

#[test]
fn comma_price_without_discount() {
    assert_eq!(calculate("99,99", 0), ("0.00".to_string(), "99.99".to_string()));
}

#[test]
fn empty_price_at_fifty_percent() {
    assert_eq!(calculate("", 50), ("0.00".to_string(), "0.00".to_string()));
}

#[test]
fn malformed_price_at_any_discount_is_zero() {
    for discount in [0, 20, 100] {
        assert_eq!(calculate("1.2.3", discount), ("0.00".to_string(), "0.00".to_string()));
    }
}

#[test]
fn full_session_of_user_events() {
    let feedback = CountingFeedback::default();

    let state = [
        Event::TextChanged("$4a9.5".to_string()),
        Event::DiscountChanged(10),
        Event::CurrencyGlyphTapped,
        Event::CurrencyOptionTapped(Currency::Gbp),
        Event::DiscountChanged(150),
        Event::CurrencyGlyphTapped,
        Event::CancelTapped,
    ]
    .into_iter()
    .fold(AppState::new(), |state, event| state.update(event, &feedback));

    let view = state.view();

    assert_eq!(view.clean_text, "49.5");
    assert_eq!(view.discount, DiscountPercent::MAX);
    assert_eq!(view.currency, Currency::Gbp);
    assert_eq!(view.picker, PickerState::Closed);
    assert_eq!(view.formatted_savings(), "£49.50");
    assert_eq!(view.formatted_final_price(), "£0.00");
    assert_eq!(feedback.calls.get(), 2);
}

#[test]
fn unsupported_feedback_never_blocks_discount_changes() {
    let state = AppState::new()
        .update(Event::TextChanged("80".to_string()), &Unsupported)
        .update(Event::DiscountChanged(25), &Unsupported);

    assert_eq!(state.view().formatted_final_price(), "€60.00");
}

#[test]
fn state_values_are_independent_snapshots() {
    let before = AppState::new().update(Event::TextChanged("10".to_string()), &NoopFeedback);
    let after = before
        .clone()
        .update(Event::CurrencyOptionTapped(Currency::Jpy), &NoopFeedback);

    assert_eq!(before.view().currency, Currency::Eur);
    assert_eq!(after.view().currency, Currency::Jpy);
    assert_eq!(before.price_text(), after.price_text());
}

#[test]
fn configured_defaults_seed_the_state() -> testresult::TestResult {
    let config = Config::from_yaml("discount: 50\ncurrency: \"₺\"")?;
    let state = AppState::from_config(&config).update(Event::TextChanged("30".to_string()), &NoopFeedback);

    assert_eq!(state.view().formatted_final_price(), "₺15.00");

    Ok(())
}
