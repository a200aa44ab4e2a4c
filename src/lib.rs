//! Rebate
//!
//! Rebate is the core of a discount calculator: it turns typed price text into
//! a price, applies a whole-number discount percentage, and keeps track of the
//! currency symbol the result is shown in.
//!
//! The calculator is a single immutable [`state::AppState`]. A presentation
//! layer feeds it [`state::Event`]s and renders [`state::AppState::view`]:
//!
//! ```
//! use rebate::prelude::*;
//!
//! let state = AppState::new()
//!     .update(Event::TextChanged("99,99".to_string()), &NoopFeedback)
//!     .update(Event::DiscountChanged(0), &NoopFeedback);
//!
//! assert_eq!(state.view().formatted_final_price(), "€99.99");
//! ```

pub mod cli;
pub mod config;
pub mod currency;
pub mod discounts;
pub mod display;
pub mod feedback;
pub mod input;
pub mod prelude;
pub mod prices;
pub mod pricing;
pub mod selector;
pub mod state;
pub mod summary;
