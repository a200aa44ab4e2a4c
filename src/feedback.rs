//! Tactile Feedback

use std::io;

use thiserror::Error;

/// Errors a feedback capability may report.
///
/// These never reach the caller of a state transition; they are logged and
/// dropped.
#[derive(Debug, Error)]
pub enum FeedbackError {
    /// The running device has no way to give feedback.
    #[error("feedback is not supported on this device")]
    Unsupported,

    /// The feedback channel failed.
    #[error("feedback channel failed: {0}")]
    Io(#[from] io::Error),
}

/// A fire-and-forget selection feedback capability.
///
/// The discount controller calls [`Feedback::selection_changed`] once per
/// discount change, after the new value has been applied. Implementations must
/// not block: platforms with asynchronous haptics should dispatch and return.
pub trait Feedback {
    /// Signal that the selected value changed.
    ///
    /// # Errors
    ///
    /// Returns a [`FeedbackError`] if the signal could not be dispatched.
    fn selection_changed(&self) -> Result<(), FeedbackError>;
}

/// Feedback that does nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopFeedback;

impl Feedback for NoopFeedback {
    fn selection_changed(&self) -> Result<(), FeedbackError> {
        Ok(())
    }
}

impl<F: Feedback + ?Sized> Feedback for &F {
    fn selection_changed(&self) -> Result<(), FeedbackError> {
        (**self).selection_changed()
    }
}

impl<F: Feedback + ?Sized> Feedback for Box<F> {
    fn selection_changed(&self) -> Result<(), FeedbackError> {
        (**self).selection_changed()
    }
}
