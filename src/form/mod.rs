//! Headless meal edit form.
//!
//! A [`FormController`] mirrors the two meal fields, keeps the save affordance
//! in step with validation, and ends either with a saved [`Meal`](crate::domain::Meal)
//! or a dismissal. Any UI drives it by forwarding [`FormEvent`]s and rendering
//! through a [`FormView`].

mod controller;
mod view;

pub use controller::{
    CancelChoice, Dismissal, Field, FormController, FormError, FormEvent, FormOutcome, FormState,
    Presentation,
};
pub use view::{CancelPrompt, FormView, RecordingView, ViewUpdate, CANCEL_PROMPT};
