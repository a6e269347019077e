#![doc(test(attr(deny(warnings))))]

//! Food Tracker keeps a list of meals: a validated meal record with a stable
//! key/value archive format, a headless edit form that drives any UI through
//! the [`form::FormView`] trait, and the list/store collaborator that persists
//! the collection.

pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod form;
pub mod list;
pub mod storage;
pub mod time;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Food Tracker tracing initialized.");
    });
}
