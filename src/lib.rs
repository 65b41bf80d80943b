#![doc(test(attr(deny(warnings))))]

//! Coach Core provides the wizard engine, concrete form flows, and submission
//! primitives behind multi-step coaching and athlete-safety workflows.

pub mod cli;
pub mod config;
pub mod errors;
pub mod flows;
pub mod forms;
pub mod notify;
pub mod storage;
pub mod utils;
pub mod wizard;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Coach Core tracing initialized.");
    });
}
