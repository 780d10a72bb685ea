#![doc(test(attr(deny(warnings))))]

//! Ledger Core offers the record model, CSV persistence, and period reporting
//! primitives behind a personal income/expense tracker.

pub mod config;
pub mod core;
pub mod domain;
pub mod errors;
pub mod report;
pub mod storage;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Ledger Core tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
    }
}
