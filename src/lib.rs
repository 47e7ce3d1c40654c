#![doc(test(attr(deny(warnings))))]

//! League Vault tracks the running treasury of a recurring amateur
//! football league: weekly match days, per-player payments, league-wide
//! expenses and incomes, and a narrative report built from the numbers.

pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod errors;
pub mod stats;
pub mod storage;
pub mod summary;
pub mod vault;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter =
            EnvFilter::from_default_env().add_directive("league_vault=info".parse().unwrap());
        fmt().with_env_filter(filter).init();
        tracing::info!("League Vault tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
    }
}
