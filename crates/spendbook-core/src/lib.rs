//! spendbook-core
//!
//! Reporting services over spendbook-domain types: spend share aggregation
//! and the ASCII spend chart. Depends on spendbook-domain. No CLI, no
//! terminal I/O, no storage interactions.

pub mod chart;
pub mod error;
pub mod summary;

pub use chart::*;
pub use error::CoreError;
pub use summary::*;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        init_tracing();
        tracing::info!("spendbook tracing initialized.");
    });
}

/// Installs the global tracing subscriber with sensible defaults.
fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter =
        EnvFilter::from_default_env().add_directive("spendbook_core=info".parse().unwrap());

    fmt().with_env_filter(filter).init();
}
