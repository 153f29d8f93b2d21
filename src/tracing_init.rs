//! Tracing initialization for tests and host applications
//!
//! The library only emits `tracing` events; nothing is printed unless a
//! subscriber is installed with one of these functions.

use once_cell::sync::Lazy;
use tracing_subscriber::{fmt, EnvFilter};

/// Install a test-friendly subscriber filtered by `RUST_LOG`
///
/// - `RUST_LOG=cellscan_dsp=debug` - threshold derivations
/// - `RUST_LOG=cellscan_dsp::resample=trace` - spectrum bookkeeping
///
/// Defaults to `cellscan_dsp=warn`. Safe to call from every test; only the
/// first call installs the subscriber.
pub fn init_test_tracing() {
    static TRACING: Lazy<()> = Lazy::new(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("cellscan_dsp=warn"));

        // Another test harness may already own the global subscriber
        let _ = fmt()
            .with_env_filter(filter)
            .with_target(true)
            .with_line_number(true)
            .with_test_writer()
            .try_init();
    });

    Lazy::force(&TRACING);
}

/// Install a subscriber for a host application, defaulting to `info`
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("cellscan_dsp=info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .with_line_number(true)
        .init();
}
