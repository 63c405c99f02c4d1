//! Shared test utilities for integration tests.
//!
//! Import from integration test files as:
//! ```ignore
//! mod common;
//! ```

use locpath::{ConversionEngine, PlatformProfile};

/// Initialize tracing for tests, respecting RUST_LOG env var.
///
/// Safe to call multiple times — subsequent calls are no-ops.
#[allow(dead_code)]
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init()
        .ok();
}

#[allow(dead_code)]
pub fn unix_engine() -> ConversionEngine {
    init_logging();
    ConversionEngine::new(PlatformProfile::Unix)
}

#[allow(dead_code)]
pub fn windows_engine() -> ConversionEngine {
    init_logging();
    ConversionEngine::new(PlatformProfile::Windows)
}
