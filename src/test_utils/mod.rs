//! Test utilities for page-chrome.
//!
//! This module provides in-memory collaborator fakes and fixture builders for
//! writing tests against the chrome resolution pipeline without a content
//! store behind it. It is compiled into the library so both unit tests and
//! the integration suite can share one set of fakes.

pub mod fixtures;
pub mod services;

pub use fixtures::{
    back_reference_button, default_buttons, form_with_layout, layout_json, plain_button,
};
pub use services::{StaticAllowedRenderings, StaticButtons, StaticLayoutService};

use std::sync::Once;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Global flag to ensure logging is only initialized once in tests
static INIT_LOGGING: Once = Once::new();

/// Initialize logging for tests.
///
/// This function initializes the tracing subscriber for tests, but only once
/// regardless of how many times it's called. It respects the `RUST_LOG` environment
/// variable if set, or uses the provided log level.
///
/// To enable logging in tests via environment variable:
/// ```bash
/// RUST_LOG=debug cargo test
/// ```
pub fn init_test_logging(level: Option<Level>) {
    INIT_LOGGING.call_once(|| {
        // Determine the filter to use
        let filter = if let Some(level) = level {
            EnvFilter::new(level.to_string())
        } else if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            // No logging if neither is provided
            return;
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer() // Important: uses test-compatible writer
            .with_target(true)
            .with_thread_ids(false)
            .with_ansi(true)
            .try_init();
    });
}
