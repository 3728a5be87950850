//! IDL compiler driver.
//!
//! Command handlers live in [`commands`]; `main.rs` only dispatches on the
//! command name.

pub mod commands;
mod options;

use std::sync::Once;

pub use options::{parse_options, Options};

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Enable with `RUST_LOG=idl_parse=debug` or
/// `RUST_LOG=idl_parse=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
