//! PCF driver library.
//!
//! Hosts the built-in demo programs and the command logic behind the `pcf`
//! binary, so both can be tested without spawning a process.

pub mod commands;
pub mod demos;
mod errors;

pub use errors::CliError;

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install the tracing subscriber, once per process.
///
/// Does nothing unless `RUST_LOG` is set, e.g.
/// `RUST_LOG=pcf_eval=trace pcf run factorial --unfold`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
