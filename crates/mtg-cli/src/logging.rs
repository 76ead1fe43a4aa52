//! Diagnostic logging.
//!
//! Filter comes from `MTG_LOG` (e.g. `MTG_LOG=debug`), defaulting to `warn`.
//! Output goes to stderr only; redirect it (`2>mtg.log`) when logging below
//! `warn`, since the meter owns the screen while it runs.

use std::io;

use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "MTG_LOG";

pub fn init() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(false)
        .with_target(false)
        .try_init();
}
