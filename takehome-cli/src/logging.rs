//! Tracing subscriber setup for the CLI.

use std::io::{self, IsTerminal};

use tracing_subscriber::EnvFilter;

/// Initializes the tracing subscriber. Call once at startup.
///
/// * Honors `RUST_LOG` when set; otherwise `-v` raises the level one
///   step at a time (warn → info → debug → trace).
/// * Writes to stderr so piped table/JSON/CSV output stays clean.
/// * No timestamps or targets; events are single human-readable lines.
pub fn init(verbosity: u8) {
    let fallback = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .without_time()
        .with_target(false)
        .init();
}
