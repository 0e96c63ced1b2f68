// src/log.rs
// Diagnostics go to stderr; stdout is reserved for the record table.

use tracing_subscriber::{fmt, EnvFilter};

/// Default filter for a verbosity count (`-v`, `-vv`). `RUST_LOG` wins if set.
pub fn default_filter(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber. Safe to call more than once; later calls are no-ops.
pub fn init(verbosity: u8) {
    let env = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbosity)));

    let _ = fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
