//! Logging setup shared by the library's front ends.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Default level for interactive use; estimates go to stdout, logs to stderr
pub const DEFAULT_LEVEL: &str = "warn";

/// Initialize logging at [`DEFAULT_LEVEL`]
pub fn init() {
    init_with_level(DEFAULT_LEVEL)
}

/// Initialize logging with a specific default level
///
/// RUST_LOG still takes precedence when set. Output is the compact
/// formatter on stderr.
pub fn init_with_level(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_writer(std::io::stderr))
        .init();
}

/// Initialize logging for testing (captures logs for test output)
#[cfg(test)]
pub fn init_test() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter(EnvFilter::new("trace"))
        .try_init();
}
