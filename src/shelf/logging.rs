//! Diagnostic logging.
//!
//! Logs go to stderr so they never mix with command output. `RUST_LOG`
//! overrides the verbosity chosen on the command line.

use tracing_subscriber::EnvFilter;

/// Maps `-v` repetitions to a default filter directive.
pub fn level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

/// Installs the global subscriber. Calling it again is a no-op.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("shelf={}", level_for(verbosity))));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
