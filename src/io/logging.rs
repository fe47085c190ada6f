//! Diagnostic log setup

use tracing_subscriber::EnvFilter;

/// Install the global `tracing` subscriber writing to stderr
///
/// The level is `info` unless `verbose` is set, in which case it is `debug`
/// and `RUST_LOG` may override it. Calling this more than once is harmless.
pub fn init(verbose: bool) {
    let filter = if verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else {
        EnvFilter::new("info")
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
