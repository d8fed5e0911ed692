//! Diagnostic logging setup for binaries.
//!
//! The library only emits `tracing` events; hosts decide where they go.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install a stderr subscriber filtered by `RUST_LOG`, defaulting to `warn`.
///
/// `verbose` lowers the default to `debug` for this crate.
pub fn init(verbose: bool) {
    let default = if verbose {
        "warn,rust_pursuit=debug"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
