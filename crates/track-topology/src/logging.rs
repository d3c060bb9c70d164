//! Logging setup for the command line tool
//!
//! Logs go to stderr so the report can be piped from stdout. `RUST_LOG` wins
//! when set; otherwise the level is `info`, or `debug` with `--verbose`.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

/// Default filter directive when `RUST_LOG` is not set
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose { "debug" } else { "info" }
}

/// Initialize the global subscriber
pub fn setup_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_filter(filter);
    tracing_subscriber::registry().with(fmt_layer).init();

    tracing::debug!("Logging initialized");
}

/// Log the name and version of this build
pub fn log_version_info() {
    tracing::info!("{}", short_version_info());
}

pub fn short_version_info() -> String {
    format!(
        "{} {} (library {})",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        track_topology_lib::VERSION
    )
}
