//! Logging setup for dailyrings
//!
//! Diagnostics go to stderr so stdout carries only the summary rows.

use tracing_subscriber::EnvFilter;

use crate::cli::Verbosity;

/// Install the global `tracing` subscriber
///
/// The verbosity picks the default level; `RUST_LOG` directives are
/// applied on top. Calling this twice is harmless.
pub fn init(verbosity: Verbosity) {
    let filter = EnvFilter::from_default_env().add_directive(verbosity.log_level().into());

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
