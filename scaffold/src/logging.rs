//! Diagnostic tracing for the scaffold CLI.
//!
//! Tracing output goes to stderr only. Stdout carries the single confirmation
//! line (or the `--dry-run` plan) and nothing else.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Level used when `RUST_LOG` is unset or unparsable.
const DEFAULT_FILTER: &str = "warn";

/// Install the stderr subscriber used by the binary.
///
/// `RUST_LOG=fastapi_scaffold=debug` shows the pipeline transitions;
/// `=trace` also lists every directory and file as it is materialized.
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .init();
}
