// src/logging.rs
// =============================================================================
// Logging setup for the maps2waze binary.
//
// - Filter comes from RUST_LOG, else maps2waze=info (maps2waze=debug with
//   --verbose)
// - Compact lines for terminal use, JSON lines with --log-json
// - Everything is written to stderr
// =============================================================================

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Installs the global tracing subscriber.
///
/// `RUST_LOG` wins when set. Output goes to stderr so stdout stays clean for
/// links and `--json` output.
pub fn init_logger(verbose: bool, json: bool) {
    let default_filter = if verbose {
        "maps2waze=debug,info"
    } else {
        "maps2waze=info"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let registry = tracing_subscriber::registry().with(filter);
    let layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    if json {
        registry.with(layer.json()).init();
    } else {
        registry.with(layer.compact()).init();
    }
}
