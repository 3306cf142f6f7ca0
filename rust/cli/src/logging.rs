//! Diagnostic logging for the `boardrank` binary.
//!
//! Events go to stderr so stdout stays clean for reports and JSON. The filter
//! comes from `RUST_LOG` when set.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;

pub const DEFAULT_FILTER: &str = "warn,boardrank_engine=info,boardrank_cli=info";

fn filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Installs the global subscriber. Returns `false` if one was already set.
pub fn init_logging() -> bool {
    fmt()
        .with_env_filter(filter())
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init()
        .is_ok()
}
