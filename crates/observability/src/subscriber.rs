//! Tracing subscriber initialization.

use tracing_subscriber::EnvFilter;

/// Default directives: third-party crates at `warn`, the ERP domain crates at `info`.
pub const DEFAULT_DIRECTIVES: &str = "warn,forgeerp_costing=info,forgeerp_accounting=info";

/// Filter from `RUST_LOG`, falling back to `default_directives` when unset or invalid.
pub fn env_filter(default_directives: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directives))
}

/// Install a global JSON subscriber.
///
/// Targets are kept in the output so costing and accounting events can be told
/// apart. If a global subscriber already exists the call does nothing.
pub fn init(default_directives: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(default_directives))
        .json()
        .with_target(true)
        .with_current_span(false)
        .try_init();
}
