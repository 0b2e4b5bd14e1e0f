//! Process-wide tracing setup shared by binaries and integration tests.

/// Subscriber construction (filters, formatting).
pub mod subscriber;

pub use subscriber::DEFAULT_DIRECTIVES;

/// Initialize tracing with JSON output, filtered by `RUST_LOG`
/// (default [`DEFAULT_DIRECTIVES`]).
///
/// Safe to call multiple times; subsequent calls are no-ops.
pub fn init() {
    subscriber::init(DEFAULT_DIRECTIVES);
}
