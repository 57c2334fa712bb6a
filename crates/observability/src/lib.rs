//! Tracing and logging setup shared by the splitledger binaries.
//!
//! Library crates only emit `tracing` events; installing a subscriber is the
//! binary's job.

/// Tracing configuration (filters, output format).
pub mod tracing;

pub use self::tracing::{LogConfig, LogFormat};

/// Initialize process-wide logging from the environment.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init(&LogConfig::from_env());
}
