//! Logging setup shared by binaries and tests embedding the warehouse crates.
//!
//! The domain crates only emit `tracing` events; installing a subscriber is
//! left to the application, through [`init`].

/// Initialize process-wide tracing/logging.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init();
}

/// Tracing configuration (filters, layers).
pub mod tracing;
