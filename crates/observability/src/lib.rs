//! Tracing and logging (shared setup).

/// Initialize process-wide logging with the human-readable format.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init(LogFormat::Pretty);
}

/// Tracing configuration (filters, layers).
pub mod tracing;

pub use self::tracing::{LogFormat, UnknownLogFormat, init as init_with};
