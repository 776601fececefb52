//! Process-wide tracing setup shared by every binary.

/// Initialize process-wide observability (tracing/logging).
///
/// Safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init(tracing::DEFAULT_DIRECTIVE);
}

/// Tracing configuration (filters, format, writer).
pub mod tracing;
