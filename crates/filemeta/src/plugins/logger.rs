//! Diagnostic logger collaborator.
//!
//! Extractors do not talk to `tracing` directly when emitting their optional
//! diagnostics; they go through a [`DiagnosticLogger`] injected at construction.
//! This keeps the configuration gate testable and lets hosts route extractor
//! diagnostics wherever they want.

use crate::types::Metadata;
use tracing::Level;

/// Target used by [`TracingLogger`] for every event it emits.
pub const EXTRACTOR_LOG_TARGET: &str = "filemeta::extractor";

/// Sink for extractor diagnostics.
///
/// Implementations must not panic. The signature is infallible: a logger that
/// fails to deliver an entry handles that on its own.
pub trait DiagnosticLogger: Send + Sync {
    fn log(&self, level: Level, message: &str, data: &Metadata);
}

/// Default logger forwarding entries to `tracing`.
///
/// The data map is attached as a JSON string field named `data`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLogger;

impl DiagnosticLogger for TracingLogger {
    fn log(&self, level: Level, message: &str, data: &Metadata) {
        let data = serde_json::Value::Object(data.clone()).to_string();

        // tracing needs the level at compile time
        match level {
            Level::ERROR => tracing::error!(target: EXTRACTOR_LOG_TARGET, data = %data, "{}", message),
            Level::WARN => tracing::warn!(target: EXTRACTOR_LOG_TARGET, data = %data, "{}", message),
            Level::INFO => tracing::info!(target: EXTRACTOR_LOG_TARGET, data = %data, "{}", message),
            Level::DEBUG => tracing::debug!(target: EXTRACTOR_LOG_TARGET, data = %data, "{}", message),
            Level::TRACE => tracing::trace!(target: EXTRACTOR_LOG_TARGET, data = %data, "{}", message),
        }
    }
}
