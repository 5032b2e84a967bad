//! Integrator-facing warnings
//!
//! The widget never surfaces problems to the end user; configuration
//! mistakes (a missing API token) are reported to the embedding
//! application through a sink owned by the widget instance. The default
//! sink forwards to the `log` facade; tests install a recording sink.

/// Destination for integrator warnings.
pub trait WarnSink: Send {
    fn warn(&mut self, message: &str);
}

/// Default sink: forwards warnings to `log::warn!`.
#[derive(Debug, Default)]
pub struct LogSink;

impl WarnSink for LogSink {
    fn warn(&mut self, message: &str) {
        log::warn!("{message}");
    }
}
