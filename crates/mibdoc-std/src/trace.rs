//! Bridge from resolution diagnostics to `tracing`.

use mibdoc_core::resolver::{DiagLevel, Diagnostic, DiagnosticSink};

/// A sink forwarding diagnostics to the `tracing` subscriber.
///
/// The sink level is fixed at construction; events below it are never
/// constructed by the resolver.
#[derive(Debug, Clone, Copy)]
pub struct TracingSink {
    level: DiagLevel,
}

impl TracingSink {
    /// A sink forwarding everything down to `level`.
    #[must_use]
    pub fn new(level: DiagLevel) -> Self {
        Self { level }
    }
}

impl Default for TracingSink {
    fn default() -> Self {
        Self::new(DiagLevel::Info)
    }
}

impl DiagnosticSink for TracingSink {
    fn level(&self) -> DiagLevel {
        self.level
    }

    fn report(&mut self, level: DiagLevel, diagnostic: Diagnostic<'_>) {
        match level {
            DiagLevel::Error => tracing::error!("{diagnostic}"),
            DiagLevel::Warn => tracing::warn!("{diagnostic}"),
            DiagLevel::Info => tracing::info!("{diagnostic}"),
            DiagLevel::Debug => tracing::debug!("{diagnostic}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mibdoc_core::model::Oid;

    #[test]
    fn test_level_passthrough() {
        let sink = TracingSink::new(DiagLevel::Debug);
        assert_eq!(sink.level(), DiagLevel::Debug);
        assert_eq!(TracingSink::default().level(), DiagLevel::Info);
    }

    #[test]
    fn test_report_accepts_all_levels() {
        let mut sink = TracingSink::new(DiagLevel::Debug);
        let oid = Oid::from_slice(&[1, 3, 6, 1]);
        for level in [
            DiagLevel::Error,
            DiagLevel::Warn,
            DiagLevel::Info,
            DiagLevel::Debug,
        ] {
            sink.report(
                level,
                Diagnostic::ObjectLoaded {
                    module: "FOO-MIB",
                    name: "fooUptime",
                    oid: &oid,
                },
            );
        }
    }
}
