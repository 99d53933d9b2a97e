//! Diagnostic reporting.

use crate::{Diagnostic, Severity};

/// Receives diagnostics from a processing pass.
///
/// Reporting is fire-and-forget: a logger never stops the pass.
pub trait Logger {
    /// Record a diagnostic.
    fn report(&mut self, diagnostic: Diagnostic);

    /// Record an error related to `symbol`.
    fn error(&mut self, message: &str, symbol: &str) {
        self.report(Diagnostic::error("process", message).at(symbol));
    }

    /// Record a warning related to `symbol`.
    fn warn(&mut self, message: &str, symbol: &str) {
        self.report(Diagnostic::warning("process", message).at(symbol));
    }
}

/// Logger that keeps every diagnostic in memory, in report order.
#[derive(Debug, Default)]
pub struct DiagnosticCollector {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// All diagnostics in report order.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Consume the collector and return its diagnostics.
    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }

    /// Check if any error diagnostics have been recorded.
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_error())
    }

    /// Count the number of error diagnostics.
    pub fn error_count(&self) -> usize {
        self.count(Severity::Error)
    }

    /// Count the number of warning diagnostics.
    pub fn warning_count(&self) -> usize {
        self.count(Severity::Warning)
    }

    /// Get all error diagnostics.
    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| d.severity.is_error())
    }

    fn count(&self, severity: Severity) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == severity)
            .count()
    }
}

impl Logger for DiagnosticCollector {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collects_in_order() {
        let mut logger = DiagnosticCollector::new();
        logger.error("first", "a.A");
        logger.warn("second", "a.B");
        logger.report(Diagnostic::info("render", "third"));

        let messages: Vec<_> = logger
            .diagnostics()
            .iter()
            .map(|d| d.message.as_str())
            .collect();
        assert_eq!(messages, ["first", "second", "third"]);
    }

    #[test]
    fn test_counts() {
        let mut logger = DiagnosticCollector::new();
        assert!(!logger.has_errors());

        logger.error("bad", "a.A");
        logger.error("worse", "a.B");
        logger.warn("hmm", "a.C");

        assert!(logger.has_errors());
        assert_eq!(logger.error_count(), 2);
        assert_eq!(logger.warning_count(), 1);
        assert_eq!(logger.errors().count(), 2);
    }

    #[test]
    fn test_error_sets_location() {
        let mut logger = DiagnosticCollector::new();
        logger.error("invalid property type", "org.example.Greeter.x");

        let diag = &logger.into_diagnostics()[0];
        assert_eq!(diag.location.as_deref(), Some("org.example.Greeter.x"));
        assert_eq!(diag.phase, "process");
    }
}
