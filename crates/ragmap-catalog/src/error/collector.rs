//! Collector for accumulating diagnostics while loading a catalog.

use crate::error::{CatalogError, Diagnostic};

/// Accumulates diagnostics so that loading can report every problem at once.
#[derive(Debug, Default)]
pub struct DiagnosticCollector {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticCollector {
    /// Create a new empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit a diagnostic to this collector.
    pub fn emit(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Returns `true` if nothing has been emitted.
    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Finish collection and return a result.
    ///
    /// Returns `Err(CatalogError)` with all diagnostics if any were emitted.
    pub fn finish(self) -> Result<(), CatalogError> {
        if self.diagnostics.is_empty() {
            Ok(())
        } else {
            Err(CatalogError::new(self.diagnostics))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    #[test]
    fn test_empty_collector_finishes_ok() {
        let collector = DiagnosticCollector::new();
        assert!(collector.is_empty());
        assert!(collector.finish().is_ok());
    }

    #[test]
    fn test_collector_keeps_order() {
        let mut collector = DiagnosticCollector::new();
        collector.emit(Diagnostic::error("first").with_code(ErrorCode::E200));
        collector.emit(Diagnostic::error("second").with_code(ErrorCode::E200));

        let err = collector.finish().unwrap_err();
        let messages: Vec<_> = err.diagnostics().iter().map(|d| d.message()).collect();
        assert_eq!(messages, ["first", "second"]);
    }
}
