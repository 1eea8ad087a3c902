//! Error types for catalog loading.
//!
//! Loading reports every problem it finds as a [`Diagnostic`] instead of
//! stopping at the first one. A [`CatalogError`] carries one or more
//! diagnostics; the source text itself is kept by the caller.

mod collector;
mod diagnostic;
mod error_code;

pub use collector::DiagnosticCollector;
pub use diagnostic::{Diagnostic, Label};
pub use error_code::ErrorCode;

use thiserror::Error;

/// Error returned when a catalog source cannot be loaded.
#[derive(Debug, Clone, Error)]
#[error("{}", summarize(.diagnostics))]
pub struct CatalogError {
    diagnostics: Vec<Diagnostic>,
}

impl CatalogError {
    pub(crate) fn new(diagnostics: Vec<Diagnostic>) -> Self {
        Self { diagnostics }
    }

    /// All diagnostics, in the order they were reported.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }
}

impl From<Diagnostic> for CatalogError {
    fn from(diagnostic: Diagnostic) -> Self {
        Self::new(vec![diagnostic])
    }
}

impl From<Vec<Diagnostic>> for CatalogError {
    fn from(diagnostics: Vec<Diagnostic>) -> Self {
        Self::new(diagnostics)
    }
}

fn summarize(diagnostics: &[Diagnostic]) -> String {
    match diagnostics {
        [] => "catalog could not be loaded".to_string(),
        [single] => single.to_string(),
        [first, rest @ ..] => format!("{first} (and {} more)", rest.len()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::span::Span;

    #[test]
    fn test_display_single() {
        let err = CatalogError::from(
            Diagnostic::error("invalid color `mauve-ish`")
                .with_code(ErrorCode::E200)
                .with_label(Span::new(0..4), "here"),
        );
        assert_eq!(err.to_string(), "error[E200]: invalid color `mauve-ish`");
    }

    #[test]
    fn test_display_multiple() {
        let err = CatalogError::from(vec![
            Diagnostic::error("first").with_code(ErrorCode::E200),
            Diagnostic::error("second").with_code(ErrorCode::E200),
            Diagnostic::error("third").with_code(ErrorCode::E200),
        ]);
        assert_eq!(err.diagnostics().len(), 3);
        assert_eq!(err.to_string(), "error[E200]: first (and 2 more)");
    }
}
