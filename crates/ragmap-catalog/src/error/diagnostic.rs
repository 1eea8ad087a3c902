//! The diagnostic type for catalog errors.
//!
//! A [`Diagnostic`] represents a single error with an optional error code,
//! labeled source spans, and help text.

use std::fmt;

use crate::{error::ErrorCode, span::Span};

/// A labeled span in catalog source.
#[derive(Debug, Clone)]
pub struct Label {
    span: Span,
    message: String,
    is_primary: bool,
}

impl Label {
    /// Create a new primary label marking the main location of an error.
    pub fn primary(span: Span, message: impl Into<String>) -> Self {
        Self {
            span,
            message: message.into(),
            is_primary: true,
        }
    }

    /// Create a new secondary label giving additional context.
    pub fn secondary(span: Span, message: impl Into<String>) -> Self {
        Self {
            span,
            message: message.into(),
            is_primary: false,
        }
    }

    pub fn span(&self) -> Span {
        self.span
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn is_primary(&self) -> bool {
        self.is_primary
    }
}

/// A diagnostic message with source location information.
///
/// # Example
///
/// ```text
/// error[E200]: invalid color `#zzzzzz` for node `RAG`
///   --> catalog.toml:9:7
///    |
///  9 | RAG = "#zzzzzz"
///    |       ^^^^^^^^^ not a CSS color
///    |
///    = help: use a hex color such as "#b3ffb3" or a CSS color name
/// ```
#[derive(Debug, Clone)]
pub struct Diagnostic {
    code: Option<ErrorCode>,
    message: String,
    labels: Vec<Label>,
    help: Option<String>,
}

impl Diagnostic {
    /// Create an error diagnostic.
    ///
    /// # Example
    ///
    /// ```
    /// # use ragmap_catalog::{Span, error::{Diagnostic, ErrorCode}};
    /// let diag = Diagnostic::error("invalid color `#zz`")
    ///     .with_code(ErrorCode::E200)
    ///     .with_label(Span::new(10..15), "not a CSS color")
    ///     .with_help("use a hex color such as \"#b3ffb3\"");
    /// assert_eq!(diag.to_string(), "error[E200]: invalid color `#zz`");
    /// ```
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            code: None,
            message: message.into(),
            labels: Vec::new(),
            help: None,
        }
    }

    /// Get the error code, if any.
    pub fn code(&self) -> Option<ErrorCode> {
        self.code
    }

    /// Get the primary message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get all labels attached to this diagnostic.
    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    /// Get the help text, if any.
    pub fn help(&self) -> Option<&str> {
        self.help.as_deref()
    }

    /// Set the error code.
    pub fn with_code(mut self, code: ErrorCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Add a primary label to this diagnostic.
    pub fn with_label(mut self, span: Span, message: impl Into<String>) -> Self {
        self.labels.push(Label::primary(span, message));
        self
    }

    /// Add a secondary label to this diagnostic.
    pub fn with_secondary_label(mut self, span: Span, message: impl Into<String>) -> Self {
        self.labels.push(Label::secondary(span, message));
        self
    }

    /// Set the help text.
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "error")?;
        if let Some(code) = self.code {
            write!(f, "[{code}]")?;
        }
        write!(f, ": {}", self.message)
    }
}

impl std::error::Error for Diagnostic {}
