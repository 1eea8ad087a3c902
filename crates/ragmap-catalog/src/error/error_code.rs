//! Error codes for catalog diagnostics.
//!
//! Error codes are organized by phase:
//! - `E1xx` - TOML syntax and document shape
//! - `E2xx` - Catalog values

use std::fmt;

/// Error codes for categorizing catalog diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // =========================================================================
    // Document Errors (E1xx)
    // =========================================================================
    /// Malformed catalog document.
    ///
    /// The source is not valid TOML, or a key holds a value of the wrong
    /// shape (for example an edge that is not a pair of strings), or an
    /// unknown top-level key is present.
    E100,

    // =========================================================================
    // Value Errors (E2xx)
    // =========================================================================
    /// Invalid color.
    ///
    /// A `[colors]` entry is not a CSS color such as `#b3ffb3` or `teal`.
    E200,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(ErrorCode::E100.to_string(), "E100");
        assert_eq!(ErrorCode::E200.to_string(), "E200");
    }
}
