//! Error types for ragmap operations.
//!
//! This module provides the main error type [`RagmapError`] which wraps
//! the error conditions that can occur while loading a catalog and rendering
//! its graph.

use std::io;

use thiserror::Error;

use ragmap_catalog::error::CatalogError;

/// The main error type for ragmap operations.
///
/// # Diagnostic Variants
///
/// The `Catalog` variant carries the catalog diagnostics together with the
/// TOML source they point into, so callers can render labeled spans.
#[derive(Debug, Error)]
pub enum RagmapError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{err}")]
    Catalog { err: CatalogError, src: String },

    #[error("Options error: {0}")]
    Options(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Layout error: {0}")]
    Layout(String),

    #[error("Export error: {0}")]
    Export(Box<dyn std::error::Error>),
}

impl From<crate::export::Error> for RagmapError {
    fn from(error: crate::export::Error) -> Self {
        Self::Export(Box::new(error))
    }
}

impl RagmapError {
    /// Create a new `Catalog` error with the associated source text.
    pub fn new_catalog_error(err: CatalogError, src: impl Into<String>) -> Self {
        Self::Catalog {
            err,
            src: src.into(),
        }
    }
}
