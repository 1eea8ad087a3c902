//! Catalog sources for ragmap.
//!
//! This crate produces [`Catalog`](ragmap_core::catalog::Catalog) values:
//!
//! - [`builtin`] returns the hand-authored RAG / agents / prompting landscape.
//! - [`parse`] loads a catalog from a TOML document, reporting problems as
//!   [`error::Diagnostic`]s with source spans.

pub mod error;

mod builtin;
mod document;
mod span;

pub use builtin::builtin;
pub use document::parse;
pub use span::Span;
