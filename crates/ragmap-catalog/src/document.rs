//! TOML catalog documents.
//!
//! A catalog document mirrors the [`Catalog`] model one-to-one:
//!
//! ```toml
//! nodes = ["Chunking", "Embeddings"]
//! edges = [["Chunking", "Embeddings"], ["Embeddings", "Reranker"]]
//!
//! [tooltips]
//! Chunking = "Splitting documents into passages."
//!
//! [colors]
//! Chunking = "#e6e6ff"
//!
//! [labels]
//! Embeddings = "Text embeddings"
//! ```
//!
//! Every key is optional. Edges may name nodes missing from `nodes`, and
//! the tables may hold entries for nodes that never appear in the graph.

use indexmap::IndexMap;
use log::{debug, trace};
use serde::Deserialize;
use toml::Spanned;

use ragmap_core::{catalog::Catalog, color::Color};

use crate::{
    error::{CatalogError, Diagnostic, DiagnosticCollector, ErrorCode},
    span::Span,
};

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct CatalogDocument {
    nodes: Vec<String>,
    edges: Vec<(String, String)>,
    tooltips: IndexMap<String, String>,
    colors: IndexMap<String, Spanned<String>>,
    labels: IndexMap<String, String>,
}

/// Parses a TOML catalog document.
///
/// # Errors
///
/// Returns a [`CatalogError`] with:
/// - one [`ErrorCode::E100`] diagnostic if the source is not a well-formed
///   catalog document;
/// - one [`ErrorCode::E200`] diagnostic per `[colors]` entry that is not a
///   valid CSS color.
///
/// # Examples
///
/// ```
/// # use ragmap_core::identifier::Id;
/// let catalog = ragmap_catalog::parse(r##"
///     nodes = ["A", "B"]
///     edges = [["A", "B"]]
///
///     [colors]
///     A = "#b3ffb3"
/// "##).unwrap();
///
/// assert_eq!(catalog.nodes().len(), 2);
/// assert_eq!(catalog.color(Id::new("A")).to_hex(), "#b3ffb3");
/// ```
pub fn parse(source: &str) -> Result<Catalog, CatalogError> {
    let document: CatalogDocument =
        toml::from_str(source).map_err(|err| CatalogError::from(document_error(&err)))?;
    trace!(document:?; "Catalog document deserialized");

    let mut collector = DiagnosticCollector::new();
    let mut builder = Catalog::builder();

    for node in &document.nodes {
        builder = builder.node(node.as_str());
    }
    for (source, target) in &document.edges {
        builder = builder.edge(source.as_str(), target.as_str());
    }
    for (node, text) in &document.tooltips {
        builder = builder.tooltip(node.as_str(), text.as_str());
    }
    for (node, label) in &document.labels {
        builder = builder.label(node.as_str(), label.as_str());
    }
    for (node, value) in &document.colors {
        match Color::new(value.get_ref()) {
            Ok(color) => builder = builder.color(node.as_str(), color),
            Err(_) => collector.emit(
                Diagnostic::error(format!(
                    "invalid color `{}` for node `{node}`",
                    value.get_ref()
                ))
                .with_code(ErrorCode::E200)
                .with_label(Span::from(value.span()), "not a CSS color")
                .with_help("use a hex color such as \"#b3ffb3\" or a CSS color name"),
            ),
        }
    }

    collector.finish()?;

    let catalog = builder.build();
    debug!(
        nodes_count = catalog.nodes().len(),
        edges_count = catalog.edges().len();
        "Catalog document loaded"
    );
    Ok(catalog)
}

fn document_error(err: &toml::de::Error) -> Diagnostic {
    let diagnostic = Diagnostic::error(err.message().trim_end().to_string())
        .with_code(ErrorCode::E100)
        .with_help(
            "a catalog holds `nodes`, `edges` and the optional `[tooltips]`, `[colors]` and `[labels]` tables",
        );

    match err.span() {
        Some(range) => diagnostic.with_label(Span::from(range), "here"),
        None => diagnostic,
    }
}
