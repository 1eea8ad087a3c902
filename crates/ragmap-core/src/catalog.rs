//! Node catalog model.
//!
//! A [`Catalog`] is the hand-authored description of a knowledge graph: an
//! ordered list of node identifiers, a list of directed edges, and optional
//! per-node tooltip, color and label tables. It is built once (see
//! [`CatalogBuilder`]) and never mutated afterwards.
//!
//! Lookups never fail. A node without an entry in one of the tables resolves
//! to a documented default:
//!
//! | Attribute | Default                          |
//! |-----------|----------------------------------|
//! | label     | the identifier itself            |
//! | tooltip   | `Uzol {id}` (see [`default_tooltip`]) |
//! | color     | [`DEFAULT_FILL`] (`#d9d9d9`)      |
//!
//! Edges may reference identifiers that are not in the node list, and the
//! same edge may appear more than once. Neither case is rejected here.

use std::{
    borrow::Cow,
    collections::{HashMap, HashSet},
};

use log::trace;

use crate::{color::Color, identifier::Id};

/// Fill color used for nodes without a color entry.
pub const DEFAULT_FILL: &str = "#d9d9d9";

/// Returns the placeholder tooltip for a node without a tooltip entry.
///
/// # Examples
///
/// ```
/// # use ragmap_core::{catalog::default_tooltip, identifier::Id};
/// assert_eq!(default_tooltip(Id::new("Reranker")), "Uzol Reranker");
/// ```
pub fn default_tooltip(id: Id) -> String {
    format!("Uzol {id}")
}

/// Returns the fill color used for nodes without a color entry.
pub fn default_fill() -> Color {
    Color::new(DEFAULT_FILL).expect("DEFAULT_FILL is a valid CSS color")
}

/// A directed connection between two node identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    source: Id,
    target: Id,
}

impl Edge {
    pub fn new(source: Id, target: Id) -> Self {
        Self { source, target }
    }

    pub fn source(&self) -> Id {
        self.source
    }

    pub fn target(&self) -> Id {
        self.target
    }
}

/// Immutable node/edge catalog with lookup-with-default accessors.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    nodes: Vec<Id>,
    declared: HashSet<Id>,
    edges: Vec<Edge>,
    tooltips: HashMap<Id, String>,
    colors: HashMap<Id, Color>,
    labels: HashMap<Id, String>,
}

impl Catalog {
    /// Starts building a new catalog.
    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::default()
    }

    /// Declared node identifiers in declaration order.
    pub fn nodes(&self) -> &[Id] {
        &self.nodes
    }

    /// Directed edges in declaration order, duplicates included.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Returns `true` if `id` appears in the node list.
    pub fn is_declared(&self, id: Id) -> bool {
        self.declared.contains(&id)
    }

    /// Tooltip text for `id`, or the placeholder from [`default_tooltip`].
    pub fn tooltip(&self, id: Id) -> Cow<'_, str> {
        match self.tooltips.get(&id) {
            Some(text) => Cow::Borrowed(text),
            None => Cow::Owned(default_tooltip(id)),
        }
    }

    /// Fill color for `id`, or [`DEFAULT_FILL`].
    pub fn color(&self, id: Id) -> Color {
        self.colors.get(&id).copied().unwrap_or_else(default_fill)
    }

    /// Display label for `id`, or the identifier itself.
    pub fn label(&self, id: Id) -> Cow<'_, str> {
        match self.labels.get(&id) {
            Some(label) => Cow::Borrowed(label),
            None => Cow::Owned(id.to_string()),
        }
    }
}

/// Builder for [`Catalog`].
///
/// # Examples
///
/// ```
/// # use ragmap_core::{catalog::Catalog, color::Color, identifier::Id};
/// let catalog = Catalog::builder()
///     .node("RAG")
///     .node("LLM")
///     .edge("RAG", "LLM")
///     .tooltip("RAG", "Retrieval-Augmented Generation")
///     .color("RAG", Color::new("#b3ffb3").unwrap())
///     .build();
///
/// assert_eq!(catalog.nodes().len(), 2);
/// assert_eq!(catalog.tooltip(Id::new("RAG")), "Retrieval-Augmented Generation");
/// assert_eq!(catalog.tooltip(Id::new("LLM")), "Uzol LLM");
/// assert_eq!(catalog.color(Id::new("LLM")).to_hex(), "#d9d9d9");
/// ```
#[derive(Debug, Default)]
pub struct CatalogBuilder {
    catalog: Catalog,
}

impl CatalogBuilder {
    /// Declares a node. Repeated declarations keep the first position.
    pub fn node(mut self, id: impl Into<Id>) -> Self {
        let id = id.into();
        if self.catalog.declared.insert(id) {
            self.catalog.nodes.push(id);
        } else {
            trace!(node_id = id.to_string(); "Ignoring repeated node declaration");
        }
        self
    }

    /// Adds a directed edge. Endpoints do not need to be declared.
    pub fn edge(mut self, source: impl Into<Id>, target: impl Into<Id>) -> Self {
        self.catalog
            .edges
            .push(Edge::new(source.into(), target.into()));
        self
    }

    /// Sets the tooltip text for a node, replacing any previous entry.
    pub fn tooltip(mut self, id: impl Into<Id>, text: impl Into<String>) -> Self {
        self.catalog.tooltips.insert(id.into(), text.into());
        self
    }

    /// Sets the fill color for a node, replacing any previous entry.
    pub fn color(mut self, id: impl Into<Id>, color: Color) -> Self {
        self.catalog.colors.insert(id.into(), color);
        self
    }

    /// Sets the display label for a node, replacing any previous entry.
    pub fn label(mut self, id: impl Into<Id>, label: impl Into<String>) -> Self {
        self.catalog.labels.insert(id.into(), label.into());
        self
    }

    pub fn build(self) -> Catalog {
        self.catalog
    }
}
