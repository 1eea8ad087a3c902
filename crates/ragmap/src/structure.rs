//! Directed knowledge graph built from a catalog.
//!
//! [`KnowledgeGraph`] is the first pipeline stage after loading: it turns a
//! [`Catalog`] into a `petgraph` directed graph whose nodes carry resolved
//! label, tooltip and fill values.
//!
//! Construction never fails. Edge endpoints that are not in the catalog's
//! node list are created on the fly with default attributes and marked
//! implicit; repeated edges are added again rather than merged.

use indexmap::IndexMap;
use log::{debug, trace};
use petgraph::{
    graph::{DiGraph, NodeIndex},
    visit::EdgeRef,
};

use ragmap_core::{
    catalog::{self, Catalog},
    color::Color,
    identifier::Id,
};

/// A node of the [`KnowledgeGraph`] with its resolved display metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphNode {
    id: Id,
    label: String,
    tooltip: String,
    fill: Color,
    implicit: bool,
}

impl GraphNode {
    fn declared(catalog: &Catalog, id: Id) -> Self {
        Self {
            id,
            label: catalog.label(id).into_owned(),
            tooltip: catalog.tooltip(id).into_owned(),
            fill: catalog.color(id),
            implicit: false,
        }
    }

    /// An edge endpoint that was never declared gets no catalog styling.
    fn implicit(id: Id) -> Self {
        Self {
            id,
            label: id.to_string(),
            tooltip: catalog::default_tooltip(id),
            fill: catalog::default_fill(),
            implicit: true,
        }
    }

    pub fn id(&self) -> Id {
        self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn tooltip(&self) -> &str {
        &self.tooltip
    }

    pub fn fill(&self) -> Color {
        self.fill
    }

    /// Returns `true` if the node was created from an edge endpoint rather
    /// than declared in the catalog.
    pub fn is_implicit(&self) -> bool {
        self.implicit
    }
}

/// Directed graph of catalog concepts.
#[derive(Debug, Clone, Default)]
pub struct KnowledgeGraph {
    graph: DiGraph<GraphNode, ()>,
    indices: IndexMap<Id, NodeIndex>,
}

impl KnowledgeGraph {
    /// Builds the graph for `catalog`.
    ///
    /// Declared nodes are added first, in declaration order, followed by
    /// implicit nodes in the order their edges reference them.
    pub fn from_catalog(catalog: &Catalog) -> Self {
        let mut kg = Self::default();

        for &id in catalog.nodes() {
            let idx = kg.graph.add_node(GraphNode::declared(catalog, id));
            kg.indices.insert(id, idx);
        }

        for edge in catalog.edges() {
            let source = kg.ensure_node(edge.source());
            let target = kg.ensure_node(edge.target());
            kg.graph.add_edge(source, target, ());
        }

        debug!(
            nodes_count = kg.node_count(),
            edges_count = kg.edge_count(),
            implicit_count = kg.implicit_nodes().count();
            "Knowledge graph built"
        );
        kg
    }

    fn ensure_node(&mut self, id: Id) -> NodeIndex {
        if let Some(&idx) = self.indices.get(&id) {
            return idx;
        }

        trace!(node_id = id.to_string(); "Creating implicit node for edge endpoint");
        let idx = self.graph.add_node(GraphNode::implicit(id));
        self.indices.insert(id, idx);
        idx
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Returns the node with identifier `id`, if present.
    pub fn node(&self, id: Id) -> Option<&GraphNode> {
        self.indices.get(&id).map(|&idx| &self.graph[idx])
    }

    /// Iterates nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &GraphNode> {
        self.graph.node_weights()
    }

    /// Iterates nodes that were created implicitly from edge endpoints.
    pub fn implicit_nodes(&self) -> impl Iterator<Item = &GraphNode> {
        self.nodes().filter(|node| node.is_implicit())
    }

    /// Iterates `(source, target)` pairs in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = (&GraphNode, &GraphNode)> {
        self.graph
            .edge_references()
            .map(|edge| (&self.graph[edge.source()], &self.graph[edge.target()]))
    }

    /// Returns `true` if there is at least one edge from `source` to `target`.
    pub fn contains_edge(&self, source: Id, target: Id) -> bool {
        match (self.indices.get(&source), self.indices.get(&target)) {
            (Some(&s), Some(&t)) => self.graph.find_edge(s, t).is_some(),
            _ => false,
        }
    }

    /// Iterates `(source, target)` pairs as positions in [`nodes`](Self::nodes) order.
    pub(crate) fn edge_indices(&self) -> impl Iterator<Item = (usize, usize)> {
        self.graph
            .edge_references()
            .map(|edge| (edge.source().index(), edge.target().index()))
    }
}

#[cfg(test)]
mod tests {
    use ragmap_core::catalog::DEFAULT_FILL;

    use super::*;

    fn two_node_catalog() -> Catalog {
        Catalog::builder()
            .node("A")
            .node("B")
            .edge("A", "B")
            .tooltip("A", "First")
            .color("A", Color::new("#b3ffb3").unwrap())
            .build()
    }

    #[test]
    fn test_declared_nodes_exist_once() {
        let graph = KnowledgeGraph::from_catalog(&two_node_catalog());

        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_count(), 1);
        assert!(graph.contains_edge(Id::new("A"), Id::new("B")));
        assert!(!graph.contains_edge(Id::new("B"), Id::new("A")));
    }

    #[test]
    fn test_node_metadata_comes_from_catalog() {
        let graph = KnowledgeGraph::from_catalog(&two_node_catalog());

        let a = graph.node(Id::new("A")).unwrap();
        assert_eq!(a.label(), "A");
        assert_eq!(a.tooltip(), "First");
        assert_eq!(a.fill().to_hex(), "#b3ffb3");
        assert!(!a.is_implicit());

        let b = graph.node(Id::new("B")).unwrap();
        assert_eq!(b.tooltip(), "Uzol B");
        assert_eq!(b.fill().to_hex(), DEFAULT_FILL);
    }

    #[test]
    fn test_undeclared_endpoint_is_created_implicitly() {
        let catalog = Catalog::builder().node("A").edge("A", "C").build();
        let graph = KnowledgeGraph::from_catalog(&catalog);

        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_count(), 1);
        assert!(graph.contains_edge(Id::new("A"), Id::new("C")));

        let c = graph.node(Id::new("C")).unwrap();
        assert!(c.is_implicit());
        assert_eq!(c.label(), "C");
        assert_eq!(c.tooltip(), "Uzol C");
        assert_eq!(c.fill().to_hex(), DEFAULT_FILL);
        assert_eq!(graph.implicit_nodes().count(), 1);
    }

    #[test]
    fn test_implicit_node_ignores_catalog_tables() {
        let catalog = Catalog::builder()
            .node("A")
            .edge("A", "C")
            .tooltip("C", "Never declared")
            .color("C", Color::new("#ff0000").unwrap())
            .build();
        let graph = KnowledgeGraph::from_catalog(&catalog);

        let c = graph.node(Id::new("C")).unwrap();
        assert_eq!(c.tooltip(), "Uzol C");
        assert_eq!(c.fill().to_hex(), DEFAULT_FILL);
    }

    #[test]
    fn test_duplicate_edges_are_kept() {
        let catalog = Catalog::builder()
            .node("A")
            .node("B")
            .edge("A", "B")
            .edge("A", "B")
            .build();
        let graph = KnowledgeGraph::from_catalog(&catalog);

        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn test_self_loop() {
        let catalog = Catalog::builder().node("A").edge("A", "A").build();
        let graph = KnowledgeGraph::from_catalog(&catalog);

        assert_eq!(graph.node_count(), 1);
        assert!(graph.contains_edge(Id::new("A"), Id::new("A")));
    }

    #[test]
    fn test_node_order_declared_then_implicit() {
        let catalog = Catalog::builder()
            .edge("X", "A")
            .node("A")
            .node("B")
            .edge("B", "Y")
            .build();
        let graph = KnowledgeGraph::from_catalog(&catalog);

        let order: Vec<String> = graph.nodes().map(|n| n.id().to_string()).collect();
        assert_eq!(order, ["A", "B", "X", "Y"]);
    }

    #[test]
    fn test_builtin_catalog_graph() {
        let catalog = ragmap_catalog::builtin();
        let graph = KnowledgeGraph::from_catalog(&catalog);

        assert_eq!(graph.node_count(), catalog.nodes().len());
        assert_eq!(graph.edge_count(), catalog.edges().len());
        assert_eq!(graph.implicit_nodes().count(), 0);
        for edge in catalog.edges() {
            assert!(graph.contains_edge(edge.source(), edge.target()));
        }
    }
}
