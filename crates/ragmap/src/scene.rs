//! Renderable scene.
//!
//! A [`Scene`] is everything the browser needs to draw the graph: one
//! [`NodeMarker`] per node with its style and initial position, one
//! [`EdgeLine`] per edge, the document colors and the [`RenderOptions`].

use log::debug;

use ragmap_core::{color::Color, draw::ArrowHead, draw::NodeStyle, geometry::Point, identifier::Id};

use crate::{
    config::StyleConfig, error::RagmapError, layout::Placement, options::RenderOptions,
    structure::KnowledgeGraph,
};

/// A node as drawn on the canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeMarker {
    id: Id,
    label: String,
    tooltip: String,
    fill: Color,
    style: NodeStyle,
    position: Point,
}

impl NodeMarker {
    pub fn id(&self) -> Id {
        self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Text shown when hovering the marker.
    pub fn tooltip(&self) -> &str {
        &self.tooltip
    }

    pub fn fill(&self) -> Color {
        self.fill
    }

    pub fn style(&self) -> &NodeStyle {
        &self.style
    }

    /// Initial position; the browser may move the node afterwards.
    pub fn position(&self) -> Point {
        self.position
    }
}

/// A straight directed edge with an arrow head at the destination.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeLine {
    source: Id,
    target: Id,
    arrow: ArrowHead,
}

impl EdgeLine {
    pub fn source(&self) -> Id {
        self.source
    }

    pub fn target(&self) -> Id {
        self.target
    }

    pub fn arrow(&self) -> ArrowHead {
        self.arrow
    }
}

/// A graph ready for export.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    nodes: Vec<NodeMarker>,
    edges: Vec<EdgeLine>,
    background: Color,
    font_color: Color,
    options: RenderOptions,
    stabilization_iterations: usize,
}

impl Scene {
    /// Combines a graph with its placement, styling and browser options.
    ///
    /// # Errors
    ///
    /// Returns [`RagmapError::Config`] if a style color cannot be parsed and
    /// [`RagmapError::Layout`] if `placement` was computed for a different
    /// graph.
    pub fn render(
        graph: &KnowledgeGraph,
        placement: &Placement,
        style: &StyleConfig,
        options: RenderOptions,
    ) -> Result<Self, RagmapError> {
        if placement.positions().len() != graph.node_count() {
            return Err(RagmapError::Layout(format!(
                "placement has {} positions for {} nodes",
                placement.positions().len(),
                graph.node_count()
            )));
        }

        let node_style = style.node_style().map_err(RagmapError::Config)?;
        let background = style.background_color().map_err(RagmapError::Config)?;
        let font_color = style.font_color().map_err(RagmapError::Config)?;

        let nodes: Vec<_> = graph
            .nodes()
            .zip(placement.positions())
            .map(|(node, &position)| NodeMarker {
                id: node.id(),
                label: node.label().to_string(),
                tooltip: node.tooltip().to_string(),
                fill: node.fill(),
                style: node_style,
                position,
            })
            .collect();

        let arrow = options.arrow();
        let edges: Vec<_> = graph
            .edges()
            .map(|(source, target)| EdgeLine {
                source: source.id(),
                target: target.id(),
                arrow,
            })
            .collect();

        debug!(
            markers_count = nodes.len(),
            lines_count = edges.len(),
            physics = options.physics_enabled();
            "Scene rendered"
        );

        Ok(Self {
            nodes,
            edges,
            background,
            font_color,
            options,
            stabilization_iterations: placement.stabilization_iterations(),
        })
    }

    pub fn nodes(&self) -> &[NodeMarker] {
        &self.nodes
    }

    pub fn edges(&self) -> &[EdgeLine] {
        &self.edges
    }

    pub fn background(&self) -> Color {
        self.background
    }

    pub fn font_color(&self) -> Color {
        self.font_color
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    pub fn physics_enabled(&self) -> bool {
        self.options.physics_enabled()
    }

    /// Simulation steps run to compute the initial positions.
    ///
    /// Equals the configured stabilization count when physics is on and is
    /// zero otherwise.
    pub fn stabilization_iterations(&self) -> usize {
        self.stabilization_iterations
    }

    /// Returns the marker for `id`, if present.
    pub fn node(&self, id: Id) -> Option<&NodeMarker> {
        self.nodes.iter().find(|marker| marker.id == id)
    }
}

#[cfg(test)]
mod tests {
    use ragmap_core::{catalog::Catalog, draw::Shape};

    use super::*;
    use crate::{config::RenderConfig, layout::EngineBuilder, layout::LayoutEngine};

    fn render(catalog: &Catalog, physics: bool) -> Result<Scene, RagmapError> {
        let graph = KnowledgeGraph::from_catalog(catalog);
        let placement = EngineBuilder::new().build(&graph, LayoutEngine::for_physics(physics))?;
        Scene::render(
            &graph,
            &placement,
            &StyleConfig::default(),
            RenderOptions::new(&RenderConfig::default(), physics),
        )
    }

    #[test]
    fn test_two_nodes_one_edge() {
        let catalog = Catalog::builder()
            .node("A")
            .node("B")
            .edge("A", "B")
            .build();
        let scene = render(&catalog, false).unwrap();

        assert_eq!(scene.nodes().len(), 2);
        assert_eq!(scene.edges().len(), 1);
        assert_eq!(scene.edges()[0].source(), Id::new("A"));
        assert_eq!(scene.edges()[0].target(), Id::new("B"));
    }

    #[test]
    fn test_marker_style() {
        let catalog = Catalog::builder()
            .node("A")
            .tooltip("A", "Hello")
            .color("A", Color::new("#ffe6b3").unwrap())
            .build();
        let scene = render(&catalog, false).unwrap();
        let marker = scene.node(Id::new("A")).unwrap();

        assert_eq!(marker.tooltip(), "Hello");
        assert_eq!(marker.fill().to_hex(), "#ffe6b3");
        assert_eq!(marker.style().shape(), Shape::Dot);
        assert_eq!(marker.style().border_color().to_hex(), "#222222");
        assert_eq!(scene.background().to_hex(), "#ffffff");
    }

    #[test]
    fn test_edges_are_straight_with_arrow() {
        let catalog = Catalog::builder().edge("A", "B").build();
        let scene = render(&catalog, true).unwrap();

        assert!(!scene.options().smooth_edges());
        let arrow = scene.edges()[0].arrow();
        float_cmp::assert_approx_eq!(f32, arrow.scale_factor(), 0.7);
    }

    #[test]
    fn test_stabilization_iterations_follow_physics() {
        let catalog = Catalog::builder().node("A").node("B").edge("A", "B").build();

        assert_eq!(render(&catalog, true).unwrap().stabilization_iterations(), 240);
        assert_eq!(render(&catalog, false).unwrap().stabilization_iterations(), 0);
    }

    #[test]
    fn test_mismatched_placement() {
        let catalog = Catalog::builder().node("A").node("B").build();
        let graph = KnowledgeGraph::from_catalog(&catalog);
        let other = KnowledgeGraph::from_catalog(&Catalog::builder().node("A").build());
        let placement = EngineBuilder::new()
            .build(&other, LayoutEngine::Grid)
            .unwrap();

        let result = Scene::render(
            &graph,
            &placement,
            &StyleConfig::default(),
            RenderOptions::new(&RenderConfig::default(), false),
        );
        assert!(matches!(result, Err(RagmapError::Layout(_))));
    }
}
