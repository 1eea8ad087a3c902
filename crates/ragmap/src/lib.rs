//! ragmap - an interactive map of the RAG, agent and prompting landscape.
//!
//! Builds a directed knowledge graph from a [`Catalog`](ragmap_core::catalog::Catalog),
//! places it, and renders it as an HTML document drawn by vis-network in the
//! browser, optionally wrapped in a host page with a physics toggle.

pub mod config;
pub mod export;
pub mod layout;
pub mod options;
pub mod scene;
pub mod structure;

mod error;

pub use ragmap_core::{catalog, color, draw, geometry, identifier};

pub use error::RagmapError;

use std::fs;

use log::{debug, info, trace};

use catalog::Catalog;
use config::AppConfig;
use export::{Exporter, SceneData};
use layout::{EngineBuilder, LayoutEngine};
use options::RenderOptions;
use scene::Scene;
use structure::KnowledgeGraph;

/// Builder for loading catalogs and rendering their graphs.
///
/// This provides an API for processing a catalog through the graph, layout
/// and rendering stages.
///
/// # Examples
///
/// ```rust,no_run
/// use ragmap::{MapBuilder, config::AppConfig};
///
/// let builder = MapBuilder::new(AppConfig::default());
///
/// // The built-in RAG landscape
/// let catalog = ragmap_catalog::builtin();
/// let graph = builder.build_graph(&catalog);
///
/// // Standalone graph document with physics enabled
/// let html = builder.render_html(&graph, true)
///     .expect("Failed to render");
///
/// // Or the full page with the physics toggle
/// let page = builder.render_page(&graph)
///     .expect("Failed to render");
/// ```
#[derive(Default)]
pub struct MapBuilder {
    config: AppConfig,
}

impl MapBuilder {
    /// Create a new map builder with the given configuration.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ragmap::{MapBuilder, config::AppConfig};
    ///
    /// let builder = MapBuilder::new(AppConfig::default());
    /// ```
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration this builder renders with.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Load a catalog from TOML source.
    ///
    /// # Errors
    ///
    /// Returns [`RagmapError::Catalog`] carrying every diagnostic found in
    /// `source` together with the source itself.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ragmap::MapBuilder;
    ///
    /// let source = r#"
    ///     nodes = ["A", "B"]
    ///     edges = [["A", "B"]]
    /// "#;
    /// let catalog = MapBuilder::default().load_catalog(source)
    ///     .expect("Failed to load catalog");
    /// assert_eq!(catalog.nodes().len(), 2);
    /// ```
    pub fn load_catalog(&self, source: &str) -> Result<Catalog, RagmapError> {
        info!("Loading catalog");

        let catalog = ragmap_catalog::parse(source)
            .map_err(|err| RagmapError::new_catalog_error(err, source))?;

        debug!(
            nodes_count = catalog.nodes().len(),
            edges_count = catalog.edges().len();
            "Catalog loaded successfully"
        );
        trace!(catalog:?; "Loaded catalog");

        Ok(catalog)
    }

    /// Build the directed knowledge graph of `catalog`.
    ///
    /// Never fails; undeclared edge endpoints become implicit nodes.
    pub fn build_graph(&self, catalog: &Catalog) -> KnowledgeGraph {
        info!("Building knowledge graph");
        KnowledgeGraph::from_catalog(catalog)
    }

    /// Place and style `graph` for a render with the given physics flag.
    ///
    /// # Errors
    ///
    /// Returns `RagmapError` for invalid style colors or layout failures.
    pub fn render_scene(
        &self,
        graph: &KnowledgeGraph,
        physics: bool,
    ) -> Result<Scene, RagmapError> {
        let render = self.config.render();
        let layout = self.config.layout();
        let engine_builder = EngineBuilder::new()
            .with_seed(layout.seed())
            .with_spacing(layout.spacing())
            .with_max_dimension(layout.max_dimension())
            .with_stabilization_iterations(render.stabilization_iterations());

        let placement = engine_builder.build(graph, LayoutEngine::for_physics(physics))?;
        info!(
            physics = physics,
            iterations = placement.stabilization_iterations();
            "Placement calculated"
        );

        Scene::render(
            graph,
            &placement,
            self.config.style(),
            RenderOptions::new(render, physics),
        )
    }

    /// Render `graph` to a standalone HTML document.
    ///
    /// # Errors
    ///
    /// Returns `RagmapError` for layout, serialization or export errors.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use ragmap::MapBuilder;
    ///
    /// let builder = MapBuilder::default();
    /// let graph = builder.build_graph(&ragmap_catalog::builtin());
    /// let html = builder.render_html(&graph, false)
    ///     .expect("Failed to render graph");
    ///
    /// println!("{}", html);
    /// ```
    pub fn render_html(
        &self,
        graph: &KnowledgeGraph,
        physics: bool,
    ) -> Result<String, RagmapError> {
        let scene = self.render_scene(graph, physics)?;
        let data = SceneData::from_scene(&scene)?;

        // Render through a temporary file
        let temp_file =
            tempfile::NamedTempFile::new().map_err(|err| RagmapError::Export(Box::new(err)))?;
        let temp_path = temp_file.path().to_string_lossy().to_string();

        let html_exporter = export::html::HtmlBuilder::new(&temp_path)
            .with_page(self.config.page())
            .build()?;

        html_exporter.export_graph(&data)?;

        let html = fs::read_to_string(&temp_path).map_err(RagmapError::Io)?;

        info!(physics = physics; "Graph document rendered successfully");
        Ok(html)
    }

    /// Render the host page with both physics renders of `graph`.
    ///
    /// The checkbox starts in the state of the configured physics default.
    ///
    /// # Errors
    ///
    /// Returns `RagmapError` for layout, serialization or export errors.
    pub fn render_page(&self, graph: &KnowledgeGraph) -> Result<String, RagmapError> {
        let physics_off = SceneData::from_scene(&self.render_scene(graph, false)?)?;
        let physics_on = SceneData::from_scene(&self.render_scene(graph, true)?)?;

        let temp_file =
            tempfile::NamedTempFile::new().map_err(|err| RagmapError::Export(Box::new(err)))?;
        let temp_path = temp_file.path().to_string_lossy().to_string();

        let page_exporter = export::page::PageBuilder::new(&temp_path, self.config.page())
            .with_physics(self.config.render().physics())
            .build()?;

        page_exporter.export_page(&physics_off, &physics_on)?;

        let html = fs::read_to_string(&temp_path).map_err(RagmapError::Io)?;

        info!("Host page rendered successfully");
        Ok(html)
    }
}
