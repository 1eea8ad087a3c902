//! Layout engine selection and configuration.
//!
//! The module uses a builder pattern for creating and configuring layout engines.

mod force;
mod grid;

use log::{debug, info};

use crate::{error::RagmapError, layout::Placement, structure::KnowledgeGraph};

/// Available placement engines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayoutEngine {
    /// Jittered grid, no simulation.
    Grid,
    /// Force-directed simulation.
    Force,
}

impl LayoutEngine {
    /// Picks the engine matching the physics flag of a render.
    pub fn for_physics(physics: bool) -> Self {
        if physics { Self::Force } else { Self::Grid }
    }
}

/// Trait implemented by every placement engine.
pub trait PlacementEngine {
    /// Calculates initial positions for every node of `graph`.
    fn place(&self, graph: &KnowledgeGraph) -> Placement;
}

/// Builder for creating and configuring layout engines.
#[derive(Debug, Clone)]
pub struct EngineBuilder {
    seed: u64,
    spacing: f32,
    stabilization_iterations: usize,
    max_dimension: f32,
}

impl EngineBuilder {
    /// Create a new engine builder with default configuration
    pub fn new() -> Self {
        Self {
            seed: 42,
            spacing: 120.0,
            stabilization_iterations: 240,
            max_dimension: 1200.0,
        }
    }

    /// Set the seed used for initial jitter
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the target distance between neighboring nodes
    pub fn with_spacing(mut self, spacing: f32) -> Self {
        self.spacing = spacing;
        self
    }

    /// Set the number of force simulation steps
    pub fn with_stabilization_iterations(mut self, iterations: usize) -> Self {
        self.stabilization_iterations = iterations;
        self
    }

    /// Set the largest width or height a placement may span
    pub fn with_max_dimension(mut self, max_dimension: f32) -> Self {
        self.max_dimension = max_dimension;
        self
    }

    fn engine(&self, kind: LayoutEngine) -> Box<dyn PlacementEngine> {
        match kind {
            LayoutEngine::Grid => {
                let mut e = grid::Engine::new();
                e.set_cell_size(self.spacing)
                    .set_seed(self.seed)
                    .set_max_dimension(self.max_dimension);
                Box::new(e)
            }
            LayoutEngine::Force => {
                let mut e = force::Engine::new();
                e.set_iterations(self.stabilization_iterations)
                    .set_spring_length(self.spacing)
                    .set_seed(self.seed)
                    .set_max_dimension(self.max_dimension);
                Box::new(e)
            }
        }
    }

    /// Places every node of `graph` with the engine of the given kind.
    ///
    /// # Errors
    ///
    /// Returns [`RagmapError::Layout`] if the engine produced a non-finite
    /// position, which can only happen with degenerate settings such as a
    /// non-finite spacing.
    pub fn build(
        &self,
        graph: &KnowledgeGraph,
        kind: LayoutEngine,
    ) -> Result<Placement, RagmapError> {
        info!(engine:? = kind, nodes_count = graph.node_count(); "Calculating placement");

        let placement = self.engine(kind).place(graph);

        if let Some((idx, pos)) = placement
            .positions()
            .iter()
            .enumerate()
            .find(|(_, pos)| !pos.is_finite())
        {
            return Err(RagmapError::Layout(format!(
                "{kind:?} engine produced a non-finite position {pos:?} for node #{idx}"
            )));
        }

        debug!(
            iterations = placement.stabilization_iterations(),
            bounds:? = placement.bounds();
            "Placement calculated"
        );
        Ok(placement)
    }
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}
