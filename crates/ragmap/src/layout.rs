//! Node placement.
//!
//! A [`Placement`] assigns an initial position to every node of a
//! [`KnowledgeGraph`](crate::structure::KnowledgeGraph). Which engine
//! computes it depends on the physics flag:
//!
//! - physics on: [`LayoutEngine::Force`] runs the force-directed simulation
//!   for the configured number of stabilization iterations;
//! - physics off: [`LayoutEngine::Grid`] drops nodes on a jittered grid and
//!   runs no simulation.
//!
//! Both engines are seeded, so the same graph and configuration always
//! produce the same placement.

mod engines;

pub use engines::{EngineBuilder, LayoutEngine};

use ragmap_core::geometry::{Bounds, Point};

/// Initial node positions, in [`KnowledgeGraph::nodes`](crate::structure::KnowledgeGraph::nodes) order.
#[derive(Debug, Clone, PartialEq)]
pub struct Placement {
    positions: Vec<Point>,
    iterations: usize,
}

impl Placement {
    pub(crate) fn new(positions: Vec<Point>, iterations: usize) -> Self {
        Self {
            positions,
            iterations,
        }
    }

    /// Positions in node order.
    pub fn positions(&self) -> &[Point] {
        &self.positions
    }

    /// Number of simulation steps run before the placement was taken.
    ///
    /// Zero for placements that involve no simulation.
    pub fn stabilization_iterations(&self) -> usize {
        self.iterations
    }

    /// Bounding box of all positions, or `None` for an empty graph.
    pub fn bounds(&self) -> Option<Bounds> {
        Bounds::enclosing(self.positions.iter().copied())
    }
}

/// Translates `positions` so their bounding box is centered on the origin,
/// then scales them down uniformly if either side exceeds `max_dimension`.
pub(crate) fn center_and_fit(positions: &mut [Point], max_dimension: f32) {
    let Some(bounds) = Bounds::enclosing(positions.iter().copied()) else {
        return;
    };

    let center = bounds.center();
    for pos in positions.iter_mut() {
        *pos = pos.sub_point(center);
    }

    let largest = bounds.width().max(bounds.height());
    if largest > max_dimension {
        let scale_factor = max_dimension / largest;
        for pos in positions.iter_mut() {
            *pos = pos.scale(scale_factor);
        }
    }
}
