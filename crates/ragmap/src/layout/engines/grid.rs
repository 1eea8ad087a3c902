//! Jittered grid placement
//!
//! Nodes are dropped row by row onto a square grid, each nudged by a small
//! seeded offset so that straight edges between aligned nodes do not overlap.
//! No simulation runs.

use rand::{Rng, SeedableRng, rngs::StdRng};

use ragmap_core::geometry::Point;

use crate::{
    layout::{Placement, center_and_fit, engines::PlacementEngine},
    structure::KnowledgeGraph,
};

const JITTER: f32 = 20.0;

/// Grid layout engine used when physics is disabled
pub struct Engine {
    cell_size: f32,
    seed: u64,
    max_dimension: f32,
}

impl Engine {
    /// Create a new grid layout engine
    pub fn new() -> Self {
        Self {
            cell_size: 120.0,
            seed: 42,
            max_dimension: 1200.0,
        }
    }

    /// Set the distance between neighboring grid cells
    pub fn set_cell_size(&mut self, cell_size: f32) -> &mut Self {
        self.cell_size = cell_size;
        self
    }

    /// Set the seed for the jitter
    pub fn set_seed(&mut self, seed: u64) -> &mut Self {
        self.seed = seed;
        self
    }

    /// Set the largest width or height of the result
    pub fn set_max_dimension(&mut self, max_dimension: f32) -> &mut Self {
        self.max_dimension = max_dimension;
        self
    }
}

impl PlacementEngine for Engine {
    fn place(&self, graph: &KnowledgeGraph) -> Placement {
        let mut positions = jittered_grid(graph.node_count(), self.cell_size, self.seed);
        center_and_fit(&mut positions, self.max_dimension);
        Placement::new(positions, 0)
    }
}

/// Places `count` points on a square grid with seeded jitter.
///
/// Also used as the starting state of the force simulation.
pub(super) fn jittered_grid(count: usize, cell_size: f32, seed: u64) -> Vec<Point> {
    let mut rng = StdRng::seed_from_u64(seed);
    let grid_size = ((count as f32).sqrt().ceil() as usize).max(1);

    (0..count)
        .map(|i| {
            let row = i / grid_size;
            let col = i % grid_size;

            let base = Point::new(col as f32 * cell_size, row as f32 * cell_size);
            let jitter = Point::new(
                rng.random_range(-JITTER..JITTER),
                rng.random_range(-JITTER..JITTER),
            );

            base.add_point(jitter)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use ragmap_core::{catalog::Catalog, geometry::Bounds};

    use super::*;

    #[test]
    fn test_jittered_grid_is_seeded() {
        assert_eq!(jittered_grid(9, 100.0, 7), jittered_grid(9, 100.0, 7));
        assert_ne!(jittered_grid(9, 100.0, 7), jittered_grid(9, 100.0, 8));
    }

    #[test]
    fn test_jittered_grid_stays_near_cells() {
        let points = jittered_grid(10, 100.0, 1);
        assert_eq!(points.len(), 10);

        // 10 nodes fill a 4-wide grid
        for (i, p) in points.iter().enumerate() {
            let cell = Point::new((i % 4) as f32 * 100.0, (i / 4) as f32 * 100.0);
            assert!(p.sub_point(cell).hypot() <= JITTER * std::f32::consts::SQRT_2);
        }
    }

    #[test]
    fn test_jittered_grid_empty() {
        assert!(jittered_grid(0, 100.0, 1).is_empty());
    }

    #[test]
    fn test_place_centers_result() {
        let catalog = Catalog::builder().node("A").node("B").node("C").build();
        let graph = KnowledgeGraph::from_catalog(&catalog);

        let placement = Engine::new().place(&graph);
        let center = Bounds::enclosing(placement.positions().iter().copied())
            .unwrap()
            .center();

        assert!(center.hypot() < 1e-3);
        assert_eq!(placement.stabilization_iterations(), 0);
    }
}
