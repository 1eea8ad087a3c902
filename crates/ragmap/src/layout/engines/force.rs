//! Force-directed layout engine
//!
//! This module implements a force-directed graph layout algorithm. It is
//! used when physics is enabled and stands in for the browser's own
//! stabilization pass: the simulation runs for a fixed number of iterations
//! and the result is handed to the browser as the initial node positions.

use log::{debug, trace};

use ragmap_core::geometry::Point;

use crate::{
    layout::{Placement, center_and_fit, engines::PlacementEngine, engines::grid},
    structure::KnowledgeGraph,
};

/// Force layout engine
///
/// Every pair of nodes repels and every edge acts as a spring with a rest
/// length. A weak central gravity keeps the graph together; velocities are
/// damped and clamped each step.
pub struct Engine {
    // Simulation parameters
    iterations: usize,
    spring_constant: f32,
    spring_length: f32,
    repulsion_constant: f32,
    damping_factor: f32,
    central_gravity: f32,
    max_velocity: f32,
    // Starting grid and result size
    seed: u64,
    max_dimension: f32,
}

impl Engine {
    /// Create a new force layout engine
    pub fn new() -> Self {
        Self {
            iterations: 240,
            spring_constant: 0.05,
            spring_length: 120.0,
            repulsion_constant: 1000.0,
            damping_factor: 0.85,
            central_gravity: 0.02,
            max_velocity: 50.0,
            seed: 42,
            max_dimension: 1200.0,
        }
    }

    /// Set the number of iterations for the force simulation
    pub fn set_iterations(&mut self, iterations: usize) -> &mut Self {
        self.iterations = iterations;
        self
    }

    /// Set the rest length of edge springs
    pub fn set_spring_length(&mut self, length: f32) -> &mut Self {
        self.spring_length = length;
        self
    }

    /// Set the seed of the starting grid
    pub fn set_seed(&mut self, seed: u64) -> &mut Self {
        self.seed = seed;
        self
    }

    /// Set the largest width or height of the result
    pub fn set_max_dimension(&mut self, max_dimension: f32) -> &mut Self {
        self.max_dimension = max_dimension;
        self
    }

    /// Runs one simulation step, updating `positions` and `velocities` in place.
    fn step(&self, positions: &mut [Point], velocities: &mut [Point], edges: &[(usize, usize)]) {
        let mut forces = vec![Point::default(); positions.len()];

        // Repulsion between all pairs
        for i in 0..positions.len() {
            for j in 0..positions.len() {
                if i == j {
                    continue;
                }

                let trans = positions[i].sub_point(positions[j]);

                // Avoid division by zero
                let distance = trans.hypot().max(1.0);

                // Stronger repulsion when nodes are closer than a spring length
                let force_factor = if distance < self.spring_length {
                    self.repulsion_constant * (self.spring_length / distance).powi(2)
                        / self.spring_length
                } else {
                    self.repulsion_constant / distance
                };

                forces[i] = forces[i].add_point(trans.scale(force_factor / distance));
            }
        }

        // Springs along edges
        for &(source, target) in edges {
            if source == target {
                continue;
            }

            let trans = positions[target].sub_point(positions[source]);
            let distance = trans.hypot().max(1.0);

            // Positive when stretched, pulling the ends together
            let force = self.spring_constant * (distance - self.spring_length);
            let pull = trans.scale(force / distance);

            forces[source] = forces[source].add_point(pull);
            forces[target] = forces[target].sub_point(pull);
        }

        // Pull towards the centroid so disconnected groups stay in view
        let count = positions.len().max(1) as f32;
        let centroid = positions
            .iter()
            .fold(Point::default(), |acc, p| acc.add_point(*p))
            .scale(1.0 / count);
        for (force, pos) in forces.iter_mut().zip(positions.iter()) {
            *force = force.sub_point(pos.sub_point(centroid).scale(self.central_gravity));
        }

        for ((pos, vel), force) in positions.iter_mut().zip(velocities.iter_mut()).zip(forces) {
            *vel = vel
                .add_point(force)
                .scale(self.damping_factor)
                .clamp_length(self.max_velocity);
            *pos = pos.add_point(*vel);
        }
    }

    /// Run force-directed layout algorithm
    fn run_force_simulation(&self, graph: &KnowledgeGraph) -> Vec<Point> {
        let mut positions = grid::jittered_grid(graph.node_count(), self.spring_length, self.seed);
        let mut velocities = vec![Point::default(); positions.len()];
        let edges: Vec<(usize, usize)> = graph.edge_indices().collect();

        for iteration in 0..self.iterations {
            self.step(&mut positions, &mut velocities, &edges);

            if iteration % 60 == 0 {
                let energy: f32 = velocities.iter().map(|v| v.hypot()).sum();
                trace!(iteration = iteration, energy = energy; "Force simulation step");
            }
        }

        center_and_fit(&mut positions, self.max_dimension);
        positions
    }
}

impl PlacementEngine for Engine {
    fn place(&self, graph: &KnowledgeGraph) -> Placement {
        debug!(
            iterations = self.iterations,
            nodes_count = graph.node_count(),
            edges_count = graph.edge_count();
            "Running force simulation"
        );

        let positions = self.run_force_simulation(graph);
        Placement::new(positions, self.iterations)
    }
}
