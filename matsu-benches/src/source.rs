//! Seeded synthetic graph generation for benchmarks.
//!
//! Builds connected random graphs: a random spanning tree guarantees
//! connectivity, then extra random edges raise the density. Fixed seeds keep
//! benchmark inputs reproducible across runs and machines.

use matsu_core::Graph;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use thiserror::Error;

/// Configuration for synthetic graph generation.
#[derive(Clone, Copy, Debug)]
pub struct SyntheticGraphConfig {
    /// Number of vertices to generate.
    pub vertex_count: usize,
    /// Number of extra edges added on top of the spanning tree.
    pub extra_edges: usize,
    /// RNG seed for reproducible generation.
    pub seed: u64,
}

/// Errors returned while generating synthetic graphs.
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub enum SyntheticError {
    /// Graph generation requires at least two vertices.
    #[error("synthetic graphs need at least 2 vertices (got {got})")]
    TooFewVertices {
        /// The invalid vertex count supplied by the caller.
        got: usize,
    },
}

/// Generates a connected random graph from the given configuration.
///
/// # Errors
/// Returns [`SyntheticError::TooFewVertices`] when `vertex_count < 2`.
pub fn generate_connected_graph(config: &SyntheticGraphConfig) -> Result<Graph, SyntheticError> {
    if config.vertex_count < 2 {
        return Err(SyntheticError::TooFewVertices {
            got: config.vertex_count,
        });
    }

    let mut rng = SmallRng::seed_from_u64(config.seed);
    let mut graph = Graph::new(config.vertex_count);

    // Random spanning tree via a shuffled permutation walk.
    let mut perm: Vec<usize> = (0..config.vertex_count).collect();
    for i in (1..perm.len()).rev() {
        let j = rng.gen_range(0..=i);
        perm.swap(i, j);
    }
    for window in perm.windows(2) {
        if let [previous, current] = *window {
            graph.push_edge(previous, current, rng.gen_range(1..10_000));
        }
    }

    for _ in 0..config.extra_edges {
        let left = rng.gen_range(0..config.vertex_count);
        let right = rng.gen_range(0..config.vertex_count);
        if left != right {
            graph.push_edge(left, right, rng.gen_range(1..10_000));
        }
    }

    Ok(graph)
}
