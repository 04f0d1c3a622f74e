//! Benchmark parameter types.
//!
//! Groups related benchmark parameters into structs so that benchmark
//! helper functions stay under the Clippy `too-many-arguments` threshold.

use std::fmt;

/// Parameters for a forest-computation benchmark run.
#[derive(Clone, Debug)]
pub struct ForestBenchParams {
    /// Number of vertices in the generated graph.
    pub vertex_count: usize,
    /// Number of extra edges added on top of the random spanning tree.
    pub extra_edges: usize,
}

impl fmt::Display for ForestBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},extra={}", self.vertex_count, self.extra_edges)
    }
}
