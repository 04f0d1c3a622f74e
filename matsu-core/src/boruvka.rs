//! Core orchestration for minimum spanning forest construction.
//!
//! Provides the [`Boruvka`] runtime entry point and helpers for validating
//! input graphs and selecting the candidate-scan backend.

use tracing::{info, instrument, warn};

use crate::{
    Result,
    builder::ScanStrategy,
    error::BoruvkaError,
    forest::SpanningForest,
    graph::Graph,
    rounds::{self, ScanBackend},
};

/// Entry point for computing minimum spanning forests.
///
/// Instances are constructed through [`crate::BoruvkaBuilder`] and are
/// immutable; one instance can run any number of graphs.
///
/// # Examples
/// ```
/// use matsu_core::{BoruvkaBuilder, Graph};
///
/// // Vertices A, B, C, D resolved by the caller to indices 0..4.
/// let mut graph = Graph::new(4);
/// graph.push_edge(0, 1, 1);
/// graph.push_edge(1, 2, 2);
/// graph.push_edge(2, 3, 3);
/// graph.push_edge(0, 3, 4);
/// graph.push_edge(0, 2, 5);
///
/// let forest = BoruvkaBuilder::new().build()?.run(&graph)?;
/// assert!(forest.is_spanning_tree());
/// assert_eq!(forest.total_weight(), 6);
/// # Ok::<(), matsu_core::BoruvkaError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Boruvka {
    scan_strategy: ScanStrategy,
}

impl Boruvka {
    pub(crate) const fn new(scan_strategy: ScanStrategy) -> Self {
        Self { scan_strategy }
    }

    /// Returns the scan strategy that will be used when running.
    #[must_use]
    pub const fn scan_strategy(&self) -> ScanStrategy {
        self.scan_strategy
    }

    /// Computes the minimum spanning forest of `graph`.
    ///
    /// Returns the committed edges in commit order together with the
    /// per-round trace. A disconnected input is a valid, reported outcome:
    /// the forest holds `vertex_count - component_count` edges and
    /// [`SpanningForest::is_spanning_tree`] returns `false`. Degenerate
    /// inputs (no vertices, a single vertex, an empty edge list) yield an
    /// empty forest without error.
    ///
    /// # Errors
    /// Returns [`BoruvkaError::InvalidVertex`] when an edge references a
    /// vertex index `>= vertex_count`, and [`BoruvkaError::ScanUnavailable`]
    /// when the configured strategy cannot be satisfied by this build.
    pub fn run(&self, graph: &Graph) -> Result<SpanningForest> {
        self.run_with_counts(graph, graph.vertex_count(), graph.edge_count())
    }

    #[instrument(
        name = "boruvka.run",
        err,
        skip(self, graph),
        fields(
            vertices = vertices,
            edges = edges,
            strategy = ?self.scan_strategy,
        ),
    )]
    fn run_with_counts(
        &self,
        graph: &Graph,
        vertices: usize,
        edges: usize,
    ) -> Result<SpanningForest> {
        validate_edges(graph)?;
        let backend = self.resolve_backend()?;

        let forest = rounds::run(graph, backend)?;

        if forest.component_count() > 1 {
            warn!(
                components = forest.component_count(),
                committed = forest.edges().len(),
                "input graph is disconnected; returning partial forest"
            );
        } else {
            info!(
                committed = forest.edges().len(),
                rounds = forest.rounds().len(),
                total_weight = %forest.total_weight(),
                "spanning forest complete"
            );
        }

        Ok(forest)
    }

    fn resolve_backend(&self) -> Result<ScanBackend> {
        match self.scan_strategy {
            ScanStrategy::Sequential => Ok(ScanBackend::Sequential),
            #[cfg(feature = "parallel")]
            ScanStrategy::Auto | ScanStrategy::Parallel => Ok(ScanBackend::Parallel),
            #[cfg(not(feature = "parallel"))]
            ScanStrategy::Auto => Ok(ScanBackend::Sequential),
            #[cfg(not(feature = "parallel"))]
            ScanStrategy::Parallel => Err(BoruvkaError::ScanUnavailable {
                requested: self.scan_strategy,
            }),
        }
    }
}

/// Checks every edge endpoint against the graph's vertex count.
///
/// Runs once, up front, so the round engine can treat endpoints as valid
/// indices for the rest of the computation.
fn validate_edges(graph: &Graph) -> Result<()> {
    let vertex_count = graph.vertex_count();
    for (index, edge) in graph.edges().iter().enumerate() {
        for endpoint in [edge.source(), edge.target()] {
            if endpoint >= vertex_count {
                return Err(BoruvkaError::InvalidVertex {
                    vertex: endpoint,
                    vertex_count,
                    edge: index,
                });
            }
        }
    }
    Ok(())
}
