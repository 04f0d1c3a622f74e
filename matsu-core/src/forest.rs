//! Result types for minimum spanning forest computations.
//!
//! The forest doubles as the replay trace: committed edges are stored in
//! commit order (round-major, candidate-slot order within a round), so a
//! presentation layer can animate the construction without the core holding
//! any mutable display state.

use crate::graph::WeightedEdge;

/// An edge committed to the spanning forest.
///
/// Carries a copy of the original edge record plus its input position and
/// the round that committed it.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct CommittedEdge {
    source: usize,
    target: usize,
    weight: u64,
    edge: usize,
    round: usize,
}

impl CommittedEdge {
    pub(crate) const fn new(record: WeightedEdge, edge: usize, round: usize) -> Self {
        Self {
            source: record.source(),
            target: record.target(),
            weight: record.weight(),
            edge,
            round,
        }
    }

    /// Returns the first endpoint as given in the input edge list.
    #[must_use]
    #[rustfmt::skip]
    pub const fn source(&self) -> usize { self.source }

    /// Returns the second endpoint as given in the input edge list.
    #[must_use]
    #[rustfmt::skip]
    pub const fn target(&self) -> usize { self.target }

    /// Returns the edge weight.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weight(&self) -> u64 { self.weight }

    /// Returns the edge's position in the input edge list.
    #[must_use]
    #[rustfmt::skip]
    pub const fn edge(&self) -> usize { self.edge }

    /// Returns the zero-based round that committed this edge.
    #[must_use]
    #[rustfmt::skip]
    pub const fn round(&self) -> usize { self.round }
}

/// Summary of one completed round, for callers replaying progress.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct RoundTrace {
    round: usize,
    commits: usize,
    components: usize,
}

impl RoundTrace {
    pub(crate) const fn new(round: usize, commits: usize, components: usize) -> Self {
        Self {
            round,
            commits,
            components,
        }
    }

    /// Returns the zero-based round index.
    #[must_use]
    #[rustfmt::skip]
    pub const fn round(&self) -> usize { self.round }

    /// Returns how many edges this round committed.
    #[must_use]
    #[rustfmt::skip]
    pub const fn commits(&self) -> usize { self.commits }

    /// Returns how many components remained after this round.
    #[must_use]
    #[rustfmt::skip]
    pub const fn components(&self) -> usize { self.components }
}

/// The output of a minimum spanning forest computation.
///
/// When the input graph is connected, the forest is a minimum spanning tree
/// with exactly `vertex_count - 1` edges; otherwise it holds
/// `vertex_count - component_count` edges and callers detect the
/// disconnected input via [`Self::is_spanning_tree`].
///
/// # Examples
/// ```
/// use matsu_core::{BoruvkaBuilder, Graph};
///
/// let mut graph = Graph::new(3);
/// graph.push_edge(0, 1, 1);
/// graph.push_edge(1, 2, 2);
/// graph.push_edge(0, 2, 5);
/// let forest = BoruvkaBuilder::new().build()?.run(&graph)?;
/// assert!(forest.is_spanning_tree());
/// assert_eq!(forest.edges().len(), 2);
/// assert_eq!(forest.total_weight(), 3);
/// # Ok::<(), matsu_core::BoruvkaError>(())
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SpanningForest {
    edges: Vec<CommittedEdge>,
    rounds: Vec<RoundTrace>,
    vertex_count: usize,
    component_count: usize,
}

impl SpanningForest {
    pub(crate) const fn new(
        edges: Vec<CommittedEdge>,
        rounds: Vec<RoundTrace>,
        vertex_count: usize,
        component_count: usize,
    ) -> Self {
        Self {
            edges,
            rounds,
            vertex_count,
            component_count,
        }
    }

    /// Returns the forest edges in commit order.
    ///
    /// The order is round-major, then candidate-slot order within a round —
    /// this sequence is the replay trace for animation or logging.
    #[must_use]
    pub fn edges(&self) -> &[CommittedEdge] {
        &self.edges
    }

    /// Returns one summary per executed round, in execution order.
    #[must_use]
    pub fn rounds(&self) -> &[RoundTrace] {
        &self.rounds
    }

    /// Returns the number of vertices the forest spans.
    #[must_use]
    #[rustfmt::skip]
    pub const fn vertex_count(&self) -> usize { self.vertex_count }

    /// Returns the number of connected components in the resulting forest.
    #[must_use]
    #[rustfmt::skip]
    pub const fn component_count(&self) -> usize { self.component_count }

    /// Returns `true` when the forest spans a single connected component.
    #[must_use]
    pub const fn is_spanning_tree(&self) -> bool {
        self.component_count == 1
    }

    /// Returns the sum of committed edge weights.
    ///
    /// Accumulates in `u128` so that large `u64` weights cannot overflow the
    /// total.
    #[must_use]
    pub fn total_weight(&self) -> u128 {
        self.edges
            .iter()
            .map(|edge| u128::from(edge.weight()))
            .sum()
    }
}
