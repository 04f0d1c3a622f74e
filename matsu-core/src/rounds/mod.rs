//! Component-parallel Borůvka round engine.
//!
//! Each round snapshots the component label of every vertex, scans the edge
//! list once to find each component's cheapest outgoing edge, and then
//! commits the surviving candidates sequentially. Rounds repeat until the
//! forest is complete or a round commits nothing, which signals a
//! disconnected input.
//!
//! Candidate slots order edges by `(weight, input position)` ascending, so
//! the first edge encountered in input order wins ties. The parallel scan
//! merges per-worker tables with the same rule, making both backends
//! bit-identical for identical inputs.

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::debug;

use crate::{
    Result,
    forest::{CommittedEdge, RoundTrace, SpanningForest},
    graph::{Graph, WeightedEdge},
    union_find::DisjointSet,
};


/// Candidate-scan backend resolved from the configured
/// [`crate::ScanStrategy`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum ScanBackend {
    /// Single-threaded scan in input order.
    Sequential,
    /// Rayon fold/reduce scan over per-worker candidate tables.
    #[cfg(feature = "parallel")]
    Parallel,
}

/// A component's cheapest outgoing edge discovered so far in a round.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct Candidate {
    weight: u64,
    edge: usize,
}

impl Candidate {
    /// Deterministic candidate order: lower weight wins, then lower input
    /// position.
    const fn beats(self, other: Self) -> bool {
        self.weight < other.weight || (self.weight == other.weight && self.edge < other.edge)
    }
}

/// Installs `challenger` into `slot` when the slot is empty or beaten.
fn install(slot: &mut Option<Candidate>, challenger: Candidate) {
    match slot {
        Some(current) if !challenger.beats(*current) => {}
        _ => *slot = Some(challenger),
    }
}

/// Runs Borůvka rounds to fixed point over a validated graph.
pub(crate) fn run(graph: &Graph, backend: ScanBackend) -> Result<SpanningForest> {
    let vertex_count = graph.vertex_count();
    let target = vertex_count.saturating_sub(1);

    let mut set = DisjointSet::new(vertex_count);
    let mut committed = Vec::with_capacity(target);
    let mut trace = Vec::new();

    let mut round = 0;
    while committed.len() < target {
        let labels = set.component_labels();
        let table = match backend {
            ScanBackend::Sequential => scan_sequential(graph.edges(), &labels),
            #[cfg(feature = "parallel")]
            ScanBackend::Parallel => scan_parallel(graph.edges(), &labels),
        };

        let commits = commit_round(&mut set, table, graph, round, &mut committed)?;
        trace.push(RoundTrace::new(round, commits, set.component_count()));
        debug!(
            round,
            commits,
            components = set.component_count(),
            "round complete"
        );

        if commits == 0 {
            // The surviving components have no outgoing edges: the input is
            // disconnected and further rounds would never make progress.
            break;
        }
        round += 1;
    }

    Ok(SpanningForest::new(
        committed,
        trace,
        vertex_count,
        set.component_count(),
    ))
}

/// Scans every edge once, recording each component's best candidate.
///
/// Self-loops and edges internal to a component carry equal labels on both
/// endpoints and are skipped.
fn scan_sequential(edges: &[WeightedEdge], labels: &[usize]) -> Vec<Option<Candidate>> {
    let mut table = vec![None; labels.len()];
    for (index, edge) in edges.iter().enumerate() {
        scan_edge(&mut table, labels, index, edge);
    }
    table
}

/// Rayon variant of the candidate scan.
///
/// Workers fold edges into private tables; the reduce step merges tables
/// with the same `(weight, input position)` rule, so the result is
/// independent of how rayon splits the edge list.
#[cfg(feature = "parallel")]
fn scan_parallel(edges: &[WeightedEdge], labels: &[usize]) -> Vec<Option<Candidate>> {
    edges
        .par_iter()
        .enumerate()
        .fold(
            || vec![None; labels.len()],
            |mut table, (index, edge)| {
                scan_edge(&mut table, labels, index, edge);
                table
            },
        )
        .reduce(|| vec![None; labels.len()], merge_tables)
}

/// Offers one edge to the candidate slots of both endpoint components.
fn scan_edge(table: &mut [Option<Candidate>], labels: &[usize], index: usize, edge: &WeightedEdge) {
    let left = labels[edge.source()];
    let right = labels[edge.target()];
    if left == right {
        return;
    }

    let candidate = Candidate {
        weight: edge.weight(),
        edge: index,
    };
    install(&mut table[left], candidate);
    install(&mut table[right], candidate);
}

#[cfg(feature = "parallel")]
fn merge_tables(
    mut left: Vec<Option<Candidate>>,
    right: Vec<Option<Candidate>>,
) -> Vec<Option<Candidate>> {
    for (slot, challenger) in left.iter_mut().zip(right) {
        if let Some(candidate) = challenger {
            install(slot, candidate);
        }
    }
    left
}

/// Sequential commit phase: re-resolves every surviving candidate and merges
/// the components that are still distinct.
///
/// Candidates whose components merged earlier in the same round resolve to a
/// shared representative by commit time; their `union` reports no merge and
/// the edge is skipped.
fn commit_round(
    set: &mut DisjointSet,
    table: Vec<Option<Candidate>>,
    graph: &Graph,
    round: usize,
    committed: &mut Vec<CommittedEdge>,
) -> Result<usize> {
    let mut commits = 0;
    for candidate in table.into_iter().flatten() {
        let record = graph.edges()[candidate.edge];
        if set.union(record.source(), record.target())? {
            committed.push(CommittedEdge::new(record, candidate.edge, round));
            commits += 1;
        }
    }
    Ok(commits)
}
