//! Property 2: Structural invariant verification.
//!
//! For any forest produced by the round engine, verifies:
//!
//! - **Acyclicity** — no cycles (union-find based detection).
//! - **Bounds** — every committed endpoint lies inside the vertex range.
//! - **No self-loops** — `source != target` for all committed edges.
//! - **Edge count** — `V - C` edges for `C` connected components.
//! - **Reachability** — the forest induces exactly the input's components.
//! - **Trace consistency** — per-round commits sum to the edge count and
//!   edges are stored in round-major order.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{CommittedEdge, SpanningForest};

use super::equivalence::run_fixture;
use super::helpers::{count_input_components, find_root};
use super::types::MstFixture;

/// Runs the structural invariant property for the given fixture.
pub(super) fn run_structural_invariants_property(fixture: &MstFixture) -> TestCaseResult {
    let forest = run_fixture(fixture)?;
    let edges = forest.edges();

    validate_no_self_loops(edges)?;
    validate_bounds(fixture.vertex_count, edges)?;
    validate_acyclicity(fixture.vertex_count, edges)?;
    validate_edge_count(fixture.vertex_count, edges.len(), forest.component_count())?;
    validate_reachability(fixture, &forest)?;
    validate_trace(&forest)?;

    Ok(())
}

/// Generic edge validator that applies a predicate to each edge, returning
/// early with an error if the predicate produces a message.
fn validate_edges<F>(edges: &[CommittedEdge], mut predicate: F) -> TestCaseResult
where
    F: FnMut(usize, &CommittedEdge) -> Option<String>,
{
    for (i, edge) in edges.iter().enumerate() {
        if let Some(msg) = predicate(i, edge) {
            return Err(TestCaseError::fail(msg));
        }
    }
    Ok(())
}

// ── Validation helpers ──────────────────────────────────────────────────

/// Verifies that no committed edge is a self-loop.
fn validate_no_self_loops(edges: &[CommittedEdge]) -> TestCaseResult {
    validate_edges(edges, |i, edge| {
        (edge.source() == edge.target())
            .then(|| format!("edge {i}: self-loop on vertex {}", edge.source()))
    })
}

/// Verifies that every committed endpoint lies inside the vertex range.
fn validate_bounds(vertex_count: usize, edges: &[CommittedEdge]) -> TestCaseResult {
    validate_edges(edges, |i, edge| {
        (edge.source() >= vertex_count || edge.target() >= vertex_count).then(|| {
            format!(
                "edge {i}: endpoint out of range ({}, {}) with vertex_count {vertex_count}",
                edge.source(),
                edge.target(),
            )
        })
    })
}

/// Detects cycles in the forest output using union-find.
fn validate_acyclicity(vertex_count: usize, edges: &[CommittedEdge]) -> TestCaseResult {
    let mut parent: Vec<usize> = (0..vertex_count).collect();
    for (i, edge) in edges.iter().enumerate() {
        let left = find_root(&mut parent, edge.source());
        let right = find_root(&mut parent, edge.target());
        if left == right {
            return Err(TestCaseError::fail(format!(
                "edge {i}: ({}, {}) creates a cycle",
                edge.source(),
                edge.target(),
            )));
        }
        parent[right] = left;
    }
    Ok(())
}

/// Verifies that the forest has exactly `n - c` edges for `c` components.
fn validate_edge_count(
    vertex_count: usize,
    actual: usize,
    component_count: usize,
) -> TestCaseResult {
    let expected = vertex_count.saturating_sub(component_count);
    if actual != expected {
        return Err(TestCaseError::fail(format!(
            "edge count {actual}, expected n - c = {expected} \
             (n={vertex_count}, c={component_count})",
        )));
    }
    Ok(())
}

/// Verifies that the forest preserves the input's reachability: it induces
/// exactly as many components as the raw input edges do.
fn validate_reachability(fixture: &MstFixture, forest: &SpanningForest) -> TestCaseResult {
    let input_components = count_input_components(fixture.vertex_count, &fixture.edges);
    if forest.component_count() != input_components {
        return Err(TestCaseError::fail(format!(
            "input induces {input_components} components but forest reports {} \
             (distribution={:?})",
            forest.component_count(),
            fixture.distribution,
        )));
    }
    Ok(())
}

/// Verifies the replay trace: edges are round-major and round summaries
/// account for every committed edge.
fn validate_trace(forest: &SpanningForest) -> TestCaseResult {
    let rounds: Vec<usize> = forest.edges().iter().map(CommittedEdge::round).collect();
    if !rounds.windows(2).all(|pair| pair[0] <= pair[1]) {
        return Err(TestCaseError::fail(
            "committed edges are not in round-major order".to_owned(),
        ));
    }

    let total_commits: usize = forest.rounds().iter().map(|round| round.commits()).sum();
    if total_commits != forest.edges().len() {
        return Err(TestCaseError::fail(format!(
            "round summaries account for {total_commits} commits but the forest holds {}",
            forest.edges().len(),
        )));
    }

    Ok(())
}
