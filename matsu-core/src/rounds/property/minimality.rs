//! Property 4: Minimality against brute-force enumeration.
//!
//! For small graphs (at most 6 vertices and 12 edges) every maximal acyclic
//! edge subset can be enumerated exhaustively. The round engine's forest
//! must match the cheapest such subset's total weight — no cheaper spanning
//! structure exists.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::graph::WeightedEdge;

use super::equivalence::run_fixture;
use super::helpers::{count_input_components, find_root};
use super::types::MstFixture;

/// Runs the brute-force minimality property for the given fixture.
pub(super) fn run_minimality_property(fixture: &MstFixture) -> TestCaseResult {
    let forest = run_fixture(fixture)?;
    let minimum = brute_force_minimum(fixture.vertex_count, &fixture.edges).ok_or_else(|| {
        TestCaseError::fail(format!(
            "no spanning forest found by enumeration (vertices={}, edges={})",
            fixture.vertex_count,
            fixture.edges.len(),
        ))
    })?;

    if forest.total_weight() != minimum {
        return Err(TestCaseError::fail(format!(
            "forest weight {} exceeds brute-force minimum {minimum} \
             (vertices={}, edges={})",
            forest.total_weight(),
            fixture.vertex_count,
            fixture.edges.len(),
        )));
    }

    Ok(())
}

/// Exhaustively enumerates edge subsets and returns the minimum total weight
/// over all spanning forests (acyclic subsets inducing exactly the input's
/// component count).
fn brute_force_minimum(vertex_count: usize, edges: &[WeightedEdge]) -> Option<u128> {
    let component_count = count_input_components(vertex_count, edges);
    let forest_size = vertex_count - component_count;

    let mut minimum: Option<u128> = None;
    for mask in 0u32..(1 << edges.len()) {
        if mask.count_ones() as usize != forest_size {
            continue;
        }
        if let Some(weight) = subset_forest_weight(vertex_count, edges, mask) {
            minimum = Some(minimum.map_or(weight, |best| best.min(weight)));
        }
    }
    minimum
}

/// Returns the subset's total weight when it is acyclic, `None` when any
/// selected edge closes a cycle (self-loops count as cycles).
fn subset_forest_weight(vertex_count: usize, edges: &[WeightedEdge], mask: u32) -> Option<u128> {
    let mut parent: Vec<usize> = (0..vertex_count).collect();
    let mut weight: u128 = 0;

    for (index, edge) in edges.iter().enumerate() {
        if mask & (1 << index) == 0 {
            continue;
        }
        let left = find_root(&mut parent, edge.source());
        let right = find_root(&mut parent, edge.target());
        if left == right {
            return None;
        }
        parent[right] = left;
        weight += u128::from(edge.weight());
    }

    Some(weight)
}
