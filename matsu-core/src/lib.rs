//! Matsu core library.
//!
//! Computes minimum spanning forests of weighted, undirected graphs using a
//! component-parallel ("round-based") variant of Borůvka's algorithm backed
//! by a disjoint-set forest with path compression and union by rank.
//!
//! Each round scans the edge list once to find every component's cheapest
//! outgoing edge, then commits the surviving candidates sequentially. This
//! avoids the global sort of a Kruskal implementation: the cost is
//! O(rounds × edges) with the round count bounded by O(log vertices) for
//! well-connected graphs.
//!
//! # Determinism
//!
//! Ties among equal-weight candidate edges break towards the lower input
//! position, so repeated runs — sequential or parallel — produce identical
//! forests, and the committed-edge sequence is a stable replay trace for
//! presentation layers.
#![cfg_attr(docsrs, feature(doc_cfg))]

mod boruvka;
mod builder;
mod error;
mod forest;
mod graph;
mod rounds;
mod union_find;

pub use crate::{
    boruvka::Boruvka,
    builder::{BoruvkaBuilder, ScanStrategy},
    error::{BoruvkaError, BoruvkaErrorCode, Result, UnionFindError, UnionFindErrorCode},
    forest::{CommittedEdge, RoundTrace, SpanningForest},
    graph::{Graph, WeightedEdge},
    union_find::DisjointSet,
};
