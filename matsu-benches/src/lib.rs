//! Benchmark support crate for matsu.
//!
//! Provides seeded synthetic graph generation and parameter types used by
//! the Criterion benchmarks for the Borůvka round engine.

pub mod params;
pub mod source;
