//! Error types for the matsu core library.
//!
//! Defines error enums exposed by the public API and a convenient result alias.

use std::fmt;

use thiserror::Error;

use crate::builder::ScanStrategy;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// An error produced by [`crate::DisjointSet`] operations.
///
/// Calling `find` or `union` with a vertex outside `0..vertex_count` is a
/// programming error on the caller's side and is reported rather than
/// silently clamped.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum UnionFindError {
    /// Requested vertex was outside the partition's bounds.
    #[error("vertex {vertex} is out of range for a partition of {vertex_count} vertices")]
    VertexOutOfRange {
        /// The requested vertex index.
        vertex: usize,
        /// Number of vertices in the partition.
        vertex_count: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`UnionFindError`] variants.
    enum UnionFindErrorCode for UnionFindError {
        /// Requested vertex was outside the partition's bounds.
        VertexOutOfRange => VertexOutOfRange { .. } => "UNION_FIND_VERTEX_OUT_OF_RANGE",
    }
}

/// Error type produced when constructing or running [`crate::Boruvka`].
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum BoruvkaError {
    /// An edge referenced a vertex index that is not present in the graph.
    #[error("edge {edge} references vertex {vertex}, but vertex_count is {vertex_count}")]
    InvalidVertex {
        /// The invalid vertex index referenced by the edge.
        vertex: usize,
        /// Number of vertices in the graph.
        vertex_count: usize,
        /// Input position of the offending edge.
        edge: usize,
    },
    /// The requested scan strategy is unavailable in the current build.
    #[error("the requested scan strategy {requested:?} is not available in this build")]
    ScanUnavailable {
        /// Strategy that could not be satisfied by the current build.
        requested: ScanStrategy,
    },
    /// A disjoint-set operation failed while running the algorithm.
    #[error("union-find operation failed: {source}")]
    UnionFind {
        #[from]
        /// Underlying union-find error bubbled up by the round engine.
        source: UnionFindError,
    },
}

define_error_codes! {
    /// Stable codes describing [`BoruvkaError`] variants.
    enum BoruvkaErrorCode for BoruvkaError {
        /// An edge referenced a vertex index that is not present in the graph.
        InvalidVertex => InvalidVertex { .. } => "BORUVKA_INVALID_VERTEX",
        /// The requested scan strategy is unavailable in the current build.
        ScanUnavailable => ScanUnavailable { .. } => "BORUVKA_SCAN_UNAVAILABLE",
        /// A disjoint-set operation failed while running the algorithm.
        UnionFindFailure => UnionFind { .. } => "BORUVKA_UNION_FIND",
    }
}

impl BoruvkaError {
    /// Retrieve the inner [`UnionFindErrorCode`] when the error originated in
    /// the [`crate::DisjointSet`].
    pub const fn union_find_code(&self) -> Option<UnionFindErrorCode> {
        match self {
            Self::UnionFind { source } => Some(source.code()),
            _ => None,
        }
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, BoruvkaError>;
