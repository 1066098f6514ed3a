//! GraphError: Unified error type for dt-toolkit validation APIs
//!
//! Geometric algorithms in this crate never fail on malformed input; they
//! report through an [`ErrorHandler`](crate::dt::ErrorHandler) and return an
//! empty or partial result. This error type is what the explicit validation
//! passes (`try_*`, [`DebugInvariants::validate_invariants`](crate::DebugInvariants))
//! return instead.

use thiserror::Error;

/// Unified error type for graph validation.
///
/// Index values are widened to `u64` so the error does not depend on the
/// index type of the container that produced it.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// An edge, path or triangle references the reserved `undef()` index.
    #[error("undefined vertex index at position {position}")]
    UndefinedIndex { position: usize },
    /// An edge whose endpoints coincide.
    #[error("loop edge on vertex {vertex} at position {position}")]
    LoopEdge { position: usize, vertex: u64 },
    /// The same undirected edge appears more than once in a soup.
    #[error("duplicate edge ({orig}, {dest})")]
    DuplicateEdge { orig: u64, dest: u64 },
    /// A path visits the same vertex twice.
    #[error("path visits vertex {vertex} more than once")]
    DuplicatePathVertex { vertex: u64 },
    /// A closed path needs at least three vertices.
    #[error("closed path has {len} vertices, expected at least 3")]
    ClosedPathTooShort { len: usize },
    /// A triangle with two equal (or undefined) corners.
    #[error("degenerate triangle at position {position}")]
    DegenerateTriangle { position: usize },
    /// An undirected edge shared by more than two triangles.
    #[error("non-manifold edge ({orig}, {dest}) shared by {count} triangles")]
    NonManifoldEdge { orig: u64, dest: u64, count: usize },
    /// A Union-Find parent chain that never reaches a root.
    #[error("union-find parent chain from {start} exceeds {steps} steps (cycle)")]
    CyclicParentChain { start: u64, steps: usize },
    /// A vertex count that does not fit the requested index type.
    #[error("{count} vertices do not fit an index type with max valid index {max}")]
    IndexOverflow { count: usize, max: u64 },
}
