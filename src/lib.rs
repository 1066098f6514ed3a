#![cfg_attr(docsrs, feature(doc_cfg))]
//! # dt-toolkit
//!
//! dt-toolkit is a small library of index-based graph algorithms for 2D
//! geometry, together with Delaunay-derived proximity graphs of point clouds.
//!
//! ## Features
//! - Index-generic edge, path and triangle soups with a reserved *undefined*
//!   sentinel per index type
//! - Validity checks, loop/duplicate filtering, degree tables, index
//!   compaction and path extraction over edge soups
//! - Border extraction for manifold triangle soups
//! - Nearest-neighbour, minimum spanning tree, relative neighbourhood and
//!   Gabriel graph selection over weighted edges
//! - Pluggable Delaunay backends (`spade`, `delaunator`) behind an explicit,
//!   priority-ordered registry
//!
//! ## Invariant checking
//!
//! Preconditions such as "the edge soup has no duplicates" are asserted in
//! debug builds, or in release builds with the `strict-invariants` /
//! `check-invariants` features. Every asserting entry point has a `try_`
//! counterpart that validates at runtime and returns a [`GraphError`].
//!
//! ## Usage
//!
//! ```
//! use dt_toolkit::prelude::*;
//!
//! let registry = DelaunayRegistry::with_default_backends();
//! let points = vec![
//!     Point::new(0.0, 0.0),
//!     Point::new(1.0, 0.0),
//!     Point::new(0.2, 1.0),
//!     Point::new(1.3, 1.1),
//! ];
//! let mst: Edges<u32> = proximity_graph(
//!     ProximityGraph::MinimumSpanningTree,
//!     &registry,
//!     &points,
//!     &mut LogHandler,
//! );
//! assert_eq!(mst.edges.len(), 3);
//! ```

pub mod algs;
pub mod debug_invariants;
pub mod dt;
pub mod geometry;
pub mod graph_error;
pub mod graphs;

pub use debug_invariants::DebugInvariants;
pub use graph_error::GraphError;

/// A convenient prelude to import the most-used traits & types:
pub mod prelude {
    pub use crate::algs::{
        Borders, GraphSize, HasDuplicates, IndexContainer, NonManifoldHandling, ToEdgeSoup,
        ValidationOptions, Validity, Weighted, WeightedEdge, extract_borders, extract_paths,
        filter_out_duplicates, filter_out_duplicates_and_loops, filter_out_loops,
        minmax_degree, minmax_indices, remap_indices, to_edge_soup, try_extract_borders,
        try_extract_paths,
    };
    pub use crate::debug_invariants::DebugInvariants;
    pub use crate::dt::{
        BackendInput, DelaunayBackend, DelaunayRegistry, ErrorHandler, LogHandler,
        ProximityGraph, Severity, TriangulationPolicy, delaunay_triangulation, proximity_graph,
    };
    pub use crate::geometry::{BoundingBox, Edges, Point, PointCloud, Polyline, Triangles};
    pub use crate::graph_error::GraphError;
    pub use crate::graphs::{Edge, Index, Path, Triangle, UnionFind};
}
