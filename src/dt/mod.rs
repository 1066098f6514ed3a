//! Delaunay triangulation backends and the proximity graphs derived from them.
//!
//! - [`backend`]: the [`DelaunayBackend`] contract and shared input checks.
//! - [`spade_backend`], [`delaunator_backend`]: concrete backends.
//! - [`registry`]: explicit, priority-ordered backend registry.
//! - [`proximity`]: NN / MST / RNG / Gabriel / Delaunay graphs of a point cloud.
//! - [`compare`]: run every registered backend on the same input.
//! - [`handler`]: severity-coded error reporting.

pub mod backend;
pub mod compare;
pub mod delaunator_backend;
pub mod handler;
pub mod proximity;
pub mod registry;
pub mod spade_backend;

pub use backend::{BackendInput, DelaunayBackend, SanitizedInput, Triangulation, TriangulationPolicy};
pub use compare::{BackendReport, compare_backends};
pub use delaunator_backend::{DELAUNATOR_BACKEND_NAME, DelaunatorBackend};
pub use handler::{CollectingHandler, ErrorHandler, LogHandler, Severity};
pub use proximity::{
    ProximityGraph, delaunay_graph, delaunay_triangulation, gabriel_graph, minimum_spanning_tree,
    nearest_neighbor, proximity_graph, relative_neighborhood_graph,
};
pub use registry::{BackendFactory, DelaunayRegistry};
pub use spade_backend::{SPADE_BACKEND_NAME, SpadeBackend};
