//! Proximity graphs of a point cloud, derived from its Delaunay triangulation.
//!
//! NN, MST, RNG and Gabriel graphs are all subgraphs of the Delaunay
//! triangulation, so each one is selected from the Delaunay edges instead of
//! from the complete `O(n^2)` edge set. The triangulation comes from the
//! reference backend of a [`DelaunayRegistry`].
//!
//! None of these functions fail: problems go to the [`ErrorHandler`] and the
//! caller receives an empty but valid result.

use serde::{Deserialize, Serialize};

use crate::algs::convert::to_edge_soup;
use crate::algs::proximity::{self, Weighted};
use crate::dt::backend::{DelaunayBackend, Triangulation, TriangulationPolicy};
use crate::dt::handler::{ErrorHandler, Severity};
use crate::dt::registry::DelaunayRegistry;
use crate::geometry::{Edges, Point, Triangles};
use crate::graph_error::GraphError;
use crate::graphs::{Index, Triangle};

/// Which proximity graph to compute.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProximityGraph {
    /// Every Delaunay edge.
    Delaunay,
    NearestNeighbor,
    MinimumSpanningTree,
    RelativeNeighborhood,
    Gabriel,
}

impl ProximityGraph {
    pub const ALL: [ProximityGraph; 5] = [
        ProximityGraph::Delaunay,
        ProximityGraph::NearestNeighbor,
        ProximityGraph::MinimumSpanningTree,
        ProximityGraph::RelativeNeighborhood,
        ProximityGraph::Gabriel,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ProximityGraph::Delaunay => "delaunay",
            ProximityGraph::NearestNeighbor => "nearest-neighbor",
            ProximityGraph::MinimumSpanningTree => "minimum-spanning-tree",
            ProximityGraph::RelativeNeighborhood => "relative-neighborhood",
            ProximityGraph::Gabriel => "gabriel",
        }
    }
}

/// Convert raw backend faces to index type `I`.
fn convert_faces<I: Index>(
    tri: &Triangulation,
    handler: &mut dyn ErrorHandler,
) -> Option<Vec<Triangle<I>>> {
    // every face index is below the vertex count
    if tri.vertices.len() > I::max_valid_index().as_usize().saturating_add(1) {
        let e = GraphError::IndexOverflow {
            count: tri.vertices.len(),
            max: I::max_valid_index().to_raw(),
        };
        handler.report(Severity::Error, &e.to_string());
        return None;
    }
    let faces: Option<Vec<Triangle<I>>> = tri
        .faces
        .iter()
        .map(|f| {
            let [a, b, c] = (*f).map(I::try_from_usize);
            Some(Triangle::new(a?, b?, c?))
        })
        .collect();
    if faces.is_none() {
        handler.report(Severity::Error, "backend face references a vertex out of range");
    }
    faces
}

/// Delaunay triangulation of `points` by the reference backend of `registry`.
///
/// The points are fed as Steiner points and triangulated with
/// [`TriangulationPolicy::PointCloud`]. The returned vertex buffer is the
/// backend's, which may drop duplicate points.
pub fn delaunay_triangulation<I: Index>(
    registry: &DelaunayRegistry,
    points: &[Point],
    handler: &mut dyn ErrorHandler,
) -> Triangles<I> {
    let Some(mut backend) = registry.reference() else {
        handler.report(Severity::Error, "no Delaunay implementation registered");
        return Triangles::default();
    };
    backend.add_steiner(points);
    let tri = backend.triangulate(TriangulationPolicy::PointCloud, handler);
    let Some(faces) = convert_faces::<I>(&tri, handler) else {
        return Triangles::default();
    };
    log::debug!(
        "delaunay_triangulation[{}]: {} points -> {} faces",
        backend.name(),
        points.len(),
        faces.len()
    );
    Triangles {
        vertices: tri.vertices,
        faces,
    }
}

/// Compute the `kind` proximity graph of `points`.
pub fn proximity_graph<I: Index>(
    kind: ProximityGraph,
    registry: &DelaunayRegistry,
    points: &[Point],
    handler: &mut dyn ErrorHandler,
) -> Edges<I> {
    let tri = delaunay_triangulation::<I>(registry, points, handler);
    if tri.is_empty() {
        return Edges {
            vertices: tri.vertices,
            edges: Vec::new(),
        };
    }
    let vertices = tri.vertices;
    let soup = to_edge_soup(tri.faces.as_slice());
    if kind == ProximityGraph::Delaunay {
        return Edges {
            vertices,
            edges: soup,
        };
    }

    // Gabriel works on squared distances; the others need true distances
    let dist = |a: I, b: I| vertices[a.as_usize()].distance(&vertices[b.as_usize()]);
    let dist2 = |a: I, b: I| vertices[a.as_usize()].distance_squared(&vertices[b.as_usize()]);
    let weigh = |w: &dyn Fn(I, I) -> f64| -> Vec<Weighted<I, f64>> {
        soup.iter()
            .map(|&e| Weighted::new(e, w(e.orig(), e.dest())))
            .collect()
    };
    let mut weighted = match kind {
        ProximityGraph::Gabriel => weigh(&dist2),
        _ => weigh(&dist),
    };
    let mid = match kind {
        ProximityGraph::Delaunay => weighted.len(),
        ProximityGraph::NearestNeighbor => proximity::nearest_neighbor(&mut weighted),
        ProximityGraph::MinimumSpanningTree => proximity::minimum_spanning_tree(&mut weighted),
        ProximityGraph::RelativeNeighborhood => {
            proximity::relative_neighborhood_graph(&mut weighted, dist)
        }
        ProximityGraph::Gabriel => proximity::gabriel_graph_squared(&mut weighted, dist2),
    };
    weighted.truncate(mid);
    log::debug!(
        "{}: {} delaunay edges -> {} selected",
        kind.name(),
        soup.len(),
        mid
    );
    let edges = weighted.into_iter().map(|w| w.edge).collect();
    Edges { vertices, edges }
}

/// All Delaunay edges of `points`.
pub fn delaunay_graph<I: Index>(
    registry: &DelaunayRegistry,
    points: &[Point],
    handler: &mut dyn ErrorHandler,
) -> Edges<I> {
    proximity_graph(ProximityGraph::Delaunay, registry, points, handler)
}

pub fn nearest_neighbor<I: Index>(
    registry: &DelaunayRegistry,
    points: &[Point],
    handler: &mut dyn ErrorHandler,
) -> Edges<I> {
    proximity_graph(ProximityGraph::NearestNeighbor, registry, points, handler)
}

pub fn minimum_spanning_tree<I: Index>(
    registry: &DelaunayRegistry,
    points: &[Point],
    handler: &mut dyn ErrorHandler,
) -> Edges<I> {
    proximity_graph(ProximityGraph::MinimumSpanningTree, registry, points, handler)
}

pub fn relative_neighborhood_graph<I: Index>(
    registry: &DelaunayRegistry,
    points: &[Point],
    handler: &mut dyn ErrorHandler,
) -> Edges<I> {
    proximity_graph(ProximityGraph::RelativeNeighborhood, registry, points, handler)
}

pub fn gabriel_graph<I: Index>(
    registry: &DelaunayRegistry,
    points: &[Point],
    handler: &mut dyn ErrorHandler,
) -> Edges<I> {
    proximity_graph(ProximityGraph::Gabriel, registry, points, handler)
}
