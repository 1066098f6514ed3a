//! Geometric graphs: a vertex buffer paired with an index soup.

use num_traits::Float;
use serde::{Deserialize, Serialize};

use crate::algs::boundary::{Borders, extract_borders};
use crate::algs::convert::to_edge_soup;
use crate::geometry::bbox::BoundingBox;
use crate::geometry::point::Point;
use crate::graphs::{Edge, Index, Triangle};

/// Edges over a shared vertex buffer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Edges<I = u32, F = f64> {
    pub vertices: Vec<Point<F>>,
    pub edges: Vec<Edge<I>>,
}

/// Triangles over a shared vertex buffer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Triangles<I = u32, F = f64> {
    pub vertices: Vec<Point<F>>,
    pub faces: Vec<Triangle<I>>,
}

impl<I, F> Default for Edges<I, F> {
    fn default() -> Self {
        Edges {
            vertices: Vec::new(),
            edges: Vec::new(),
        }
    }
}

impl<I, F> Default for Triangles<I, F> {
    fn default() -> Self {
        Triangles {
            vertices: Vec::new(),
            faces: Vec::new(),
        }
    }
}

impl<I: Index, F: Float> Edges<I, F> {
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Euclidean length of `edge`.
    pub fn length(&self, edge: &Edge<I>) -> F {
        self.vertices[edge.orig().as_usize()].distance(&self.vertices[edge.dest().as_usize()])
    }

    /// Sum of all edge lengths.
    pub fn total_length(&self) -> F {
        self.edges
            .iter()
            .fold(F::zero(), |acc, e| acc + self.length(e))
    }

    pub fn bounding_box(&self) -> BoundingBox<F> {
        BoundingBox::from_points(&self.vertices)
    }
}

impl<I: Index, F: Float> Triangles<I, F> {
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    /// The undirected edge set of the faces, sharing this vertex buffer.
    pub fn to_edges(&self) -> Edges<I, F> {
        Edges {
            vertices: self.vertices.clone(),
            edges: to_edge_soup(self.faces.as_slice()),
        }
    }

    /// Border edges of the faces; see [`extract_borders`].
    pub fn borders(&self) -> Borders<I> {
        extract_borders(&self.faces)
    }

    /// Twice the signed area of `face` (positive when counter-clockwise).
    pub fn signed_area2(&self, face: &Triangle<I>) -> F {
        let [a, b, c] = face.vertices.map(|v| self.vertices[v.as_usize()]);
        (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x)
    }

    pub fn bounding_box(&self) -> BoundingBox<F> {
        BoundingBox::from_points(&self.vertices)
    }
}
